use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::{
  body::Body,
  http::{self, header, Request, StatusCode},
  Router,
};
use http_body_util::BodyExt;
use tower::ServiceExt; // for `app.oneshot()`

use loufranktv_api::app::create_app;
use loufranktv_api::config::AppConfig;
use loufranktv_api::email::{EmailProvider, OutboundEmail, ProviderError, SentEmail};
use loufranktv_api::state::SharedAppState;

struct StubProvider {
  sent: Mutex<Vec<OutboundEmail>>,
  id: String,
}

impl StubProvider {
  fn new(id: &str) -> Arc<Self> {
    Arc::new(StubProvider {
      sent: Mutex::new(Vec::new()),
      id: id.to_string(),
    })
  }

  fn sent_count(&self) -> usize {
    self.sent.lock().unwrap().len()
  }
}

#[async_trait]
impl EmailProvider for StubProvider {
  async fn send(&self, email: &OutboundEmail) -> Result<SentEmail, ProviderError> {
    self.sent.lock().unwrap().push(email.clone());
    Ok(SentEmail { id: self.id.clone() })
  }
}

fn test_config(with_key: bool) -> AppConfig {
  AppConfig {
    resend_api_key: with_key.then(|| "re_test_key".to_string()),
    support_inbox: "owner@example.com".to_string(),
    contact_sender: "LouFrank TV Contact <contact@loufranktv.com>".to_string(),
    welcome_sender: "LouFrank TV <welcome@loufranktv.com>".to_string(),
    trials_sender: "LouFrank TV Trial Requests <trials@loufranktv.com>".to_string(),
    site_base_url: "https://loufranktv.com".to_string(),
    allowed_origins: vec!["https://loufranktv.com".to_string()],
    bind_addr: "127.0.0.1:0".to_string(),
  }
}

fn app(config: AppConfig, provider: Arc<StubProvider>) -> Router {
  create_app(SharedAppState::new(config, provider))
}

async fn get(app: Router, uri: &str) -> (StatusCode, Option<String>, String) {
  let response = app
    .oneshot(
      Request::builder()
        .method(http::Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap(),
    )
    .await
    .unwrap();

  let status = response.status();
  let content_type = response
    .headers()
    .get(header::CONTENT_TYPE)
    .map(|v| v.to_str().unwrap().to_string());
  let body = response.into_body().collect().await.unwrap().to_bytes();
  (status, content_type, String::from_utf8(body.to_vec()).unwrap())
}

async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> (StatusCode, serde_json::Value) {
  let response = app
    .oneshot(
      Request::builder()
        .method(http::Method::POST)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap(),
    )
    .await
    .unwrap();

  let status = response.status();
  let body = response.into_body().collect().await.unwrap().to_bytes();
  let json = serde_json::from_slice(&body).unwrap_or(serde_json::Value::Null);
  (status, json)
}

#[tokio::test]
async fn health_route_answers() {
  let app = app(test_config(true), StubProvider::new("em_1"));
  let (status, _, body) = get(app, "/").await;

  assert_eq!(status, StatusCode::OK);
  assert_eq!(body, "<h1>LouFrank TV API</h1>");
}

#[tokio::test]
async fn robots_txt_is_plain_text() {
  let app = app(test_config(true), StubProvider::new("em_1"));
  let (status, content_type, body) = get(app, "/routes/seo/robots.txt").await;

  assert_eq!(status, StatusCode::OK);
  assert_eq!(content_type.as_deref(), Some("text/plain"));
  assert!(body.contains("User-agent: *"));
  assert!(body.contains("Sitemap: https://loufranktv.com/sitemap.xml"));
}

#[tokio::test]
async fn sitemap_xml_lists_every_page() {
  let app = app(test_config(true), StubProvider::new("em_1"));
  let (status, content_type, body) = get(app, "/routes/seo/sitemap.xml").await;

  assert_eq!(status, StatusCode::OK);
  assert_eq!(content_type.as_deref(), Some("application/xml"));
  assert_eq!(body.matches("<url>").count(), 12);
  assert!(body.contains("<loc>https://loufranktv.com/pricing</loc>"));
}

#[tokio::test]
async fn welcome_endpoint_reports_the_delivery_id() {
  let provider = StubProvider::new("em_delivered");
  let app = app(test_config(true), provider.clone());

  let (status, json) = post_json(
    app,
    "/routes/emailer/welcome",
    serde_json::json!({"name": "Ben", "email": "ben@example.com"}),
  )
  .await;

  assert_eq!(status, StatusCode::OK);
  assert_eq!(json["success"], true);
  assert_eq!(json["email_id"], "em_delivered");
  assert_eq!(provider.sent_count(), 1);
}

#[tokio::test]
async fn missing_credential_degrades_without_dispatching() {
  let provider = StubProvider::new("em_unused");
  let app = app(test_config(false), provider.clone());

  let (status, json) = post_json(
    app,
    "/routes/emailer/trial-request",
    serde_json::json!({"name": "Cy", "email": "cy@example.com"}),
  )
  .await;

  assert_eq!(status, StatusCode::OK);
  assert_eq!(json["success"], false);
  assert!(json["email_id"].is_null());
  assert_eq!(provider.sent_count(), 0);
}

#[tokio::test]
async fn malformed_payload_is_a_client_error() {
  let provider = StubProvider::new("em_unused");
  let app = app(test_config(true), provider.clone());

  let (status, _) = post_json(
    app,
    "/routes/emailer/contact",
    serde_json::json!({"name": "Ana", "email": "nope", "subject": "s", "message": "m"}),
  )
  .await;

  assert_eq!(status, StatusCode::BAD_REQUEST);
  assert_eq!(provider.sent_count(), 0);
}
