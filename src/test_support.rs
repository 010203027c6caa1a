use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::{
  body::{Body, Bytes},
  http::{Request, StatusCode},
  Router,
};
use serde::Serialize;
use tower::ServiceExt;

use crate::{
  app::create_app,
  config::AppConfig,
  domains::emailer::service::EmailerService,
  email::{EmailProvider, OutboundEmail, ProviderError, SentEmail},
  state::SharedAppState,
};

/// Provider double that records every outbound email and answers with a
/// canned id or a canned error.
#[derive(Clone)]
pub struct RecordingProvider {
  sent: Arc<Mutex<Vec<OutboundEmail>>>,
  outcome: Arc<Result<String, String>>,
}

impl RecordingProvider {
  pub fn succeeding(id: &str) -> Self {
    RecordingProvider {
      sent: Arc::new(Mutex::new(Vec::new())),
      outcome: Arc::new(Ok(id.to_string())),
    }
  }

  pub fn failing(message: &str) -> Self {
    RecordingProvider {
      sent: Arc::new(Mutex::new(Vec::new())),
      outcome: Arc::new(Err(message.to_string())),
    }
  }

  pub fn sent(&self) -> Vec<OutboundEmail> {
    self.sent.lock().expect("provider mutex poisoned").clone()
  }

  pub fn into_arc(self) -> Arc<dyn EmailProvider> {
    Arc::new(self)
  }
}

#[async_trait]
impl EmailProvider for RecordingProvider {
  async fn send(&self, email: &OutboundEmail) -> Result<SentEmail, ProviderError> {
    self.sent.lock().expect("provider mutex poisoned").push(email.clone());
    match self.outcome.as_ref() {
      Ok(id) => Ok(SentEmail { id: id.clone() }),
      Err(message) => Err(ProviderError::Rejected(message.clone())),
    }
  }
}

pub fn service_with(config: AppConfig, provider: RecordingProvider) -> EmailerService {
  EmailerService::new(Arc::new(config), provider.into_arc())
}

pub fn app_with(config: AppConfig, provider: RecordingProvider) -> Router {
  create_app(SharedAppState::new(config, provider.into_arc()))
}

pub async fn post_json<T: Serialize>(app: Router, uri: &str, body: &T) -> (StatusCode, Bytes) {
  let request = Request::builder()
    .method("POST")
    .uri(uri)
    .header("content-type", "application/json")
    .body(Body::from(serde_json::to_vec(body).expect("serialize request body")))
    .expect("build request");

  let response = app.oneshot(request).await.expect("handle request");
  let status = response.status();
  let body = axum::body::to_bytes(response.into_body(), usize::MAX)
    .await
    .expect("read response body");
  (status, body)
}

pub async fn get_text(app: Router, uri: &str) -> (StatusCode, String) {
  let request = Request::builder()
    .method("GET")
    .uri(uri)
    .body(Body::empty())
    .expect("build request");

  let response = app.oneshot(request).await.expect("handle request");
  let status = response.status();
  let body = axum::body::to_bytes(response.into_body(), usize::MAX)
    .await
    .expect("read response body");
  (status, String::from_utf8(body.to_vec()).expect("utf8 response body"))
}
