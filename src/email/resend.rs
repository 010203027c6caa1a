use async_trait::async_trait;

use super::provider::{EmailProvider, ProviderError};
use super::types::{OutboundEmail, SentEmail};

pub const RESEND_API_BASE: &str = "https://api.resend.com";

/// HTTP client for the Resend delivery API.
pub struct ResendClient {
  http: reqwest::Client,
  api_base: String,
  api_key: String,
}

#[derive(serde::Serialize)]
struct SendEmailBody<'a> {
  from: &'a str,
  to: &'a [String],
  subject: &'a str,
  html: &'a str,
  #[serde(skip_serializing_if = "Option::is_none")]
  text: Option<&'a str>,
  #[serde(skip_serializing_if = "Option::is_none")]
  reply_to: Option<&'a str>,
}

#[derive(serde::Deserialize)]
struct SendEmailReply {
  id: String,
}

impl ResendClient {
  pub fn new(api_key: impl Into<String>, api_base: impl Into<String>) -> Self {
    ResendClient {
      http: reqwest::Client::new(),
      api_base: api_base.into(),
      api_key: api_key.into(),
    }
  }
}

#[async_trait]
impl EmailProvider for ResendClient {
  async fn send(&self, email: &OutboundEmail) -> Result<SentEmail, ProviderError> {
    let body = SendEmailBody {
      from: &email.from,
      to: &email.to,
      subject: &email.subject,
      html: &email.html,
      text: email.text.as_deref(),
      reply_to: email.reply_to.as_deref(),
    };

    let response = self
      .http
      .post(format!("{}/emails", self.api_base))
      .bearer_auth(&self.api_key)
      .json(&body)
      .send()
      .await?;

    if !response.status().is_success() {
      let status = response.status();
      let detail = response.text().await.unwrap_or_default();
      return Err(ProviderError::Rejected(format!("{}: {}", status, detail)));
    }

    let reply: SendEmailReply = response.json().await?;
    Ok(SentEmail { id: reply.id })
  }
}
