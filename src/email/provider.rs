use std::error::Error;

use async_trait::async_trait;

use super::types::{OutboundEmail, SentEmail};

#[derive(Debug)]
pub enum ProviderError {
  /// The request never completed (connect failure, timeout, bad payload).
  Request(String),
  /// The provider answered with a non-success status.
  Rejected(String),
}

impl Error for ProviderError {}

impl std::fmt::Display for ProviderError {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      ProviderError::Request(msg) => write!(f, "email request failed: {}", msg),
      ProviderError::Rejected(msg) => write!(f, "email rejected by provider: {}", msg),
    }
  }
}

impl From<reqwest::Error> for ProviderError {
  fn from(err: reqwest::Error) -> Self {
    ProviderError::Request(err.to_string())
  }
}

/// Seam between the handlers and the delivery provider. Tests substitute a
/// recording implementation; production uses [`super::ResendClient`].
#[async_trait]
pub trait EmailProvider: Send + Sync {
  async fn send(&self, email: &OutboundEmail) -> Result<SentEmail, ProviderError>;
}
