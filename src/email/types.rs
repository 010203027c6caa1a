use serde::{Deserialize, Serialize};

/// A fully rendered email, ready to hand to the delivery provider.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutboundEmail {
  pub from: String,
  pub to: Vec<String>,
  pub subject: String,
  pub html: String,
  pub text: Option<String>,
  pub reply_to: Option<String>,
}

impl OutboundEmail {
  pub fn new(from: impl Into<String>, to: Vec<String>, subject: impl Into<String>, html: impl Into<String>) -> Self {
    OutboundEmail {
      from: from.into(),
      to,
      subject: subject.into(),
      html: html.into(),
      text: None,
      reply_to: None,
    }
  }

  pub fn with_text(mut self, text: impl Into<String>) -> Self {
    self.text = Some(text.into());
    self
  }

  pub fn with_reply_to(mut self, reply_to: impl Into<String>) -> Self {
    self.reply_to = Some(reply_to.into());
    self
  }
}

/// Receipt returned by the provider for an accepted email.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SentEmail {
  pub id: String,
}
