use std::env;

/// Runtime configuration, read from the environment exactly once at startup
/// and passed to handlers through the shared state.
#[derive(Debug, Clone)]
pub struct AppConfig {
  /// API key for the email-delivery provider. When absent, email endpoints
  /// answer with a fixed "not configured" response instead of dispatching.
  pub resend_api_key: Option<String>,
  /// Mailbox that receives contact-form and trial-request notifications.
  pub support_inbox: String,
  /// Sender identity for contact-form notifications.
  pub contact_sender: String,
  /// Sender identity for welcome emails.
  pub welcome_sender: String,
  /// Sender identity for trial-request notifications.
  pub trials_sender: String,
  /// Base URL of the public site, used in sitemap entries and template links.
  pub site_base_url: String,
  /// Browser origins allowed by the CORS layer.
  pub allowed_origins: Vec<String>,
  pub bind_addr: String,
}

impl AppConfig {
  pub fn from_env() -> Self {
    let allowed_origins = env::var("ALLOWED_ORIGINS")
      .unwrap_or_else(|_| {
        [
          "http://localhost:5173",
          "https://www.loufranktv.com",
          "https://loufranktv.com",
          "https://loufranktv-frontend.netlify.app",
        ]
        .join(",")
      })
      .split(',')
      .map(|origin| origin.trim().to_string())
      .filter(|origin| !origin.is_empty())
      .collect();

    AppConfig {
      resend_api_key: env::var("RESEND_API_KEY").ok().filter(|key| !key.is_empty()),
      support_inbox: env::var("SUPPORT_INBOX").unwrap_or_else(|_| "loufranktv@gmail.com".to_string()),
      contact_sender: env::var("CONTACT_SENDER")
        .unwrap_or_else(|_| "LouFrank TV Contact <contact@loufranktv.com>".to_string()),
      welcome_sender: env::var("WELCOME_SENDER").unwrap_or_else(|_| "LouFrank TV <welcome@loufranktv.com>".to_string()),
      trials_sender: env::var("TRIALS_SENDER")
        .unwrap_or_else(|_| "LouFrank TV Trial Requests <trials@loufranktv.com>".to_string()),
      site_base_url: env::var("SITE_BASE_URL").unwrap_or_else(|_| "https://loufranktv.com".to_string()),
      allowed_origins,
      bind_addr: env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:8000".to_string()),
    }
  }

  pub fn email_configured(&self) -> bool {
    self.resend_api_key.is_some()
  }
}

#[cfg(test)]
impl Default for AppConfig {
  fn default() -> Self {
    AppConfig {
      resend_api_key: Some("re_test_key".to_string()),
      support_inbox: "owner@example.com".to_string(),
      contact_sender: "LouFrank TV Contact <contact@loufranktv.com>".to_string(),
      welcome_sender: "LouFrank TV <welcome@loufranktv.com>".to_string(),
      trials_sender: "LouFrank TV Trial Requests <trials@loufranktv.com>".to_string(),
      site_base_url: "https://loufranktv.com".to_string(),
      allowed_origins: vec!["http://localhost:5173".to_string()],
      bind_addr: "127.0.0.1:0".to_string(),
    }
  }
}
