use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Clone, Deserialize, Serialize, Validate)]
pub struct ContactFormRequest {
  #[validate(length(min = 1, max = 255, message = "name is required"))]
  pub name: String,
  #[validate(email(message = "a valid email address is required"))]
  pub email: String,
  #[validate(length(min = 1, max = 255, message = "subject is required"))]
  pub subject: String,
  #[validate(length(min = 1, message = "message is required"))]
  pub message: String,
}

#[derive(Debug, Clone, Deserialize, Serialize, Validate)]
pub struct WelcomeEmailRequest {
  #[validate(length(min = 1, max = 255, message = "name is required"))]
  pub name: String,
  #[validate(email(message = "a valid email address is required"))]
  pub email: String,
}

#[derive(Debug, Clone, Deserialize, Serialize, Validate)]
pub struct TrialRequestRequest {
  #[validate(length(min = 1, max = 255, message = "name is required"))]
  pub name: String,
  #[validate(email(message = "a valid email address is required"))]
  pub email: String,
  pub phone: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Serialize, Validate)]
pub struct Recipient {
  #[validate(email(message = "a valid recipient address is required"))]
  pub email: String,
  pub name: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Serialize, Validate)]
pub struct GenericEmailRequest {
  #[serde(default = "default_from_email")]
  #[validate(email(message = "a valid sender address is required"))]
  pub from_email: String,
  #[serde(default = "default_from_name")]
  pub from_name: String,
  #[validate(length(min = 1, message = "at least one recipient is required"), nested)]
  pub to: Vec<Recipient>,
  #[validate(length(min = 1, max = 255, message = "subject is required"))]
  pub subject: String,
  #[validate(length(min = 1, message = "html_content is required"))]
  pub html_content: String,
  pub text_content: Option<String>,
  pub reply_to: Option<String>,
}

fn default_from_email() -> String {
  "support@loufranktv.com".to_string()
}

fn default_from_name() -> String {
  "LouFrank TV Support".to_string()
}

/// Uniform outcome of a dispatch attempt. Delivery failures are reported
/// here with `success: false`, never as an HTTP server error.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct EmailResponse {
  pub success: bool,
  pub message: String,
  pub email_id: Option<String>,
}

impl EmailResponse {
  pub fn sent(message: impl Into<String>, email_id: String) -> Self {
    EmailResponse {
      success: true,
      message: message.into(),
      email_id: Some(email_id),
    }
  }

  pub fn failed(message: impl Into<String>) -> Self {
    EmailResponse {
      success: false,
      message: message.into(),
      email_id: None,
    }
  }
}
