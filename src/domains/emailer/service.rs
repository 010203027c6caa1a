use std::sync::Arc;

use crate::{
  config::AppConfig,
  email::{EmailProvider, OutboundEmail},
};

use super::{
  model::{ContactFormRequest, EmailResponse, GenericEmailRequest, TrialRequestRequest, WelcomeEmailRequest},
  templates,
};

/// Renders each email kind and hands it to the delivery provider.
///
/// Every dispatch method returns an [`EmailResponse`]; delivery failures are
/// folded into it rather than surfaced as errors.
pub struct EmailerService {
  config: Arc<AppConfig>,
  provider: Arc<dyn EmailProvider>,
}

impl EmailerService {
  pub fn new(config: Arc<AppConfig>, provider: Arc<dyn EmailProvider>) -> Self {
    EmailerService { config, provider }
  }

  fn not_configured(message: &str) -> EmailResponse {
    EmailResponse::failed(message)
  }

  pub async fn send_contact_form(&self, req: ContactFormRequest) -> EmailResponse {
    if !self.config.email_configured() {
      return Self::not_configured("Email service not configured. Please contact us directly.");
    }

    let html = templates::contact_notification(&req.name, &req.email, &req.subject, &req.message);
    let email = OutboundEmail::new(
      self.config.contact_sender.clone(),
      vec![self.config.support_inbox.clone()],
      format!("Contact Form: {}", req.subject),
      html,
    )
    .with_reply_to(req.email);

    match self.provider.send(&email).await {
      Ok(sent) => EmailResponse::sent("Contact form submitted successfully", sent.id),
      Err(e) => {
        tracing::error!("Error sending contact email: {}", e);
        EmailResponse::failed(format!("Failed to send email: {}", e))
      }
    }
  }

  pub async fn send_welcome_email(&self, req: WelcomeEmailRequest) -> EmailResponse {
    if !self.config.email_configured() {
      return Self::not_configured("Email service not configured");
    }

    let html = templates::welcome_html(&req.name, &self.config.site_base_url);
    let text = templates::welcome_text(&req.name, &self.config.site_base_url);
    let email = OutboundEmail::new(
      self.config.welcome_sender.clone(),
      vec![req.email],
      "Welcome to LouFrank TV - Your Premium Entertainment Awaits!",
      html,
    )
    .with_text(text);

    match self.provider.send(&email).await {
      Ok(sent) => EmailResponse::sent("Welcome email sent successfully", sent.id),
      Err(e) => {
        tracing::error!("Error sending welcome email: {}", e);
        EmailResponse::failed(format!("Failed to send welcome email: {}", e))
      }
    }
  }

  pub async fn send_trial_request(&self, req: TrialRequestRequest) -> EmailResponse {
    if !self.config.email_configured() {
      return Self::not_configured("Email service not configured. Please contact us directly.");
    }

    let html = templates::trial_notification(&req.name, &req.email, req.phone.as_deref());
    let email = OutboundEmail::new(
      self.config.trials_sender.clone(),
      vec![self.config.support_inbox.clone()],
      "New Trial Request!",
      html,
    )
    .with_reply_to(req.email);

    match self.provider.send(&email).await {
      Ok(sent) => EmailResponse::sent("Trial request submitted successfully", sent.id),
      Err(e) => {
        tracing::error!("Error sending trial request email: {}", e);
        EmailResponse::failed(format!("Failed to send email: {}", e))
      }
    }
  }

  pub async fn send_generic_email(&self, req: GenericEmailRequest) -> EmailResponse {
    if !self.config.email_configured() {
      return Self::not_configured("Email service not configured");
    }

    let to = req.to.iter().map(|recipient| recipient.email.clone()).collect();
    // Caller HTML carrying the branded container passes through untouched.
    let html = if templates::is_prewrapped(&req.html_content) {
      req.html_content
    } else {
      templates::branded_shell(&req.html_content)
    };

    let mut email = OutboundEmail::new(format!("{} <{}>", req.from_name, req.from_email), to, req.subject, html);
    if let Some(text) = req.text_content {
      email = email.with_text(text);
    }
    if let Some(reply_to) = req.reply_to {
      email = email.with_reply_to(reply_to);
    }

    match self.provider.send(&email).await {
      Ok(sent) => EmailResponse::sent("Email sent successfully", sent.id),
      Err(e) => {
        tracing::error!("Error sending email: {}", e);
        EmailResponse::failed(format!("Failed to send email: {}", e))
      }
    }
  }
}
