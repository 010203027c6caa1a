use std::sync::Arc;

use crate::{
  config::AppConfig,
  domains::emailer::{
    model::{ContactFormRequest, EmailResponse, GenericEmailRequest, TrialRequestRequest, WelcomeEmailRequest},
    service::EmailerService,
  },
  email::EmailProvider,
};

pub trait AppState: Clone + Send + Sync + 'static {
  fn config(&self) -> &AppConfig;
  fn send_contact_form(&self, req: ContactFormRequest) -> impl std::future::Future<Output = EmailResponse> + Send;
  fn send_welcome_email(&self, req: WelcomeEmailRequest) -> impl std::future::Future<Output = EmailResponse> + Send;
  fn send_trial_request(&self, req: TrialRequestRequest) -> impl std::future::Future<Output = EmailResponse> + Send;
  fn send_generic_email(&self, req: GenericEmailRequest) -> impl std::future::Future<Output = EmailResponse> + Send;
}

#[derive(Clone)]
pub struct SharedAppState {
  pub config: Arc<AppConfig>,
  pub emailer: Arc<EmailerService>,
}

impl SharedAppState {
  pub fn new(config: AppConfig, provider: Arc<dyn EmailProvider>) -> Self {
    let config = Arc::new(config);
    let emailer = Arc::new(EmailerService::new(config.clone(), provider));

    Self { config, emailer }
  }
}

impl AppState for SharedAppState {
  fn config(&self) -> &AppConfig {
    &self.config
  }

  async fn send_contact_form(&self, req: ContactFormRequest) -> EmailResponse {
    self.emailer.send_contact_form(req).await
  }

  async fn send_welcome_email(&self, req: WelcomeEmailRequest) -> EmailResponse {
    self.emailer.send_welcome_email(req).await
  }

  async fn send_trial_request(&self, req: TrialRequestRequest) -> EmailResponse {
    self.emailer.send_trial_request(req).await
  }

  async fn send_generic_email(&self, req: GenericEmailRequest) -> EmailResponse {
    self.emailer.send_generic_email(req).await
  }
}
