use axum::{
  extract::{Json, State},
  response::Json as JsonResponse,
  routing::{post, Router},
};
use validator::Validate;

use super::model::{ContactFormRequest, EmailResponse, GenericEmailRequest, TrialRequestRequest, WelcomeEmailRequest};
use crate::{
  state::{AppState, SharedAppState},
  AppError,
};

pub fn emailer_routes() -> Router<SharedAppState> {
  Router::new()
    .route("/contact", post(contact_handler))
    .route("/welcome", post(welcome_handler))
    .route("/trial-request", post(trial_request_handler))
    .route("/send", post(send_handler))
}

pub async fn contact_handler(
  State(state): State<SharedAppState>,
  Json(payload): Json<ContactFormRequest>,
) -> Result<JsonResponse<EmailResponse>, AppError> {
  payload
    .validate()
    .map_err(|e| AppError::bad_request(format!("Validation failed: {}", e)))?;

  Ok(JsonResponse(state.send_contact_form(payload).await))
}

pub async fn welcome_handler(
  State(state): State<SharedAppState>,
  Json(payload): Json<WelcomeEmailRequest>,
) -> Result<JsonResponse<EmailResponse>, AppError> {
  payload
    .validate()
    .map_err(|e| AppError::bad_request(format!("Validation failed: {}", e)))?;

  Ok(JsonResponse(state.send_welcome_email(payload).await))
}

pub async fn trial_request_handler(
  State(state): State<SharedAppState>,
  Json(payload): Json<TrialRequestRequest>,
) -> Result<JsonResponse<EmailResponse>, AppError> {
  payload
    .validate()
    .map_err(|e| AppError::bad_request(format!("Validation failed: {}", e)))?;

  Ok(JsonResponse(state.send_trial_request(payload).await))
}

pub async fn send_handler(
  State(state): State<SharedAppState>,
  Json(payload): Json<GenericEmailRequest>,
) -> Result<JsonResponse<EmailResponse>, AppError> {
  payload
    .validate()
    .map_err(|e| AppError::bad_request(format!("Validation failed: {}", e)))?;

  Ok(JsonResponse(state.send_generic_email(payload).await))
}
