use axum::{http::HeaderValue, response::Html, routing::get, Router};
use tower_http::cors::{Any, CorsLayer};

use crate::{
  registry::{compose, default_groups},
  state::SharedAppState,
};

pub fn create_app(state: SharedAppState) -> Router {
  let allowed_origins: Vec<HeaderValue> = state
    .config
    .allowed_origins
    .iter()
    .filter_map(|origin| origin.parse().ok())
    .collect();

  let cors = CorsLayer::new()
    .allow_origin(allowed_origins)
    .allow_methods(Any)
    .allow_headers(Any);

  Router::new()
    .route("/", get(health_handler))
    .nest("/routes", compose(default_groups()))
    .layer(cors)
    .with_state(state)
}

pub async fn health_handler() -> Html<String> {
  Html("<h1>LouFrank TV API</h1>".to_string())
}
