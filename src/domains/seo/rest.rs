use axum::{
  extract::State,
  http::header,
  response::IntoResponse,
  routing::{get, Router},
};

use super::model::{render_robots_txt, render_sitemap, SITE_PAGES};
use crate::state::{AppState, SharedAppState};

pub fn seo_routes() -> Router<SharedAppState> {
  Router::new()
    .route("/robots.txt", get(robots_txt_handler))
    .route("/sitemap.xml", get(sitemap_xml_handler))
}

pub async fn robots_txt_handler(State(state): State<SharedAppState>) -> impl IntoResponse {
  let body = render_robots_txt(&state.config().site_base_url);
  ([(header::CONTENT_TYPE, "text/plain")], body)
}

pub async fn sitemap_xml_handler(State(state): State<SharedAppState>) -> impl IntoResponse {
  let body = render_sitemap(&state.config().site_base_url, SITE_PAGES);
  ([(header::CONTENT_TYPE, "application/xml")], body)
}
