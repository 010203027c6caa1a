//! Startup-time composition of endpoint groups.
//!
//! Endpoint groups are declared statically and assembled once at startup. A
//! group whose constructor fails is logged and skipped so the rest of the
//! service still comes up.

use axum::routing::Router;

use crate::{
  domains::{emailer::rest::emailer_routes, seo::rest::seo_routes},
  state::SharedAppState,
};

/// One endpoint group: a name for diagnostics, the path prefix it is nested
/// under, and a fallible constructor for its router.
pub struct RouteGroup {
  pub name: &'static str,
  pub prefix: &'static str,
  pub build: fn() -> anyhow::Result<Router<SharedAppState>>,
  /// Route listing used only for startup diagnostics.
  pub routes: &'static [&'static str],
}

pub fn default_groups() -> Vec<RouteGroup> {
  vec![
    RouteGroup {
      name: "emailer",
      prefix: "/emailer",
      build: || Ok(emailer_routes()),
      routes: &["POST /contact", "POST /welcome", "POST /trial-request", "POST /send"],
    },
    RouteGroup {
      name: "seo",
      prefix: "/seo",
      build: || Ok(seo_routes()),
      routes: &["GET /robots.txt", "GET /sitemap.xml"],
    },
  ]
}

/// Merges every group that builds successfully into one router. A failing
/// constructor never aborts composition.
pub fn compose(groups: Vec<RouteGroup>) -> Router<SharedAppState> {
  let mut aggregate = Router::new();

  for group in groups {
    tracing::info!("registering route group: {}", group.name);
    match (group.build)() {
      Ok(router) => {
        aggregate = aggregate.nest(group.prefix, router);
        for route in group.routes {
          tracing::info!("route registered: {} (under {})", route, group.prefix);
        }
      }
      Err(e) => {
        tracing::error!("failed to build route group {}: {}", group.name, e);
        continue;
      }
    }
  }

  aggregate
}
