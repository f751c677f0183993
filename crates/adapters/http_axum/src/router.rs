//! Axum router assembly.

use axum::Router;
use tower_http::trace::TraceLayer;

use holocron_app::ports::{FavoriteRepository, PersonRepository, PlanetRepository, UserRepository};

use crate::state::AppState;

/// Build the top-level axum [`Router`].
///
/// Serves the API routes, `/health`, and the route sitemap at `/`.
/// Includes a [`TraceLayer`] that logs each HTTP request/response at the
/// `DEBUG` level using the `tracing` ecosystem.
pub fn build<UR, PR, PLR, FR>(state: AppState<UR, PR, PLR, FR>) -> Router
where
    UR: UserRepository + Send + Sync + 'static,
    PR: PersonRepository + Send + Sync + 'static,
    PLR: PlanetRepository + Send + Sync + 'static,
    FR: FavoriteRepository + Send + Sync + 'static,
{
    crate::api::routes::<UR, PR, PLR, FR>()
        .get("/health", health_check)
        .into_router()
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health_check() -> &'static str {
    "OK"
}
