//! Axum router construction for the states API.
//!
//! Assembles all routes into a single [`Router`] with CORS and request
//! tracing enabled.

use std::sync::Arc;

use axum::middleware;
use axum::routing::get;
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::pages;
use crate::state::AppState;
use crate::validator;

/// Build the complete Axum router for the API server.
///
/// The router includes:
/// - `GET /` -- HTML index page
/// - `GET /states`, `GET /states/` -- list states
/// - `GET /states/{state}` -- single state
/// - `GET /states/{state}/capital|nickname|population|admission`
/// - `GET|POST|PATCH|DELETE /states/{state}/funfact`
///
/// Every `{state}` route sits behind [`validator::verify_state`]. Anything
/// unmatched falls through to [`pages::not_found`].
pub fn build_router(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let per_state = Router::new()
        .route("/states/{state}", get(handlers::get_state))
        .route("/states/{state}/capital", get(handlers::get_capital))
        .route("/states/{state}/nickname", get(handlers::get_nickname))
        .route("/states/{state}/population", get(handlers::get_population))
        .route("/states/{state}/admission", get(handlers::get_admission))
        .route(
            "/states/{state}/funfact",
            get(handlers::get_random_funfact)
                .post(handlers::add_funfacts)
                .patch(handlers::update_funfact)
                .delete(handlers::delete_funfact),
        )
        .route_layer(middleware::from_fn_with_state(
            Arc::clone(&state),
            validator::verify_state,
        ));

    Router::new()
        .route("/", get(pages::index))
        .route("/states", get(handlers::list_states))
        .route("/states/", get(handlers::list_states))
        .merge(per_state)
        .fallback(pages::not_found)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
