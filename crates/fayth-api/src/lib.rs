//! fayth-api
//!
//! HTTP surface over the scoring crates plus an in-memory session store.

pub mod config;
pub mod error;
pub mod middleware;
pub mod routes;
pub mod state;

use axum::Router;
use axum::middleware as axum_mw;
use axum::routing::{get, post, put};
use tower_http::cors::{Any, CorsLayer};

use state::AppState;

/// Build the application router.
pub fn app(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(routes::health::health_check))
        // Instruments
        .route("/instruments", get(routes::instruments::list_instruments))
        .route(
            "/instruments/{id}",
            get(routes::instruments::get_instrument_detail),
        )
        // Scoring
        .route("/score/gonogo", post(routes::score::score_gonogo))
        .route("/score/chronos", post(routes::score::score_chronos))
        .route("/score/focus-quest", post(routes::score::score_focus_quest))
        .route("/score/dsm5", post(routes::score::score_dsm5_questionnaire))
        .route("/score/asrs", post(routes::score::score_asrs_questionnaire))
        .route("/followups", post(routes::followups::select_follow_ups))
        // Sessions
        .route("/sessions", post(routes::sessions::create_session))
        .route(
            "/sessions/{id}",
            get(routes::sessions::get_session).delete(routes::sessions::delete_session),
        )
        .route(
            "/sessions/{id}/questionnaire",
            put(routes::sessions::record_questionnaire),
        )
        .route("/sessions/{id}/games", put(routes::sessions::record_game))
        .route(
            "/sessions/{id}/summary",
            get(routes::sessions::session_summary),
        )
        .layer(axum_mw::from_fn(middleware::request_log::log_request))
        .layer(cors)
        .with_state(state)
}
