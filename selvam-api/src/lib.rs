use axum::{
    extract::DefaultBodyLimit,
    http::Method,
    Router,
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

pub mod error;
pub mod state;
pub mod health;
pub mod enquiry;
pub mod quotation;

pub use state::AppState;

pub fn app(state: AppState) -> Router {
    // The static site is served from another origin
    let cors = CorsLayer::new()
        .allow_origin(tower_http::cors::Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([axum::http::header::CONTENT_TYPE]);

    let body_limit = state.body_limit_bytes;

    Router::new()
        .merge(health::routes())
        .merge(enquiry::routes())
        .merge(quotation::routes())
        .layer(DefaultBodyLimit::max(body_limit))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
