pub mod config;
pub mod forecast;
pub mod handlers;
pub mod openapi;
pub mod options;

use axum::{Router, routing::get};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

pub use handlers::AppState;
pub use options::WeatherOptions;

pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/health", get(handlers::health))
        .route("/alive", get(handlers::alive))
        .route(handlers::FORECAST_PATH, get(handlers::weather_forecast))
        .merge(openapi::swagger_ui())
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
