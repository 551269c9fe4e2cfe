use axum::extract::State;
use axum::response::Json;
use chrono::Local;
use common::errors::AppError;
use common::models::{ServiceIndex, WeatherForecast};
use std::sync::Arc;
use tracing::{error, info};

use crate::forecast;
use crate::options::WeatherOptions;

pub const FORECAST_PATH: &str = "/weatherforecast";

#[derive(Clone)]
pub struct AppState {
    pub options: Arc<WeatherOptions>,
}

impl AppState {
    pub fn new(options: WeatherOptions) -> Self {
        Self {
            options: Arc::new(options),
        }
    }
}

#[utoipa::path(
    get,
    path = "/",
    responses(
        (status = 200, description = "Links to the service endpoints", body = ServiceIndex)
    )
)]
pub async fn index() -> Json<ServiceIndex> {
    Json(ServiceIndex {
        weather_forecast: FORECAST_PATH.to_string(),
    })
}

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service health check")
    )
)]
pub async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "ok", "service": "forecast-service" }))
}

#[utoipa::path(
    get,
    path = "/alive",
    responses(
        (status = 200, description = "Liveness probe")
    )
)]
pub async fn alive() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "alive" }))
}

#[utoipa::path(
    get,
    path = "/weatherforecast",
    responses(
        (status = 200, description = "Five-day synthetic forecast", body = [WeatherForecast]),
        (status = 500, description = "No weather summaries configured")
    ),
    tag = "forecast"
)]
pub async fn weather_forecast(
    State(state): State<AppState>,
) -> Result<Json<Vec<WeatherForecast>>, AppError> {
    let today = Local::now().date_naive();
    info!(%today, "Weather forecast request received");

    let forecast = forecast::generate(today, state.options.summaries(), &mut rand::rng())
        .inspect_err(|e| error!(error = %e, "Weather forecast failed"))?;

    Ok(Json(forecast))
}
