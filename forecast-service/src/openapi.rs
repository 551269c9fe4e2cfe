use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::handlers;
use common::models::{ServiceIndex, WeatherForecast};

#[derive(OpenApi)]
#[openapi(
    paths(
        handlers::index,
        handlers::health,
        handlers::alive,
        handlers::weather_forecast,
    ),
    components(schemas(WeatherForecast, ServiceIndex)),
    tags(
        (name = "forecast", description = "Synthetic weather forecast"),
    ),
)]
struct ApiDoc;

pub fn swagger_ui() -> SwaggerUi {
    SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi())
}
