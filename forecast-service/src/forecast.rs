use chrono::{Days, NaiveDate};
use common::errors::AppError;
use common::models::WeatherForecast;
use rand::Rng;
use rand::seq::IndexedRandom;

use crate::options::SUMMARIES_KEY;

pub const FORECAST_DAYS: u64 = 5;
pub const MIN_TEMPERATURE_C: i32 = -20;
pub const MAX_TEMPERATURE_C: i32 = 54;

/// Builds one record per day for the `FORECAST_DAYS` days following `today`.
///
/// Temperatures are uniform over `MIN_TEMPERATURE_C..=MAX_TEMPERATURE_C` and each
/// summary is an independent draw from `summaries`, so repeats are expected.
pub fn generate<R>(
    today: NaiveDate,
    summaries: &[String],
    rng: &mut R,
) -> Result<Vec<WeatherForecast>, AppError>
where
    R: Rng,
{
    if summaries.is_empty() {
        return Err(AppError::configuration(format!(
            "no weather summaries configured under `{SUMMARIES_KEY}`"
        )));
    }

    (1..=FORECAST_DAYS)
        .map(|offset| {
            let date = today.checked_add_days(Days::new(offset)).ok_or_else(|| {
                AppError::internal(format!("cannot forecast {offset} days after {today}"))
            })?;
            let temperature_c = rng.random_range(MIN_TEMPERATURE_C..=MAX_TEMPERATURE_C);
            let summary = summaries
                .choose(&mut *rng)
                .ok_or_else(|| AppError::internal("summary selection failed"))?;

            Ok(WeatherForecast::new(date, temperature_c, summary.clone()))
        })
        .collect()
}
