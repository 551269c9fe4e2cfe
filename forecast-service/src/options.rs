use common::errors::AppError;
use serde::Deserialize;
use std::path::Path;
use tracing::{info, warn};

/// Configuration key the condition list is bound under
pub const SUMMARIES_KEY: &str = "weather-options.summaries";

/// Environment override for the condition list, comma separated
pub const SUMMARIES_ENV: &str = "WEATHER_OPTIONS__SUMMARIES";

/// Options file read when none is configured, relative to the working directory
pub const DEFAULT_OPTIONS_FILE: &str = "config/weather-options.toml";

#[derive(Debug, Default, Deserialize)]
struct OptionsFile {
    #[serde(rename = "weather-options")]
    weather_options: Option<RawWeatherOptions>,
}

#[derive(Debug, Default, Deserialize)]
struct RawWeatherOptions {
    #[serde(default)]
    summaries: Vec<String>,
}

/// Read-only weather options, loaded once at startup and shared by the handlers.
///
/// Every stored summary is trimmed and non-empty. The list itself may be empty
/// when nothing is configured; the forecast handler reports that per request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WeatherOptions {
    summaries: Vec<String>,
}

impl WeatherOptions {
    pub fn new<I, S>(summaries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let summaries = summaries
            .into_iter()
            .filter_map(|s| {
                let s: String = s.into();
                let trimmed = s.trim();
                if trimmed.is_empty() {
                    warn!(key = SUMMARIES_KEY, "Ignoring blank weather summary");
                    None
                } else {
                    Some(trimmed.to_string())
                }
            })
            .collect();

        Self { summaries }
    }

    pub fn summaries(&self) -> &[String] {
        &self.summaries
    }

    pub fn from_toml_str(contents: &str) -> Result<Self, AppError> {
        Self::parse(contents)
            .map_err(|e| AppError::configuration(format!("invalid weather options: {e}")))
    }

    fn parse(contents: &str) -> Result<Self, toml::de::Error> {
        let file: OptionsFile = toml::from_str(contents)?;
        let summaries = file.weather_options.unwrap_or_default().summaries;
        Ok(Self::new(summaries))
    }

    /// Loads options from a TOML file that must exist.
    pub fn from_file(path: &Path) -> Result<Self, AppError> {
        Self::read_file(path, true)
    }

    fn read_file(path: &Path, required: bool) -> Result<Self, AppError> {
        match std::fs::read_to_string(path) {
            Ok(contents) => Self::parse(&contents).map_err(|e| {
                AppError::configuration(format!("invalid weather options in {}: {e}", path.display()))
            }),
            Err(e) if !required && e.kind() == std::io::ErrorKind::NotFound => {
                warn!(path = %path.display(), "Default weather options file not found");
                Ok(Self::default())
            }
            Err(e) => Err(AppError::configuration(format!(
                "failed to read {}: {e}",
                path.display()
            ))),
        }
    }

    /// Loads the configured file, or the default one if it exists, then applies
    /// the environment override.
    pub fn load(path: Option<&Path>) -> Result<Self, AppError> {
        Self::load_with(path, std::env::var(SUMMARIES_ENV).ok())
    }

    pub fn load_with(path: Option<&Path>, env_value: Option<String>) -> Result<Self, AppError> {
        let (path, required) = match path {
            Some(path) => (path, true),
            None => (Path::new(DEFAULT_OPTIONS_FILE), false),
        };

        let options = Self::read_file(path, required)?.with_override(env_value);
        info!(
            path = %path.display(),
            summaries = options.summaries.len(),
            "Weather options loaded"
        );
        Ok(options)
    }

    fn with_override(self, value: Option<String>) -> Self {
        let Some(value) = value else {
            return self;
        };

        let overridden = Self::new(value.split(','));
        if overridden.summaries.is_empty() {
            warn!(env = SUMMARIES_ENV, "Ignoring blank weather summaries override");
            return self;
        }

        info!(env = SUMMARIES_ENV, "Overriding weather summaries from environment");
        overridden
    }
}
