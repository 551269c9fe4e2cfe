use common::tracing::LogFormat;
use std::env;
use std::path::PathBuf;

const DEFAULT_PORT: u16 = 8080;

pub struct Config {
    pub port: u16,
    /// Unset means the default options file, which may be absent
    pub weather_options_file: Option<PathBuf>,
    pub log_format: LogFormat,
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            port: lookup("PORT")
                .and_then(|p| p.parse().ok())
                .unwrap_or(DEFAULT_PORT),
            weather_options_file: lookup("WEATHER_OPTIONS_FILE")
                .filter(|p| !p.trim().is_empty())
                .map(PathBuf::from),
            log_format: LogFormat::parse(lookup("LOG_FORMAT").as_deref()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(vars: &[(&str, &str)]) -> Config {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_when_unset() {
        let config = config_from(&[]);
        assert_eq!(config.port, 8080);
        assert_eq!(config.weather_options_file, None);
        assert_eq!(config.log_format, LogFormat::Pretty);
    }

    #[test]
    fn reads_overrides() {
        let config = config_from(&[
            ("PORT", "8081"),
            ("WEATHER_OPTIONS_FILE", "/etc/forecast/options.toml"),
            ("LOG_FORMAT", "json"),
        ]);
        assert_eq!(config.port, 8081);
        assert_eq!(
            config.weather_options_file,
            Some(PathBuf::from("/etc/forecast/options.toml"))
        );
        assert_eq!(config.log_format, LogFormat::Json);
    }

    #[test]
    fn blank_options_file_is_unset() {
        assert_eq!(config_from(&[("WEATHER_OPTIONS_FILE", "  ")]).weather_options_file, None);
    }

    #[test]
    fn unparsable_port_falls_back() {
        assert_eq!(config_from(&[("PORT", "not-a-port")]).port, 8080);
    }
}
