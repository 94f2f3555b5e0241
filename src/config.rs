use std::time::Duration;

use serde::{Deserialize, Serialize};

pub const DEFAULT_API_BASE_URL: &str = "https://admin-backend-2-m3s9.onrender.com";
pub const DEFAULT_REQUEST_TIMEOUT_SECONDS: u64 = 10;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    pub api_base_url: String,
    pub request_timeout_seconds: u64,
    pub environment: String,
    pub enable_logging: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            request_timeout_seconds: DEFAULT_REQUEST_TIMEOUT_SECONDS,
            environment: "production".to_string(),
            enable_logging: true,
        }
    }
}

impl AppConfig {
    /// Loads the configuration baked in at compile time (see build.rs)
    pub fn from_env() -> Self {
        Self::from_values(
            option_env!("API_BASE_URL"),
            option_env!("REQUEST_TIMEOUT_SECONDS"),
            option_env!("ENVIRONMENT"),
            option_env!("ENABLE_LOGGING"),
        )
    }

    /// Builds a config from raw values, falling back to the defaults for
    /// anything missing, blank or unparsable.
    pub fn from_values(
        api_base_url: Option<&str>,
        request_timeout_seconds: Option<&str>,
        environment: Option<&str>,
        enable_logging: Option<&str>,
    ) -> Self {
        fn non_blank(value: Option<&str>) -> Option<&str> {
            value.map(str::trim).filter(|v| !v.is_empty())
        }

        let defaults = Self::default();

        Self {
            api_base_url: non_blank(api_base_url)
                .map(|url| url.trim_end_matches('/').to_string())
                .unwrap_or(defaults.api_base_url),
            request_timeout_seconds: non_blank(request_timeout_seconds)
                .and_then(|v| v.parse().ok())
                .filter(|secs| *secs > 0)
                .unwrap_or(defaults.request_timeout_seconds),
            environment: non_blank(environment)
                .map(str::to_string)
                .unwrap_or(defaults.environment),
            enable_logging: non_blank(enable_logging)
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.enable_logging),
        }
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_seconds)
    }

    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    pub fn log_level(&self) -> log::Level {
        if self.enable_logging {
            log::Level::Debug
        } else {
            log::Level::Warn
        }
    }
}

lazy_static::lazy_static! {
    pub static ref CONFIG: AppConfig = AppConfig::from_env();
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn missing_values_fall_back_to_defaults() {
        let config = AppConfig::from_values(None, None, None, None);
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.request_timeout(), Duration::from_secs(10));
        assert_eq!(config.api_base_url, DEFAULT_API_BASE_URL);
    }

    #[rstest]
    #[case("http://localhost:5000/", "http://localhost:5000")]
    #[case("  http://localhost:5000  ", "http://localhost:5000")]
    #[case("", DEFAULT_API_BASE_URL)]
    fn base_url_is_trimmed(#[case] raw: &str, #[case] expected: &str) {
        let config = AppConfig::from_values(Some(raw), None, None, None);
        assert_eq!(config.api_base_url, expected);
    }

    #[rstest]
    #[case("30", 30)]
    #[case("0", DEFAULT_REQUEST_TIMEOUT_SECONDS)]
    #[case("ten", DEFAULT_REQUEST_TIMEOUT_SECONDS)]
    fn timeout_must_be_positive(#[case] raw: &str, #[case] expected: u64) {
        let config = AppConfig::from_values(None, Some(raw), None, None);
        assert_eq!(config.request_timeout_seconds, expected);
    }

    #[rstest]
    fn blank_values_are_ignored_and_set_values_trimmed() {
        let config = AppConfig::from_values(Some("   "), Some(" 15 "), Some(" staging "), Some(" "));
        assert_eq!(config.api_base_url, DEFAULT_API_BASE_URL);
        assert_eq!(config.request_timeout_seconds, 15);
        assert_eq!(config.environment, "staging");
        assert!(config.enable_logging);
    }

    #[rstest]
    fn logging_flag_selects_level() {
        let quiet = AppConfig::from_values(None, None, Some("development"), Some("false"));
        assert_eq!(quiet.log_level(), log::Level::Warn);
        assert!(!quiet.is_production());
    }
}
