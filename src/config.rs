use std::env;

use secrecy::{ExposeSecret, SecretString};

use crate::errors::{AppError, AppResult};

pub const DEFAULT_API_BASE: &str = "https://api.openai.com/v1";
pub const DEFAULT_COMPLETION_MODEL: &str = "gpt-3.5-turbo";
pub const DEFAULT_BANNER_ANIMATION_URL: &str =
    "https://drive.google.com/uc?export=view&id=1f74XhctB0aLJHYwxnPk9I7P4Eh-E9J4a";
pub const DEFAULT_CELEBRATION_ANIMATION_URL: &str =
    "https://drive.google.com/uc?export=view&id=1CgISKhtdj8U-BmUdn3HoVyPF81e84aT_";

#[derive(Clone, Debug)]
pub struct Config {
    pub openai_api_key: SecretString,
    pub openai_api_base: String,
    pub completion_model: String,
    pub web_server_host: String,
    pub web_server_port: u16,
    pub banner_animation_url: String,
    pub celebration_animation_url: String,
    pub app_env: String,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            openai_api_key: SecretString::from(env::var("OPENAI_API_KEY").unwrap_or_default()),
            openai_api_base: env::var("OPENAI_API_BASE")
                .unwrap_or_else(|_| DEFAULT_API_BASE.to_string()),
            completion_model: env::var("COMPLETION_MODEL")
                .unwrap_or_else(|_| DEFAULT_COMPLETION_MODEL.to_string()),
            web_server_host: env::var("WEB_SERVER_HOST")
                .unwrap_or_else(|_| "localhost".to_string()),
            web_server_port: env::var("WEB_SERVER_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8080),
            banner_animation_url: env::var("BANNER_ANIMATION_URL")
                .unwrap_or_else(|_| DEFAULT_BANNER_ANIMATION_URL.to_string()),
            celebration_animation_url: env::var("CELEBRATION_ANIMATION_URL")
                .unwrap_or_else(|_| DEFAULT_CELEBRATION_ANIMATION_URL.to_string()),
            app_env: env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
        }
    }

    pub fn is_production(&self) -> bool {
        self.app_env.eq_ignore_ascii_case("production")
    }

    /// Rejects configurations that cannot talk to the completion endpoint.
    pub fn validate_for_production(&self) -> AppResult<()> {
        if self.openai_api_key.expose_secret().trim().is_empty() {
            return Err(AppError::ConfigError(
                "OPENAI_API_KEY is not set. Set it to a valid API key before starting in production."
                    .to_string(),
            ));
        }

        if self.completion_model.trim().is_empty() {
            return Err(AppError::ConfigError(
                "COMPLETION_MODEL must not be empty".to_string(),
            ));
        }

        Ok(())
    }

    #[cfg(test)]
    pub fn test_config() -> Self {
        Self {
            openai_api_key: SecretString::from("sk-test".to_string()),
            openai_api_base: "http://127.0.0.1:9".to_string(),
            completion_model: "test-model".to_string(),
            web_server_host: "127.0.0.1".to_string(),
            web_server_port: 8080,
            banner_animation_url: "http://127.0.0.1:9/banner.json".to_string(),
            celebration_animation_url: "http://127.0.0.1:9/celebration.json".to_string(),
            app_env: "test".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_from_env_with_defaults() {
        let config = Config::from_env();

        assert!(!config.openai_api_base.is_empty());
        assert!(!config.completion_model.is_empty());
        assert!(config.web_server_port > 0);
    }

    #[test]
    fn test_test_config() {
        let config = Config::test_config();

        assert_eq!(config.completion_model, "test-model");
        assert_eq!(config.web_server_host, "127.0.0.1");
        assert!(!config.is_production());
        assert!(config.validate_for_production().is_ok());
    }

    #[test]
    fn test_missing_api_key_fails_production_validation() {
        let mut config = Config::test_config();
        config.openai_api_key = SecretString::from("   ".to_string());

        let err = config.validate_for_production().unwrap_err();
        assert_eq!(err.error_code(), "CONFIG_ERROR");
    }

    #[test]
    fn test_is_production_is_case_insensitive() {
        let mut config = Config::test_config();
        config.app_env = "Production".to_string();
        assert!(config.is_production());
    }
}
