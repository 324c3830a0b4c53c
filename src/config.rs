use std::{env, path::PathBuf};

use secrecy::SecretString;

use crate::errors::{AppError, AppResult};

pub const DEFAULT_GROQ_API_BASE: &str = "https://api.groq.com/openai/v1";
pub const DEFAULT_OPENAI_API_BASE: &str = "https://api.openai.com/v1";

#[derive(Clone, Debug)]
pub struct Config {
    pub web_server_host: String,
    pub web_server_port: u16,
    /// External agent endpoint. When unset, providers are called directly.
    pub gateway_url: Option<String>,
    pub gateway_timeout_secs: u64,
    pub groq_api_key: Option<SecretString>,
    pub groq_api_base: String,
    pub openai_api_key: Option<SecretString>,
    pub openai_api_base: String,
    /// TrueType font embedded into quiz PDFs, needed for non-Latin scripts.
    pub quiz_font_path: Option<PathBuf>,
    pub cors_allowed_origin: Option<String>,
}

fn non_empty_var(key: &str) -> Option<String> {
    env::var(key).ok().filter(|v| !v.trim().is_empty())
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            web_server_host: env::var("WEB_SERVER_HOST")
                .unwrap_or_else(|_| "127.0.0.1".to_string()),
            web_server_port: env::var("WEB_SERVER_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(9999),
            gateway_url: non_empty_var("LLM_GATEWAY_URL"),
            gateway_timeout_secs: env::var("LLM_GATEWAY_TIMEOUT_SECS")
                .ok()
                .and_then(|t| t.parse().ok())
                .unwrap_or(120),
            groq_api_key: non_empty_var("GROQ_API_KEY").map(SecretString::from),
            groq_api_base: env::var("GROQ_API_BASE")
                .unwrap_or_else(|_| DEFAULT_GROQ_API_BASE.to_string()),
            openai_api_key: non_empty_var("OPENAI_API_KEY").map(SecretString::from),
            openai_api_base: env::var("OPENAI_API_BASE")
                .unwrap_or_else(|_| DEFAULT_OPENAI_API_BASE.to_string()),
            quiz_font_path: non_empty_var("QUIZ_FONT_PATH").map(PathBuf::from),
            cors_allowed_origin: non_empty_var("CORS_ALLOWED_ORIGIN"),
        }
    }

    /// Checks that at least one way of reaching a language model is configured.
    pub fn validate(&self) -> AppResult<()> {
        if self.gateway_url.is_none()
            && self.groq_api_key.is_none()
            && self.openai_api_key.is_none()
        {
            return Err(AppError::ValidationError(
                "Set LLM_GATEWAY_URL, or GROQ_API_KEY / OPENAI_API_KEY for direct provider access"
                    .to_string(),
            ));
        }

        if let Some(path) = &self.quiz_font_path {
            if !path.is_file() {
                return Err(AppError::ValidationError(format!(
                    "QUIZ_FONT_PATH does not point to a file: {}",
                    path.display()
                )));
            }
        }

        Ok(())
    }

    pub fn bind_address(&self) -> (String, u16) {
        (self.web_server_host.clone(), self.web_server_port)
    }

    #[cfg(test)]
    pub fn test_config() -> Self {
        Self {
            web_server_host: "127.0.0.1".to_string(),
            web_server_port: 9999,
            gateway_url: Some("http://127.0.0.1:9/agent".to_string()),
            gateway_timeout_secs: 5,
            groq_api_key: Some(SecretString::from("test_groq_key".to_string())),
            groq_api_base: DEFAULT_GROQ_API_BASE.to_string(),
            openai_api_key: None,
            openai_api_base: DEFAULT_OPENAI_API_BASE.to_string(),
            quiz_font_path: None,
            cors_allowed_origin: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_from_env_with_defaults() {
        let config = Config::from_env();

        assert!(!config.web_server_host.is_empty());
        assert!(config.gateway_timeout_secs > 0);
        assert!(!config.groq_api_base.is_empty());
    }

    #[test]
    fn test_test_config_is_valid() {
        let config = Config::test_config();

        assert_eq!(config.web_server_port, 9999);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_requires_some_model_access() {
        let mut config = Config::test_config();
        config.gateway_url = None;
        config.groq_api_key = None;

        assert!(matches!(
            config.validate(),
            Err(AppError::ValidationError(_))
        ));
    }

    #[test]
    fn test_validate_rejects_missing_font_file() {
        let mut config = Config::test_config();
        config.quiz_font_path = Some(PathBuf::from("/definitely/not/here.ttf"));

        assert!(config.validate().is_err());
    }
}
