use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::constants::languages::DEFAULT_LANGUAGE;

fn default_language() -> String {
    DEFAULT_LANGUAGE.to_string()
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ChatRequest {
    pub model_name: String,
    pub model_provider: String,
    #[serde(default)]
    pub system_prompt: String,
    #[serde(default)]
    pub messages: Vec<String>,
    #[serde(default)]
    pub allow_search: bool,
    #[serde(default = "default_language")]
    pub language: String,
}

#[derive(Debug, Clone, Deserialize, Serialize, Validate)]
pub struct QuizRequest {
    #[validate(length(min = 1, max = 500, message = "Topic must be between 1 and 500 characters"))]
    pub topic: String,
    #[serde(default = "default_language")]
    pub language: String,
    #[validate(length(min = 1))]
    pub model_name: String,
    #[validate(length(min = 1))]
    pub model_provider: String,
}
