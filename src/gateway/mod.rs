use std::{sync::Arc, time::Duration};

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::{config::Config, errors::AppResult};

pub mod http_gateway;
pub mod openai_gateway;

pub use http_gateway::HttpGateway;
pub use openai_gateway::OpenAiCompatibleGateway;

/// Payload of one language-model call. Field names match the agent endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct GatewayRequest {
    pub model_name: String,
    pub messages: Vec<String>,
    pub allow_search: bool,
    pub system_prompt: String,
    pub model_provider: String,
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LanguageModelGateway: Send + Sync {
    /// Returns the text content of the model's reply.
    async fn complete(&self, request: &GatewayRequest) -> AppResult<String>;
}

/// Agent endpoint when `LLM_GATEWAY_URL` is set, direct provider calls otherwise.
pub fn gateway_from_config(config: &Config) -> AppResult<Arc<dyn LanguageModelGateway>> {
    let timeout = Duration::from_secs(config.gateway_timeout_secs);

    match &config.gateway_url {
        Some(url) => {
            log::info!("Using language-model agent endpoint at {}", url);
            Ok(Arc::new(HttpGateway::new(url.clone(), timeout)?))
        }
        None => {
            log::info!("Using direct provider access for language-model calls");
            Ok(Arc::new(OpenAiCompatibleGateway::from_config(config)))
        }
    }
}
