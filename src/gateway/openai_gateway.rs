use std::time::Duration;

use async_openai::{config::OpenAIConfig, Client};
use async_trait::async_trait;
use secrecy::{ExposeSecret, SecretString};
use serde_json::{json, Value};

use crate::{
    config::Config,
    errors::{AppError, AppResult},
    gateway::{GatewayRequest, LanguageModelGateway},
};

#[derive(Debug, Clone)]
struct ProviderEndpoint {
    api_base: String,
    api_key: Option<SecretString>,
}

/// Calls OpenAI-compatible chat completion APIs directly (Groq, OpenAI).
pub struct OpenAiCompatibleGateway {
    groq: ProviderEndpoint,
    openai: ProviderEndpoint,
    timeout: Duration,
}

impl OpenAiCompatibleGateway {
    pub fn from_config(config: &Config) -> Self {
        Self {
            groq: ProviderEndpoint {
                api_base: config.groq_api_base.clone(),
                api_key: config.groq_api_key.clone(),
            },
            openai: ProviderEndpoint {
                api_base: config.openai_api_base.clone(),
                api_key: config.openai_api_key.clone(),
            },
            timeout: Duration::from_secs(config.gateway_timeout_secs),
        }
    }

    fn endpoint_for(&self, provider: &str) -> AppResult<&ProviderEndpoint> {
        let endpoint = if provider.eq_ignore_ascii_case("groq") {
            &self.groq
        } else if provider.eq_ignore_ascii_case("openai") {
            &self.openai
        } else {
            return Err(AppError::GatewayError(format!(
                "Unsupported model provider: {}",
                provider
            )));
        };

        if endpoint.api_key.is_none() {
            return Err(AppError::GatewayError(format!(
                "No API key configured for provider {}",
                provider
            )));
        }

        Ok(endpoint)
    }

    fn client_for(&self, endpoint: &ProviderEndpoint) -> Client<OpenAIConfig> {
        let mut config = OpenAIConfig::new().with_api_base(endpoint.api_base.clone());
        if let Some(key) = &endpoint.api_key {
            config = config.with_api_key(key.expose_secret().to_string());
        }
        Client::with_config(config)
    }
}

/// Chat completion body: the system prompt followed by one user turn per message.
pub fn completion_body(request: &GatewayRequest) -> Value {
    let mut messages = Vec::with_capacity(request.messages.len() + 1);
    if !request.system_prompt.is_empty() {
        messages.push(json!({ "role": "system", "content": request.system_prompt }));
    }
    messages.extend(
        request
            .messages
            .iter()
            .map(|m| json!({ "role": "user", "content": m })),
    );

    json!({
        "model": request.model_name,
        "messages": messages,
    })
}

/// Text of the first choice of a chat completion response.
pub fn completion_text(response: &Value) -> AppResult<String> {
    response
        .pointer("/choices/0/message/content")
        .and_then(Value::as_str)
        .map(str::to_string)
        .ok_or_else(|| {
            AppError::GatewayError("Completion response contained no message content".to_string())
        })
}

#[async_trait]
impl LanguageModelGateway for OpenAiCompatibleGateway {
    async fn complete(&self, request: &GatewayRequest) -> AppResult<String> {
        let endpoint = self.endpoint_for(&request.model_provider)?;
        if request.allow_search {
            log::warn!(
                "Web search is not available for direct {} calls; answering without it",
                request.model_provider
            );
        }

        let client = self.client_for(endpoint);
        let body = completion_body(request);

        let response: Value = tokio::time::timeout(self.timeout, client.chat().create_byot(body))
            .await
            .map_err(|_| {
                AppError::GatewayError(format!(
                    "{} did not respond within {}s",
                    request.model_provider,
                    self.timeout.as_secs()
                ))
            })??;

        completion_text(&response)
    }
}
