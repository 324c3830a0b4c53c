use std::time::Duration;

use async_trait::async_trait;
use serde_json::Value;

use crate::{
    errors::{AppError, AppResult},
    gateway::{GatewayRequest, LanguageModelGateway},
};

/// Forwards requests to an external agent endpoint over HTTP.
pub struct HttpGateway {
    client: reqwest::Client,
    url: String,
}

impl HttpGateway {
    pub fn new(url: impl Into<String>, timeout: Duration) -> AppResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| AppError::InternalError(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            url: url.into(),
        })
    }
}

/// Pulls the reply text out of an agent response body. The agent may answer
/// with plain text, a JSON string, or a `{response}` / `{error}` object.
pub fn reply_text(body: &str) -> AppResult<String> {
    match serde_json::from_str::<Value>(body) {
        Ok(Value::String(text)) => Ok(text),
        Ok(Value::Object(map)) => {
            if let Some(text) = map.get("response").and_then(Value::as_str) {
                return Ok(text.to_string());
            }
            if let Some(error) = map.get("error").and_then(Value::as_str) {
                return Err(AppError::GatewayError(error.to_string()));
            }
            Ok(Value::Object(map).to_string())
        }
        Ok(other) => Ok(other.to_string()),
        Err(_) => Ok(body.to_string()),
    }
}

#[async_trait]
impl LanguageModelGateway for HttpGateway {
    async fn complete(&self, request: &GatewayRequest) -> AppResult<String> {
        log::debug!(
            "POST {} model={} provider={} messages={}",
            self.url,
            request.model_name,
            request.model_provider,
            request.messages.len()
        );

        let response = self
            .client
            .post(&self.url)
            .json(request)
            .send()
            .await
            .map_err(|e| {
                log::error!("Failed to reach language-model agent: {}", e);
                AppError::from(e)
            })?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            log::error!("Agent responded with {}: {}", status, body);
            return Err(AppError::GatewayError(format!(
                "agent responded with {}: {}",
                status, body
            )));
        }

        reply_text(&body)
    }
}
