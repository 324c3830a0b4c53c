use std::sync::Arc;

use crate::{
    constants::{is_allowed_model, languages::language_instruction, INVALID_MODEL_MESSAGE},
    gateway::{GatewayRequest, LanguageModelGateway},
    models::dto::{request::ChatRequest, response::ChatResponse},
};

pub struct ChatService {
    gateway: Arc<dyn LanguageModelGateway>,
}

impl ChatService {
    pub fn new(gateway: Arc<dyn LanguageModelGateway>) -> Self {
        Self { gateway }
    }

    /// Answers a chat query. Failures are reported in the body, never as errors.
    pub async fn chat(&self, request: ChatRequest) -> ChatResponse {
        if !is_allowed_model(&request.model_name) {
            log::warn!("Rejected chat request for model '{}'", request.model_name);
            return ChatResponse::failure(INVALID_MODEL_MESSAGE);
        }

        let system_prompt = format!(
            "{}{}",
            request.system_prompt,
            language_instruction(&request.language)
        );

        let gateway_request = GatewayRequest {
            model_name: request.model_name,
            messages: request.messages,
            allow_search: request.allow_search,
            system_prompt,
            model_provider: request.model_provider,
        };

        match self.gateway.complete(&gateway_request).await {
            Ok(text) => ChatResponse::reply(text),
            Err(err) => {
                log::error!("Chat request failed: {}", err);
                ChatResponse::failure(format!("Error processing request: {}", err))
            }
        }
    }
}
