use std::sync::Arc;

use crate::{
    config::Config,
    errors::AppResult,
    gateway::{gateway_from_config, LanguageModelGateway},
    services::{chat_service::ChatService, quiz_renderer::QuizRenderer, quiz_service::QuizService},
};

#[derive(Clone)]
pub struct AppState {
    pub chat_service: Arc<ChatService>,
    pub quiz_service: Arc<QuizService>,
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(config: Config) -> AppResult<Self> {
        let gateway = gateway_from_config(&config)?;
        Ok(Self::with_gateway(config, gateway))
    }

    pub fn with_gateway(config: Config, gateway: Arc<dyn LanguageModelGateway>) -> Self {
        let renderer = QuizRenderer::new(config.quiz_font_path.clone());

        Self {
            chat_service: Arc::new(ChatService::new(Arc::clone(&gateway))),
            quiz_service: Arc::new(QuizService::new(gateway, renderer)),
            config: Arc::new(config),
        }
    }
}
