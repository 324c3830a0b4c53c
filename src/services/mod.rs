pub mod chat_service;
pub mod quiz_extractor;
pub mod quiz_renderer;
pub mod quiz_service;
