pub mod chat_handler;
pub mod health_handler;
pub mod quiz_handler;

pub use chat_handler::{chat, chat_json_config};
pub use health_handler::{health_check, health_check_live};
pub use quiz_handler::generate_quiz;

use actix_web::web;

use crate::errors::AppError;

/// Registers every route; shared by the server and the integration tests.
/// `/chat` overrides the JSON error handler so its failures stay 200.
pub fn configure(cfg: &mut web::ServiceConfig) {
    let json_config = web::JsonConfig::default()
        .error_handler(|err, _req| AppError::ValidationError(err.to_string()).into());

    cfg.app_data(json_config)
        .service(
            web::resource("/chat")
                .app_data(chat_json_config())
                .route(web::post().to(chat)),
        )
        .service(generate_quiz)
        .service(health_check)
        .service(health_check_live);
}
