use actix_web::{error::InternalError, web, HttpRequest, HttpResponse};

use crate::{
    app_state::AppState,
    middleware::get_request_id,
    models::dto::{request::ChatRequest, response::ChatResponse},
};

/// Unreadable chat bodies keep the chat contract: 200 with an `error` field.
pub fn chat_json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, req| {
        log::warn!(
            "[{}] rejected chat body: {}",
            get_request_id(req).unwrap_or_default(),
            err
        );
        let body = ChatResponse::failure(format!("Invalid request body: {}", err));
        InternalError::from_response(err, HttpResponse::Ok().json(body)).into()
    })
}

/// Chat replies are always 200; failures travel in the `error` field.
pub async fn chat(
    state: web::Data<AppState>,
    req: HttpRequest,
    request: web::Json<ChatRequest>,
) -> HttpResponse {
    let request = request.into_inner();
    log::info!(
        "[{}] chat model={} provider={} language={}",
        get_request_id(&req).unwrap_or_default(),
        request.model_name,
        request.model_provider,
        request.language
    );

    let response = state.chat_service.chat(request).await;
    HttpResponse::Ok().json(response)
}
