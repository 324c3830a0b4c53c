use actix_web::{post, web, HttpRequest, HttpResponse};

use crate::{
    app_state::AppState, errors::AppError, middleware::get_request_id,
    models::dto::request::QuizRequest,
};

#[post("/generate_quiz")]
pub async fn generate_quiz(
    state: web::Data<AppState>,
    req: HttpRequest,
    request: web::Json<QuizRequest>,
) -> Result<HttpResponse, AppError> {
    let request = request.into_inner();
    let request_id = get_request_id(&req).unwrap_or_default();
    log::info!(
        "[{}] generate_quiz topic='{}' model={} language={}",
        request_id,
        request.topic,
        request.model_name,
        request.language
    );

    let response = state.quiz_service.generate_quiz(request).await?;

    log::info!(
        "[{}] quiz ready with {} question(s)",
        request_id,
        response.quiz_data.len()
    );
    Ok(HttpResponse::Ok().json(response))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use actix_web::{http::StatusCode, test, App};

    use super::*;
    use crate::{
        config::Config,
        gateway::MockLanguageModelGateway,
        test_utils::{fixtures::*, test_helpers::*},
    };

    fn state_with(gateway: MockLanguageModelGateway) -> web::Data<AppState> {
        web::Data::new(AppState::with_gateway(
            Config::test_config(),
            Arc::new(gateway),
        ))
    }

    fn quiz_body(model_name: &str) -> serde_json::Value {
        serde_json::json!({
            "topic": "Arithmetic",
            "language": "en-US",
            "model_name": model_name,
            "model_provider": "Groq"
        })
    }

    #[actix_web::test]
    async fn test_generate_quiz_returns_documents() {
        let mut gateway = MockLanguageModelGateway::new();
        gateway
            .expect_complete()
            .times(1)
            .returning(|_| Ok(prose_wrapped_quiz()));
        let app = test::init_service(
            App::new()
                .app_data(state_with(gateway))
                .configure(crate::handlers::configure),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/generate_quiz")
            .set_json(quiz_body("llama-3.3-70b-versatile"))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_success_status(resp.status());

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert!(body["quiz_with_answers"].as_str().is_some_and(|s| !s.is_empty()));
        assert!(body["quiz_questions"].as_str().is_some_and(|s| !s.is_empty()));
        assert_eq!(
            body["quiz_data"],
            serde_json::to_value(vec![arithmetic_record()]).unwrap()
        );
    }

    #[actix_web::test]
    async fn test_generate_quiz_gateway_failure_is_bad_gateway() {
        let mut gateway = MockLanguageModelGateway::new();
        gateway
            .expect_complete()
            .times(1)
            .returning(|_| Err(AppError::GatewayError("upstream down".to_string())));
        let app = test::init_service(
            App::new()
                .app_data(state_with(gateway))
                .configure(crate::handlers::configure),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/generate_quiz")
            .set_json(quiz_body("gpt-4o-mini"))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_GATEWAY);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["error"], "Gateway error: upstream down");
        assert_eq!(body["code"], 502);
    }

    #[actix_web::test]
    async fn test_generate_quiz_unknown_model_is_bad_request() {
        let mut gateway = MockLanguageModelGateway::new();
        gateway.expect_complete().never();
        let app = test::init_service(
            App::new()
                .app_data(state_with(gateway))
                .configure(crate::handlers::configure),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/generate_quiz")
            .set_json(quiz_body("unknown-model"))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_error_status(resp.status());
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[actix_web::test]
    async fn test_generate_quiz_malformed_body_is_bad_request() {
        let mut gateway = MockLanguageModelGateway::new();
        gateway.expect_complete().never();
        let app = test::init_service(
            App::new()
                .app_data(state_with(gateway))
                .configure(crate::handlers::configure),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/generate_quiz")
            .set_json(serde_json::json!({ "topic": "missing model" }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["code"], 400);
    }
}
