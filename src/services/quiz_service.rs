use std::sync::Arc;

use base64::{engine::general_purpose::STANDARD as BASE64, Engine};
use validator::Validate;

use crate::{
    constants::{
        is_allowed_model,
        prompts::{quiz_authoring_prompt, QUIZ_SYSTEM_PROMPT},
        INVALID_MODEL_MESSAGE,
    },
    errors::{AppError, AppResult},
    gateway::{GatewayRequest, LanguageModelGateway},
    models::{
        domain::{QuizMode, QuizResult},
        dto::{request::QuizRequest, response::QuizResponse},
    },
    services::{quiz_extractor, quiz_renderer::QuizRenderer},
};

pub struct QuizService {
    gateway: Arc<dyn LanguageModelGateway>,
    renderer: QuizRenderer,
}

impl QuizService {
    pub fn new(gateway: Arc<dyn LanguageModelGateway>, renderer: QuizRenderer) -> Self {
        Self { gateway, renderer }
    }

    /// One gateway call, then extraction and two renders, in sequence.
    pub async fn generate_quiz(&self, request: QuizRequest) -> AppResult<QuizResponse> {
        request.validate()?;
        if !is_allowed_model(&request.model_name) {
            return Err(AppError::ValidationError(INVALID_MODEL_MESSAGE.to_string()));
        }

        let gateway_request = GatewayRequest {
            model_name: request.model_name.clone(),
            messages: vec![quiz_authoring_prompt(&request.topic)],
            allow_search: false,
            system_prompt: QUIZ_SYSTEM_PROMPT.to_string(),
            model_provider: request.model_provider.clone(),
        };

        let raw = self.gateway.complete(&gateway_request).await.map_err(|e| {
            log::error!("Quiz generation for '{}' failed: {}", request.topic, e);
            e
        })?;

        let quiz = QuizResult::new(quiz_extractor::extract(&raw), QuizMode::WithAnswers);
        log::info!(
            "Extracted {} quiz question(s) for topic '{}'",
            quiz.records.len(),
            request.topic
        );

        let with_answers = self
            .renderer
            .render(&quiz.records, quiz.mode, &request.language)?;

        let questions_only = quiz.questions_only();
        let questions = self.renderer.render(
            &questions_only.records,
            questions_only.mode,
            &request.language,
        )?;

        Ok(QuizResponse {
            quiz_with_answers: BASE64.encode(with_answers),
            quiz_questions: BASE64.encode(questions),
            quiz_data: quiz.records,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{gateway::MockLanguageModelGateway, services::quiz_extractor::PARSING_ERROR_QUESTION};

    fn quiz_request(topic: &str, model_name: &str) -> QuizRequest {
        QuizRequest {
            topic: topic.to_string(),
            language: "en-US".to_string(),
            model_name: model_name.to_string(),
            model_provider: "Groq".to_string(),
        }
    }

    fn service_with(gateway: MockLanguageModelGateway) -> QuizService {
        QuizService::new(Arc::new(gateway), QuizRenderer::default())
    }

    #[actix_web::test]
    async fn generates_documents_and_records() {
        let mut gateway = MockLanguageModelGateway::new();
        gateway
            .expect_complete()
            .withf(|req| {
                !req.allow_search
                    && req.system_prompt == QUIZ_SYSTEM_PROMPT
                    && req.messages.len() == 1
                    && req.messages[0].contains("Topic: Arithmetic")
            })
            .times(1)
            .returning(|_| {
                Ok("  Here you go:\n[{\"question\":\"2+2?\",\"options\":[\"3\",\"4\",\"5\"],\"answer\":\"B\",\"explanation\":\"Basic arithmetic\"}]\nEnjoy!".to_string())
            });

        let response = service_with(gateway)
            .generate_quiz(quiz_request("Arithmetic", "llama-3.3-70b-versatile"))
            .await
            .unwrap();

        assert_eq!(response.quiz_data.len(), 1);
        assert_eq!(response.quiz_data[0].question, "2+2?");
        assert_eq!(response.quiz_data[0].answer, "B");

        let with_answers = BASE64.decode(&response.quiz_with_answers).unwrap();
        let questions = BASE64.decode(&response.quiz_questions).unwrap();
        assert!(with_answers.starts_with(b"%PDF"));
        assert!(questions.starts_with(b"%PDF"));
    }

    #[actix_web::test]
    async fn unparseable_output_still_produces_a_quiz() {
        let mut gateway = MockLanguageModelGateway::new();
        gateway
            .expect_complete()
            .times(1)
            .returning(|_| Ok("I cannot help with that.".to_string()));

        let response = service_with(gateway)
            .generate_quiz(quiz_request("Anything", "gpt-4o-mini"))
            .await
            .unwrap();

        assert_eq!(response.quiz_data.len(), 1);
        assert_eq!(response.quiz_data[0].question, PARSING_ERROR_QUESTION);
        assert_eq!(
            response.quiz_data[0].explanation,
            "Original response: I cannot help with that."
        );
    }

    #[actix_web::test]
    async fn gateway_failure_propagates() {
        let mut gateway = MockLanguageModelGateway::new();
        gateway
            .expect_complete()
            .times(1)
            .returning(|_| Err(AppError::GatewayError("timed out".to_string())));

        let result = service_with(gateway)
            .generate_quiz(quiz_request("Rivers", "gpt-4o-mini"))
            .await;

        assert!(matches!(result, Err(AppError::GatewayError(_))));
    }

    #[actix_web::test]
    async fn invalid_requests_never_reach_the_gateway() {
        let mut gateway = MockLanguageModelGateway::new();
        gateway.expect_complete().never();
        let service = service_with(gateway);

        let unknown_model = service
            .generate_quiz(quiz_request("Rivers", "unknown-model"))
            .await;
        assert!(matches!(unknown_model, Err(AppError::ValidationError(_))));

        let empty_topic = service.generate_quiz(quiz_request("", "gpt-4o-mini")).await;
        assert!(matches!(empty_topic, Err(AppError::ValidationError(_))));
    }

    #[actix_web::test]
    async fn render_failure_is_surfaced() {
        let mut gateway = MockLanguageModelGateway::new();
        gateway
            .expect_complete()
            .times(1)
            .returning(|_| Ok("[{\"question\":\"q\"}]".to_string()));
        let service = QuizService::new(
            Arc::new(gateway),
            QuizRenderer::new(Some("/no/such/font.ttf".into())),
        );

        let result = service
            .generate_quiz(quiz_request("Rivers", "gpt-4o-mini"))
            .await;

        assert!(matches!(result, Err(AppError::RenderError(_))));
    }
}
