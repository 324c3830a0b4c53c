use serde::{Deserialize, Serialize};

use crate::models::domain::QuestionRecord;

/// Body of `/chat`: exactly one of `response` or `error`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum ChatResponse {
    Reply { response: String },
    Failure { error: String },
}

impl ChatResponse {
    pub fn reply(text: impl Into<String>) -> Self {
        ChatResponse::Reply {
            response: text.into(),
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        ChatResponse::Failure {
            error: message.into(),
        }
    }
}

/// Body of `/generate_quiz`. Both documents are base64-encoded PDFs.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct QuizResponse {
    pub quiz_with_answers: String,
    pub quiz_questions: String,
    pub quiz_data: Vec<QuestionRecord>,
}
