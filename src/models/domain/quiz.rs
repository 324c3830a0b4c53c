use serde::{Deserialize, Serialize};

use crate::{constants::languages::is_english, models::domain::quiz_question::QuestionRecord};

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize, Copy)]
#[serde(rename_all = "snake_case")]
pub enum QuizMode {
    QuestionsOnly,
    WithAnswers,
}

impl QuizMode {
    /// Document title. Non-English tags get the fixed Hindi variant.
    pub fn title(&self, language_tag: &str) -> &'static str {
        match (self, is_english(language_tag)) {
            (QuizMode::WithAnswers, true) => "Quiz with Answers",
            (QuizMode::WithAnswers, false) => "उत्तरों के साथ प्रश्नोत्तरी",
            (QuizMode::QuestionsOnly, true) => "Quiz Questions",
            (QuizMode::QuestionsOnly, false) => "प्रश्नोत्तरी",
        }
    }

    pub fn includes_answers(&self) -> bool {
        matches!(self, QuizMode::WithAnswers)
    }
}

/// Records produced by one quiz generation request, in question order.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct QuizResult {
    pub records: Vec<QuestionRecord>,
    pub mode: QuizMode,
}

impl QuizResult {
    pub fn new(records: Vec<QuestionRecord>, mode: QuizMode) -> Self {
        Self { records, mode }
    }

    /// Questions-only variant with answers and explanations stripped.
    pub fn questions_only(&self) -> Self {
        Self {
            records: self
                .records
                .iter()
                .map(QuestionRecord::without_answers)
                .collect(),
            mode: QuizMode::QuestionsOnly,
        }
    }
}
