use serde::{Deserialize, Serialize};

/// One quiz question. Options carry no letters; `A`, `B`, ... are assigned
/// by position when rendered.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct QuestionRecord {
    #[serde(default)]
    pub question: String,
    #[serde(default)]
    pub options: Vec<String>,
    #[serde(default)]
    pub answer: String,
    #[serde(default)] // empty means no explanation
    pub explanation: String,
}

impl QuestionRecord {
    pub fn new(
        question: impl Into<String>,
        options: Vec<String>,
        answer: impl Into<String>,
        explanation: impl Into<String>,
    ) -> Self {
        Self {
            question: question.into(),
            options,
            answer: answer.into(),
            explanation: explanation.into(),
        }
    }

    /// Copy with `answer` and `explanation` removed.
    pub fn without_answers(&self) -> Self {
        Self {
            question: self.question.clone(),
            options: self.options.clone(),
            answer: String::new(),
            explanation: String::new(),
        }
    }

    pub fn has_explanation(&self) -> bool {
        !self.explanation.is_empty()
    }
}
