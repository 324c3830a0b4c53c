pub mod quiz;
pub mod quiz_question;
pub use quiz::{QuizMode, QuizResult};
pub use quiz_question::QuestionRecord;
