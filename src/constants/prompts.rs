pub const QUIZ_SYSTEM_PROMPT: &str =
    "You are an expert quiz creator who creates educational quizzes. Return only JSON format.";

pub const QUIZ_QUESTION_COUNT: usize = 10;

/// Authoring instructions sent as the single user message of a quiz request.
pub fn quiz_authoring_prompt(topic: &str) -> String {
    format!(
        "Generate a {QUIZ_QUESTION_COUNT}-question quiz about the following topic.
For each question, provide:
- The question text
- 4 multiple choice options (labeled A, B, C, D)
- The correct answer (specify the letter)
- A brief explanation of why it's correct

Topic: {topic}

Format the response as a JSON array of objects with these keys:
\"question\", \"options\", \"answer\", \"explanation\"

Return ONLY the JSON array without any additional text."
    )
}
