pub mod languages;
pub mod prompts;

/// Models a request may name. Anything else is rejected before a gateway call.
pub const ALLOWED_MODEL_NAMES: [&str; 4] = [
    "llama3-70b-8192",
    "mixtral-8x7b-32768",
    "llama-3.3-70b-versatile",
    "gpt-4o-mini",
];

pub const INVALID_MODEL_MESSAGE: &str = "Invalid model name. Kindly select a valid AI model";

pub fn is_allowed_model(model_name: &str) -> bool {
    ALLOWED_MODEL_NAMES.contains(&model_name)
}
