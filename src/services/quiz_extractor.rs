//! Recovers quiz records from free-form model output.
//!
//! The model is asked for a bare JSON array but frequently wraps it in prose
//! or code fences, or emits something that is not JSON at all. Extraction
//! never fails: stages run in order until one yields records, and when none
//! does a single sentinel record carrying the original text is returned.

use once_cell::sync::Lazy;
use regex::{Regex, RegexBuilder};
use serde_json::Value;
use thiserror::Error;

use crate::models::domain::QuestionRecord;

pub const PARSING_ERROR_QUESTION: &str = "Quiz parsing error";

/// `[` through `]`, across newlines, greedy.
static ARRAY_SPAN: Lazy<Result<Regex, regex::Error>> = Lazy::new(|| {
    RegexBuilder::new(r"\[.*\]")
        .dot_matches_new_line(true)
        .build()
});

/// Outcome of one extraction stage.
#[derive(Debug)]
pub enum Attempt {
    Parsed(Vec<QuestionRecord>),
    NoMatch,
    Malformed(serde_json::Error),
}

/// A stage failed for a reason other than "nothing usable in the text".
#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("array pattern unavailable: {0}")]
    Pattern(#[from] regex::Error),
}

pub fn extract(raw_text: &str) -> Vec<QuestionRecord> {
    if let Attempt::Parsed(records) = bracket_scan(raw_text) {
        return records;
    }

    settle(raw_text, pattern_scan(raw_text))
}

/// Final stage: turns the pattern-scan outcome into records, falling back to
/// a sentinel when it produced nothing usable.
pub fn settle(raw_text: &str, outcome: Result<Attempt, ExtractError>) -> Vec<QuestionRecord> {
    match outcome {
        Ok(Attempt::Parsed(records)) => records,
        Ok(Attempt::Malformed(err)) => {
            log::warn!("Quiz output is not a valid JSON array: {}", err);
            vec![parsing_error_record(raw_text)]
        }
        Ok(Attempt::NoMatch) => {
            log::warn!("Quiz output contains no JSON array");
            vec![parsing_error_record(raw_text)]
        }
        Err(err) => {
            log::error!("Quiz extraction failed unexpectedly: {}", err);
            vec![critical_error_record(raw_text)]
        }
    }
}

/// Slice from the first `[` to the last `]` and parse it.
pub fn bracket_scan(raw_text: &str) -> Attempt {
    let (Some(start), Some(end)) = (raw_text.find('['), raw_text.rfind(']')) else {
        return Attempt::NoMatch;
    };
    if end < start {
        return Attempt::NoMatch;
    }

    parse_array(&raw_text[start..=end])
}

/// First greedy `[...]` match over the whole text, then parse it.
pub fn pattern_scan(raw_text: &str) -> Result<Attempt, ExtractError> {
    let pattern = ARRAY_SPAN.as_ref().map_err(|e| e.clone())?;

    Ok(match pattern.find(raw_text) {
        Some(span) => parse_array(span.as_str()),
        None => Attempt::NoMatch,
    })
}

/// Strictly parse `candidate` as a JSON array. Object elements become
/// records; an array with no objects counts as no match.
pub fn parse_array(candidate: &str) -> Attempt {
    let elements: Vec<Value> = match serde_json::from_str(candidate) {
        Ok(elements) => elements,
        Err(err) => return Attempt::Malformed(err),
    };

    let records: Vec<QuestionRecord> = elements.iter().filter_map(record_from_value).collect();
    if records.is_empty() {
        Attempt::NoMatch
    } else {
        Attempt::Parsed(records)
    }
}

fn record_from_value(value: &Value) -> Option<QuestionRecord> {
    let object = value.as_object()?;

    Some(QuestionRecord {
        question: object.get("question").map(text_of).unwrap_or_default(),
        options: object.get("options").map(options_of).unwrap_or_default(),
        answer: object.get("answer").map(text_of).unwrap_or_default(),
        explanation: object.get("explanation").map(text_of).unwrap_or_default(),
    })
}

fn text_of(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}

fn options_of(value: &Value) -> Vec<String> {
    match value {
        Value::Array(items) => items.iter().map(text_of).collect(),
        // {"A": "...", "B": "..."}
        Value::Object(map) => map.values().map(text_of).collect(),
        _ => Vec::new(),
    }
}

pub fn parsing_error_record(raw_text: &str) -> QuestionRecord {
    QuestionRecord::new(
        PARSING_ERROR_QUESTION,
        vec![
            "A: Error in parsing".to_string(),
            "B: Contact support".to_string(),
        ],
        "A",
        format!("Original response: {}", raw_text),
    )
}

pub fn critical_error_record(raw_text: &str) -> QuestionRecord {
    QuestionRecord::new(
        PARSING_ERROR_QUESTION,
        vec![
            "A: Critical error".to_string(),
            "B: Try again later".to_string(),
        ],
        "A",
        raw_text,
    )
}
