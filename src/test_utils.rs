use crate::models::domain::QuestionRecord;

#[cfg(test)]
pub mod fixtures {
    use super::*;

    /// The arithmetic question used across quiz tests.
    pub fn arithmetic_record() -> QuestionRecord {
        QuestionRecord::new(
            "2+2?",
            vec!["3".to_string(), "4".to_string(), "5".to_string()],
            "B",
            "Basic arithmetic",
        )
    }

    /// Model output wrapping [`arithmetic_record`] in prose.
    pub fn prose_wrapped_quiz() -> String {
        "  Here you go:\n[{\"question\":\"2+2?\",\"options\":[\"3\",\"4\",\"5\"],\"answer\":\"B\",\"explanation\":\"Basic arithmetic\"}]\nEnjoy!".to_string()
    }

    /// Several records, some without explanations.
    pub fn mixed_records() -> Vec<QuestionRecord> {
        vec![
            arithmetic_record(),
            QuestionRecord::new(
                "Largest planet?",
                vec!["Mars".to_string(), "Jupiter".to_string()],
                "B",
                "",
            ),
            QuestionRecord::new("Boiling point of water at sea level?", vec![], "100 C", ""),
        ]
    }
}

#[cfg(test)]
pub mod test_helpers {
    use actix_web::http::StatusCode;

    /// Asserts that a status code represents an error (4xx or 5xx)
    pub fn assert_error_status(status: StatusCode) {
        assert!(
            status.is_client_error() || status.is_server_error(),
            "Expected error status, got: {}",
            status
        );
    }

    /// Asserts that a status code represents success (2xx)
    pub fn assert_success_status(status: StatusCode) {
        assert!(
            status.is_success(),
            "Expected success status, got: {}",
            status
        );
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::*;
    use crate::services::quiz_extractor::extract;

    #[test]
    fn test_prose_wrapped_quiz_extracts_arithmetic_record() {
        assert_eq!(extract(&prose_wrapped_quiz()), vec![arithmetic_record()]);
    }

    #[test]
    fn test_mixed_records_shape() {
        let records = mixed_records();
        assert_eq!(records.len(), 3);
        assert_eq!(records.iter().filter(|r| r.has_explanation()).count(), 1);
    }
}
