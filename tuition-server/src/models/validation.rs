//! Validation error type for enrollment submissions

use std::fmt;

/// Required fields that were missing or blank in a submission.
///
/// Collected in declaration order so the client sees every offending
/// field in a single response.
#[derive(Debug, Clone)]
pub struct ValidationError {
    pub fields: Vec<&'static str>,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "missing or empty required fields: {}",
            self.fields.join(", ")
        )
    }
}

impl std::error::Error for ValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = ValidationError {
            fields: vec!["student_name", "phone"],
        };
        assert_eq!(
            err.to_string(),
            "missing or empty required fields: student_name, phone"
        );
    }
}
