//! Enrollment record and request/response shapes

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::ValidationError;

/// A persisted enrollment request
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Enrollment {
    pub id: i64,
    pub student_name: String,
    /// Grade or level label
    pub student_class: String,
    /// Curriculum board, when the student named one
    pub board: Option<String>,
    /// Free-form subject list, stored as a single string
    pub subjects: String,
    pub area: String,
    pub phone: String,
    pub preferred_time: Option<String>,
    /// Set once at insertion; the sole sort key for listings
    pub created_at: DateTime<Utc>,
}

/// Inbound enrollment payload.
///
/// Every field deserializes as optional so that validation, not
/// deserialization, reports all missing required fields at once.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct EnrollmentSubmission {
    #[serde(default)]
    pub student_name: Option<String>,
    #[serde(default)]
    pub student_class: Option<String>,
    #[serde(default)]
    pub board: Option<String>,
    #[serde(default)]
    pub subjects: Option<String>,
    #[serde(default)]
    pub area: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub preferred_time: Option<String>,
}

/// A submission that passed validation
#[derive(Debug, Clone)]
pub struct NewEnrollment {
    pub student_name: String,
    pub student_class: String,
    pub board: Option<String>,
    pub subjects: String,
    pub area: String,
    pub phone: String,
    pub preferred_time: Option<String>,
}

impl EnrollmentSubmission {
    /// Validate required fields, consuming the submission.
    ///
    /// Required fields must be present and non-blank; optional fields
    /// pass through verbatim. The error lists every offending field.
    pub fn into_validated(self) -> Result<NewEnrollment, ValidationError> {
        let mut missing = Vec::new();
        let mut require = |value: &Option<String>, field: &'static str| {
            if value.as_deref().map_or(true, |s| s.trim().is_empty()) {
                missing.push(field);
            }
        };

        require(&self.student_name, "student_name");
        require(&self.student_class, "student_class");
        require(&self.subjects, "subjects");
        require(&self.area, "area");
        require(&self.phone, "phone");

        if !missing.is_empty() {
            return Err(ValidationError { fields: missing });
        }

        // The checks above guarantee the required fields are present
        Ok(NewEnrollment {
            student_name: self.student_name.unwrap_or_default(),
            student_class: self.student_class.unwrap_or_default(),
            board: self.board,
            subjects: self.subjects.unwrap_or_default(),
            area: self.area.unwrap_or_default(),
            phone: self.phone.unwrap_or_default(),
            preferred_time: self.preferred_time,
        })
    }
}

/// Outbound enrollment shape: the submitted fields plus the generated id
#[derive(Debug, Clone, Serialize)]
pub struct EnrollmentResponse {
    pub id: i64,
    pub student_name: String,
    pub student_class: String,
    pub board: Option<String>,
    pub subjects: String,
    pub area: String,
    pub phone: String,
    pub preferred_time: Option<String>,
}

impl From<Enrollment> for EnrollmentResponse {
    fn from(e: Enrollment) -> Self {
        Self {
            id: e.id,
            student_name: e.student_name,
            student_class: e.student_class,
            board: e.board,
            subjects: e.subjects,
            area: e.area,
            phone: e.phone,
            preferred_time: e.preferred_time,
        }
    }
}
