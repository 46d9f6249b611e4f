// src/candidates/validators.rs

use super::models::CandidateForm;
use crate::common::{ValidationResult, Validator};

pub struct SubmissionValidator;

impl Validator<CandidateForm> for SubmissionValidator {
    fn validate(&self, data: &CandidateForm) -> ValidationResult {
        let mut result = ValidationResult::new();

        if data.name.trim().is_empty() {
            result.add_error("name", "Name is required");
        }

        // email, phone, position and linkedinProfile are accepted free-form

        result
    }
}
