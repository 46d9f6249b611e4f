// src/candidates/tests/validators_tests.rs

#[cfg(test)]
mod tests {
    use crate::candidates::models::CandidateForm;
    use crate::candidates::validators::SubmissionValidator;
    use crate::common::Validator;

    fn valid_form() -> CandidateForm {
        CandidateForm {
            name: "Ana".to_string(),
            email: "ana@example.com".to_string(),
            phone: "555-0100".to_string(),
            position: "Backend".to_string(),
            linkedin_profile: None,
        }
    }

    #[test]
    fn test_valid_submission() {
        let result = SubmissionValidator.validate(&valid_form());
        assert!(result.is_valid);
        assert_eq!(result.errors.len(), 0);
    }

    #[test]
    fn test_missing_name_rejected() {
        let mut form = valid_form();
        form.name = String::new();

        let result = SubmissionValidator.validate(&form);
        assert!(!result.is_valid);
        assert_eq!(result.errors[0].field, "name");
    }

    #[test]
    fn test_whitespace_name_rejected() {
        let mut form = valid_form();
        form.name = "   ".to_string();

        let result = SubmissionValidator.validate(&form);
        assert!(!result.is_valid);
    }

    #[test]
    fn test_free_form_fields_not_validated() {
        let mut form = valid_form();
        form.email = "not-an-email".to_string();
        form.phone = String::new();
        form.position = String::new();

        let result = SubmissionValidator.validate(&form);
        assert!(result.is_valid);
    }
}
