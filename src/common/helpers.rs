// Helper functions for safe logging

/// Masks email addresses for safe logging
/// Prevents sensitive data exposure while preserving debugging utility
///
/// # Example
/// ```
/// let masked = safe_email_log("user@example.com");
/// // Returns: "u***@example.com"
/// ```
pub fn safe_email_log(email: &str) -> String {
    if email.len() > 3 {
        let parts: Vec<&str> = email.split('@').collect();
        if parts.len() == 2 {
            // first character, not first byte: the local part is free-form
            // UTF-8 and may start with a multi-byte character
            match parts[0].chars().next() {
                Some(first) => format!("{}***@{}", first, parts[1]),
                None => format!("***@{}", parts[1]),
            }
        } else {
            "***@***.***".to_string()
        }
    } else {
        "***@***.***".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_masks_local_part() {
        assert_eq!(safe_email_log("ana@example.com"), "a***@example.com");
    }

    #[test]
    fn test_multibyte_first_character() {
        assert_eq!(safe_email_log("ñana@example.com"), "ñ***@example.com");
        assert_eq!(safe_email_log("日本@example.com"), "日***@example.com");
    }

    #[test]
    fn test_empty_local_part() {
        assert_eq!(safe_email_log("@example.com"), "***@example.com");
    }

    #[test]
    fn test_garbage_input_fully_masked() {
        assert_eq!(safe_email_log("no-at-sign"), "***@***.***");
        assert_eq!(safe_email_log("a@"), "***@***.***");
        assert_eq!(safe_email_log(""), "***@***.***");
    }
}
