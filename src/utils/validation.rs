use crate::errors::{AppError, Result};
use regex::Regex;

pub struct Validator;

impl Validator {
    /// Strips every character outside ASCII alphanumerics, dot, and hyphen
    /// from a client-supplied filename. The result may be empty; callers
    /// prefix a timestamp so the stored name is still usable.
    pub fn sanitize_filename(name: &str) -> String {
        match Regex::new(r"[^a-zA-Z0-9.-]") {
            Ok(re) => re.replace_all(name, "").into_owned(),
            // The pattern is a literal; fall back to a manual filter rather
            // than failing the upload.
            Err(_) => name
                .chars()
                .filter(|c| c.is_ascii_alphanumeric() || *c == '.' || *c == '-')
                .collect(),
        }
    }

    /// Record ids must be non-empty when a caller addresses a record by id.
    pub fn validate_id(id: &str) -> Result<()> {
        if id.trim().is_empty() {
            return Err(AppError::ValidationError("ID required".to_string()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sanitize_strips_spaces_and_punctuation() {
        assert_eq!(Validator::sanitize_filename("a b?.png"), "ab.png");
        assert_eq!(Validator::sanitize_filename("../../etc/passwd"), "....etcpasswd");
        assert_eq!(Validator::sanitize_filename("photo-1.final.JPG"), "photo-1.final.JPG");
    }

    #[test]
    fn sanitize_can_yield_empty() {
        assert_eq!(Validator::sanitize_filename("日本語 ファイル"), "");
    }

    #[test]
    fn empty_id_is_rejected() {
        assert!(Validator::validate_id("").is_err());
        assert!(Validator::validate_id("   ").is_err());
        assert!(Validator::validate_id("1754000000000").is_ok());
    }
}
