use crate::errors::ModelError;

/// Reject blank required fields before anything reaches the database.
pub fn require(field: &str, value: &str) -> Result<(), ModelError> {
    if value.trim().is_empty() {
        return Err(ModelError::Validation(format!("{} is required", field)));
    }
    Ok(())
}

pub fn validate_email(email: &str) -> Result<(), ModelError> {
    let ok = email.len() >= 5
        && email.contains('@')
        && !email.starts_with('@')
        && !email.ends_with('@')
        && !email.contains(char::is_whitespace);
    if !ok {
        return Err(ModelError::Validation(format!("invalid email: {}", email)));
    }
    Ok(())
}

/// Ratings are a closed 1..=5 scale.
pub fn validate_rating(rating: i32) -> Result<(), ModelError> {
    if !(1..=5).contains(&rating) {
        return Err(ModelError::Validation(format!(
            "rating must be between 1 and 5, got {}",
            rating
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn require_rejects_blank() {
        assert!(require("title", "  ").is_err());
        assert!(require("title", "Golden hour").is_ok());
    }

    #[test]
    fn email_shape_checked() {
        assert!(validate_email("kate@example.com").is_ok());
        assert!(validate_email("no-at-sign").is_err());
        assert!(validate_email("spaced @example.com").is_err());
        assert!(validate_email("@example.com").is_err());
    }

    #[test]
    fn rating_bounds_enforced() {
        for r in 1..=5 {
            assert!(validate_rating(r).is_ok());
        }
        assert!(validate_rating(0).is_err());
        assert!(validate_rating(6).is_err());
        assert!(validate_rating(-3).is_err());
    }
}
