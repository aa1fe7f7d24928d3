//! Client-side form validation
//!
//! Shallow checks applied before a request leaves the client: required-field
//! presence, email shape, password strength. The backend remains the
//! authority; these exist so obviously bad input never costs a round trip.

use crate::utils::errors::{HubDeskError, Result};

/// Check that a required text field is present and non-blank
pub fn validate_required(field: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(HubDeskError::InvalidInput(format!("{} is required", field)));
    }
    Ok(())
}

/// Validate email format
pub fn validate_email(email: &str) -> Result<()> {
    let regex = regex::Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$")
        .map_err(|_| HubDeskError::Config("Invalid email regex pattern".to_string()))?;

    if !regex.is_match(email) {
        return Err(HubDeskError::InvalidInput(format!("Invalid email address: {}", email)));
    }
    Ok(())
}

/// Validate password strength (minimum 8 characters, at least one letter and one digit)
pub fn validate_password_strength(password: &str) -> Result<()> {
    if password.len() < 8 {
        return Err(HubDeskError::InvalidInput(
            "Password must be at least 8 characters".to_string()
        ));
    }

    let has_letter = password.chars().any(|c| c.is_ascii_alphabetic());
    let has_digit = password.chars().any(|c| c.is_ascii_digit());

    if !has_letter || !has_digit {
        return Err(HubDeskError::InvalidInput(
            "Password must contain at least one letter and one digit".to_string()
        ));
    }
    Ok(())
}

/// Validate a roadmap year
pub fn validate_year(year: i32) -> Result<()> {
    if !(2000..=2100).contains(&year) {
        return Err(HubDeskError::InvalidInput(format!("Year out of range: {}", year)));
    }
    Ok(())
}

/// Validate a roadmap month (1-12)
pub fn validate_month(month: u8) -> Result<()> {
    if !(1..=12).contains(&month) {
        return Err(HubDeskError::InvalidInput(format!("Month out of range: {}", month)));
    }
    Ok(())
}

/// Validate a stock count adjustment target
pub fn validate_stock_count(count: i64) -> Result<()> {
    if count < 0 {
        return Err(HubDeskError::InvalidInput(
            "Stock count cannot be negative".to_string()
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required_fields() {
        assert!(validate_required("title", "Demo Day").is_ok());
        assert!(validate_required("title", "   ").is_err());
        assert!(validate_required("title", "").is_err());
    }

    #[test]
    fn test_email_validation() {
        assert!(validate_email("founder@startup.io").is_ok());
        assert!(validate_email("no-at-sign").is_err());
        assert!(validate_email("two@@signs.io").is_err());
        assert!(validate_email("trailing@dot.").is_err());
    }

    #[test]
    fn test_password_strength() {
        assert!(validate_password_strength("abc123xyz").is_ok());
        assert!(validate_password_strength("short1").is_err());
        assert!(validate_password_strength("lettersonly").is_err());
        assert!(validate_password_strength("12345678").is_err());
    }

    #[test]
    fn test_roadmap_ranges() {
        assert!(validate_year(2024).is_ok());
        assert!(validate_year(1999).is_err());
        assert!(validate_month(12).is_ok());
        assert!(validate_month(0).is_err());
        assert!(validate_month(13).is_err());
    }

    #[test]
    fn test_stock_count() {
        assert!(validate_stock_count(0).is_ok());
        assert!(validate_stock_count(25).is_ok());
        assert!(validate_stock_count(-1).is_err());
    }
}
