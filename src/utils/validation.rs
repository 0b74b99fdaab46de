use crate::utils::error::{BoothError, Result};
use regex::Regex;
use std::sync::OnceLock;
use url::Url;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

fn email_regex() -> &'static Regex {
    static EMAIL: OnceLock<Regex> = OnceLock::new();
    EMAIL.get_or_init(|| {
        Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is a valid regex")
    })
}

pub fn validate_url(field_name: &str, url_str: &str) -> Result<()> {
    if url_str.is_empty() {
        return Err(BoothError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: "URL cannot be empty".to_string(),
        });
    }

    match Url::parse(url_str) {
        Ok(url) => match url.scheme() {
            "http" | "https" => Ok(()),
            scheme => Err(BoothError::InvalidConfigValueError {
                field: field_name.to_string(),
                value: url_str.to_string(),
                reason: format!("Unsupported URL scheme: {}", scheme),
            }),
        },
        Err(e) => Err(BoothError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: format!("Invalid URL format: {}", e),
        }),
    }
}

pub fn validate_email(field_name: &str, value: &str) -> Result<()> {
    if !email_regex().is_match(value.trim()) {
        return Err(BoothError::ValidationError {
            field: field_name.to_string(),
            message: format!("'{}' is not a valid email address", value),
        });
    }
    Ok(())
}

/// An address that can sit in the path of a `mailto:` link without encoding.
pub fn validate_mailto_recipient(field_name: &str, value: &str) -> Result<()> {
    validate_email(field_name, value)?;
    if let Some(c) = value.chars().find(|c| matches!(c, '?' | '&' | '#' | '%')) {
        return Err(BoothError::ValidationError {
            field: field_name.to_string(),
            message: format!("'{}' contains '{}', which breaks mailto links", value, c),
        });
    }
    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(BoothError::ValidationError {
            field: field_name.to_string(),
            message: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

pub fn validate_positive_number(field_name: &str, value: u64, min_value: u64) -> Result<()> {
    if value < min_value {
        return Err(BoothError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be at least {}", min_value),
        });
    }
    Ok(())
}

/// Range check for coordinates. NaN is rejected since it fails both comparisons.
pub fn validate_coordinate(field_name: &str, value: f64, limit: f64) -> Result<()> {
    if !(-limit..=limit).contains(&value) {
        return Err(BoothError::InvalidCoordinateRange {
            field: field_name.to_string(),
            value,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_url() {
        assert!(validate_url("dispatch.endpoint", "https://formspree.io/f/abc").is_ok());
        assert!(validate_url("dispatch.endpoint", "http://localhost:8080/f").is_ok());
        assert!(validate_url("dispatch.endpoint", "").is_err());
        assert!(validate_url("dispatch.endpoint", "invalid-url").is_err());
        assert!(validate_url("dispatch.endpoint", "ftp://example.com").is_err());
    }

    #[test]
    fn test_validate_email() {
        assert!(validate_email("email", "contact@votrephotobooth.fr").is_ok());
        assert!(validate_email("email", " jean.dupont@example.com ").is_ok());
        assert!(validate_email("email", "jean.dupont").is_err());
        assert!(validate_email("email", "a b@example.com").is_err());
        assert!(validate_email("email", "").is_err());
    }

    #[test]
    fn test_validate_mailto_recipient() {
        assert!(validate_mailto_recipient("recipient", "contact@votrephotobooth.fr").is_ok());
        assert!(validate_mailto_recipient("recipient", "sales?cc=x@shop.fr").is_err());
        assert!(validate_mailto_recipient("recipient", "a&b@shop.fr").is_err());
        assert!(validate_mailto_recipient("recipient", "ab@shop.fr#top").is_err());
    }

    #[test]
    fn test_validate_coordinate() {
        assert!(validate_coordinate("latitude", 90.0, 90.0).is_ok());
        assert!(validate_coordinate("latitude", -90.0, 90.0).is_ok());
        assert!(validate_coordinate("latitude", 90.5, 90.0).is_err());
        assert!(validate_coordinate("longitude", f64::NAN, 180.0).is_err());
    }

    #[test]
    fn test_validate_non_empty_string() {
        assert!(validate_non_empty_string("name", "Camille").is_ok());
        assert!(validate_non_empty_string("name", "   ").is_err());
    }
}
