use crate::core::symbol::Symbol;
use crate::utils::error::{GuideError, Result};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.is_empty() {
        return Err(GuideError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty".to_string(),
        });
    }
    Ok(())
}

pub fn validate_single_word(field_name: &str, value: &str) -> Result<()> {
    if value.is_empty() || !value.chars().all(|c| c.is_ascii_alphabetic()) {
        return Err(GuideError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Must be a single word of ASCII letters".to_string(),
        });
    }
    Ok(())
}

pub fn validate_single_symbol(field_name: &str, value: &str) -> Result<Symbol> {
    Symbol::from_token(value).ok_or_else(|| GuideError::InvalidConfigValueError {
        field: field_name.to_string(),
        value: value.to_string(),
        reason: "Must be exactly one of I, V, X, L, C, D, M".to_string(),
    })
}

pub fn validate_unit_price(field_name: &str, value: f64) -> Result<()> {
    if !value.is_finite() || value < 0.0 {
        return Err(GuideError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Price must be a finite, non-negative number".to_string(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_single_word() {
        assert!(validate_single_word("aliases", "glob").is_ok());
        assert!(validate_single_word("aliases", "").is_err());
        assert!(validate_single_word("aliases", "two words").is_err());
        assert!(validate_single_word("aliases", "glob1").is_err());
    }

    #[test]
    fn test_validate_single_symbol() {
        assert_eq!(validate_single_symbol("aliases.glob", "x").unwrap(), Symbol::X);
        assert!(validate_single_symbol("aliases.glob", "IV").is_err());
        assert!(validate_single_symbol("aliases.glob", "Q").is_err());
    }

    #[test]
    fn test_validate_unit_price() {
        assert!(validate_unit_price("prices.Silver", 17.0).is_ok());
        assert!(validate_unit_price("prices.Silver", 0.0).is_ok());
        assert!(validate_unit_price("prices.Silver", -1.0).is_err());
        assert!(validate_unit_price("prices.Silver", f64::NAN).is_err());
    }
}
