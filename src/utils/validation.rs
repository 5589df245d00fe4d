use crate::utils::error::{PowerError, Result};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

/// Narrows a signed exponent to the unsigned type the power functions take.
pub fn validate_exponent(field_name: &str, value: i64) -> Result<u32> {
    if value < 0 {
        return Err(PowerError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Exponent must be non-negative".to_string(),
        });
    }

    u32::try_from(value).map_err(|_| PowerError::InvalidConfigValueError {
        field: field_name.to_string(),
        value: value.to_string(),
        reason: format!("Exponent must be at most {}", u32::MAX),
    })
}

pub fn validate_modulus(field_name: &str, value: Option<u64>) -> Result<()> {
    match value {
        Some(0) => Err(PowerError::ZeroModulus {
            field: field_name.to_string(),
        }),
        _ => Ok(()),
    }
}

pub fn validate_one_of(field_name: &str, value: &str, allowed: &[&str]) -> Result<()> {
    if allowed.contains(&value) {
        return Ok(());
    }
    Err(PowerError::InvalidConfigValueError {
        field: field_name.to_string(),
        value: value.to_string(),
        reason: format!("Expected one of: {}", allowed.join(", ")),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_exponent() {
        assert_eq!(validate_exponent("exponent", 10).unwrap(), 10);
        assert_eq!(validate_exponent("exponent", 0).unwrap(), 0);
        assert!(validate_exponent("exponent", -1).is_err());
        assert!(validate_exponent("exponent", i64::from(u32::MAX) + 1).is_err());
    }

    #[test]
    fn test_validate_modulus() {
        assert!(validate_modulus("modulus", None).is_ok());
        assert!(validate_modulus("modulus", Some(1)).is_ok());
        assert!(matches!(
            validate_modulus("modulus", Some(0)),
            Err(PowerError::ZeroModulus { .. })
        ));
    }

    #[test]
    fn test_validate_one_of() {
        assert!(validate_one_of("output.format", "json", &["plain", "json"]).is_ok());
        assert!(validate_one_of("output.format", "xml", &["plain", "json"]).is_err());
    }
}
