use crate::utils::error::{PermsortError, Result};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_one_of(field_name: &str, value: &str, allowed: &[&str]) -> Result<()> {
    if allowed.contains(&value) {
        return Ok(());
    }
    Err(PermsortError::InvalidConfigValueError {
        field: field_name.to_string(),
        value: value.to_string(),
        reason: format!("Valid values: {}", allowed.join(", ")),
    })
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(PermsortError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

pub fn validate_range<T: PartialOrd + std::fmt::Display + Copy>(
    field_name: &str,
    value: T,
    min: T,
    max: T,
) -> Result<()> {
    if value < min || value > max {
        return Err(PermsortError::InvalidInputError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be between {} and {}", min, max),
        });
    }
    Ok(())
}

pub fn validate_digit(field_name: &str, value: u8) -> Result<()> {
    validate_range(field_name, value, 0, 9)
}

/// 驗證矩陣為方陣
pub fn validate_square<T>(field_name: &str, matrix: &[Vec<T>]) -> Result<()> {
    let size = matrix.len();
    if let Some((row, cells)) = matrix.iter().enumerate().find(|(_, r)| r.len() != size) {
        return Err(PermsortError::InvalidInputError {
            field: field_name.to_string(),
            value: format!("row {} has {} cells", row, cells.len()),
            reason: format!("Matrix must be square ({}x{})", size, size),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_one_of() {
        assert!(validate_one_of("output.format", "json", &["text", "json"]).is_ok());
        assert!(validate_one_of("output.format", "xml", &["text", "json"]).is_err());
    }

    #[test]
    fn test_validate_range() {
        assert!(validate_range("number", 39u32, 1, 39).is_ok());
        assert!(validate_range("number", 0u32, 1, 39).is_err());
        assert!(validate_range("number", 40u32, 1, 39).is_err());
    }

    #[test]
    fn test_validate_square() {
        assert!(validate_square("matrix", &[vec![1, 2], vec![3, 4]]).is_ok());
        assert!(validate_square::<i64>("matrix", &[]).is_ok());
        assert!(validate_square("matrix", &[vec![1, 2, 3], vec![4, 5, 6]]).is_err());
    }

    #[test]
    fn test_validate_non_empty_string() {
        assert!(validate_non_empty_string("logging.level", "info").is_ok());
        assert!(validate_non_empty_string("logging.level", "  ").is_err());
    }
}
