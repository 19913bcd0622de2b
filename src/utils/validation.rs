use crate::utils::error::{BeerStockError, Result};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

fn invalid(field_name: &str, value: impl ToString, reason: String) -> BeerStockError {
    BeerStockError::Validation {
        field: field_name.to_string(),
        value: value.to_string(),
        reason,
    }
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(invalid(
            field_name,
            value,
            "Value cannot be empty or whitespace-only".to_string(),
        ));
    }
    Ok(())
}

/// Length is counted in characters, not bytes.
pub fn validate_max_length(field_name: &str, value: &str, max_len: usize) -> Result<()> {
    let len = value.chars().count();
    if len > max_len {
        return Err(invalid(
            field_name,
            value,
            format!("Value must be at most {} characters (got {})", max_len, len),
        ));
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
        return Err(invalid(
            field_name,
            value,
            format!("Value must be between {} and {}", min, max),
        ));
    }
    Ok(())
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(invalid(field_name, path, "Path cannot be empty".to_string()));
    }

    if path.contains('\0') {
        return Err(invalid(field_name, path, "Path contains null bytes".to_string()));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_non_empty_string() {
        assert!(validate_non_empty_string("name", "Brahma").is_ok());
        assert!(validate_non_empty_string("name", "").is_err());
        assert!(validate_non_empty_string("name", "   ").is_err());
    }

    #[test]
    fn test_validate_max_length_counts_chars() {
        assert!(validate_max_length("name", "Köstritzer", 10).is_ok());
        assert!(validate_max_length("name", "Köstritzer!", 10).is_err());
    }

    #[test]
    fn test_validate_range() {
        assert!(validate_range("max", 50, 1, 500).is_ok());
        assert!(validate_range("max", 0, 1, 500).is_err());
        assert!(validate_range("max", 501, 1, 500).is_err());
    }

    #[test]
    fn test_validate_path() {
        assert!(validate_path("store.data_file", "beers.json").is_ok());
        assert!(validate_path("store.data_file", "").is_err());
        assert!(validate_path("store.data_file", "a\0b").is_err());
    }

    #[test]
    fn test_error_carries_field() {
        match validate_range("quantity", 101u32, 0, 100) {
            Err(BeerStockError::Validation { field, value, .. }) => {
                assert_eq!(field, "quantity");
                assert_eq!(value, "101");
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }
}
