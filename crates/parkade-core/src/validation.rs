//! # Validation Module
//!
//! Parsing and checking of operator input.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Console (menu prompts)                                       │
//! │  └── Reads one line per prompt                                         │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: THIS MODULE                                                  │
//! │  ├── Plate must be one non-empty token (file fields are spaces)        │
//! │  ├── Times must have the shape H:M                                     │
//! │  └── Ids must be numbers                                               │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Record file codec (parkade-store)                            │
//! │  └── Rejects lines it cannot decode                                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Values are otherwise taken as given: a time of "25:99" passes.

use crate::error::ValidationError;
use crate::types::ClockTime;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Validates a license plate and returns it trimmed.
///
/// ## Rules
/// - Must not be empty
/// - Must not contain whitespace (the record file is space-delimited)
///
/// ## Example
/// ```rust
/// use parkade_core::validation::validate_license_plate;
///
/// assert_eq!(validate_license_plate("  KA01AB1234 ").unwrap(), "KA01AB1234");
/// assert!(validate_license_plate("").is_err());
/// assert!(validate_license_plate("KA 01").is_err());
/// ```
pub fn validate_license_plate(plate: &str) -> ValidationResult<String> {
    let plate = plate.trim();

    if plate.is_empty() {
        return Err(ValidationError::Required {
            field: "license plate".to_string(),
        });
    }

    if plate.chars().any(char::is_whitespace) {
        return Err(ValidationError::InvalidFormat {
            field: "license plate".to_string(),
            reason: "must not contain spaces".to_string(),
        });
    }

    Ok(plate.to_string())
}

/// Parses an "HH:MM" time typed at a prompt.
pub fn parse_clock_time(input: &str, field: &str) -> ValidationResult<ClockTime> {
    let input = input.trim();
    if input.is_empty() {
        return Err(ValidationError::Required {
            field: field.to_string(),
        });
    }

    input.parse().map_err(|_| ValidationError::InvalidFormat {
        field: field.to_string(),
        reason: format!("expected HH:MM, got '{}'", input),
    })
}

/// Parses a record id typed at a prompt.
///
/// Range checks are left to the caller, which knows the lot's capacity.
pub fn parse_record_id(input: &str) -> ValidationResult<u32> {
    let input = input.trim();
    if input.is_empty() {
        return Err(ValidationError::Required {
            field: "record id".to_string(),
        });
    }

    input.parse().map_err(|_| ValidationError::InvalidFormat {
        field: "record id".to_string(),
        reason: format!("'{}' is not a number", input),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_license_plate() {
        assert!(validate_license_plate("MH12-XY-99").is_ok());
        assert!(matches!(
            validate_license_plate("   "),
            Err(ValidationError::Required { .. })
        ));
        assert!(matches!(
            validate_license_plate("AB\tCD"),
            Err(ValidationError::InvalidFormat { .. })
        ));
    }

    #[test]
    fn test_parse_clock_time() {
        let t = parse_clock_time(" 08:15\n", "entry time").unwrap();
        assert_eq!(t.total_minutes(), 495);

        let err = parse_clock_time("8.15", "entry time").unwrap_err();
        assert!(err.to_string().starts_with("entry time has invalid format"));
        assert!(matches!(
            parse_clock_time("", "exit time"),
            Err(ValidationError::Required { .. })
        ));
    }

    #[test]
    fn test_parse_record_id() {
        assert_eq!(parse_record_id("7\n").unwrap(), 7);
        assert!(parse_record_id("seven").is_err());
        assert!(parse_record_id("-1").is_err());
        assert!(parse_record_id("").is_err());
    }
}
