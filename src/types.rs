//! Core types for velo

use serde::Deserialize;

use crate::error::{Error, Result};

/// Minimum accepted wheel size in inches.
pub const MIN_WHEEL_SIZE: i32 = 10;

/// A bike record as submitted to the create endpoint.
///
/// Bikes are validated on input and echoed back on output; nothing is
/// persisted in the current scope.
#[derive(Debug, Clone, Deserialize)]
pub struct Bike {
    pub name: String,
    pub wheel_size: i32,
    #[serde(default)]
    pub color: Option<String>,
}

impl Bike {
    /// Check field constraints: non-empty name, wheel size at least
    /// [`MIN_WHEEL_SIZE`]. Color is unconstrained.
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(Error::validation("name must not be empty"));
        }

        if self.wheel_size < MIN_WHEEL_SIZE {
            return Err(Error::validation(format!(
                "wheel_size must be at least {}",
                MIN_WHEEL_SIZE
            )));
        }

        Ok(())
    }

    /// Color as echoed on the wire: an empty string when not specified.
    pub fn color_or_default(&self) -> &str {
        self.color.as_deref().unwrap_or("")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bike(name: &str, wheel_size: i32, color: Option<&str>) -> Bike {
        Bike {
            name: name.to_string(),
            wheel_size,
            color: color.map(str::to_string),
        }
    }

    #[test]
    fn test_valid_bike_passes() {
        assert!(bike("Trail", 29, None).validate().is_ok());
        assert!(bike("Trail", 10, Some("red")).validate().is_ok());
    }

    #[test]
    fn test_empty_name_rejected() {
        assert!(bike("", 29, None).validate().is_err());
        // Whitespace-only counts as empty
        assert!(bike("   ", 29, None).validate().is_err());
    }

    #[test]
    fn test_small_wheel_rejected() {
        let err = bike("Trail", 5, None).validate().unwrap_err();
        assert!(err.to_string().contains("wheel_size"));
    }

    #[test]
    fn test_color_defaults_to_empty() {
        assert_eq!(bike("Trail", 29, None).color_or_default(), "");
        assert_eq!(bike("Trail", 29, Some("red")).color_or_default(), "red");
    }
}
