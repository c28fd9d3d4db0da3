//! Error types for the RGMII PHY model
//!
//! The data path has no runtime failure modes: every transformation is total
//! per tick. All errors are configuration failures raised while the PHY is
//! being constructed (or while a board pad adapter is driven), and are
//! reported as [`ConfigError`].

// =============================================================================
// Configuration Errors
// =============================================================================

/// Configuration and construction errors
///
/// These errors occur while resolving delay taps, parsing profile names,
/// or driving board-level pads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// Requested delay needs 16 or more taps of the delay line
    DelayOutOfRange,
    /// Requested delay is negative or not a number
    NegativeDelay,
    /// Per-tap delay is not a positive number
    InvalidTapDelay,
    /// Performance mode is not `speed`, `economy` or `lowpower`
    UnknownPerfMode,
    /// Process corner is not `best`, `typ` or `worst`
    UnknownCorner,
    /// Board pad (reset or management pin) could not be driven
    GpioError,
}

impl core::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl ConfigError {
    /// Returns a human-readable description of the error
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            ConfigError::DelayOutOfRange => "delay exceeds delay line range",
            ConfigError::NegativeDelay => "delay must be a non-negative number",
            ConfigError::InvalidTapDelay => "tap delay must be a positive number",
            ConfigError::UnknownPerfMode => "unknown performance mode",
            ConfigError::UnknownCorner => "unknown process corner",
            ConfigError::GpioError => "GPIO configuration error",
        }
    }
}

/// Result type alias for configuration operations
pub type ConfigResult<T> = core::result::Result<T, ConfigError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    extern crate std;
    use std::format;

    use super::*;

    #[test]
    fn config_error_as_str_non_empty() {
        let variants = [
            ConfigError::DelayOutOfRange,
            ConfigError::NegativeDelay,
            ConfigError::InvalidTapDelay,
            ConfigError::UnknownPerfMode,
            ConfigError::UnknownCorner,
            ConfigError::GpioError,
        ];

        for variant in variants {
            let s = variant.as_str();
            assert!(!s.is_empty(), "ConfigError::{:?} has empty string", variant);
        }
    }

    #[test]
    fn config_error_display() {
        let err = ConfigError::UnknownPerfMode;
        let display = format!("{}", err);
        assert_eq!(display, "unknown performance mode");
    }

    #[test]
    fn config_error_equality() {
        assert_eq!(ConfigError::DelayOutOfRange, ConfigError::DelayOutOfRange);
        assert_ne!(ConfigError::DelayOutOfRange, ConfigError::NegativeDelay);
    }

    #[test]
    fn config_result_type_works() {
        fn test_fn() -> ConfigResult<u8> {
            Err(ConfigError::UnknownCorner)
        }

        assert_eq!(test_fn(), Err(ConfigError::UnknownCorner));
    }
}
