//! Error types for the hcl-picker core.
//!
//! The conversion functions themselves never fail on numeric input: bad
//! components are clamped or defaulted instead. Errors exist only where a
//! caller genuinely has nothing to work with, such as a hex string that holds
//! no color or a zero-sized widget raster.

use thiserror::Error;

/// Errors produced by picker operations.
#[derive(Debug, Error)]
pub enum PickerError {
    /// The input contained neither three 2-digit hex runs nor a 3-digit shorthand.
    #[error("invalid hex color: {0:?}")]
    InvalidHex(String),

    /// Hex input arrived as a loose value that was not a string.
    #[error("hex color must be a string, got {0}")]
    NotAString(String),

    /// Width or height was zero when creating a widget raster.
    #[error("invalid dimensions: width and height must be non-zero")]
    InvalidDimensions,

    /// A requested widget name was not found in the render registry.
    #[error("unknown swatch: {0}")]
    UnknownSwatch(String),

    /// Writing a snapshot failed.
    #[error("I/O error: {0}")]
    Io(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_hex_includes_input() {
        let err = PickerError::InvalidHex("not_a_hex".into());
        let msg = format!("{err}");
        assert!(msg.contains("not_a_hex"), "missing input in: {msg}");
    }

    #[test]
    fn not_a_string_includes_type_name() {
        let err = PickerError::NotAString("number".into());
        let msg = format!("{err}");
        assert!(msg.contains("number"), "missing type name in: {msg}");
    }

    #[test]
    fn invalid_dimensions_displays_readable_message() {
        let msg = format!("{}", PickerError::InvalidDimensions);
        assert!(
            msg.contains("width") && msg.contains("height"),
            "expected message mentioning width and height, got: {msg}"
        );
    }

    #[test]
    fn unknown_swatch_includes_name() {
        let msg = format!("{}", PickerError::UnknownSwatch("wheel".into()));
        assert!(msg.contains("wheel"), "missing name in: {msg}");
    }

    #[test]
    fn picker_error_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<PickerError>();
    }

    #[test]
    fn picker_error_implements_std_error() {
        fn assert_std_error<T: std::error::Error>() {}
        assert_std_error::<PickerError>();
    }
}
