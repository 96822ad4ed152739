//! Failures of the `hcl-picker` binary and the exit status each one maps to.
//!
//! Clap reports its own argument errors with status 2 before `run`
//! starts. Everything after that surfaces as a [`CliError`]; with `--json` it
//! is printed through [`CliError::report`].

use hcl_picker_core::PickerError;
use serde_json::{json, Value};
use std::fmt;

/// Why a command failed.
#[derive(Debug)]
pub enum CliError {
    /// The picker refused the request: unknown swatch or an unusable raster size.
    Picker(PickerError),
    /// The PNG could not be written.
    Io(String),
    /// The user's text held no color, or `--params` / component arguments were malformed.
    Input(String),
    /// JSON output could not be produced.
    Serialization(String),
}

impl CliError {
    pub const PICKER: i32 = 10;
    pub const IO: i32 = 11;
    pub const INPUT: i32 = 12;
    pub const SERIALIZATION: i32 = 13;

    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Picker(_) => Self::PICKER,
            CliError::Io(_) => Self::IO,
            CliError::Input(_) => Self::INPUT,
            CliError::Serialization(_) => Self::SERIALIZATION,
        }
    }

    /// Machine-readable form: `{"error": <message>, "exit_code": <status>}`.
    pub fn report(&self) -> Value {
        json!({ "error": self.to_string(), "exit_code": self.exit_code() })
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::Picker(e) => write!(f, "{e}"),
            CliError::Io(msg) => write!(f, "cannot write snapshot: {msg}"),
            CliError::Input(msg) => f.write_str(msg),
            CliError::Serialization(msg) => write!(f, "cannot encode output: {msg}"),
        }
    }
}

/// Hex failures come from user text, so they count as input errors.
impl From<PickerError> for CliError {
    fn from(e: PickerError) -> Self {
        match e {
            PickerError::Io(msg) => CliError::Io(msg),
            PickerError::InvalidHex(_) | PickerError::NotAString(_) => {
                CliError::Input(e.to_string())
            }
            PickerError::InvalidDimensions | PickerError::UnknownSwatch(_) => CliError::Picker(e),
        }
    }
}

impl From<serde_json::Error> for CliError {
    fn from(e: serde_json::Error) -> Self {
        CliError::Serialization(e.to_string())
    }
}
