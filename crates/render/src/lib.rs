#![deny(unsafe_code)]
//! Swatch registry: maps widget names to renderers and provides CPU-side
//! snapshot rendering.
//!
//! This crate sits between `hcl-picker-core` (color math and widget geometry)
//! and the front ends. The CLI depends on it to avoid duplicating dispatch
//! logic.

pub mod pixel;

#[cfg(feature = "png")]
pub mod snapshot;

use hcl_picker_core::params::{param_f64, param_string};
use hcl_picker_core::picker::{rgba_len, SliderGeometry, SquareGeometry};
use hcl_picker_core::{Color, PickerError};
use serde_json::{json, Value};

/// All available swatch names.
const SWATCH_NAMES: &[&str] = &["square", "slider", "fill"];

/// Enumeration of the picker widgets that can be rendered.
///
/// Use [`SwatchKind::from_name`] for string-based construction (CLI).
#[derive(Debug, Clone, PartialEq)]
pub enum SwatchKind {
    /// Hue/luminance square at a fixed chroma.
    Square { chroma: f64 },
    /// Chroma slider at a fixed hue and luminance.
    Slider { hue: f64, luminance: f64 },
    /// Solid block of the selected color.
    Fill(Color),
}

impl SwatchKind {
    /// Constructs a swatch by name, reading its parameters from `params`.
    ///
    /// Missing or mistyped parameters fall back to their defaults. Returns
    /// `PickerError::UnknownSwatch` if the name is not recognized, or the
    /// hex error if a `fill` swatch's `hex` holds no color.
    pub fn from_name(name: &str, params: &Value) -> Result<Self, PickerError> {
        let swatch = match name {
            "square" => SwatchKind::Square {
                chroma: param_f64(params, "chroma", 1.0).clamp(0.0, 1.0),
            },
            "slider" => SwatchKind::Slider {
                hue: param_f64(params, "hue", 0.0),
                luminance: param_f64(params, "luminance", 0.5).clamp(0.0, 1.0),
            },
            "fill" => SwatchKind::Fill(Color::from_hex(&param_string(params, "hex", "000000"))?),
            _ => return Err(PickerError::UnknownSwatch(name.to_string())),
        };
        tracing::debug!(?swatch, "constructed swatch");
        Ok(swatch)
    }

    /// Returns a slice of all recognized swatch names.
    pub fn list_swatches() -> &'static [&'static str] {
        SWATCH_NAMES
    }

    /// The name this swatch is registered under.
    pub fn name(&self) -> &'static str {
        match self {
            SwatchKind::Square { .. } => "square",
            SwatchKind::Slider { .. } => "slider",
            SwatchKind::Fill(_) => "fill",
        }
    }

    /// Current parameters as a JSON object, in the shape `from_name` accepts.
    pub fn params(&self) -> Value {
        match self {
            SwatchKind::Square { chroma } => json!({ "chroma": chroma }),
            SwatchKind::Slider { hue, luminance } => json!({ "hue": hue, "luminance": luminance }),
            SwatchKind::Fill(color) => json!({ "hex": color.hex() }),
        }
    }

    /// Renders the swatch as an RGBA8 buffer of `width * height` pixels.
    ///
    /// Returns `PickerError::InvalidDimensions` if either side is zero, a side
    /// exceeds `u32::MAX`, or the buffer size overflows. The check runs before
    /// anything is allocated.
    pub fn render(&self, width: usize, height: usize) -> Result<Vec<u8>, PickerError> {
        let len = rgba_len(width, height)?;
        tracing::debug!(swatch = self.name(), width, height, bytes = len, "rendering");
        let buf = match self {
            SwatchKind::Square { chroma } => {
                pixel::square_to_rgba(&SquareGeometry::new(width, height)?, *chroma)
            }
            SwatchKind::Slider { hue, luminance } => {
                pixel::slider_to_rgba(&SliderGeometry::new(width)?, height, *hue, *luminance)?
            }
            SwatchKind::Fill(color) => pixel::fill_rgba(width, height, color)?,
        };
        Ok(buf)
    }
}
