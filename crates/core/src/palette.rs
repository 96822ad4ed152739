//! The aggregate [`Color`]: one color held in every representation the picker shows.
//!
//! A `Color` is built once from a single source representation and derives
//! the other three along a fixed chain. It is never mutated; selecting a new
//! color means building a new `Color`.

use serde::Serialize;
use serde_json::Value;

use crate::color::{hex_to_rgb, hex_value_to_rgb, hsv_to_rgb, rgb_to_hex, rgb_to_hsv};
use crate::error::PickerError;
use crate::hcl::{hcl_to_hsv, hsv_to_hcl};
use crate::space::{Hcl, Hsv, Rgb};

/// A color in RGB, HSV, HCL, and hex at once.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Color {
    rgb: Rgb,
    hsv: Hsv,
    hcl: Hcl,
    hex: String,
}

impl Color {
    /// Derivation chain: RGB → HSV → HCL, RGB → hex.
    pub fn from_rgb(rgb: Rgb) -> Self {
        let hsv = rgb_to_hsv(rgb);
        Self {
            rgb,
            hsv,
            hcl: hsv_to_hcl(hsv),
            hex: rgb_to_hex(rgb),
        }
    }

    /// Derivation chain: HSV → RGB → hex, HSV → HCL.
    pub fn from_hsv(hsv: Hsv) -> Self {
        let rgb = hsv_to_rgb(hsv);
        Self {
            rgb,
            hsv,
            hcl: hsv_to_hcl(hsv),
            hex: rgb_to_hex(rgb),
        }
    }

    /// Derivation chain: HCL → HSV → RGB → hex.
    pub fn from_hcl(hcl: Hcl) -> Self {
        let hsv = hcl_to_hsv(hcl);
        let rgb = hsv_to_rgb(hsv);
        Self {
            rgb,
            hsv,
            hcl,
            hex: rgb_to_hex(rgb),
        }
    }

    /// Parses `hex` (see [`hex_to_rgb`]) and derives the rest from RGB.
    ///
    /// The stored hex is the canonical six-digit form, so `"a1f"` yields `"AA11FF"`.
    pub fn from_hex(hex: &str) -> Result<Self, PickerError> {
        hex_to_rgb(hex).map(Self::from_rgb)
    }

    /// Like [`Color::from_hex`], for hex held in a loose JSON value.
    pub fn from_hex_value(hex: &Value) -> Result<Self, PickerError> {
        hex_value_to_rgb(hex).map(Self::from_rgb)
    }

    pub fn rgb(&self) -> Rgb {
        self.rgb
    }

    pub fn hsv(&self) -> Hsv {
        self.hsv
    }

    pub fn hcl(&self) -> Hcl {
        self.hcl
    }

    /// Six uppercase hex digits, no leading `#`.
    pub fn hex(&self) -> &str {
        &self.hex
    }
}

impl Default for Color {
    /// Black.
    fn default() -> Self {
        Self::from_rgb(Rgb::new(0.0, 0.0, 0.0))
    }
}
