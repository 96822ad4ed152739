#![deny(unsafe_code)]
//! Core types for the HCL color picker.
//!
//! Provides the three color spaces (`Rgb`, `Hsv`, `Hcl`), conversions between
//! them and hex, the luma-weighted HCL model, the aggregate `Color`, the
//! picker's selection state and widget geometry, and loose-input parameter
//! helpers.

pub mod color;
pub mod error;
pub mod hcl;
pub mod palette;
pub mod params;
pub mod picker;
pub mod space;

pub use color::{hex_to_rgb, hsv_to_rgb, rgb_to_hex, rgb_to_hsv};
pub use error::PickerError;
pub use hcl::{
    chroma, chroma_boundary, hcl_to_hsv, hcl_to_rgb, hsv_to_hcl, luminance_cutoff,
    luminance_from_hsv, luminance_from_rgb, rgb_to_hcl, saturation, value,
};
pub use palette::Color;
pub use picker::{rgba_len, DragTarget, PickerState, Readout, SliderGeometry, SquareGeometry};
pub use space::{Hcl, Hsv, Rgb};
