//! RGB ↔ HSV and RGB ↔ hex conversions.
//!
//! All conversions are pure functions over the value types in
//! [`crate::space`]. Numeric conversions cannot fail; only hex parsing can,
//! and it reports failure as a [`PickerError`] instead of panicking.

use serde_json::Value;

use crate::error::PickerError;
use crate::space::{hue_ramp, sector_roles, Hsv, Rgb, CHANNEL_MAX};

/// Converts RGB to HSV with the max/min/delta algorithm.
///
/// When two channels tie for the maximum, red wins over green and green over
/// blue.
pub fn rgb_to_hsv(rgb: Rgb) -> Hsv {
    let [r, g, b] = rgb.to_array().map(|c| c / CHANNEL_MAX);
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let delta = max - min;

    let h = if delta == 0.0 {
        0.0
    } else if max == r {
        60.0 * ((g - b) / delta).rem_euclid(6.0)
    } else if max == g {
        60.0 * ((b - r) / delta + 2.0)
    } else {
        60.0 * ((r - g) / delta + 4.0)
    };
    let s = if max == 0.0 { 0.0 } else { delta / max };

    Hsv::new(h, s, max)
}

/// Converts HSV to RGB with the six-sector algorithm.
pub fn hsv_to_rgb(hsv: Hsv) -> Rgb {
    let chroma = hsv.v() * hsv.s();
    let x = chroma * hue_ramp(hsv.h());
    let m = hsv.v() - chroma;

    let [dominant, secondary, _] = sector_roles(hsv.h());
    let mut channels = [m; 3];
    channels[dominant] += chroma;
    channels[secondary] += x;

    let [r, g, b] = channels.map(|c| c * CHANNEL_MAX);
    Rgb::new(r, g, b)
}

/// Formats RGB as six uppercase hex digits, e.g. `"7F7F7F"`.
///
/// Channels are rounded to the nearest integer first.
pub fn rgb_to_hex(rgb: Rgb) -> String {
    let [r, g, b] = rgb.to_bytes();
    format!("{r:02X}{g:02X}{b:02X}")
}

/// Parses the first color found in `hex`.
///
/// The input is scanned for runs of hex digits rather than matched against a
/// strict format, so surrounding noise is ignored: `"hello#7F,7F 7F.world"` is
/// grey. The first three non-overlapping 2-digit runs give red, green, and
/// blue. Failing that, the first three consecutive digits are read as
/// shorthand, so `"a1f"` means `AA11FF`.
///
/// Returns `PickerError::InvalidHex` if neither form occurs anywhere.
pub fn hex_to_rgb(hex: &str) -> Result<Rgb, PickerError> {
    let bytes = hex.as_bytes();
    let pairs = leading_pairs(bytes);
    let [r, g, b] = match pairs[..] {
        [r, g, b] => [r, g, b],
        _ => shorthand(bytes).ok_or_else(|| PickerError::InvalidHex(hex.to_owned()))?,
    };
    Ok(Rgb::new(f64::from(r), f64::from(g), f64::from(b)))
}

/// Parses a hex color held in a loose JSON value.
///
/// Returns `PickerError::NotAString` for anything but a JSON string.
pub fn hex_value_to_rgb(value: &Value) -> Result<Rgb, PickerError> {
    match value {
        Value::String(s) => hex_to_rgb(s),
        other => Err(PickerError::NotAString(json_type_name(other).to_owned())),
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

fn nibble(b: u8) -> Option<u8> {
    char::from(b).to_digit(16).map(|d| d as u8)
}

/// Collects up to three bytes from non-overlapping 2-digit runs, scanning
/// left to right.
fn leading_pairs(bytes: &[u8]) -> Vec<u8> {
    let mut pairs = Vec::with_capacity(3);
    let mut i = 0;
    while i + 1 < bytes.len() && pairs.len() < 3 {
        match (nibble(bytes[i]), nibble(bytes[i + 1])) {
            (Some(hi), Some(lo)) => {
                pairs.push((hi << 4) | lo);
                i += 2;
            }
            _ => i += 1,
        }
    }
    pairs
}

/// Expands the first run of three hex digits, doubling each digit.
fn shorthand(bytes: &[u8]) -> Option<[u8; 3]> {
    bytes
        .windows(3)
        .find_map(|w| match (nibble(w[0]), nibble(w[1]), nibble(w[2])) {
            (Some(r), Some(g), Some(b)) => Some([r * 17, g * 17, b * 17]),
            _ => None,
        })
}
