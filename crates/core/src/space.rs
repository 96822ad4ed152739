//! The three color value types: [`Rgb`], [`Hsv`], and [`Hcl`].
//!
//! Values are immutable once built. Every constructor normalizes its input
//! through [`crate::params`]: bounded fields are clamped, hues are wrapped into
//! `[0, 360)`, and anything that is not a finite number becomes 0. There is no
//! way to obtain an out-of-range value, so the conversion functions can rely
//! on their inputs without checking.
//!
//! All three serialize as a 3-element array in declaration order and
//! deserialize from any 3-element array of loose JSON values.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::params::{clamp_or, normalize_bounded, normalize_hue, wrap_hue};

/// Upper bound of an RGB channel.
pub const CHANNEL_MAX: f64 = 255.0;

/// Index of the 60° hue sector containing `h`, in `0..=5`.
pub(crate) fn hue_sector(h: f64) -> usize {
    ((h / 60.0).rem_euclid(6.0).floor() as usize).min(5)
}

/// Channel indices (0 = red, 1 = green, 2 = blue) playing the dominant,
/// secondary, and recessive role in each hue sector.
const SECTOR_ROLES: [[usize; 3]; 6] = [
    [0, 1, 2],
    [1, 0, 2],
    [1, 2, 0],
    [2, 1, 0],
    [2, 0, 1],
    [0, 2, 1],
];

/// Dominant, secondary, and recessive channel indices for hue `h`.
pub(crate) fn sector_roles(h: f64) -> [usize; 3] {
    SECTOR_ROLES[hue_sector(h)]
}

/// Triangle wave over the hue circle: 0 at red, green, and blue, 1 at yellow,
/// cyan, and magenta.
pub(crate) fn hue_ramp(h: f64) -> f64 {
    1.0 - ((h / 60.0).rem_euclid(2.0) - 1.0).abs()
}

/// Red, green, and blue channels, each in `[0, 255]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "[Value; 3]", into = "[f64; 3]")]
pub struct Rgb {
    r: f64,
    g: f64,
    b: f64,
}

impl Rgb {
    pub fn new(r: f64, g: f64, b: f64) -> Self {
        Self {
            r: clamp_or(r, 0.0, CHANNEL_MAX, 0.0),
            g: clamp_or(g, 0.0, CHANNEL_MAX, 0.0),
            b: clamp_or(b, 0.0, CHANNEL_MAX, 0.0),
        }
    }

    /// Builds a color from loose values, e.g. `Rgb::from_values(&json!("a"), ..)` is black.
    pub fn from_values(r: &Value, g: &Value, b: &Value) -> Self {
        Self {
            r: normalize_bounded(r, 0.0, CHANNEL_MAX, 0.0),
            g: normalize_bounded(g, 0.0, CHANNEL_MAX, 0.0),
            b: normalize_bounded(b, 0.0, CHANNEL_MAX, 0.0),
        }
    }

    pub fn r(&self) -> f64 {
        self.r
    }

    pub fn g(&self) -> f64 {
        self.g
    }

    pub fn b(&self) -> f64 {
        self.b
    }

    pub fn to_array(self) -> [f64; 3] {
        [self.r, self.g, self.b]
    }

    /// Channels rounded to the nearest byte.
    pub fn to_bytes(self) -> [u8; 3] {
        self.to_array().map(|c| c.round() as u8)
    }
}

impl From<[Value; 3]> for Rgb {
    fn from([r, g, b]: [Value; 3]) -> Self {
        Self::from_values(&r, &g, &b)
    }
}

impl From<Rgb> for [f64; 3] {
    fn from(c: Rgb) -> Self {
        c.to_array()
    }
}

/// Hue in degrees `[0, 360)`, saturation and value in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "[Value; 3]", into = "[f64; 3]")]
pub struct Hsv {
    h: f64,
    s: f64,
    v: f64,
}

impl Hsv {
    pub fn new(h: f64, s: f64, v: f64) -> Self {
        Self {
            h: wrap_hue(h),
            s: clamp_or(s, 0.0, 1.0, 0.0),
            v: clamp_or(v, 0.0, 1.0, 0.0),
        }
    }

    pub fn from_values(h: &Value, s: &Value, v: &Value) -> Self {
        Self {
            h: normalize_hue(h),
            s: normalize_bounded(s, 0.0, 1.0, 0.0),
            v: normalize_bounded(v, 0.0, 1.0, 0.0),
        }
    }

    pub fn h(&self) -> f64 {
        self.h
    }

    pub fn s(&self) -> f64 {
        self.s
    }

    pub fn v(&self) -> f64 {
        self.v
    }

    pub fn to_array(self) -> [f64; 3] {
        [self.h, self.s, self.v]
    }
}

impl From<[Value; 3]> for Hsv {
    fn from([h, s, v]: [Value; 3]) -> Self {
        Self::from_values(&h, &s, &v)
    }
}

impl From<Hsv> for [f64; 3] {
    fn from(c: Hsv) -> Self {
        c.to_array()
    }
}

/// Hue in degrees `[0, 360)`, chroma and luminance in `[0, 1]`.
///
/// Chroma is not perceptual chroma in absolute units. It is HSV saturation
/// expressed relative to the largest saturation still reachable at this hue
/// and luminance, so `c = 1` always means "as colorful as this hue gets at
/// this brightness". See [`crate::hcl`] for the boundary math.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "[Value; 3]", into = "[f64; 3]")]
pub struct Hcl {
    h: f64,
    c: f64,
    l: f64,
}

impl Hcl {
    pub fn new(h: f64, c: f64, l: f64) -> Self {
        Self {
            h: wrap_hue(h),
            c: clamp_or(c, 0.0, 1.0, 0.0),
            l: clamp_or(l, 0.0, 1.0, 0.0),
        }
    }

    pub fn from_values(h: &Value, c: &Value, l: &Value) -> Self {
        Self {
            h: normalize_hue(h),
            c: normalize_bounded(c, 0.0, 1.0, 0.0),
            l: normalize_bounded(l, 0.0, 1.0, 0.0),
        }
    }

    pub fn h(&self) -> f64 {
        self.h
    }

    pub fn c(&self) -> f64 {
        self.c
    }

    pub fn l(&self) -> f64 {
        self.l
    }

    pub fn to_array(self) -> [f64; 3] {
        [self.h, self.c, self.l]
    }
}

impl From<[Value; 3]> for Hcl {
    fn from([h, c, l]: [Value; 3]) -> Self {
        Self::from_values(&h, &c, &l)
    }
}

impl From<Hcl> for [f64; 3] {
    fn from(c: Hcl) -> Self {
        c.to_array()
    }
}
