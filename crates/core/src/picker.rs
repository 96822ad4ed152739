//! Picker model: selection state, widget geometry, and display readout.
//!
//! The picker shows a hue/luminance square at the current chroma and a chroma
//! slider at the current hue and luminance. This module maps widget
//! coordinates to colors and tracks what is selected. It does no drawing and
//! handles no events; a front end feeds it pointer positions already made
//! relative to the widget.

use std::fmt;

use serde::Serialize;

use crate::error::PickerError;
use crate::palette::Color;
use crate::space::{Hcl, Hsv, Rgb};

/// Which widget, if any, is being dragged.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DragTarget {
    #[default]
    Idle,
    Square,
    Slider,
}

/// The selected color plus pointer state.
///
/// Owned by one front end; it is never shared. Every update replaces the
/// selected [`Color`] wholesale.
#[derive(Debug, Clone, Default)]
pub struct PickerState {
    color: Color,
    preview: bool,
    drag: DragTarget,
}

impl PickerState {
    /// Starts with black selected, no preview, nothing dragged.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn color(&self) -> &Color {
        &self.color
    }

    /// Selects the color in `hex`.
    ///
    /// On invalid input the selection is left unchanged and the error returned.
    pub fn update_from_hex(&mut self, hex: &str) -> Result<&Color, PickerError> {
        self.color = Color::from_hex(hex)?;
        Ok(&self.color)
    }

    pub fn update_from_rgb(&mut self, rgb: Rgb) -> &Color {
        self.color = Color::from_rgb(rgb);
        &self.color
    }

    pub fn update_from_hsv(&mut self, hsv: Hsv) -> &Color {
        self.color = Color::from_hsv(hsv);
        &self.color
    }

    pub fn update_from_hcl(&mut self, hcl: Hcl) -> &Color {
        self.color = Color::from_hcl(hcl);
        &self.color
    }

    /// Selects the square's color under `(x, y)`, keeping the current chroma.
    pub fn pick_from_square(&mut self, square: &SquareGeometry, x: f64, y: f64) -> &Color {
        let hcl = square.hcl_at(x, y, self.color.hcl().c());
        self.update_from_hcl(hcl)
    }

    /// Selects the slider's color under `x`, keeping the current hue and luminance.
    pub fn pick_from_slider(&mut self, slider: &SliderGeometry, x: f64) -> &Color {
        let current = self.color.hcl();
        let hcl = Hcl::new(current.h(), slider.chroma_at(x), current.l());
        self.update_from_hcl(hcl)
    }

    /// The square's color under `(x, y)` at the current chroma, without selecting it.
    pub fn preview_square(&self, square: &SquareGeometry, x: f64, y: f64) -> Color {
        Color::from_hcl(square.hcl_at(x, y, self.color.hcl().c()))
    }

    pub fn is_previewing(&self) -> bool {
        self.preview
    }

    pub fn turn_on_preview(&mut self) {
        self.preview = true;
    }

    pub fn turn_off_preview(&mut self) {
        self.preview = false;
    }

    pub fn drag(&self) -> DragTarget {
        self.drag
    }

    pub fn set_square(&mut self) {
        self.drag = DragTarget::Square;
    }

    pub fn set_slider(&mut self) {
        self.drag = DragTarget::Slider;
    }

    pub fn reset_drag(&mut self) {
        self.drag = DragTarget::Idle;
    }

    pub fn readout(&self) -> Readout {
        Readout::new(&self.color)
    }
}

/// Byte length of an RGBA8 raster of `width * height` pixels.
///
/// Returns `PickerError::InvalidDimensions` if either side is zero or exceeds
/// `u32::MAX`, or if the byte count overflows `usize`.
pub fn rgba_len(width: usize, height: usize) -> Result<usize, PickerError> {
    if width == 0 || height == 0 {
        return Err(PickerError::InvalidDimensions);
    }
    u32::try_from(width).map_err(|_| PickerError::InvalidDimensions)?;
    u32::try_from(height).map_err(|_| PickerError::InvalidDimensions)?;
    width
        .checked_mul(height)
        .and_then(|n| n.checked_mul(4))
        .ok_or(PickerError::InvalidDimensions)
}

/// Size of the hue/luminance square in pixels.
///
/// Hue runs left to right over `[0, 360)`, luminance top to bottom from 1 to 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SquareGeometry {
    width: usize,
    height: usize,
}

impl SquareGeometry {
    /// Returns `PickerError::InvalidDimensions` if the square cannot be
    /// rasterized (see [`rgba_len`]).
    pub fn new(width: usize, height: usize) -> Result<Self, PickerError> {
        rgba_len(width, height)?;
        Ok(Self { width, height })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Whether `(x, y)` lies on the square, edges included.
    pub fn contains(&self, x: f64, y: f64) -> bool {
        (0.0..=self.width as f64).contains(&x) && (0.0..=self.height as f64).contains(&y)
    }

    /// Clamps `(x, y)` onto the last valid pixel in each direction.
    pub fn clamp_point(&self, x: f64, y: f64) -> (f64, f64) {
        (
            clamp_coordinate(x, self.width),
            clamp_coordinate(y, self.height),
        )
    }

    /// HCL under `(x, y)` at the given chroma.
    pub fn hcl_at(&self, x: f64, y: f64, chroma: f64) -> Hcl {
        let (x, y) = self.clamp_point(x, y);
        let h = 360.0 * x / self.width as f64;
        let l = if self.height > 1 {
            1.0 - y / (self.height - 1) as f64
        } else {
            1.0
        };
        Hcl::new(h, chroma, l)
    }

    /// Cursor position for an HCL color; the inverse of [`Self::hcl_at`].
    pub fn point_for(&self, hcl: Hcl) -> (f64, f64) {
        let x = hcl.h() / 360.0 * self.width as f64;
        let y = (1.0 - hcl.l()) * self.height.saturating_sub(1) as f64;
        (x, y)
    }
}

/// Width of the chroma slider in pixels. Chroma runs left to right from 0 to 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SliderGeometry {
    width: usize,
}

impl SliderGeometry {
    /// Returns `PickerError::InvalidDimensions` if a one-row slider of this
    /// width cannot be rasterized.
    pub fn new(width: usize) -> Result<Self, PickerError> {
        rgba_len(width, 1)?;
        Ok(Self { width })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn chroma_at(&self, x: f64) -> f64 {
        clamp_coordinate(x, self.width) / self.width as f64
    }
}

/// Clamps into `[0, extent - 1]`; NaN goes to 0.
fn clamp_coordinate(v: f64, extent: usize) -> f64 {
    let max = extent.saturating_sub(1) as f64;
    if v.is_nan() {
        0.0
    } else {
        v.clamp(0.0, max)
    }
}

/// Display strings for a color, as shown next to the picker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Readout {
    pub hex: String,
    pub rgb: [String; 3],
    pub hsv: [String; 3],
    pub hcl: [String; 3],
}

impl Readout {
    pub fn new(color: &Color) -> Self {
        let rgb = color.rgb().to_array().map(|c| format_number(c.round()));
        let hsv = color.hsv();
        let hcl = color.hcl();
        Self {
            hex: format!("#{}", color.hex()),
            rgb,
            hsv: [hue(hsv.h()), percent(hsv.s()), percent(hsv.v())],
            hcl: [hue(hcl.h()), percent(hcl.c()), percent(hcl.l())],
        }
    }
}

impl fmt::Display for Readout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [r, g, b] = &self.rgb;
        let [hh, s, v] = &self.hsv;
        let [ch, c, l] = &self.hcl;
        writeln!(f, "hex  {}", self.hex)?;
        writeln!(f, "rgb  {r} {g} {b}")?;
        writeln!(f, "hsv  {hh}° {s}% {v}%")?;
        write!(f, "hcl  {ch}° {c}% {l}%")
    }
}

/// Rounds to `digits` significant digits.
fn to_significant(x: f64, digits: i32) -> f64 {
    if x == 0.0 || !x.is_finite() {
        return x;
    }
    let magnitude = x.abs().log10().floor() as i32 + 1;
    let factor = 10f64.powi(digits - magnitude);
    (x * factor).round() / factor
}

fn round_to(x: f64, places: i32) -> f64 {
    let factor = 10f64.powi(places);
    (x * factor).round() / factor
}

/// Prints without a trailing `.0`; negative zero prints as `0`.
fn format_number(x: f64) -> String {
    format!("{}", x + 0.0)
}

fn hue(h: f64) -> String {
    format_number(round_to(to_significant(h, 3), 2))
}

fn percent(fraction: f64) -> String {
    format_number(round_to(to_significant(fraction, 3) * 100.0, 2))
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-9;

    // -- PickerState --

    #[test]
    fn new_state_selects_black() {
        let state = PickerState::new();
        assert_eq!(state.color().hex(), "000000");
        assert!(!state.is_previewing());
        assert_eq!(state.drag(), DragTarget::Idle);
    }

    #[test]
    fn update_from_hex_replaces_color() {
        let mut state = PickerState::new();
        let color = state.update_from_hex("#7f7f7f").unwrap();
        assert_eq!(color.hex(), "7F7F7F");
        assert_eq!(state.color().hex(), "7F7F7F");
    }

    #[test]
    fn update_from_invalid_hex_keeps_previous_color() {
        let mut state = PickerState::new();
        state.update_from_rgb(Rgb::new(255.0, 0.0, 0.0));
        assert!(state.update_from_hex("not_a_hex").is_err());
        assert_eq!(state.color().hex(), "FF0000");
    }

    #[test]
    fn update_from_hsv_and_hcl_agree() {
        let mut state = PickerState::new();
        let hex_from_hsv = state.update_from_hsv(Hsv::new(240.0, 1.0, 1.0)).hex().to_owned();
        let hcl = state.color().hcl();
        let hex_from_hcl = state.update_from_hcl(hcl).hex().to_owned();
        assert_eq!(hex_from_hsv, "0000FF");
        assert_eq!(hex_from_hcl, hex_from_hsv);
    }

    #[test]
    fn preview_toggles() {
        let mut state = PickerState::new();
        state.turn_on_preview();
        assert!(state.is_previewing());
        state.turn_off_preview();
        assert!(!state.is_previewing());
    }

    #[test]
    fn drag_targets_are_exclusive() {
        let mut state = PickerState::new();
        state.set_square();
        assert_eq!(state.drag(), DragTarget::Square);
        state.set_slider();
        assert_eq!(state.drag(), DragTarget::Slider);
        state.reset_drag();
        assert_eq!(state.drag(), DragTarget::Idle);
    }

    #[test]
    fn pick_from_square_keeps_chroma() {
        let mut state = PickerState::new();
        state.update_from_hcl(Hcl::new(0.0, 0.6, 0.5));
        let square = SquareGeometry::new(360, 101).unwrap();
        let hcl = state.pick_from_square(&square, 120.0, 50.0).hcl();
        assert!((hcl.h() - 120.0).abs() < EPSILON, "{hcl:?}");
        assert!((hcl.c() - 0.6).abs() < EPSILON, "{hcl:?}");
        assert!((hcl.l() - 0.5).abs() < EPSILON, "{hcl:?}");
    }

    #[test]
    fn pick_from_slider_keeps_hue_and_luminance() {
        let mut state = PickerState::new();
        state.update_from_hcl(Hcl::new(200.0, 1.0, 0.7));
        let slider = SliderGeometry::new(100).unwrap();
        let hcl = state.pick_from_slider(&slider, 25.0).hcl();
        assert_eq!(hcl.h(), 200.0);
        assert!((hcl.c() - 0.25).abs() < EPSILON, "{hcl:?}");
        assert_eq!(hcl.l(), 0.7);
    }

    #[test]
    fn preview_square_leaves_selection_alone() {
        let mut state = PickerState::new();
        state.update_from_hex("FF0000").unwrap();
        let square = SquareGeometry::new(360, 100).unwrap();
        let preview = state.preview_square(&square, 240.0, 10.0);
        assert_ne!(preview.hex(), "FF0000");
        assert_eq!(state.color().hex(), "FF0000");
    }

    // -- Geometry --

    #[test]
    fn square_rejects_zero_dimensions() {
        assert!(matches!(
            SquareGeometry::new(0, 10),
            Err(PickerError::InvalidDimensions)
        ));
        assert!(matches!(
            SquareGeometry::new(10, 0),
            Err(PickerError::InvalidDimensions)
        ));
    }

    #[test]
    fn square_rejects_oversized_dimensions() {
        assert!(matches!(
            SquareGeometry::new(usize::MAX / 2, 3),
            Err(PickerError::InvalidDimensions)
        ));
        let too_wide = (u32::MAX as usize).saturating_add(1);
        assert!(matches!(
            SquareGeometry::new(too_wide, 1),
            Err(PickerError::InvalidDimensions)
        ));
        assert!(matches!(
            SliderGeometry::new(usize::MAX),
            Err(PickerError::InvalidDimensions)
        ));
    }

    #[test]
    fn rgba_len_counts_four_bytes_per_pixel() {
        assert_eq!(rgba_len(3, 2).unwrap(), 24);
        assert!(matches!(rgba_len(0, 2), Err(PickerError::InvalidDimensions)));
        assert!(matches!(
            rgba_len(usize::MAX / 4, 2),
            Err(PickerError::InvalidDimensions)
        ));
    }

    #[test]
    fn square_corners_map_to_hue_and_luminance_extremes() {
        let square = SquareGeometry::new(200, 100).unwrap();
        let top_left = square.hcl_at(0.0, 0.0, 1.0);
        assert_eq!(top_left.to_array(), [0.0, 1.0, 1.0]);
        let bottom_right = square.hcl_at(199.0, 99.0, 1.0);
        assert!((bottom_right.h() - 358.2).abs() < EPSILON);
        assert_eq!(bottom_right.l(), 0.0);
    }

    #[test]
    fn square_clamps_outside_points() {
        let square = SquareGeometry::new(200, 100).unwrap();
        assert_eq!(square.clamp_point(-5.0, 500.0), (0.0, 99.0));
        assert_eq!(square.clamp_point(f64::NAN, 3.0), (0.0, 3.0));
        assert!(!square.contains(-1.0, 10.0));
        assert!(square.contains(200.0, 100.0));
    }

    #[test]
    fn square_single_row_is_white_luminance() {
        let square = SquareGeometry::new(10, 1).unwrap();
        assert_eq!(square.hcl_at(3.0, 0.0, 0.5).l(), 1.0);
    }

    #[test]
    fn square_point_for_inverts_hcl_at() {
        let square = SquareGeometry::new(360, 101).unwrap();
        let hcl = square.hcl_at(90.0, 40.0, 0.3);
        let (x, y) = square.point_for(hcl);
        assert!((x - 90.0).abs() < EPSILON, "x={x}");
        assert!((y - 40.0).abs() < EPSILON, "y={y}");
    }

    #[test]
    fn slider_maps_left_edge_to_zero_chroma() {
        let slider = SliderGeometry::new(50).unwrap();
        assert_eq!(slider.chroma_at(-10.0), 0.0);
        assert!((slider.chroma_at(1000.0) - 49.0 / 50.0).abs() < EPSILON);
        assert!(SliderGeometry::new(0).is_err());
    }

    // -- Readout --

    #[test]
    fn readout_formats_pure_red() {
        let readout = Readout::new(&Color::from_hex("FF0000").unwrap());
        assert_eq!(readout.hex, "#FF0000");
        assert_eq!(readout.rgb, ["255", "0", "0"].map(String::from));
        assert_eq!(readout.hsv, ["0", "100", "100"].map(String::from));
        assert_eq!(readout.hcl, ["0", "100", "54.7"].map(String::from));
    }

    #[test]
    fn readout_rounds_to_three_significant_digits() {
        let readout = Readout::new(&Color::from_rgb(Rgb::new(255.0, 127.0, 127.0)));
        assert_eq!(readout.hsv[1], "50.2");
        assert_eq!(readout.rgb[1], "127");
    }

    #[test]
    fn readout_display_lists_every_representation() {
        let text = PickerState::new().readout().to_string();
        assert!(text.contains("#000000"), "{text}");
        assert!(text.starts_with("hex"), "{text}");
        assert!(text.contains("rgb  0 0 0"), "{text}");
        assert_eq!(text.lines().count(), 4);
    }

    #[test]
    fn to_significant_rounds_like_to_precision() {
        assert_eq!(to_significant(123.456, 3), 123.0);
        assert_eq!(to_significant(359.9, 3), 360.0);
        assert!((to_significant(0.501961, 3) - 0.502).abs() < 1e-12);
        assert_eq!(to_significant(0.0, 3), 0.0);
    }
}
