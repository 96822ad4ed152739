//! Pure-computation RGBA8 buffers for the picker widgets.
//!
//! This module is always available (no feature gate) so that both the `png`
//! snapshot path and any in-memory consumer share the same conversion.

use hcl_picker_core::picker::{rgba_len, SliderGeometry, SquareGeometry};
use hcl_picker_core::{hcl_to_rgb, Color, Hcl, PickerError, Rgb};

fn rgba(rgb: Rgb) -> [u8; 4] {
    let [r, g, b] = rgb.to_bytes();
    [r, g, b, 255]
}

/// Renders the hue/luminance square at a fixed chroma.
///
/// Each pixel carries the color the picker selects at that position, so a
/// click reads back exactly what is drawn. The buffer length is
/// `width * height * 4`.
pub fn square_to_rgba(square: &SquareGeometry, chroma: f64) -> Vec<u8> {
    let (w, h) = (square.width(), square.height());
    let mut buf = Vec::with_capacity(w * h * 4);
    for y in 0..h {
        for x in 0..w {
            let hcl = square.hcl_at(x as f64, y as f64, chroma);
            buf.extend_from_slice(&rgba(hcl_to_rgb(hcl)));
        }
    }
    buf
}

/// Renders the chroma slider for a fixed hue and luminance.
///
/// Chroma varies by column only; every row is identical. Returns
/// `PickerError::InvalidDimensions` if `height` is zero or too large.
pub fn slider_to_rgba(
    slider: &SliderGeometry,
    height: usize,
    hue: f64,
    luminance: f64,
) -> Result<Vec<u8>, PickerError> {
    rgba_len(slider.width(), height)?;
    let row: Vec<u8> = (0..slider.width())
        .flat_map(|x| {
            let hcl = Hcl::new(hue, slider.chroma_at(x as f64), luminance);
            rgba(hcl_to_rgb(hcl))
        })
        .collect();
    Ok(row.repeat(height))
}

/// A solid block of one color.
///
/// Returns `PickerError::InvalidDimensions` under the same rules as [`rgba_len`].
pub fn fill_rgba(width: usize, height: usize, color: &Color) -> Result<Vec<u8>, PickerError> {
    let len = rgba_len(width, height)?;
    Ok(rgba(color.rgb()).repeat(len / 4))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pixel(buf: &[u8], width: usize, x: usize, y: usize) -> [u8; 4] {
        let i = (y * width + x) * 4;
        [buf[i], buf[i + 1], buf[i + 2], buf[i + 3]]
    }

    #[test]
    fn square_correct_length() {
        let square = SquareGeometry::new(12, 5).unwrap();
        assert_eq!(square_to_rgba(&square, 1.0).len(), 12 * 5 * 4);
    }

    #[test]
    fn square_top_row_is_white_and_bottom_row_black() {
        let square = SquareGeometry::new(8, 8).unwrap();
        let buf = square_to_rgba(&square, 1.0);
        for x in 0..8 {
            assert_eq!(pixel(&buf, 8, x, 0), [255, 255, 255, 255], "top x={x}");
            assert_eq!(pixel(&buf, 8, x, 7), [0, 0, 0, 255], "bottom x={x}");
        }
    }

    #[test]
    fn square_zero_chroma_is_gray() {
        let square = SquareGeometry::new(16, 16).unwrap();
        let buf = square_to_rgba(&square, 0.0);
        for px in buf.chunks_exact(4) {
            assert_eq!(px[0], px[1]);
            assert_eq!(px[1], px[2]);
        }
    }

    #[test]
    fn square_pixel_matches_picked_color() {
        let square = SquareGeometry::new(36, 20).unwrap();
        let buf = square_to_rgba(&square, 0.5);
        let picked = Color::from_hcl(square.hcl_at(10.0, 7.0, 0.5));
        let [r, g, b] = picked.rgb().to_bytes();
        assert_eq!(pixel(&buf, 36, 10, 7), [r, g, b, 255]);
    }

    #[test]
    fn slider_rows_are_identical() {
        let slider = SliderGeometry::new(10).unwrap();
        let buf = slider_to_rgba(&slider, 3, 120.0, 0.5).unwrap();
        assert_eq!(buf.len(), 10 * 3 * 4);
        let row = 10 * 4;
        assert_eq!(buf[..row], buf[row..2 * row]);
        assert_eq!(buf[..row], buf[2 * row..]);
    }

    #[test]
    fn slider_left_edge_is_gray() {
        let slider = SliderGeometry::new(10).unwrap();
        let buf = slider_to_rgba(&slider, 1, 240.0, 0.5).unwrap();
        let [r, g, b, a] = pixel(&buf, 10, 0, 0);
        assert_eq!([g, b, a], [r, r, 255]);
    }

    #[test]
    fn fill_repeats_color() {
        let color = Color::from_hex("336699").unwrap();
        let buf = fill_rgba(3, 2, &color).unwrap();
        assert_eq!(buf.len(), 3 * 2 * 4);
        for px in buf.chunks_exact(4) {
            assert_eq!(px, [0x33, 0x66, 0x99, 255]);
        }
    }

    #[test]
    fn oversized_buffers_are_rejected() {
        let color = Color::default();
        assert!(matches!(
            fill_rgba(usize::MAX / 2, 3, &color),
            Err(PickerError::InvalidDimensions)
        ));
        let slider = SliderGeometry::new(1024).unwrap();
        assert!(matches!(
            slider_to_rgba(&slider, usize::MAX / 8, 0.0, 0.5),
            Err(PickerError::InvalidDimensions)
        ));
        assert!(matches!(
            slider_to_rgba(&slider, 0, 0.0, 0.5),
            Err(PickerError::InvalidDimensions)
        ));
    }

    #[test]
    fn alpha_always_255() {
        let square = SquareGeometry::new(9, 9).unwrap();
        let buf = square_to_rgba(&square, 0.7);
        for (i, px) in buf.chunks_exact(4).enumerate() {
            assert_eq!(px[3], 255, "alpha at pixel {i} should be 255");
        }
    }
}
