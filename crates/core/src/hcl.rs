//! Luminance, the chroma boundary, and HSV ↔ HCL conversion.
//!
//! Luminance is a perceptually weighted norm of the RGB channels:
//!
//! ```text
//! L = sqrt(0.299 r² + 0.587 g² + 0.114 b²)
//! ```
//!
//! Written in HSV terms, which weight multiplies which channel depends on the
//! hue sector: the dominant channel is `V`, the secondary one
//! `V·(S·(H′−1)+1)`, and the recessive one `V·(1−S)`, where `H′` is the hue
//! ramp. So for sector weights `(A, B, C)`:
//!
//! ```text
//! L = sqrt(A·V² + B·V²·(S·(H′−1)+1)² + C·V²·(1−S)²)
//! ```
//!
//! At full value, luminance falls as saturation rises. The fully saturated,
//! fully bright color of a hue has the lowest luminance reachable at `V = 1`,
//! the *luminance cutoff*. Below the cutoff every saturation is reachable by
//! dimming, so HCL chroma equals HSV saturation. Above it, saturation is
//! capped by the *chroma boundary*, and chroma is saturation divided by that
//! cap.
//!
//! This is a custom reparametrization, not CIE LCh. Standard references will
//! not reproduce these numbers.

use crate::color::{hsv_to_rgb, rgb_to_hsv};
use crate::space::{hue_ramp, sector_roles, Hcl, Hsv, Rgb, CHANNEL_MAX};

/// Perceptual weights of red, green, and blue.
pub const LUMA_WEIGHTS: [f64; 3] = [0.299, 0.587, 0.114];

/// Magnitudes below this are treated as zero in the boundary solver.
const NOISE_EPSILON: f64 = 1e-10;

/// Luminance weights of the dominant, secondary, and recessive channel at hue `h`.
fn sector_weights(h: f64) -> [f64; 3] {
    sector_roles(h).map(|channel| LUMA_WEIGHTS[channel])
}

fn luminance(h: f64, s: f64, v: f64) -> f64 {
    let [a, b, c] = sector_weights(h);
    let ramp = hue_ramp(h);
    let v2 = v * v;
    let secondary = s * (ramp - 1.0) + 1.0;
    let recessive = 1.0 - s;
    (a * v2 + b * v2 * secondary * secondary + c * v2 * recessive * recessive).sqrt()
}

/// Luminance of an RGB color, in `[0, 1]`.
pub fn luminance_from_rgb(rgb: Rgb) -> f64 {
    rgb.to_array()
        .iter()
        .zip(LUMA_WEIGHTS)
        .map(|(c, w)| {
            let c = c / CHANNEL_MAX;
            w * c * c
        })
        .sum::<f64>()
        .sqrt()
}

/// Luminance of an HSV color, in `[0, 1]`.
///
/// Agrees with [`luminance_from_rgb`] on the same color.
pub fn luminance_from_hsv(hsv: Hsv) -> f64 {
    luminance(hsv.h(), hsv.s(), hsv.v())
}

/// Luminance of the fully saturated, fully bright color at hue `h`.
pub fn luminance_cutoff(h: f64) -> f64 {
    luminance(h, 1.0, 1.0)
}

/// Largest saturation reachable at hue `h` and luminance `l`.
///
/// Solves the luminance equation at `V = 1` for `S` in closed form. The
/// result is 1 at the luminance cutoff and falls to 0 at white. It is only
/// meaningful for `l` between [`luminance_cutoff`] and 1, since below the
/// cutoff every saturation is reachable.
pub fn chroma_boundary(h: f64, l: f64) -> f64 {
    let [a, b, c] = sector_weights(h);
    let ramp = hue_ramp(h);

    let hm1_sq = (ramp - 1.0) * (ramp - 1.0);
    let l_sq = l * l;
    let ramp_sq = ramp * ramp;

    let t1 = -ramp * b + b + c;
    let t2 = c * l_sq;
    let t3 = -a * (b * hm1_sq + c);
    let t4 = b * (hm1_sq * l_sq - c * ramp_sq);
    let t5 = b * hm1_sq + c;

    let mut radicand = t2 + t3 + t4;
    if radicand.abs() < NOISE_EPSILON {
        radicand = 0.0;
    }
    (t1 - radicand.sqrt()) / t5
}

/// HCL chroma of saturation `s` at hue `h` and luminance `l`.
pub fn chroma(h: f64, s: f64, l: f64) -> f64 {
    if l <= luminance_cutoff(h) {
        return s;
    }
    let boundary = chroma_boundary(h, l);
    if boundary.abs() < NOISE_EPSILON {
        0.0
    } else {
        s / boundary
    }
}

/// HSV saturation of an HCL color.
pub fn saturation(hcl: Hcl) -> f64 {
    if hcl.l() <= luminance_cutoff(hcl.h()) {
        hcl.c()
    } else {
        hcl.c() * chroma_boundary(hcl.h(), hcl.l())
    }
}

/// HSV value that gives luminance `l` at hue `h` and saturation `s`.
///
/// Luminance scales linearly with value, so this divides by the luminance at
/// full value.
pub fn value(h: f64, s: f64, l: f64) -> f64 {
    l / luminance(h, s, 1.0)
}

/// Converts HSV to HCL. The hue carries over unchanged.
pub fn hsv_to_hcl(hsv: Hsv) -> Hcl {
    let l = luminance_from_hsv(hsv);
    Hcl::new(hsv.h(), chroma(hsv.h(), hsv.s(), l), l)
}

/// Converts HCL to HSV. The hue carries over unchanged.
pub fn hcl_to_hsv(hcl: Hcl) -> Hsv {
    let s = saturation(hcl);
    Hsv::new(hcl.h(), s, value(hcl.h(), s, hcl.l()))
}

/// Convenience: RGB to HCL via HSV.
pub fn rgb_to_hcl(rgb: Rgb) -> Hcl {
    hsv_to_hcl(rgb_to_hsv(rgb))
}

/// Convenience: HCL to RGB via HSV.
pub fn hcl_to_rgb(hcl: Hcl) -> Rgb {
    hsv_to_rgb(hcl_to_hsv(hcl))
}
