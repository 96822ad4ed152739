//! PNG output for rendered widget buffers.
//!
//! Feature-gated behind `png` (default on) so that consumers needing only raw
//! buffers avoid the `image` crate. Buffer construction lives in
//! [`crate::pixel`].

use hcl_picker_core::PickerError;
use std::path::Path;

/// Writes an RGBA8 buffer of `width * height` pixels as a PNG.
///
/// Returns `PickerError::InvalidDimensions` if a dimension overflows `u32`,
/// or `PickerError::Io` on a size mismatch or write failure.
pub fn write_png(rgba: Vec<u8>, width: usize, height: usize, path: &Path) -> Result<(), PickerError> {
    let w = u32::try_from(width).map_err(|_| PickerError::InvalidDimensions)?;
    let h = u32::try_from(height).map_err(|_| PickerError::InvalidDimensions)?;
    let img = image::RgbaImage::from_raw(w, h, rgba)
        .ok_or_else(|| PickerError::Io("RGBA buffer size mismatch".into()))?;
    img.save(path).map_err(|e| PickerError::Io(e.to_string()))?;
    tracing::debug!(path = %path.display(), width, height, "wrote png");
    Ok(())
}
