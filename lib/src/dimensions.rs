//! Character grid resolution from image dimensions and font geometry.

use crate::error::RenderError;

/// Resolve the output character grid for a source image
///
/// Exactly one of `width`/`height` drives the other through the image
/// aspect ratio and the font cell ratio; when both are given they are
/// used unchanged with no aspect correction. The derived dimension
/// truncates toward zero rather than rounding to nearest.
///
/// # Arguments
/// * `img_width` - Source image width in pixels
/// * `img_height` - Source image height in pixels
/// * `width` - Target columns, if driving
/// * `height` - Target rows, if driving
/// * `ratio` - Font cell width / height
///
/// # Returns
/// The resolved `(width, height)` grid, both at least 1.
pub fn resolve_dimensions(
    img_width: u32,
    img_height: u32,
    width: Option<u32>,
    height: Option<u32>,
    ratio: f64,
) -> Result<(u32, u32), RenderError> {
    let (w, h) = match (width, height) {
        (Some(w), Some(h)) => (w, h),
        (Some(w), None) => {
            let derived = img_height as f64 / img_width as f64 * w as f64 * ratio;
            (w, derived as u32)
        }
        (None, Some(h)) => {
            let derived = img_width as f64 / img_height as f64 * h as f64 / ratio;
            (derived as u32, h)
        }
        (None, None) => {
            return Err(RenderError::config(
                "either 'width' or 'height' must be defined",
            ));
        }
    };

    if w == 0 || h == 0 {
        return Err(RenderError::config(format!(
            "resolved output grid {}x{} is empty; both dimensions must be at least 1",
            w, h
        )));
    }

    Ok((w, h))
}
