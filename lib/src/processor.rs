use std::path::Path;

use image::DynamicImage;
use log::debug;

use crate::config::RenderConfig;
use crate::dimensions::resolve_dimensions;
use crate::error::RenderError;
use crate::filters::{invert_luminance, resize_to_grid, to_grayscale};
use crate::ramp::Ramp;
use crate::render::render_text;

/// Convert an image file to an ASCII text block
///
/// This runs the full pipeline:
/// 1. Validate the configuration
/// 2. Decode the source image
/// 3. Resolve the output character grid
/// 4. Extract luminance and resize to the grid
/// 5. Optionally invert luminance
/// 6. Map each pixel through the glyph ramp into newline-terminated rows
///
/// Validation runs before the source file is touched, so an invalid
/// configuration never performs any I/O.
///
/// # Arguments
/// * `path` - Source image file
/// * `config` - Conversion settings
///
/// # Returns
/// The rendered text block, one newline-terminated line per grid row.
pub fn render_file(path: &Path, config: &RenderConfig) -> Result<String, RenderError> {
    config.validate()?;

    let img = image::open(path).map_err(|source| RenderError::Decode {
        path: path.to_path_buf(),
        source,
    })?;

    if img.width() == 0 || img.height() == 0 {
        return Err(RenderError::ZeroArea {
            path: path.to_path_buf(),
        });
    }

    debug!(
        "decoded '{}': {}x{} pixels",
        path.display(),
        img.width(),
        img.height()
    );

    render_image(&img, config)
}

/// Convert an already-decoded image to an ASCII text block
///
/// Same pipeline as [`render_file`] without the decode step.
///
/// # Arguments
/// * `img` - Decoded source image
/// * `config` - Conversion settings
///
/// # Returns
/// The rendered text block.
pub fn render_image(img: &DynamicImage, config: &RenderConfig) -> Result<String, RenderError> {
    config.validate()?;

    if img.width() == 0 || img.height() == 0 {
        return Err(RenderError::config("source image has zero area"));
    }

    let (width, height) = resolve_dimensions(
        img.width(),
        img.height(),
        config.width,
        config.height,
        config.ratio,
    )?;
    debug!("resolved output grid: {}x{} characters", width, height);

    let ramp = Ramp::new(&config.ramp)?;

    let lum = to_grayscale(img);
    let mut grid = resize_to_grid(&lum, width, height);

    if config.invert {
        debug!("inverting luminance");
        invert_luminance(&mut grid);
    }

    Ok(render_text(&grid, &ramp))
}
