use image::imageops::{self, FilterType};
use image::{DynamicImage, GrayImage};

/// Reduce a decoded image to single-channel luminance
///
/// Uses the standard perceptual luma transform over the color channels.
///
/// # Arguments
/// * `img` - Decoded source image, any channel layout
///
/// # Returns
/// Grayscale image with 0-255 luminance values
pub fn to_grayscale(img: &DynamicImage) -> GrayImage {
    img.to_luma8()
}

/// Resize a luminance grid to the resolved character grid
///
/// Lanczos3 resampling; deterministic, so identical inputs always yield
/// identical grids.
///
/// # Arguments
/// * `lum` - Source luminance image
/// * `width` - Output columns
/// * `height` - Output rows
///
/// # Returns
/// Luminance grid of exactly `width` x `height`
pub fn resize_to_grid(lum: &GrayImage, width: u32, height: u32) -> GrayImage {
    imageops::resize(lum, width, height, FilterType::Lanczos3)
}

/// Invert luminance in place, v -> 255 - v
pub fn invert_luminance(lum: &mut GrayImage) {
    imageops::invert(lum);
}
