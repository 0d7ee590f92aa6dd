use crate::ramp::Ramp;
use image::GrayImage;

/// Assemble the mapped character grid into a newline-delimited block
///
/// Rows run top to bottom and pixels left to right; every row, including
/// the last, is terminated by a newline. The block itself carries exactly
/// one trailing newline; whether the output sink adds another is the
/// caller's concern.
///
/// # Arguments
/// * `lum` - Luminance grid already resized to the output dimensions
/// * `ramp` - Glyph ramp used for the luminance lookup
///
/// # Returns
/// The text block: `height` lines of `width` characters each.
pub fn render_text(lum: &GrayImage, ramp: &Ramp) -> String {
    let (width, height) = lum.dimensions();
    let mut text = String::with_capacity((width as usize + 1) * height as usize);

    for y in 0..height {
        for x in 0..width {
            text.push(ramp.glyph(lum.get_pixel(x, y)[0]));
        }
        text.push('\n');
    }

    text
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Luma;

    #[test]
    fn test_render_known_grid() {
        let mut lum = GrayImage::new(2, 2);
        lum.put_pixel(0, 0, Luma([0]));
        lum.put_pixel(1, 0, Luma([255]));
        lum.put_pixel(0, 1, Luma([255]));
        lum.put_pixel(1, 1, Luma([0]));

        let ramp = Ramp::new("AB").unwrap();
        assert_eq!(render_text(&lum, &ramp), "AB\nBA\n");
    }

    #[test]
    fn test_render_row_major_order() {
        // 3x1: left-to-right within the row
        let mut lum = GrayImage::new(3, 1);
        lum.put_pixel(0, 0, Luma([0]));
        lum.put_pixel(1, 0, Luma([100]));
        lum.put_pixel(2, 0, Luma([255]));

        let ramp = Ramp::new("ABC").unwrap();
        assert_eq!(render_text(&lum, &ramp), "ABC\n");
    }

    #[test]
    fn test_block_has_single_trailing_newline() {
        let lum = GrayImage::from_pixel(4, 3, Luma([0]));
        let ramp = Ramp::default();
        let text = render_text(&lum, &ramp);
        assert!(text.ends_with('\n'));
        assert!(!text.ends_with("\n\n"));
    }

    #[test]
    fn test_shape_matches_grid() {
        let lum = GrayImage::from_pixel(7, 5, Luma([90]));
        let ramp = Ramp::default();
        let text = render_text(&lum, &ramp);

        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 5);
        for line in lines {
            assert_eq!(line.chars().count(), 7);
        }
    }
}
