/// Gradient example: render a synthetic radial gradient as ASCII art
///
/// This builds a small grayscale test image in memory and prints the
/// converted text block to the terminal.
use image::{DynamicImage, GrayImage, Luma};
use img2ascii::{RenderConfig, render_image};

fn main() {
    println!("img2ascii - Gradient Example");
    println!("============================\n");

    // Radial gradient: bright center falling off toward the corners
    let width = 256u32;
    let height = 256u32;
    let center_x = width as f32 / 2.0;
    let center_y = height as f32 / 2.0;
    let max_dist = (center_x * center_x + center_y * center_y).sqrt();

    let img = GrayImage::from_fn(width, height, |x, y| {
        let dx = x as f32 - center_x;
        let dy = y as f32 - center_y;
        let dist = (dx * dx + dy * dy).sqrt();
        let value = (1.0 - dist / max_dist) * 255.0;
        Luma([value as u8])
    });

    println!("Created test image: {}x{}", width, height);

    let config = RenderConfig {
        width: Some(72),
        ..Default::default()
    };

    match render_image(&DynamicImage::ImageLuma8(img), &config) {
        Ok(text) => {
            println!("Rendered {} columns:\n", 72);
            print!("{text}");
        }
        Err(e) => eprintln!("Error: {e}"),
    }
}
