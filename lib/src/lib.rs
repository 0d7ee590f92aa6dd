//! img2ascii - luminance-based image to ASCII art converter
//!
//! Loads a raster image, converts it to grayscale, rescales it to a
//! character grid corrected for the monospace font cell ratio, and maps
//! each pixel's luminance to a glyph from a configurable ramp.
//!
//! # Example
//! ```no_run
//! use img2ascii::{RenderConfig, render_file};
//! use std::path::Path;
//!
//! let config = RenderConfig {
//!     width: Some(80),
//!     ..RenderConfig::default()
//! };
//! let text = render_file(Path::new("photo.jpg"), &config).unwrap();
//! print!("{text}");
//! ```

pub mod config;
pub mod dimensions;
pub mod error;
pub mod filters;
pub mod processor;
pub mod ramp;
pub mod render;

// Re-export main types for convenience
pub use config::{DEFAULT_FONT_RATIO, RenderConfig};
pub use error::RenderError;
pub use processor::{render_file, render_image};
pub use ramp::{DEFAULT_RAMP, Ramp};
