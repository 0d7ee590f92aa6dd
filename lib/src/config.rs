use crate::error::RenderError;
use crate::ramp::DEFAULT_RAMP;

/// Default monospace font cell ratio (width / height), measured from a
/// 9.63px-wide, 19px-tall terminal cell.
pub const DEFAULT_FONT_RATIO: f64 = 9.633331298828125 / 19.0;

/// Configuration for an image-to-text conversion
#[derive(Debug, Clone)]
pub struct RenderConfig {
    /// Output grid
    pub width: Option<u32>,  // target columns; derived from height if None
    pub height: Option<u32>, // target rows; derived from width if None
    pub ratio: f64,          // font cell width / height, default ~0.5070

    /// Glyph mapping
    pub ramp: String, // glyph ramp, darkest -> lightest, non-empty
    pub invert: bool, // flip luminance before mapping, default false
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            // A driving dimension must be set before the config is usable;
            // validate() rejects the neither-given state.
            width: None,
            height: None,
            ratio: DEFAULT_FONT_RATIO,
            ramp: DEFAULT_RAMP.to_string(),
            invert: false,
        }
    }
}

impl RenderConfig {
    /// Validates the configuration parameters
    pub fn validate(&self) -> Result<(), RenderError> {
        if self.width.is_none() && self.height.is_none() {
            return Err(RenderError::config(
                "either 'width' or 'height' must be defined",
            ));
        }
        if self.width == Some(0) || self.height == Some(0) {
            return Err(RenderError::config(
                "'width' and 'height' must be at least 1",
            ));
        }
        if !self.ratio.is_finite() || self.ratio <= 0.0 {
            return Err(RenderError::config(format!(
                "ratio must be a positive number, got {}",
                self.ratio
            )));
        }
        if self.ramp.is_empty() {
            return Err(RenderError::config(
                "glyph map must contain at least one character",
            ));
        }
        Ok(())
    }
}
