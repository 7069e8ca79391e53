use crate::foundation::error::{SigpasteError, SigpasteResult};

/// Decoded straight-alpha RGBA8 bitmap, row-major, tightly packed.
pub type RasterImage = image::RgbaImage;

/// Uniform upscale ratio applied to the base image and to incoming placement coordinates.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct ScaleFactor(f64);

impl ScaleFactor {
    /// The fixed ratio documents are upscaled by before a signature is placed.
    pub const DEFAULT: Self = Self(1.1);

    /// Largest accepted ratio.
    pub const MAX_RATIO: f64 = 4.0;

    /// Validated constructor; accepts finite ratios in `(0, MAX_RATIO]`.
    pub fn new(ratio: f64) -> SigpasteResult<Self> {
        if !ratio.is_finite() || ratio <= 0.0 || ratio > Self::MAX_RATIO {
            return Err(SigpasteError::invalid_input(format!(
                "scale factor must be in (0, {}], got {ratio}",
                Self::MAX_RATIO
            )));
        }
        Ok(Self(ratio))
    }

    /// The raw ratio.
    pub fn get(self) -> f64 {
        self.0
    }

    /// Scaled size of a `width x height` image. Truncates, never rounds.
    pub fn scale_dims(self, width: u32, height: u32) -> (u32, u32) {
        (self.scale_len(width), self.scale_len(height))
    }

    fn scale_len(self, len: u32) -> u32 {
        // `as` saturates on overflow.
        (f64::from(len) * self.0) as u32
    }
}

impl Default for ScaleFactor {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl TryFrom<f64> for ScaleFactor {
    type Error = SigpasteError;

    fn try_from(ratio: f64) -> SigpasteResult<Self> {
        Self::new(ratio)
    }
}

impl From<ScaleFactor> for f64 {
    fn from(scale: ScaleFactor) -> f64 {
        scale.0
    }
}

/// Top-left placement of an overlay on the already-upscaled base. May be negative.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct Offset {
    /// Horizontal pixel offset.
    pub x: i64,
    /// Vertical pixel offset.
    pub y: i64,
}

impl Offset {
    /// Offset from already-scaled pixel coordinates.
    pub const fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }

    /// Translate a raw placement coordinate (in base-image space) into an overlay offset.
    ///
    /// The coordinate is the overlay's top-left corner: it is multiplied by `scale` and
    /// truncated toward zero. The overlay's own size is not consulted, so the same input
    /// always lands on the same pixel regardless of which signature is placed.
    pub fn from_placement(x: f64, y: f64, scale: ScaleFactor) -> SigpasteResult<Self> {
        if !x.is_finite() || !y.is_finite() {
            return Err(SigpasteError::invalid_input(format!(
                "placement must be finite, got ({x}, {y})"
            )));
        }
        Ok(Self {
            x: (x * scale.get()) as i64,
            y: (y * scale.get()) as i64,
        })
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
