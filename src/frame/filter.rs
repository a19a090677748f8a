//! Size and shape-factor filtering of raw contours.

use super::RawContour;
use crate::util::{ContourMatchError, ContourMatchResult};

/// Rejects contours too small, too large, or too thin to be worth matching.
#[derive(Clone, Debug, PartialEq)]
pub struct ContourFilter {
    /// When false every contour is accepted.
    pub enabled: bool,
    /// Minimum perimeter in pixels. This is the measured perimeter, not the
    /// number of polyline points, so it does not depend on how densely the
    /// extractor samples the outline.
    pub min_length: f64,
    /// Minimum enclosed area in pixels.
    pub min_area: f64,
    /// Contours with `area / perimeter` at or below this are rejected.
    /// Like `min_length`, this divides by the perimeter rather than the
    /// point count.
    pub min_form_factor: f64,
    /// Frame `(width, height)`; when set, contours covering more than a fifth
    /// of the frame are rejected.
    pub frame_size: Option<(u32, u32)>,
}

impl Default for ContourFilter {
    fn default() -> Self {
        Self {
            enabled: true,
            min_length: 15.0,
            min_area: 10.0,
            min_form_factor: 0.5,
            frame_size: None,
        }
    }
}

impl ContourFilter {
    pub fn validate(&self) -> ContourMatchResult<()> {
        let limits = [self.min_length, self.min_area, self.min_form_factor];
        if limits.iter().any(|v| !v.is_finite() || *v < 0.0) {
            return Err(ContourMatchError::InvalidConfig {
                reason: "contour filter limits must be finite and >= 0",
            });
        }
        Ok(())
    }

    /// Largest accepted area, if the frame size is known.
    pub fn max_area(&self) -> Option<f64> {
        self.frame_size
            .map(|(w, h)| f64::from(w) * f64::from(h) / 5.0)
    }

    /// Returns true if `contour` should be matched.
    pub fn accepts(&self, contour: &RawContour) -> bool {
        if !self.enabled {
            return true;
        }
        if contour.perimeter < self.min_length || contour.area < self.min_area {
            return false;
        }
        if self.max_area().is_some_and(|max| contour.area > max) {
            return false;
        }
        contour.area / contour.perimeter > self.min_form_factor
    }
}
