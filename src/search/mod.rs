//! Matching observed shapes against stored templates.
//!
//! [`TemplateFinder`] runs a cheap-to-expensive rejection cascade (ACF
//! descriptors, ACF similarity, inter-correlation) for every stored template
//! and keeps the best-scoring survivor.

mod finder;

pub use finder::TemplateFinder;

use crate::template::Template;
use crate::util::math::safe_recip;
use crate::util::{ContourMatchError, ContourMatchResult};
use std::f64::consts::PI;

/// Default name of negative templates.
pub const DEFAULT_ANTIPATTERN_NAME: &str = "antipattern";

/// Thresholds and switches for the matching cascade.
#[derive(Clone, Debug, PartialEq)]
pub struct FinderConfig {
    /// Minimum normalized ACF similarity.
    pub min_acf: f64,
    /// Minimum normalized inter-correlation peak.
    pub min_icf: f64,
    /// Run the ACF similarity test.
    pub check_acf: bool,
    /// Run the inter-correlation test (also resolves the rotation angle).
    pub check_icf: bool,
    /// Largest accepted rotation magnitude, in radians.
    pub max_rotate_angle: f64,
    /// Largest accepted per-descriptor difference.
    pub max_acf_descriptor_deviation: u32,
    /// Templates with this name suppress a match instead of producing one.
    pub antipattern_name: String,
}

impl Default for FinderConfig {
    fn default() -> Self {
        Self {
            min_acf: 0.96,
            min_icf: 0.85,
            check_acf: true,
            check_icf: true,
            max_rotate_angle: PI,
            max_acf_descriptor_deviation: 4,
            antipattern_name: DEFAULT_ANTIPATTERN_NAME.to_owned(),
        }
    }
}

impl FinderConfig {
    /// Rejects negative, non-finite, or out-of-range thresholds.
    pub fn validate(&self) -> ContourMatchResult<()> {
        if !(0.0..=1.0).contains(&self.min_acf) {
            return Err(ContourMatchError::InvalidConfig {
                reason: "min_acf must be within [0, 1]",
            });
        }
        if !(0.0..=1.0).contains(&self.min_icf) {
            return Err(ContourMatchError::InvalidConfig {
                reason: "min_icf must be within [0, 1]",
            });
        }
        if !self.max_rotate_angle.is_finite() || self.max_rotate_angle < 0.0 {
            return Err(ContourMatchError::InvalidConfig {
                reason: "max_rotate_angle must be finite and >= 0",
            });
        }
        Ok(())
    }
}

/// A sample matched to a stored template.
#[derive(Clone, Copy, Debug)]
pub struct FoundMatch<'a> {
    /// The stored template that matched.
    pub template: &'a Template,
    /// The observed shape.
    pub sample: &'a Template,
    /// Similarity score in `[0, 1]`.
    pub rate: f64,
    /// Rotation aligning the sample to the template, in radians.
    pub angle: f64,
}

impl FoundMatch<'_> {
    /// Linear scale of the sample relative to the template,
    /// `sqrt(sample_area / template_area)`; 1 when the template area is zero.
    pub fn scale(&self) -> f64 {
        match safe_recip(self.template.source_area()) {
            Some(k) => (self.sample.source_area() * k).sqrt(),
            None => 1.0,
        }
    }

    /// Rotation angle in degrees.
    pub fn angle_deg(&self) -> f64 {
        self.angle.to_degrees()
    }
}
