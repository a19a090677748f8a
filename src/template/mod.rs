//! Canonical shape templates.
//!
//! A `Template` bundles a contour equalized to a fixed length together with
//! the data the matcher needs to reject candidates cheaply: the contour norm,
//! its normalized autocorrelation, and four ACF descriptors. Observed shapes
//! ("samples") use the same type with an empty name.

mod descriptor;

pub use descriptor::{AcfDescriptors, ACF_FILTERS};

use crate::contour::Contour;
use crate::geometry::{Point, Rect};
use crate::util::{ContourMatchError, ContourMatchResult};

/// Canonical contour length used unless a bank overrides it.
pub const DEFAULT_TEMPLATE_SIZE: usize = 30;

/// Smallest canonical length that still yields a non-empty ACF.
pub const MIN_TEMPLATE_SIZE: usize = 2;

/// Named, canonicalized shape.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Template {
    name: String,
    contour: Contour,
    contour_norm: f64,
    acf: Contour,
    descriptors: AcfDescriptors,
    source_area: f64,
    start_point: Point,
    rotation_limited: bool,
}

impl Template {
    /// Builds a template from polygon points.
    ///
    /// Fails for fewer than two points, for `template_size` below
    /// [`MIN_TEMPLATE_SIZE`], and for shapes whose equalized contour has no
    /// energy.
    pub fn from_points(
        name: impl Into<String>,
        points: &[Point],
        source_area: f64,
        template_size: usize,
    ) -> ContourMatchResult<Self> {
        if template_size < MIN_TEMPLATE_SIZE {
            return Err(ContourMatchError::InvalidLength {
                len: template_size,
                context: "template",
            });
        }
        let mut contour = Contour::from_points(points)?;
        contour.equalize(template_size)?;
        if contour.is_degenerate() {
            return Err(ContourMatchError::DegenerateContour {
                reason: "equalized contour has zero norm",
            });
        }
        let contour_norm = contour.norm();
        let acf = contour.auto_correlation(true);
        let descriptors = AcfDescriptors::from_acf(&acf);

        Ok(Self {
            name: name.into(),
            contour,
            contour_norm,
            acf,
            descriptors,
            source_area,
            start_point: points[0],
            rotation_limited: false,
        })
    }

    /// Builds an unnamed sample from an observed polygon.
    pub fn sample(
        points: &[Point],
        source_area: f64,
        template_size: usize,
    ) -> ContourMatchResult<Self> {
        Self::from_points(String::new(), points, source_area, template_size)
    }

    /// Restricts accepted match rotations to less than ±90°.
    pub fn with_rotation_limit(mut self, limited: bool) -> Self {
        self.rotation_limited = limited;
        self
    }

    /// Returns a copy under a different name, e.g. when promoting a sample.
    pub fn renamed(&self, name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..self.clone()
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Canonical (equalized) contour.
    pub fn contour(&self) -> &Contour {
        &self.contour
    }

    /// Norm of the canonical contour.
    pub fn contour_norm(&self) -> f64 {
        self.contour_norm
    }

    /// Normalized autocorrelation of the canonical contour.
    pub fn acf(&self) -> &Contour {
        &self.acf
    }

    pub fn descriptors(&self) -> AcfDescriptors {
        self.descriptors
    }

    /// Pixel area of the source polygon.
    pub fn source_area(&self) -> f64 {
        self.source_area
    }

    /// First point of the source polygon.
    pub fn start_point(&self) -> Point {
        self.start_point
    }

    /// Bounding rectangle of the source polygon.
    pub fn source_rect(&self) -> Rect {
        self.contour.source_rect()
    }

    /// Whether matches must stay within ±90° of the template orientation.
    pub fn rotation_limited(&self) -> bool {
        self.rotation_limited
    }

    /// Canonical contour length.
    pub fn size(&self) -> usize {
        self.contour.len()
    }
}
