//! Edge-vector contour representation.
//!
//! A `Contour` stores the vectors between consecutive polygon points rather
//! than the points themselves, so the same shape yields the same contour at
//! any image position. The image y axis points down; edge vectors flip it so
//! that positive angles are counter-clockwise on screen.

mod correlation;
mod resample;
mod spectral;

use crate::complex::Complex;
use crate::geometry::{Point, Rect, RectF};
use crate::util::math::{safe_recip, NORM_EPS};
use crate::util::{ContourMatchError, ContourMatchResult};

/// Minimum number of points that form a closed contour.
pub const MIN_POINTS: usize = 2;

/// Ordered sequence of edge vectors describing a closed shape.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Contour {
    vectors: Vec<Complex>,
    source_rect: Rect,
}

impl Contour {
    /// Builds a closed contour from polygon points (last point joins the first).
    pub fn from_points(points: &[Point]) -> ContourMatchResult<Self> {
        let source_rect = match Rect::bounding(points) {
            Some(rect) if points.len() >= MIN_POINTS => rect,
            _ => {
                return Err(ContourMatchError::TooFewPoints {
                    got: points.len(),
                    min: MIN_POINTS,
                })
            }
        };
        let vectors = points
            .iter()
            .zip(points.iter().cycle().skip(1))
            .map(|(p1, p2)| {
                Complex::new(
                    f64::from(p2.x) - f64::from(p1.x),
                    f64::from(p1.y) - f64::from(p2.y),
                )
            })
            .collect();
        Ok(Self {
            vectors,
            source_rect,
        })
    }

    /// Wraps raw edge vectors; the source rectangle is left empty.
    pub fn from_vectors(vectors: Vec<Complex>) -> Self {
        Self {
            vectors,
            source_rect: Rect::default(),
        }
    }

    /// Number of edge vectors.
    #[inline]
    pub fn len(&self) -> usize {
        self.vectors.len()
    }

    /// Returns true if the contour has no vectors.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vectors.is_empty()
    }

    /// Returns the vector at `index` if it is within bounds.
    #[inline]
    pub fn get(&self, index: usize) -> Option<Complex> {
        self.vectors.get(index).copied()
    }

    /// Returns the edge vectors.
    #[inline]
    pub fn as_slice(&self) -> &[Complex] {
        &self.vectors
    }

    /// Iterates over the edge vectors in order.
    pub fn iter(&self) -> std::slice::Iter<'_, Complex> {
        self.vectors.iter()
    }

    /// Bounding rectangle of the source points (pixel-inclusive).
    #[inline]
    pub fn source_rect(&self) -> Rect {
        self.source_rect
    }

    /// Sum of squared vector magnitudes.
    pub fn norm_sqr(&self) -> f64 {
        self.vectors.iter().map(|v| v.norm_sqr()).sum()
    }

    /// Euclidean norm of the contour ("energy").
    pub fn norm(&self) -> f64 {
        self.norm_sqr().sqrt()
    }

    /// Index of the first vector with the largest magnitude.
    pub fn max_norm_index(&self) -> Option<usize> {
        let mut best: Option<(usize, f64)> = None;
        for (idx, v) in self.vectors.iter().enumerate() {
            let n = v.norm_sqr();
            match best {
                Some((_, max)) if n <= max => {}
                _ => best = Some((idx, n)),
            }
        }
        best.map(|(idx, _)| idx)
    }

    /// First vector with the largest magnitude, or zero for an empty contour.
    pub fn max_norm_item(&self) -> Complex {
        self.max_norm_index()
            .map_or(Complex::ZERO, |idx| self.vectors[idx])
    }

    /// Rescales so that the largest vector has unit magnitude.
    ///
    /// Leaves the contour unchanged when every vector is negligible.
    pub fn normalize(&mut self) {
        if let Some(k) = safe_recip(self.max_norm_item().norm()) {
            self.scale(k);
        }
    }

    /// Multiplies every vector by a real factor.
    pub fn scale(&mut self, k: f64) {
        for v in &mut self.vectors {
            *v = *v * k;
        }
    }

    /// Multiplies every vector by a complex factor (rotation and scale).
    pub fn mult(&mut self, c: Complex) {
        for v in &mut self.vectors {
            *v = c * *v;
        }
    }

    /// Rotates every vector counter-clockwise by `angle` radians.
    pub fn rotate(&mut self, angle: f64) {
        let (sin, cos) = angle.sin_cos();
        for v in &mut self.vectors {
            *v = v.rotate_by(cos, sin);
        }
    }

    /// Rebuilds the absolute polyline starting at `start`.
    ///
    /// Returns `len() + 1` points; for a closed contour the last point equals
    /// the first.
    pub fn points_from(&self, start: Point) -> Vec<Point> {
        let mut out = Vec::with_capacity(self.vectors.len() + 1);
        let mut x = f64::from(start.x);
        let mut y = f64::from(start.y);
        out.push(start);
        for v in &self.vectors {
            x += v.re;
            y -= v.im;
            out.push(Point::new(x.round() as i32, y.round() as i32));
        }
        out
    }

    /// Extent of the running vector sum, starting from the origin.
    pub fn bounds_rect(&self) -> RectF {
        let (mut min_x, mut max_x, mut min_y, mut max_y) = (0.0f64, 0.0f64, 0.0f64, 0.0f64);
        let (mut sum_x, mut sum_y) = (0.0f64, 0.0f64);
        for v in &self.vectors {
            sum_x += v.re;
            sum_y += v.im;
            min_x = min_x.min(sum_x);
            max_x = max_x.max(sum_x);
            min_y = min_y.min(sum_y);
            max_y = max_y.max(sum_y);
        }
        RectF {
            x: min_x,
            y: min_y,
            width: max_x - min_x,
            height: max_y - min_y,
        }
    }

    /// Returns true if the contour has no measurable energy.
    pub fn is_degenerate(&self) -> bool {
        self.norm() <= NORM_EPS
    }
}

impl<'a> IntoIterator for &'a Contour {
    type Item = &'a Complex;
    type IntoIter = std::slice::Iter<'a, Complex>;

    fn into_iter(self) -> Self::IntoIter {
        self.vectors.iter()
    }
}
