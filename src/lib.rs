//! ContourMatch recognizes known 2-D shapes by contour analysis.
//!
//! Shapes are stored as sequences of edge vectors, which makes them invariant
//! to translation; correlation over those sequences adds invariance to
//! rotation, uniform scale, and starting point. A stored [`Template`] keeps a
//! canonical contour, its normalized autocorrelation, and four coarse
//! descriptors. [`TemplateFinder`] matches an observed sample against a
//! [`TemplateBank`], and [`FrameProcessor`] runs the whole per-frame pass
//! including overlap resolution. Contour extraction from images is left to
//! the caller.
//!
//! Optional features: `rayon` (parallel frame passes), `simd` (vectorized
//! correlation kernel), `serde` (persistence derives), `tracing` (spans and
//! events).

pub mod bank;
mod candidate;
pub mod complex;
pub mod contour;
pub mod distance;
pub mod frame;
pub mod geometry;
pub mod kernel;
pub mod lowlevel;
pub mod search;
pub mod template;
mod trace;
pub mod util;

pub use bank::TemplateBank;
pub use complex::Complex;
pub use contour::Contour;
pub use distance::{distance_by_relation, estimate_distance};
pub use frame::{ContourFilter, Detection, FrameConfig, FrameOutput, FrameProcessor, RawContour};
pub use geometry::{polygon_area, polygon_perimeter, Point, Rect, RectF};
pub use search::{FinderConfig, FoundMatch, TemplateFinder};
pub use template::{AcfDescriptors, Template};
pub use util::{ContourMatchError, ContourMatchResult};

pub use candidate::overlap::{resolve_overlaps, OverlapConfig};
pub use candidate::topk::{best_k, sort_candidates_desc, Candidate};
