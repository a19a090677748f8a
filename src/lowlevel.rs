//! Low-level building blocks for custom matching pipelines.
//!
//! These items expose the correlation kernels, descriptor filters, and
//! candidate ranking used internally by [`TemplateFinder`] and
//! [`FrameProcessor`]. Most users should prefer the top-level API.
//!
//! [`TemplateFinder`]: crate::TemplateFinder
//! [`FrameProcessor`]: crate::FrameProcessor

pub use crate::candidate::overlap::{resolve_overlaps, OverlapConfig};
pub use crate::candidate::topk::{best_k, sort_candidates_desc, Candidate};
pub use crate::contour::MIN_POINTS;
pub use crate::kernel::scalar::ScalarKernel;
#[cfg(feature = "simd")]
pub use crate::kernel::simd::SimdKernel;
pub use crate::kernel::CorrelationKernel;
pub use crate::search::DEFAULT_ANTIPATTERN_NAME;
pub use crate::template::{ACF_FILTERS, DEFAULT_TEMPLATE_SIZE, MIN_TEMPLATE_SIZE};
