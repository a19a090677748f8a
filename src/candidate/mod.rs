//! Candidate ranking and overlap resolution.
//!
//! Includes best-first ranking of template candidates and containment-based
//! suppression of duplicate or nested detections.

pub(crate) mod overlap;
pub(crate) mod topk;
