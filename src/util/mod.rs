//! Shared utility helpers.

pub mod error;
pub(crate) mod math;

pub use error::{ContourMatchError, ContourMatchResult};
