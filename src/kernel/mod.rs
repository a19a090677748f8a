//! Correlation kernel implementations.
//!
//! The cyclic scalar product is the inner loop of every ACF and ICF
//! evaluation. Kernels work on contiguous slices with safe indexing; the
//! `simd` feature swaps in a `wide`-vectorized variant at compile time.

use crate::complex::Complex;

/// Kernel trait for the cyclic edge-vector scalar product.
pub trait CorrelationKernel {
    /// Computes `Σ a[i] · conj(b[(i + shift) mod b.len()])` over all `i`.
    ///
    /// The real part is the dot product of the vectors, the imaginary part
    /// is their cross product. Returns zero when either slice is empty.
    fn scalar_product(a: &[Complex], b: &[Complex], shift: usize) -> Complex;
}

pub mod scalar;
#[cfg(feature = "simd")]
pub mod simd;

#[cfg(not(feature = "simd"))]
pub(crate) type DefaultKernel = scalar::ScalarKernel;
#[cfg(feature = "simd")]
pub(crate) type DefaultKernel = simd::SimdKernel;
