//! Correlation functions over edge-vector contours.

use super::Contour;
use crate::complex::Complex;
use crate::kernel::{CorrelationKernel, DefaultKernel};
use crate::util::math::safe_recip;

impl Contour {
    /// Cyclic scalar product with `other` read from index `shift`.
    ///
    /// The real part sums the dot products of paired vectors and the
    /// imaginary part sums their cross products, so the result's magnitude
    /// measures similarity and its angle the rotation from `other` to `self`.
    pub fn scalar_product(&self, other: &Contour, shift: usize) -> Complex {
        DefaultKernel::scalar_product(self.as_slice(), other.as_slice(), shift)
    }

    /// Scalar product at shift 0 scaled by `1 / (‖self‖·‖other‖)`.
    ///
    /// Returns zero when either contour has negligible energy.
    pub fn normalized_scalar_product(&self, other: &Contour) -> Complex {
        match safe_recip(self.norm() * other.norm()) {
            Some(k) => self.scalar_product(other, 0) * k,
            None => Complex::ZERO,
        }
    }

    /// Inter-correlation function: the scalar product at every shift of `other`.
    pub fn inter_correlation(&self, other: &Contour) -> Contour {
        let vectors = (0..self.len())
            .map(|shift| self.scalar_product(other, shift))
            .collect();
        Contour::from_vectors(vectors)
    }

    /// Inter-correlation restricted to the `max_shift / 2` smallest shifts in
    /// each direction.
    ///
    /// Forward shifts fill the front of the result and backward shifts
    /// (`other.len() - 1`, `other.len() - 2`, ...) fill it from the back. For
    /// odd `max_shift` the middle slot stays zero.
    pub fn inter_correlation_window(&self, other: &Contour, max_shift: usize) -> Contour {
        let max_shift = max_shift.min(other.len());
        let mut vectors = vec![Complex::ZERO; max_shift];
        for i in 0..max_shift / 2 {
            vectors[i] = self.scalar_product(other, i);
            vectors[max_shift - i - 1] = self.scalar_product(other, other.len() - i - 1);
        }
        Contour::from_vectors(vectors)
    }

    /// Autocorrelation function for shifts `0..len/2`.
    ///
    /// With `normalize`, every value is divided by the largest magnitude so
    /// magnitudes fall in `[0, 1]`; a zero-energy contour is left unscaled.
    pub fn auto_correlation(&self, normalize: bool) -> Contour {
        let count = self.len() / 2;
        let mut vectors: Vec<Complex> = (0..count)
            .map(|shift| self.scalar_product(self, shift))
            .collect();
        if normalize {
            let max_norm_sqr = vectors.iter().map(|v| v.norm_sqr()).fold(0.0, f64::max);
            if let Some(k) = safe_recip(max_norm_sqr.sqrt()) {
                for v in &mut vectors {
                    *v = *v * k;
                }
            }
        }
        Contour::from_vectors(vectors)
    }

    /// Squared distance `‖A‖² + ‖B‖² − 2·Re⟨A, B⟩`.
    pub fn distance(&self, other: &Contour) -> f64 {
        self.norm_sqr() + other.norm_sqr() - 2.0 * self.scalar_product(other, 0).re
    }

    /// R² similarity of the per-vector magnitudes, `1 − mean(Δ²) / max²`.
    ///
    /// Compares element-wise over the shorter contour; returns 0 when both
    /// contours are empty or zero.
    pub fn diff_r2(&self, other: &Contour) -> f64 {
        let count = self.len().min(other.len());
        let mut max1 = 0.0f64;
        let mut max2 = 0.0f64;
        let mut sum = 0.0f64;
        for (a, b) in self.iter().zip(other.iter()) {
            let v1 = a.norm();
            let v2 = b.norm();
            max1 = max1.max(v1);
            max2 = max2.max(v2);
            sum += (v1 - v2) * (v1 - v2);
        }
        let max = max1.max(max2);
        match safe_recip(count as f64 * max * max) {
            Some(k) => 1.0 - sum * k,
            None => 0.0,
        }
    }
}
