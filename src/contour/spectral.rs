//! Discrete Fourier transform of the edge-vector sequence.

use super::Contour;
use crate::complex::Complex;
use std::f64::consts::TAU;

impl Contour {
    /// Direct O(N²) DFT: `out[m] = Σ v[n] · e^{-2πi·m·n/N}`.
    pub fn fourier(&self) -> Contour {
        let count = self.len();
        let vectors = (0..count)
            .map(|m| {
                let k = -TAU * m as f64 / count as f64;
                self.iter()
                    .enumerate()
                    .fold(Complex::ZERO, |sum, (n, v)| sum + v.rotate(k * n as f64))
            })
            .collect();
        Contour::from_vectors(vectors)
    }
}
