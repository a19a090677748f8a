//! Coarse ACF descriptors used as a quick-reject fingerprint.

use crate::contour::Contour;

/// Sign patterns applied per quarter of the ACF.
///
/// Row `k` weights the four contiguous quarters of the ACF for descriptor
/// `k`: overall energy, second half minus first half, middle minus ends, and
/// alternating quarters.
pub const ACF_FILTERS: [[i32; 4]; 4] = [
    [1, 1, 1, 1],
    [-1, -1, 1, 1],
    [-1, 1, 1, -1],
    [-1, 1, -1, 1],
];

/// Four integer summaries of a normalized ACF's magnitude distribution.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AcfDescriptors(pub [i32; 4]);

impl AcfDescriptors {
    /// Computes descriptors from an ACF.
    ///
    /// Sample `i` of `count` falls in quarter `4 * i / count`; each descriptor
    /// is `trunc(100 * Σ filter[quarter] * |acf[i]| / count)`. An empty ACF
    /// yields all zeros.
    pub fn from_acf(acf: &Contour) -> Self {
        let count = acf.len();
        if count == 0 {
            return Self::default();
        }
        let mut sums = [0.0f64; 4];
        for (i, v) in acf.iter().enumerate() {
            let magnitude = v.norm();
            let quarter = 4 * i / count;
            for (sum, filter) in sums.iter_mut().zip(ACF_FILTERS.iter()) {
                *sum += f64::from(filter[quarter]) * magnitude;
            }
        }
        Self(sums.map(|sum| (100.0 * sum / count as f64) as i32))
    }

    /// Largest absolute per-descriptor difference.
    pub fn max_deviation(&self, other: &AcfDescriptors) -> u32 {
        self.0
            .iter()
            .zip(other.0.iter())
            .map(|(a, b)| a.abs_diff(*b))
            .max()
            .unwrap_or(0)
    }
}
