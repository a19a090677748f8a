//! Contour length equalization.

use super::Contour;
use crate::complex::Complex;
use crate::util::{ContourMatchError, ContourMatchResult};

impl Contour {
    /// Resamples the contour to exactly `new_len` edge vectors.
    ///
    /// Upsampling interpolates linearly between the two source vectors that
    /// bracket the fractional index `i * len / new_len`. Downsampling adds
    /// each source vector `i` into slot `i * new_len / len`; slots sum rather
    /// than average, so the total edge walk (and the closure of the shape) is
    /// preserved while individual magnitudes grow with the reduction ratio.
    pub fn equalize(&mut self, new_len: usize) -> ContourMatchResult<()> {
        if new_len == 0 {
            return Err(ContourMatchError::InvalidLength {
                len: new_len,
                context: "equalization",
            });
        }
        if self.is_empty() {
            return Err(ContourMatchError::InvalidLength {
                len: 0,
                context: "source contour",
            });
        }
        self.vectors = if new_len > self.len() {
            upsample(&self.vectors, new_len)
        } else {
            downsample(&self.vectors, new_len)
        };
        Ok(())
    }

    /// Returns a resampled copy, leaving `self` untouched.
    pub fn equalized(&self, new_len: usize) -> ContourMatchResult<Contour> {
        let mut out = self.clone();
        out.equalize(new_len)?;
        Ok(out)
    }
}

fn upsample(src: &[Complex], new_len: usize) -> Vec<Complex> {
    let old_len = src.len();
    (0..new_len)
        .map(|i| {
            let index = (i * old_len) as f64 / new_len as f64;
            let j = index as usize;
            let k = index - j as f64;
            if j + 1 >= old_len {
                src[j]
            } else {
                src[j] * (1.0 - k) + src[j + 1] * k
            }
        })
        .collect()
}

fn downsample(src: &[Complex], new_len: usize) -> Vec<Complex> {
    let old_len = src.len();
    let mut out = vec![Complex::ZERO; new_len];
    for (i, v) in src.iter().enumerate() {
        out[i * new_len / old_len] += *v;
    }
    out
}

#[cfg(test)]
mod tests {
    use crate::complex::Complex;
    use crate::contour::Contour;
    use crate::util::ContourMatchError;

    #[test]
    fn upsampling_interpolates_between_neighbours() {
        let mut c = Contour::from_vectors(vec![Complex::new(0.0, 0.0), Complex::new(4.0, 2.0)]);
        c.equalize(4).unwrap();
        assert_eq!(
            c.as_slice(),
            &[
                Complex::new(0.0, 0.0),
                Complex::new(2.0, 1.0),
                Complex::new(4.0, 2.0),
                Complex::new(4.0, 2.0),
            ]
        );
    }

    #[test]
    fn downsampling_accumulates_into_buckets() {
        let vectors = (1..=6).map(|k| Complex::new(k as f64, 0.0)).collect();
        let mut c = Contour::from_vectors(vectors);
        c.equalize(3).unwrap();
        assert_eq!(
            c.as_slice(),
            &[
                Complex::new(3.0, 0.0),
                Complex::new(7.0, 0.0),
                Complex::new(11.0, 0.0),
            ]
        );
    }

    #[test]
    fn same_length_is_identity() {
        let vectors: Vec<Complex> = (0..5).map(|k| Complex::new(k as f64, 1.0)).collect();
        let c = Contour::from_vectors(vectors.clone());
        assert_eq!(c.equalized(5).unwrap().as_slice(), vectors.as_slice());
    }

    #[test]
    fn downsampling_preserves_closure() {
        let vectors: Vec<Complex> = (0..37)
            .map(|k| Complex::from_polar(1.0, k as f64 * std::f64::consts::TAU / 37.0))
            .collect();
        let c = Contour::from_vectors(vectors).equalized(10).unwrap();
        let sum = c.iter().fold(Complex::ZERO, |acc, v| acc + *v);
        assert!(sum.norm() < 1e-9);
    }

    #[test]
    fn rejects_zero_target_and_empty_source() {
        let mut c = Contour::from_vectors(vec![Complex::new(1.0, 0.0)]);
        assert_eq!(
            c.equalize(0).unwrap_err(),
            ContourMatchError::InvalidLength {
                len: 0,
                context: "equalization"
            }
        );
        let mut empty = Contour::default();
        assert!(empty.equalize(4).is_err());
    }
}
