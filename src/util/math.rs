//! Numeric guards for normalization.

/// Magnitudes at or below this are treated as zero when dividing.
pub(crate) const NORM_EPS: f64 = 1e-12;

/// Returns `1 / value` unless `value` is negligible or non-finite.
pub(crate) fn safe_recip(value: f64) -> Option<f64> {
    if value.is_finite() && value.abs() > NORM_EPS {
        Some(1.0 / value)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::safe_recip;

    #[test]
    fn safe_recip_rejects_zero_and_nan() {
        assert_eq!(safe_recip(0.0), None);
        assert_eq!(safe_recip(1e-15), None);
        assert_eq!(safe_recip(f64::NAN), None);
        assert_eq!(safe_recip(f64::INFINITY), None);
        assert_eq!(safe_recip(4.0), Some(0.25));
    }
}
