//! Size-ratio to distance estimation.
//!
//! The curve is an empirical fit: a quartic below [`BREAKPOINT`] and a line
//! above it. The two pieces do not meet exactly; the quartic ends about 0.3
//! units above the line at the breakpoint, and it bottoms out slightly before
//! the breakpoint (near a ratio of 0.40).

/// Ratio at which the estimator switches from the quartic to the line.
pub const BREAKPOINT: f64 = 0.42;

const QUARTIC: [f64; 5] = [195.518, -2200.19, 11189.6, -25944.1, 22243.6];
const LINE: [f64; 2] = [20.069, -12.069];

/// Maps an observed size ratio (e.g. observed height over reference height)
/// to an estimated distance.
pub fn distance_by_relation(ratio: f64) -> f64 {
    let coeffs: &[f64] = if ratio < BREAKPOINT { &QUARTIC } else { &LINE };
    // Horner evaluation, highest degree first.
    coeffs.iter().rev().fold(0.0, |acc, c| acc * ratio + c)
}

/// Distance estimate from an observed and a reference size.
///
/// Returns `None` when the reference is not a positive finite number or the
/// observed size is not finite.
pub fn estimate_distance(observed: f64, reference: f64) -> Option<f64> {
    if !observed.is_finite() || !reference.is_finite() || reference <= 0.0 {
        return None;
    }
    Some(distance_by_relation(observed / reference))
}
