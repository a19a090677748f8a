//! Containment-based suppression of duplicate detections.

use crate::search::FoundMatch;
use crate::util::{ContourMatchError, ContourMatchResult};

/// Parameters for [`resolve_overlaps`].
#[derive(Clone, Debug, PartialEq)]
pub struct OverlapConfig {
    /// Pixels added to each side of the larger rectangle before the
    /// containment test.
    pub margin: i32,
    /// Area ratio (contained / container) at or above which two detections
    /// are treated as the same shape seen twice.
    pub same_shape_ratio: f64,
}

impl Default for OverlapConfig {
    fn default() -> Self {
        Self {
            margin: 4,
            same_shape_ratio: 0.9,
        }
    }
}

impl OverlapConfig {
    /// Checks that the margin is non-negative and the ratio lies in `[0, 1]`.
    pub fn validate(&self) -> ContourMatchResult<()> {
        if self.margin < 0 {
            return Err(ContourMatchError::InvalidConfig {
                reason: "overlap margin must be >= 0",
            });
        }
        if !(0.0..=1.0).contains(&self.same_shape_ratio) {
            return Err(ContourMatchError::InvalidConfig {
                reason: "same_shape_ratio must be within [0, 1]",
            });
        }
        Ok(())
    }
}

/// Removes duplicate and nested detections.
///
/// Matches are sorted by descending sample bounding-rectangle area (stable,
/// so equal areas keep input order). For each surviving match `i`, its
/// rectangle is inflated by `margin` and every later surviving match `j`
/// fully inside it is examined: when `area(j) / area(i)` reaches
/// `same_shape_ratio` only the higher rate survives (ties drop `i`),
/// otherwise `j` is dropped regardless of rate. A dropped `i` stops
/// suppressing further matches. Survivors are returned largest first.
pub fn resolve_overlaps<'a>(
    mut matches: Vec<FoundMatch<'a>>,
    cfg: &OverlapConfig,
) -> Vec<FoundMatch<'a>> {
    matches.sort_by_key(|m| std::cmp::Reverse(m.sample.source_rect().area()));

    let mut keep = vec![true; matches.len()];
    for i in 0..matches.len() {
        if !keep[i] {
            continue;
        }
        let big_rect = matches[i].sample.source_rect();
        let big_area = big_rect.area() as f64;
        let outer = big_rect.inflate(cfg.margin, cfg.margin);

        for j in (i + 1)..matches.len() {
            if !keep[j] {
                continue;
            }
            let small_rect = matches[j].sample.source_rect();
            if !outer.contains(&small_rect) {
                continue;
            }
            let same_shape = big_area > 0.0
                && small_rect.area() as f64 / big_area >= cfg.same_shape_ratio;
            if same_shape && matches[i].rate <= matches[j].rate {
                keep[i] = false;
                break;
            }
            keep[j] = false;
        }
    }

    matches
        .into_iter()
        .zip(keep)
        .filter_map(|(m, kept)| kept.then_some(m))
        .collect()
}
