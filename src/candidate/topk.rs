//! Ranking of template candidates.

use std::cmp::Ordering;

/// A template that passed the matching cascade for one sample.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Candidate {
    /// Index of the template in the searched list.
    pub index: usize,
    /// Similarity score in `[0, 1]`.
    pub rate: f64,
    /// Rotation from sample to template, in radians.
    pub angle: f64,
}

fn candidate_cmp_desc(a: &Candidate, b: &Candidate) -> Ordering {
    b.rate
        .total_cmp(&a.rate)
        .then_with(|| a.index.cmp(&b.index))
}

/// Sorts candidates by descending rate; ties keep template order.
pub fn sort_candidates_desc(candidates: &mut [Candidate]) {
    candidates.sort_by(candidate_cmp_desc);
}

/// Keeps the `k` best candidates, best first.
pub fn best_k(mut candidates: Vec<Candidate>, k: usize) -> Vec<Candidate> {
    sort_candidates_desc(&mut candidates);
    candidates.truncate(k);
    candidates
}

#[cfg(test)]
mod tests {
    use super::{best_k, Candidate};

    fn cand(index: usize, rate: f64) -> Candidate {
        Candidate {
            index,
            rate,
            angle: 0.0,
        }
    }

    #[test]
    fn keeps_best_k_in_order() {
        let all = vec![cand(0, 0.5), cand(1, 0.9), cand(2, 0.7), cand(3, 0.1)];
        assert_eq!(best_k(all, 2), vec![cand(1, 0.9), cand(2, 0.7)]);
    }

    #[test]
    fn ties_prefer_earlier_templates() {
        let all = vec![cand(4, 0.8), cand(1, 0.8), cand(7, 0.8)];
        assert_eq!(best_k(all, 2), vec![cand(1, 0.8), cand(4, 0.8)]);
    }

    #[test]
    fn zero_k_keeps_nothing() {
        assert!(best_k(vec![cand(0, 1.0)], 0).is_empty());
    }
}
