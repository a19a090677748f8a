//! SIMD-accelerated kernel using the `wide` crate.
//!
//! The cyclic product is split into two contiguous runs (the tail of `b`
//! starting at `shift`, then its head) so each run can be processed four
//! vectors at a time with `f64x4`.

use crate::complex::Complex;
use crate::kernel::scalar::ScalarKernel;
use crate::kernel::CorrelationKernel;
use wide::f64x4;

const LANES: usize = 4;

#[inline]
fn load_re(v: &[Complex]) -> f64x4 {
    f64x4::from([v[0].re, v[1].re, v[2].re, v[3].re])
}

#[inline]
fn load_im(v: &[Complex]) -> f64x4 {
    f64x4::from([v[0].im, v[1].im, v[2].im, v[3].im])
}

/// Horizontal sum of f64x4.
#[inline]
fn hsum(v: f64x4) -> f64 {
    let arr = v.to_array();
    arr[0] + arr[1] + arr[2] + arr[3]
}

/// Dot and cross sums over two equal-length runs.
fn accumulate(x: &[Complex], y: &[Complex]) -> (f64, f64) {
    debug_assert_eq!(x.len(), y.len());
    let mut acc_a = f64x4::ZERO;
    let mut acc_b = f64x4::ZERO;
    let simd_end = x.len() / LANES * LANES;

    let mut i = 0;
    while i < simd_end {
        let x_re = load_re(&x[i..]);
        let x_im = load_im(&x[i..]);
        let y_re = load_re(&y[i..]);
        let y_im = load_im(&y[i..]);
        acc_a += x_re * y_re + x_im * y_im;
        acc_b += x_im * y_re - x_re * y_im;
        i += LANES;
    }

    let mut sum_a = hsum(acc_a);
    let mut sum_b = hsum(acc_b);
    for (x1, x2) in x[simd_end..].iter().zip(&y[simd_end..]) {
        sum_a += x1.re * x2.re + x1.im * x2.im;
        sum_b += x1.im * x2.re - x1.re * x2.im;
    }
    (sum_a, sum_b)
}

/// Vectorized kernel; falls back to [`ScalarKernel`] for unequal lengths.
pub struct SimdKernel;

impl CorrelationKernel for SimdKernel {
    fn scalar_product(a: &[Complex], b: &[Complex], shift: usize) -> Complex {
        let n = b.len();
        if a.is_empty() || n == 0 {
            return Complex::ZERO;
        }
        if a.len() != n {
            return ScalarKernel::scalar_product(a, b, shift);
        }
        let start = shift % n;
        let (a_head, a_tail) = a.split_at(n - start);
        let (b_head, b_tail) = b.split_at(start);
        let (ha, hb) = accumulate(a_head, b_tail);
        let (ta, tb) = accumulate(a_tail, b_head);
        Complex::new(ha + ta, hb + tb)
    }
}
