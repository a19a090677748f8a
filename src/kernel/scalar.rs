//! Scalar reference kernel.

use crate::complex::Complex;
use crate::kernel::CorrelationKernel;

/// Bounds-checked scalar kernel.
pub struct ScalarKernel;

impl CorrelationKernel for ScalarKernel {
    fn scalar_product(a: &[Complex], b: &[Complex], shift: usize) -> Complex {
        if a.is_empty() || b.is_empty() {
            return Complex::ZERO;
        }
        let start = shift % b.len();
        let mut sum_a = 0.0f64;
        let mut sum_b = 0.0f64;
        for (x1, x2) in a.iter().zip(b.iter().cycle().skip(start)) {
            sum_a += x1.re * x2.re + x1.im * x2.im;
            sum_b += x1.im * x2.re - x1.re * x2.im;
        }
        Complex::new(sum_a, sum_b)
    }
}

#[cfg(test)]
mod tests {
    use super::ScalarKernel;
    use crate::complex::Complex;
    use crate::kernel::CorrelationKernel;

    #[test]
    fn shift_reads_other_cyclically() {
        let a = [Complex::new(1.0, 0.0), Complex::new(0.0, 0.0), Complex::new(0.0, 0.0)];
        let b = [Complex::new(1.0, 0.0), Complex::new(2.0, 0.0), Complex::new(3.0, 1.0)];
        assert_eq!(ScalarKernel::scalar_product(&a, &b, 0), Complex::new(1.0, 0.0));
        assert_eq!(ScalarKernel::scalar_product(&a, &b, 2), Complex::new(3.0, -1.0));
        assert_eq!(ScalarKernel::scalar_product(&a, &b, 5), Complex::new(3.0, -1.0));
    }

    #[test]
    fn product_is_dot_and_cross() {
        let a = [Complex::new(2.0, 1.0)];
        let b = [Complex::new(-1.0, 3.0)];
        let p = ScalarKernel::scalar_product(&a, &b, 0);
        assert_eq!(p.re, 2.0 * -1.0 + 1.0 * 3.0);
        assert_eq!(p.im, 1.0 * -1.0 - 2.0 * 3.0);
    }

    #[test]
    fn empty_inputs_give_zero() {
        let a = [Complex::new(1.0, 1.0)];
        assert_eq!(ScalarKernel::scalar_product(&a, &[], 0), Complex::ZERO);
        assert_eq!(ScalarKernel::scalar_product(&[], &a, 0), Complex::ZERO);
    }
}
