//! Planar vector arithmetic on complex numbers.

use std::ops::{Add, AddAssign, Mul, Neg, Sub, SubAssign};

/// A 2-D vector stored as a complex number `re + i*im`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Complex {
    /// Real (x) component.
    pub re: f64,
    /// Imaginary (y) component.
    pub im: f64,
}

impl Complex {
    /// The zero vector.
    pub const ZERO: Complex = Complex { re: 0.0, im: 0.0 };

    /// Creates a complex number from rectangular components.
    #[inline]
    pub const fn new(re: f64, im: f64) -> Self {
        Self { re, im }
    }

    /// Creates a complex number from magnitude and angle (radians).
    pub fn from_polar(r: f64, angle: f64) -> Self {
        let (sin, cos) = angle.sin_cos();
        Self::new(r * cos, r * sin)
    }

    /// Euclidean magnitude.
    #[inline]
    pub fn norm(self) -> f64 {
        self.re.hypot(self.im)
    }

    /// Squared magnitude.
    #[inline]
    pub fn norm_sqr(self) -> f64 {
        self.re * self.re + self.im * self.im
    }

    /// Argument in radians, in `(-pi, pi]`.
    #[inline]
    pub fn angle(self) -> f64 {
        self.im.atan2(self.re)
    }

    /// Cosine of the argument; NaN for the zero vector.
    pub fn cos_angle(self) -> f64 {
        self.re / self.norm()
    }

    /// Rotates by an angle given as its cosine and sine.
    #[inline]
    pub fn rotate_by(self, cos: f64, sin: f64) -> Self {
        Self::new(cos * self.re - sin * self.im, sin * self.re + cos * self.im)
    }

    /// Rotates counter-clockwise by `angle` radians.
    pub fn rotate(self, angle: f64) -> Self {
        let (sin, cos) = angle.sin_cos();
        self.rotate_by(cos, sin)
    }
}

impl Add for Complex {
    type Output = Complex;

    #[inline]
    fn add(self, rhs: Complex) -> Complex {
        Complex::new(self.re + rhs.re, self.im + rhs.im)
    }
}

impl AddAssign for Complex {
    #[inline]
    fn add_assign(&mut self, rhs: Complex) {
        self.re += rhs.re;
        self.im += rhs.im;
    }
}

impl Sub for Complex {
    type Output = Complex;

    #[inline]
    fn sub(self, rhs: Complex) -> Complex {
        Complex::new(self.re - rhs.re, self.im - rhs.im)
    }
}

impl SubAssign for Complex {
    #[inline]
    fn sub_assign(&mut self, rhs: Complex) {
        self.re -= rhs.re;
        self.im -= rhs.im;
    }
}

impl Neg for Complex {
    type Output = Complex;

    #[inline]
    fn neg(self) -> Complex {
        Complex::new(-self.re, -self.im)
    }
}

impl Mul for Complex {
    type Output = Complex;

    #[inline]
    fn mul(self, rhs: Complex) -> Complex {
        Complex::new(
            self.re * rhs.re - self.im * rhs.im,
            self.im * rhs.re + self.re * rhs.im,
        )
    }
}

impl Mul<f64> for Complex {
    type Output = Complex;

    #[inline]
    fn mul(self, k: f64) -> Complex {
        Complex::new(k * self.re, k * self.im)
    }
}

impl Mul<Complex> for f64 {
    type Output = Complex;

    #[inline]
    fn mul(self, c: Complex) -> Complex {
        c * self
    }
}
