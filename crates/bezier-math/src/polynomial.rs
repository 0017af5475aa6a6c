//! Single-variable real polynomials.
//!
//! Values are immutable: every arithmetic operation returns a new
//! [`Polynomial`]. Coefficients are stored lowest power first, while
//! [`Polynomial::new`] takes them in the usual written order, highest
//! power first.

use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};

use bezier_core::{CurveError, Result};

/// A polynomial with real coefficients.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Polynomial {
    /// `coeffs[i]` is the coefficient of `x^i`. Trailing zeros are allowed.
    coeffs: Vec<f64>,
}

impl Polynomial {
    /// Build from coefficients written highest power first.
    ///
    /// `Polynomial::new([1.0, -3.0, 2.0])` is `x^2 - 3x + 2`.
    pub fn new(highest_first: impl IntoIterator<Item = f64>) -> Self {
        let mut coeffs: Vec<f64> = highest_first.into_iter().collect();
        coeffs.reverse();
        Self { coeffs }
    }

    /// Build from coefficients ordered constant term first.
    pub fn from_ascending(coeffs: Vec<f64>) -> Self {
        Self { coeffs }
    }

    /// Build the monic polynomial `(x - r0)(x - r1)...` from its roots.
    pub fn from_roots(roots: &[f64]) -> Self {
        roots.iter().fold(Self::constant(1.0), |acc, &r| {
            &acc * &Self::new([1.0, -r])
        })
    }

    pub fn constant(c: f64) -> Self {
        Self { coeffs: vec![c] }
    }

    pub fn zero() -> Self {
        Self::constant(0.0)
    }

    /// Coefficients, constant term first.
    pub fn coeffs(&self) -> &[f64] {
        &self.coeffs
    }

    /// Coefficient of `x^power`, zero past the stored length.
    pub fn coeff(&self, power: usize) -> f64 {
        self.coeffs.get(power).copied().unwrap_or(0.0)
    }

    /// Index of the highest non-zero coefficient.
    ///
    /// `None` stands for the degree of the zero polynomial (negative infinity).
    pub fn degree(&self) -> Option<usize> {
        self.coeffs.iter().rposition(|&c| c != 0.0)
    }

    /// Leading coefficient, zero for the zero polynomial.
    pub fn leading(&self) -> f64 {
        self.degree().map_or(0.0, |d| self.coeffs[d])
    }

    pub fn is_zero(&self) -> bool {
        self.degree().is_none()
    }

    /// Evaluate at `x` with Horner's method.
    pub fn evaluate(&self, x: f64) -> f64 {
        let Some(degree) = self.degree() else {
            return 0.0;
        };
        self.coeffs[..=degree]
            .iter()
            .rev()
            .fold(0.0, |acc, &c| acc * x + c)
    }

    pub fn scale(&self, k: f64) -> Self {
        Self {
            coeffs: self.coeffs.iter().map(|c| c * k).collect(),
        }
    }

    /// Multiply by `x^power`, shifting every coefficient up.
    pub fn multiply_by_power(&self, power: usize) -> Self {
        let mut coeffs = vec![0.0; power];
        coeffs.extend_from_slice(&self.coeffs);
        Self { coeffs }
    }

    /// Long division from the highest term down, returning `(quotient, remainder)`.
    pub fn div_rem(&self, divisor: &Polynomial) -> Result<(Polynomial, Polynomial)> {
        let divisor_degree = divisor.degree().ok_or(CurveError::DivisionByZero)?;
        let lead = divisor.coeffs[divisor_degree];

        let Some(degree) = self.degree().filter(|&d| d >= divisor_degree) else {
            return Ok((Self::zero(), self.clone()));
        };

        let mut quotient = vec![0.0; degree - divisor_degree + 1];
        let mut rest = self.clone();
        for power in (divisor_degree..=degree).rev() {
            let shift = power - divisor_degree;
            let q = rest.coeff(power) / lead;
            quotient[shift] = q;
            rest = &rest - &divisor.scale(q).multiply_by_power(shift);
            // The subtraction leaves rounding noise where the term was cancelled.
            if let Some(c) = rest.coeffs.get_mut(power) {
                *c = 0.0;
            }
        }
        Ok((Self { coeffs: quotient }, rest))
    }

    /// Quotient of long division; the remainder is discarded.
    ///
    /// Fails with [`CurveError::DivisionByZero`] when `divisor` is the zero polynomial.
    pub fn divide(&self, divisor: &Polynomial) -> Result<Polynomial> {
        self.div_rem(divisor).map(|(quotient, _)| quotient)
    }

    pub fn differentiate(&self) -> Self {
        let Some(degree) = self.degree().filter(|&d| d > 0) else {
            return Self::zero();
        };
        Self {
            coeffs: (1..=degree).map(|i| i as f64 * self.coeffs[i]).collect(),
        }
    }
}

fn zip_with(a: &[f64], b: &[f64], op: impl Fn(f64, f64) -> f64) -> Vec<f64> {
    let len = a.len().max(b.len());
    (0..len)
        .map(|i| {
            let x = a.get(i).copied().unwrap_or(0.0);
            let y = b.get(i).copied().unwrap_or(0.0);
            op(x, y)
        })
        .collect()
}

impl<'a> Add<&'a Polynomial> for &'a Polynomial {
    type Output = Polynomial;

    fn add(self, rhs: &Polynomial) -> Polynomial {
        Polynomial {
            coeffs: zip_with(&self.coeffs, &rhs.coeffs, |x, y| x + y),
        }
    }
}

impl<'a> Sub<&'a Polynomial> for &'a Polynomial {
    type Output = Polynomial;

    fn sub(self, rhs: &Polynomial) -> Polynomial {
        Polynomial {
            coeffs: zip_with(&self.coeffs, &rhs.coeffs, |x, y| x - y),
        }
    }
}

impl<'a> Mul<&'a Polynomial> for &'a Polynomial {
    type Output = Polynomial;

    fn mul(self, rhs: &Polynomial) -> Polynomial {
        let Some(degree) = rhs.degree() else {
            return Polynomial::zero();
        };
        (0..=degree).fold(Polynomial::zero(), |acc, i| {
            &acc + &self.scale(rhs.coeffs[i]).multiply_by_power(i)
        })
    }
}

impl Add for Polynomial {
    type Output = Polynomial;

    fn add(self, rhs: Polynomial) -> Polynomial {
        &self + &rhs
    }
}

impl Sub for Polynomial {
    type Output = Polynomial;

    fn sub(self, rhs: Polynomial) -> Polynomial {
        &self - &rhs
    }
}

impl Mul for Polynomial {
    type Output = Polynomial;

    fn mul(self, rhs: Polynomial) -> Polynomial {
        &self * &rhs
    }
}

impl Neg for &Polynomial {
    type Output = Polynomial;

    fn neg(self) -> Polynomial {
        self.scale(-1.0)
    }
}

impl fmt::Display for Polynomial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Some(degree) = self.degree() else {
            return write!(f, "0");
        };
        for power in (1..=degree).rev() {
            match power {
                1 => write!(f, "{}x + ", self.coeffs[power])?,
                _ => write!(f, "{}x^{} + ", self.coeffs[power], power)?,
            }
        }
        write!(f, "{}", self.coeffs[0])
    }
}
