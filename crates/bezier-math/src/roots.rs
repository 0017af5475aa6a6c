//! Real roots of a [`Polynomial`].
//!
//! Degrees one and two use the closed forms. Higher degrees split `[-r, r]`
//! (a bound containing every real root) into intervals on which the
//! polynomial is monotonic, using the roots of the derivative, and bisect
//! each one. Odd degrees bisect once over the whole range and deflate.
//!
//! A repeated root touches zero without changing sign, so bisection cannot
//! see it. It sits on a derivative root instead (or on the vertex of a
//! deflated quadratic), where the computed value is only nearly zero; such
//! points are accepted when the value is small against the size of the terms.

use bezier_core::Tolerance;

use crate::Polynomial;

/// Hard ceiling on bisection steps; enough to shrink any finite `f64` range to one ulp.
const MAX_BISECTION_STEPS: u32 = 1200;

/// Largest `|p(x)|`, relative to `Σ|aᵢ||x|ⁱ`, still taken as a touching root.
const TOUCH_TOLERANCE: f64 = 1e-5;

/// Three-way sign.
fn sign(x: f64) -> i8 {
    if x < 0.0 {
        -1
    } else if x > 0.0 {
        1
    } else {
        0
    }
}

fn converged(lo: f64, hi: f64) -> bool {
    (hi - lo).abs() / lo.abs().min(hi.abs()) < Tolerance::BISECTION
}

/// Steps needed to narrow `[min, max]` to the relative bisection width,
/// measured against the smaller endpoint magnitude (floored at machine epsilon).
fn bisection_steps(min: f64, max: f64) -> u32 {
    let width = (max - min).abs();
    let scale = min.abs().min(max.abs()).max(f64::EPSILON);
    let steps = (width / (Tolerance::BISECTION * scale)).log2().ceil();
    steps.clamp(0.0, MAX_BISECTION_STEPS as f64) as u32
}

impl Polynomial {
    /// Real roots, not necessarily distinct, in no particular order.
    ///
    /// Constant and zero polynomials have no roots here; a polynomial with a
    /// `NaN` coefficient has none either.
    pub fn solve(&self) -> Vec<f64> {
        if self.coeffs().iter().any(|c| c.is_nan()) {
            return Vec::new();
        }
        let Some(degree) = self.degree() else {
            return Vec::new();
        };
        let c = self.coeffs();
        match degree {
            0 => Vec::new(),
            1 => vec![-c[0] / c[1]],
            2 => {
                let det = c[1] * c[1] - 4.0 * c[2] * c[0];
                if det < 0.0 {
                    let vertex = -c[1] / (2.0 * c[2]);
                    if self.touches_zero(vertex) {
                        vec![vertex]
                    } else {
                        Vec::new()
                    }
                } else if det == 0.0 {
                    vec![-c[1] / (2.0 * c[2])]
                } else {
                    let sq = det.sqrt();
                    vec![(-c[1] + sq) / (2.0 * c[2]), (-c[1] - sq) / (2.0 * c[2])]
                }
            }
            _ => self.solve_monotonic(degree),
        }
    }

    fn solve_monotonic(&self, degree: usize) -> Vec<f64> {
        let c = self.coeffs();
        let lower: f64 = c[..degree].iter().map(|x| x.abs()).sum();
        let bound = (lower / c[degree].abs()).max(1.0);
        if !bound.is_finite() {
            return Vec::new();
        }

        if degree % 2 == 0 {
            let mut partition = self.differentiate().solve();
            partition.sort_by(f64::total_cmp);
            partition.insert(0, -bound);
            partition.push(bound);

            let touching: Vec<bool> = partition.iter().map(|&x| self.touches_zero(x)).collect();
            let mut roots: Vec<f64> = partition
                .iter()
                .zip(&touching)
                .filter_map(|(&x, &t)| t.then_some(x))
                .collect();
            // A monotonic interval holds no other root beside a touching endpoint.
            for (w, t) in partition.windows(2).zip(touching.windows(2)) {
                if t[0] || t[1] {
                    continue;
                }
                roots.extend(self.solve_in_interval(w[0], w[1]));
            }
            log::debug!("roots of {}: {:?}", self, roots);
            roots
        } else {
            let Some(root) = self.solve_in_interval(-bound, bound) else {
                return Vec::new();
            };
            let mut roots = match self.divide(&Polynomial::new([1.0, -root])) {
                Ok(deflated) => deflated.solve(),
                Err(_) => Vec::new(),
            };
            roots.push(root);
            roots
        }
    }

    /// Whether `x` is a root up to rounding in the evaluation, including
    /// double roots where the polynomial touches zero without crossing.
    fn touches_zero(&self, x: f64) -> bool {
        let magnitude = self
            .coeffs()
            .iter()
            .rev()
            .fold(0.0, |acc, c| acc * x.abs() + c.abs());
        self.evaluate(x).abs() <= TOUCH_TOLERANCE * magnitude
    }

    /// Find the root in `[min, max]`, assuming at most one sign change there.
    ///
    /// Returns an endpoint that evaluates to exactly zero, `None` when both
    /// endpoints share a sign, and otherwise bisects to the relative width
    /// `2^-24` and returns the midpoint. Any `NaN` met on the way yields `None`.
    pub fn solve_in_interval(&self, min: f64, max: f64) -> Option<f64> {
        if self.coeffs().iter().any(|c| c.is_nan()) || !min.is_finite() || !max.is_finite() {
            return None;
        }
        let f_min = self.evaluate(min);
        if f_min == 0.0 {
            return Some(min);
        }
        let f_max = self.evaluate(max);
        if f_max == 0.0 {
            return Some(max);
        }
        if f_min.is_nan() || f_max.is_nan() {
            return None;
        }
        let max_sign = sign(f_max);
        if max_sign * sign(f_min) == 1 {
            return None;
        }

        let (mut lo, mut hi) = (min, max);
        for _ in 0..bisection_steps(min, max) {
            if converged(lo, hi) {
                break;
            }
            let middle = 0.5 * (lo + hi);
            let f_middle = self.evaluate(middle);
            if f_middle.is_nan() {
                return None;
            }
            if f_middle == 0.0 {
                return Some(middle);
            }
            if max_sign * sign(f_middle) == 1 {
                hi = middle;
            } else {
                lo = middle;
            }
        }
        Some(0.5 * (lo + hi))
    }
}
