use crate::TfError;

/// Floating point type used throughout system
pub type Real = f64;

/// One tolerance for everything
#[derive(Clone, Copy, Debug)]
pub struct Tolerances {
    pub abs: Real,
    pub rel: Real,
}

impl Default for Tolerances {
    fn default() -> Self {
        Self {
            abs: 1e-12,
            rel: 1e-9,
        }
    }
}

pub fn nearly_equal(a: Real, b: Real, tol: Tolerances) -> bool {
    let diff = (a - b).abs();
    if diff <= tol.abs {
        return true;
    }
    diff <= tol.rel * a.abs().max(b.abs())
}

pub fn ensure_finite(v: Real, what: &'static str) -> Result<Real, TfError> {
    if v.is_finite() {
        Ok(v)
    } else {
        Err(TfError::NonFinite { what, value: v })
    }
}

/// Integrate sampled `y(x)` with the composite trapezoidal rule.
///
/// Samples are taken in the order given; `x` need not be uniformly spaced.
/// Fewer than two samples integrate to zero. NaN anywhere in the inputs
/// yields NaN.
pub fn trapezoid(y: &[Real], x: &[Real]) -> Result<Real, TfError> {
    if y.len() != x.len() {
        return Err(TfError::LengthMismatch {
            what: "trapezoid samples",
            left: y.len(),
            right: x.len(),
        });
    }

    let area = x
        .windows(2)
        .zip(y.windows(2))
        .map(|(xs, ys)| (xs[1] - xs[0]) * (ys[0] + ys[1]) * 0.5)
        .sum();
    Ok(area)
}
