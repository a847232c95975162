use crate::HtError;

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

pub fn ensure_finite(v: Real, what: &'static str) -> Result<Real, HtError> {
    if v.is_finite() {
        Ok(v)
    } else {
        Err(HtError::NonFinite { what, value: v })
    }
}

/// Finite and `>= 0`. Ratings, lengths and resistances all go through this.
pub fn ensure_non_negative(v: Real, what: &'static str) -> Result<Real, HtError> {
    let v = ensure_finite(v, what)?;
    if v < 0.0 {
        return Err(HtError::Negative { what, value: v });
    }
    Ok(v)
}

/// Round to a fixed number of decimal places for reporting.
pub fn round_to(v: Real, decimals: i32) -> Real {
    let scale = 10f64.powi(decimals);
    (v * scale).round() / scale
}
