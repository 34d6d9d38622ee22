//! Numerical slope estimation.
//!
//! Implements the central-difference formula
//!
//! ```text
//! f'(x) ≈ (f(x + h) - f(x - h)) / (2h)
//! ```
//!
//! which is second-order accurate (error ~ h²) at the cost of two
//! function evaluations per call, versus first-order for a one-sided
//! difference.


/// Approximates `f'(x)` with a central finite difference of step `h`.
///
/// # Arguments
/// - `f` : function whose slope is sought
/// - `x` : point of evaluation
/// - `h` : finite-difference interval;
///   [`DEFAULT_FD_STEP`](super::config::DEFAULT_FD_STEP) is the
///   conventional choice
///
/// # Behavior
/// No guard against `h` underflow or `f` being non-differentiable at
/// `x`; the returned slope is whatever the difference quotient computes.
/// The solver finite-checks its own stencil evaluations instead of
/// relying on this routine.
#[inline]
pub fn central_difference<F>(mut f: F, x: f64, h: f64) -> f64
where
    F: FnMut(f64) -> f64,
{
    (f(x + h) - f(x - h)) / (2.0 * h)
}
