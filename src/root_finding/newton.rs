//! Newton-Raphson method

use super::config::{NewtonCfg, DEFAULT_MAX_ITER};
use super::errors::{RootFindingError, ToleranceError};
use super::report::{RootFindingReport, TerminationReason};
use thiserror::Error;


pub(crate) const ALGORITHM_NAME: &str = "newton";


#[derive(Debug, Error)]
pub enum NewtonError {
    #[error(transparent)]
    RootFinding(#[from] RootFindingError),

    #[error(transparent)]
    Tolerance(#[from] ToleranceError),

    #[error("invalid initial guess: x0={x0} must be finite")]
    InvalidGuess { x0: f64 },

    #[error("derivative vanished at x={x}, f'(x)={dfx}; tangent has no x-intercept")]
    DerivativeVanished { x: f64, dfx: f64 },

    #[error("derivative non-finite at x={x}, f'(x)={dfx}")]
    DerivativeNotFinite { x: f64, dfx: f64 },
}


/// Helpers
/// - `eval_fx_checked` : evaluates `f(x)` with finite-check
/// - `eval_dfx_fd`     : central finite-difference over a checked stencil
#[inline]
fn eval_fx_checked<F>(
    f: &mut F,
    x: f64,
    evals: &mut usize
) -> Result<f64, NewtonError> where F: FnMut(f64) -> f64 {
    let fx = { *evals += 1; f(x) };
    if !fx.is_finite() {
        return Err(RootFindingError::NonFiniteEvaluation { x, fx }.into());
    }

    Ok(fx)
}
#[inline]
fn eval_dfx_fd<F>(
    f: &mut F,
    x: f64,
    h: f64,
    evals: &mut usize
) -> Result<f64, NewtonError> where F: FnMut(f64) -> f64 {
    let fxp = eval_fx_checked(f, x + h, evals)?;
    let fxm = eval_fx_checked(f, x - h, evals)?;
    let dfx = (fxp - fxm) / (2.0 * h);
    if !dfx.is_finite() {
        return Err(NewtonError::DerivativeNotFinite { x, dfx });
    }

    Ok(dfx)
}


fn newton_loop<F>(
    mut f: F,
    x0: f64,
    cfg: NewtonCfg,
) -> Result<RootFindingReport, NewtonError>
where
    F: FnMut(f64) -> f64
{
    let abs_fx   = cfg.abs_fx();
    let fd_step  = cfg.fd_step();
    let num_iter = cfg.max_iter().unwrap_or(DEFAULT_MAX_ITER);

    let mut evals: usize = 0;

    let mut x  = x0;
    let mut fx = eval_fx_checked(&mut f, x, &mut evals)?;

    for iter in 0..num_iter {
        // |f(x)| is tested before the slope, so an already-converged
        // guess never reports a vanished derivative
        if fx.abs() < abs_fx {
            return Ok(RootFindingReport {
                root               : x,
                f_root             : fx,
                iterations         : iter,
                evaluations        : evals,
                termination_reason : TerminationReason::ToleranceReached,
                algorithm_name     : ALGORITHM_NAME,
            });
        }

        let dfx = eval_dfx_fd(&mut f, x, fd_step, &mut evals)?;
        if dfx.abs() < f64::EPSILON {
            return Err(NewtonError::DerivativeVanished { x, dfx });
        }

        x -= fx / dfx;
        fx = eval_fx_checked(&mut f, x, &mut evals)?;
    }

    Ok(RootFindingReport {
        root               : x,
        f_root             : fx,
        iterations         : num_iter,
        evaluations        : evals,
        termination_reason : TerminationReason::IterationLimit,
        algorithm_name     : ALGORITHM_NAME,
    })
}


/// Finds a root of `func` using the
/// [Newton–Raphson method](https://en.wikipedia.org/wiki/Newton_method)
/// with a central finite-difference slope estimate.
///
/// # Arguments
/// - `func` : function whose root is sought
/// - `x0`   : finite initial guess
/// - `cfg`  : [`NewtonCfg`] (tolerance, `fd_step`, optional `max_iter`)
///
/// # Returns
/// [`RootFindingReport`] with:
/// - `root`                : approximate root (or last guess on budget exhaustion)
/// - `f_root`              : function value at `root`
/// - `iterations`          : number of Newton updates performed
/// - `evaluations`         : total evaluations of `func` (incl. FD stencil)
/// - `termination_reason`  : why it stopped
/// - `algorithm_name`      : "newton"
///
/// An exhausted iteration budget is *not* an error: the report comes back
/// tagged [`TerminationReason::IterationLimit`] with the last guess as a
/// best-effort value, and [`RootFindingReport::converged`] returns `false`.
///
/// # Errors
/// - [`NewtonError::InvalidGuess`]         : `x0` non-finite
/// - [`NewtonError::DerivativeVanished`]   : `|f'(x)|` within machine epsilon
///   of zero; a zero-slope tangent has no x-intercept, so no next guess exists
/// - [`NewtonError::DerivativeNotFinite`]  : FD quotient overflowed
///
/// * Propagated via [`NewtonError::RootFinding`]:
/// - [`RootFindingError::NonFiniteEvaluation`] : `func` produced NaN/inf,
///   at an iterate or at a stencil point `x ± h`
///
/// # Behavior
/// - Convergence is judged solely on `|f(x)| < abs_fx`, never on the size of
///   successive steps. A function that is nearly flat near a root can
///   therefore converge at a point visibly away from the true root, and a
///   steep one may take extra iterations even when `x` is already close.
/// - The tolerance test runs before the derivative each iteration, so a
///   guess already within tolerance returns at iteration 0.
/// - Iterates that oscillate or wander off are caught only by the iteration
///   cap, unless an evaluation turns non-finite first, which fails fast.
/// - Referentially transparent: identical `func` and `x0` give identical
///   reports.
///
/// # Notes
/// - Quadratic convergence requires a good initial guess and smooth `f`;
///   poor guesses can cycle or diverge. Convergence is *local only*.
pub fn newton<F>(
    func: F,
    x0: f64,
    cfg: NewtonCfg,
) -> Result<RootFindingReport, NewtonError>
where
    F: FnMut(f64) -> f64 {

    if !x0.is_finite() {
        return Err(NewtonError::InvalidGuess { x0 });
    }

    newton_loop(func, x0, cfg)
}
