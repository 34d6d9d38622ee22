//! Configuration for the Newton-Raphson solver.
//!
//! Provides [`NewtonCfg`] with default tolerances and iteration limits.
//!
//! [`NewtonCfg`] — fields
//! ├ `abs_fx`   : convergence tolerance on `|f(x)|`
//! ├ `fd_step`  : finite-difference interval `h`
//! └ `max_iter` : iteration cap (optional)
//!
//! [`NewtonCfg::new`] initializes the configuration with default values;
//! the setters validate and replace individual fields.


use super::errors::{RootFindingError, ToleranceError};


pub const DEFAULT_ABS_FX   : f64   = 1e-6;
pub const DEFAULT_FD_STEP  : f64   = 1e-6;
pub const DEFAULT_MAX_ITER : usize = 1000;


/// Newton configuration.
///
/// # Construction
/// - Use [`NewtonCfg::new`] then optional setters.
///
/// # Defaults
/// - `abs_fx`   : [`DEFAULT_ABS_FX`]
/// - `fd_step`  : [`DEFAULT_FD_STEP`]
/// - `max_iter` : `None`; [`newton`](super::newton::newton) resolves it
///   to [`DEFAULT_MAX_ITER`].
#[derive(Debug, Copy, Clone)]
pub struct NewtonCfg {
    abs_fx   : f64,
    fd_step  : f64,
    max_iter : Option<usize>,
}

impl NewtonCfg {
    #[must_use]
    pub fn new() -> Self {
        Self {
            abs_fx   : DEFAULT_ABS_FX,
            fd_step  : DEFAULT_FD_STEP,
            max_iter : None,
        }
    }

    // getters
    pub fn abs_fx(&self)   -> f64 { self.abs_fx }
    pub fn fd_step(&self)  -> f64 { self.fd_step }
    pub fn max_iter(&self) -> Option<usize> { self.max_iter }

    /// Sets the convergence tolerance on `|f(x)|`. Must be finite and > 0.
    pub fn set_abs_fx(mut self, v: f64) -> Result<Self, ToleranceError> {
        if !v.is_finite() || v <= 0.0 {
            return Err(ToleranceError::InvalidAbsFx { got: v });
        }
        self.abs_fx = v;
        Ok(self)
    }

    /// Sets the finite-difference interval `h`. Must be finite and > 0.
    pub fn set_fd_step(mut self, v: f64) -> Result<Self, ToleranceError> {
        if !v.is_finite() || v <= 0.0 {
            return Err(ToleranceError::InvalidFdStep { got: v });
        }
        self.fd_step = v;
        Ok(self)
    }

    /// Sets the iteration cap. Must be >= 1.
    pub fn set_max_iter(mut self, v: usize) -> Result<Self, RootFindingError> {
        if v == 0 {
            return Err(RootFindingError::InvalidMaxIter { got: v });
        }
        self.max_iter = Some(v);
        Ok(self)
    }
}
