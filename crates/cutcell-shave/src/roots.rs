//! Bracketed scalar root finding.
//!
//! [`brentq`] is Brent's method: each step tries inverse quadratic
//! interpolation (or a secant step when only two distinct points are known)
//! and falls back to bisection whenever the interpolated step would leave the
//! bracket or shrink it too slowly. Convergence is guaranteed once `f(a)` and
//! `f(b)` differ in sign, and is superlinear near a simple root.

use crate::error::GeometryError;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RootOptions {
    /// Absolute tolerance on the root location.
    pub xtol: f64,
    /// Relative tolerance on the root location.
    pub rtol: f64,
    pub max_iter: usize,
}

impl Default for RootOptions {
    fn default() -> Self {
        Self {
            xtol: 2e-12,
            rtol: 4.0 * f64::EPSILON,
            max_iter: 100,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Root {
    pub x: f64,
    pub iterations: usize,
    pub evaluations: usize,
}

/// Finds `x` in `[a, b]` with `f(x) == 0` to within
/// `xtol + rtol * |x|`.
///
/// An endpoint where `f` is exactly zero is returned as is. Endpoints of the
/// same sign, or any non-finite endpoint or function value, are an
/// [`GeometryError::InvalidBracket`].
pub fn brentq<F>(mut f: F, a: f64, b: f64, opts: &RootOptions) -> Result<Root, GeometryError>
where
    F: FnMut(f64) -> f64,
{
    let mut xpre = a;
    let mut xcur = b;
    let mut fpre = f(xpre);
    let mut fcur = f(xcur);
    let mut evaluations = 2;

    let invalid = move || GeometryError::InvalidBracket { a, b, fa: fpre, fb: fcur };
    if !(a.is_finite() && b.is_finite() && fpre.is_finite() && fcur.is_finite()) {
        return Err(invalid());
    }
    if fpre == 0.0 {
        return Ok(Root { x: xpre, iterations: 0, evaluations });
    }
    if fcur == 0.0 {
        return Ok(Root { x: xcur, iterations: 0, evaluations });
    }
    if fpre.is_sign_negative() == fcur.is_sign_negative() {
        return Err(invalid());
    }

    // xblk is the contrapoint: f(xblk) and f(xcur) always differ in sign.
    let mut xblk = 0.0;
    let mut fblk = 0.0;
    let mut spre = 0.0;
    let mut scur = 0.0;

    for iteration in 1..=opts.max_iter {
        if fpre != 0.0 && fcur != 0.0 && fpre.is_sign_negative() != fcur.is_sign_negative() {
            xblk = xpre;
            fblk = fpre;
            spre = xcur - xpre;
            scur = spre;
        }
        if fblk.abs() < fcur.abs() {
            xpre = xcur;
            xcur = xblk;
            xblk = xpre;
            fpre = fcur;
            fcur = fblk;
            fblk = fpre;
        }

        let delta = (opts.xtol + opts.rtol * xcur.abs()) / 2.0;
        let sbis = (xblk - xcur) / 2.0;
        if fcur == 0.0 || sbis.abs() < delta {
            return Ok(Root { x: xcur, iterations: iteration, evaluations });
        }

        if spre.abs() > delta && fcur.abs() < fpre.abs() {
            let stry = if xpre == xblk {
                // secant
                -fcur * (xcur - xpre) / (fcur - fpre)
            } else {
                // inverse quadratic
                let dpre = (fpre - fcur) / (xpre - xcur);
                let dblk = (fblk - fcur) / (xblk - xcur);
                -fcur * (fblk * dblk - fpre * dpre) / (dblk * dpre * (fblk - fpre))
            };
            if 2.0 * stry.abs() < spre.abs().min(3.0 * sbis.abs() - delta) {
                spre = scur;
                scur = stry;
            } else {
                spre = sbis;
                scur = sbis;
            }
        } else {
            spre = sbis;
            scur = sbis;
        }

        xpre = xcur;
        fpre = fcur;
        if scur.abs() > delta {
            xcur += scur;
        } else {
            xcur += if sbis > 0.0 { delta } else { -delta };
        }
        fcur = f(xcur);
        evaluations += 1;
        if !fcur.is_finite() {
            return Err(GeometryError::InvalidBracket { a, b, fa: fpre, fb: fcur });
        }
    }

    Err(GeometryError::NoConvergence {
        a,
        b,
        iterations: opts.max_iter,
    })
}
