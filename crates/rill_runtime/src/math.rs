//! Checked numeric operations over the three runtime number widths.
//!
//! Division and modulo are generic over [`Number`]; the per-width operations
//! live in the [`int32`], [`int64`], and [`float`] submodules. Integer
//! overflow is outside the checked contract: it follows the host's native
//! multiplication behavior and is not reported through [`Outcome`].

use std::ops::{Div, Rem};

use crate::outcome::{ErrorCode, Outcome};

/// The numeric widths the runtime divides and takes remainders over.
pub trait Number: Copy + PartialEq + Div<Output = Self> + Rem<Output = Self> {
    const ZERO: Self;
}

impl Number for i32 {
    const ZERO: Self = 0;
}

impl Number for i64 {
    const ZERO: Self = 0;
}

impl Number for f64 {
    const ZERO: Self = 0.0;
}

/// Truncating division. Fails with `DivisionByZero` (code 3) when `b == 0`.
#[inline]
pub fn div<T: Number>(a: T, b: T) -> Outcome<T> {
    if b == T::ZERO {
        return Outcome::Err(ErrorCode::DivisionByZero);
    }
    Outcome::Ok(a / b)
}

/// Truncating remainder. Fails with `DivisionByZero` (code 3) when `b == 0`.
///
/// The source-language name is `mod`; `rem` matches the truncating-toward-zero
/// semantics of Rust's `%`.
#[inline]
pub fn rem<T: Number>(a: T, b: T) -> Outcome<T> {
    if b == T::ZERO {
        return Outcome::Err(ErrorCode::DivisionByZero);
    }
    Outcome::Ok(a % b)
}

pub mod int32 {
    use crate::outcome::{ErrorCode, Outcome};

    pub fn abs(x: i32) -> i32 {
        x.abs()
    }

    pub fn min(x: i32, y: i32) -> i32 {
        x.min(y)
    }

    pub fn max(x: i32, y: i32) -> i32 {
        x.max(y)
    }

    /// Integer power. Fails with `InvalidArgument` (code 10) when
    /// `exp < 0`; otherwise multiplies `base` together exactly `exp` times.
    /// The iteration count is observable through overflow timing, so this
    /// stays a plain loop, not exponentiation by squaring.
    pub fn pow(base: i32, exp: i32) -> Outcome<i32> {
        if exp < 0 {
            return Outcome::Err(ErrorCode::InvalidArgument);
        }
        let mut res = 1i32;
        for _ in 0..exp {
            res *= base;
        }
        Outcome::Ok(res)
    }
}

pub mod int64 {
    use crate::outcome::{ErrorCode, Outcome};

    pub fn abs(x: i64) -> i64 {
        x.abs()
    }

    pub fn min(x: i64, y: i64) -> i64 {
        x.min(y)
    }

    pub fn max(x: i64, y: i64) -> i64 {
        x.max(y)
    }

    /// Integer power. Fails with `InvalidArgument` (code 10) when
    /// `exp < 0`; same iterative contract as [`super::int32::pow`].
    pub fn pow(base: i64, exp: i64) -> Outcome<i64> {
        if exp < 0 {
            return Outcome::Err(ErrorCode::InvalidArgument);
        }
        let mut res = 1i64;
        for _ in 0..exp {
            res *= base;
        }
        Outcome::Ok(res)
    }
}

pub mod float {
    use crate::outcome::{ErrorCode, Outcome};

    pub const PI: f64 = std::f64::consts::PI;
    pub const E: f64 = std::f64::consts::E;

    pub fn abs(x: f64) -> f64 {
        x.abs()
    }

    pub fn min(x: f64, y: f64) -> f64 {
        x.min(y)
    }

    pub fn max(x: f64, y: f64) -> f64 {
        x.max(y)
    }

    /// Floating power is total and takes a floating exponent, unlike the
    /// integer widths.
    pub fn pow(base: f64, exp: f64) -> f64 {
        base.powf(exp)
    }

    /// Fails with `InvalidArgument` (code 10) when `x < 0`.
    pub fn sqrt(x: f64) -> Outcome<f64> {
        if x < 0.0 {
            return Outcome::Err(ErrorCode::InvalidArgument);
        }
        Outcome::Ok(x.sqrt())
    }

    /// Natural logarithm. Fails with `InvalidArgument` (code 10) when
    /// `x <= 0`.
    pub fn log(x: f64) -> Outcome<f64> {
        if x <= 0.0 {
            return Outcome::Err(ErrorCode::InvalidArgument);
        }
        Outcome::Ok(x.ln())
    }

    pub fn sin(x: f64) -> f64 {
        x.sin()
    }

    pub fn cos(x: f64) -> f64 {
        x.cos()
    }

    pub fn tan(x: f64) -> f64 {
        x.tan()
    }

    pub fn exp(x: f64) -> f64 {
        x.exp()
    }

    pub fn floor(x: f64) -> f64 {
        x.floor()
    }

    pub fn ceil(x: f64) -> f64 {
        x.ceil()
    }
}
