//! The arithmetic core.
//!
//! All operations work on `i32`. Overflow is never reported: `add`,
//! `subtract` and `multiply` return the two's-complement wraparound of the
//! true result, matching the behavior of unchecked machine arithmetic in
//! release builds. Division truncates toward zero.

use calc_guard::guard;

use crate::{CalcError, Operation};

/// A stateless calculator.
///
/// Carries no fields, so every call depends only on its arguments and the
/// value can be shared freely across threads.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Calculator;

impl Calculator {
    pub const fn new() -> Self {
        Calculator
    }

    /// `a + b`, wrapping on overflow.
    pub const fn add(&self, a: i32, b: i32) -> i32 {
        a.wrapping_add(b)
    }

    /// `a - b`, wrapping on overflow.
    pub const fn subtract(&self, a: i32, b: i32) -> i32 {
        a.wrapping_sub(b)
    }

    /// `a * b`, wrapping on overflow.
    pub const fn multiply(&self, a: i32, b: i32) -> i32 {
        a.wrapping_mul(b)
    }

    /// `a / b` truncated toward zero.
    ///
    /// The divisor is checked before any arithmetic happens. `i32::MIN / -1`
    /// does not fit in `i32` and wraps to `i32::MIN`.
    ///
    /// # Errors
    ///
    /// [`CalcError::DivideByZero`] when `b == 0`.
    #[guard(
        requires: b != 0 else CalcError::DivideByZero,
        ensures: |quotient| match quotient {
            Ok(q) => q.wrapping_mul(b).wrapping_add(a.wrapping_rem(b)) == a,
            Err(_) => true,
        },
    )]
    pub fn divide(&self, a: i32, b: i32) -> Result<i32, CalcError> {
        Ok(a.wrapping_div(b))
    }

    /// Evaluates `op` on `a` and `b`.
    pub fn apply(&self, op: Operation, a: i32, b: i32) -> Result<i32, CalcError> {
        tracing::trace!(%op, a, b, "applying operation");
        match op {
            Operation::Add => Ok(self.add(a, b)),
            Operation::Subtract => Ok(self.subtract(a, b)),
            Operation::Multiply => Ok(self.multiply(a, b)),
            Operation::Divide => self.divide(a, b),
        }
    }
}
