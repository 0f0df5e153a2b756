//! Failures surfaced by [`BigNumber`](crate::BigNumber) operations.

use thiserror::Error;

/// Invalid-argument conditions raised by arithmetic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BigNumberError {
    /// Division or modulo with a zero right-hand operand.
    #[error("Error: Division by zero.")]
    DivisionByZero,
    /// Exponentiation with a negative exponent.
    #[error("Error: Power is negative.")]
    NegativePower,
}

/// Decimal text that does not match `[+-]?[0-9]*`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ParseBigNumberError {
    #[error("invalid digit {digit:?} at position {position}")]
    InvalidDigit { digit: char, position: usize },
}

/// [`BigNumberError`] or success.
pub type Result<T> = std::result::Result<T, BigNumberError>;
