//! Integer arithmetic over `i32` with a guarded division.
//!
//! [`Calculator`] is a zero-sized value exposing `add`, `subtract`,
//! `multiply` and `divide`. The first three wrap on overflow. `divide`
//! truncates toward zero and reports [`CalcError::DivideByZero`] for a zero
//! divisor; `i32::MIN / -1` wraps to `i32::MIN`.
//!
//! The [`demo`] module drives the fixed demonstration printed by the `calc`
//! binary, using the call list from [`Config`].

pub mod calculator;
pub mod config;
pub mod demo;
pub mod error;
pub mod operation;

pub use calculator::Calculator;
pub use config::{Call, Config, ConfigError};
pub use error::CalcError;
pub use operation::{Operation, ParseOperationError};

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Calc(#[from] CalcError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

pub type Result<T> = std::result::Result<T, Error>;
