//! Error types for the isa-analysis crate.
//!
//! The atmosphere model itself is a total function and never fails. These errors come from the
//! typed-input boundary around it: text entry, unit selection and sweep configuration.

/// Error type for the crate.
#[derive(Clone, PartialEq, Debug, thiserror::Error)]
pub enum IsaError {
    /// Text entered for a numeric input could not be read as a number.
    #[error("Invalid number: {0:?}")]
    InvalidNumber(String),
    /// A sweep configuration that cannot produce a sequence of altitudes.
    #[error("Invalid sweep, the step must be positive and the ceiling above the floor.")]
    InvalidSweep,
    /// Unrecognized unit system name.
    #[error("Unknown unit system: {0:?}")]
    UnknownUnitSystem(String),
}

/// Shorthand for results.
pub type Result<T> = ::std::result::Result<T, IsaError>;
