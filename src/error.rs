use thiserror::Error;

use crate::math::Real;

/// Errors reported by [`crate::Camera`] construction.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum OpticsError {
    #[error("{name} must be > 0, got {value}")]
    InvalidParameter { name: &'static str, value: Real },
}
