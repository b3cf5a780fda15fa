//! Scalar and vector type aliases shared across the crate.

use nalgebra::Vector2;

/// Scalar type used throughout the library (currently `f64`).
pub type Real = f64;

/// Paired horizontal/vertical extent with [`Real`] components.
///
/// By convention `x` is the horizontal axis and `y` the vertical axis.
pub type Vec2 = Vector2<Real>;

/// Frame resolution in pixels (`x` = width, `y` = height).
pub type FrameShape = Vector2<u32>;
