//! Optical geometry calculator for ideal pinhole cameras.
//!
//! This crate contains:
//! - unit conversion helpers ([`units`]),
//! - angle-of-view / field-of-view / pixel-density / motion-blur formulas
//!   over scalar values ([`geometry`]),
//! - the immutable [`Camera`] value object composing them for a fixed set of
//!   camera parameters ([`camera`]).
//!
//! All quantities are plain numbers with the unit documented per function
//! (mm, degrees, pixels, seconds); callers convert between unit systems with
//! the helpers in [`units`]. Everything is pure and side-effect free.
//!
//! ```
//! use optics_core::{units, Camera, FrameShape, Vec2};
//!
//! let camera = Camera::new(6.0, Vec2::new(4.8, 3.6), FrameShape::new(1920, 1080))?;
//! let fov = camera.get_fov(units::m_to_mm(9.6));
//! assert!((units::mm_to_m(fov.x) - 7.68).abs() < 0.1);
//! # Ok::<(), optics_core::OpticsError>(())
//! ```

/// The `Camera` value object.
pub mod camera;
/// Library error type.
pub mod error;
/// Pinhole geometry formulas over scalar values.
pub mod geometry;
/// Scalar and vector type aliases.
pub mod math;
/// Unit conversion helpers.
pub mod units;

pub use camera::Camera;
pub use error::OpticsError;
pub use geometry::*;
pub use math::{FrameShape, Real, Vec2};
pub use units::*;
