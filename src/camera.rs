//! The [`Camera`] value object.

use serde::{Deserialize, Serialize};

use crate::error::OpticsError;
use crate::geometry::{
    aov, aov_vertical_wrt_frame_size, fov, motion_blur_pixels, pixel_density,
};
use crate::math::{FrameShape, Real, Vec2};

/// An ideal pinhole camera with fixed optical parameters.
///
/// Construct it once from datasheet values, then derive scene-dependent
/// quantities (field of view, pixel density, motion blur) for any number of
/// distances. Immutable after construction; all derivation methods are pure,
/// so a `Camera` can be shared freely across threads.
///
/// Units: focal length and sensor dimensions in mm, frame dimensions in
/// pixels, exposure time in seconds. Constructors reject non-positive
/// parameters with [`OpticsError::InvalidParameter`].
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Camera {
    /// Focal length in mm.
    focal_length: Real,
    /// Physical sensor size in mm (`x` = width, `y` = height).
    sensor_shape: Vec2,
    /// Frame resolution in pixels (`x` = width, `y` = height).
    frame_shape: FrameShape,
    /// Exposure time in seconds.
    exposure_time: Real,
}

impl Camera {
    /// Exposure time used by [`Camera::new`], a common video default.
    pub const DEFAULT_EXPOSURE_TIME: Real = 1.0 / 30.0;

    /// Build a camera with the default 1/30 s exposure time.
    pub fn new(
        focal_length: Real,
        sensor_shape: Vec2,
        frame_shape: FrameShape,
    ) -> Result<Self, OpticsError> {
        Self::with_exposure_time(
            focal_length,
            sensor_shape,
            frame_shape,
            Self::DEFAULT_EXPOSURE_TIME,
        )
    }

    /// Build a camera with an explicit exposure time in seconds.
    pub fn with_exposure_time(
        focal_length: Real,
        sensor_shape: Vec2,
        frame_shape: FrameShape,
        exposure_time: Real,
    ) -> Result<Self, OpticsError> {
        ensure_positive("focal_length", focal_length)?;
        ensure_positive("sensor_shape.x", sensor_shape.x)?;
        ensure_positive("sensor_shape.y", sensor_shape.y)?;
        ensure_positive("frame_shape.x", Real::from(frame_shape.x))?;
        ensure_positive("frame_shape.y", Real::from(frame_shape.y))?;
        ensure_positive("exposure_time", exposure_time)?;

        Ok(Self {
            focal_length,
            sensor_shape,
            frame_shape,
            exposure_time,
        })
    }

    /// Focal length in mm.
    pub fn focal_length(&self) -> Real {
        self.focal_length
    }

    /// Sensor size in mm.
    pub fn sensor_shape(&self) -> Vec2 {
        self.sensor_shape
    }

    /// Frame resolution in pixels.
    pub fn frame_shape(&self) -> FrameShape {
        self.frame_shape
    }

    /// Exposure time in seconds.
    pub fn exposure_time(&self) -> Real {
        self.exposure_time
    }

    /// Horizontal angle of view in degrees.
    pub fn aov_horizontal(&self) -> Real {
        aov(self.sensor_shape.x, self.focal_length)
    }

    /// Vertical angle of view in degrees, derived from the horizontal one
    /// via the frame aspect ratio (square-pixel assumption).
    pub fn aov_vertical(&self) -> Real {
        aov_vertical_wrt_frame_size(
            self.aov_horizontal(),
            self.frame_shape.x,
            self.frame_shape.y,
        )
    }

    /// Field of view in mm at the given distance (mm).
    ///
    /// Returns `x` = horizontal extent, `y` = vertical extent.
    pub fn get_fov(&self, distance: Real) -> Vec2 {
        Vec2::new(
            fov(self.aov_horizontal(), distance),
            fov(self.aov_vertical(), distance),
        )
    }

    /// Motion blur in pixels for an object at `distance` (mm) moving at
    /// `object_speed` (mm/s), over one exposure.
    ///
    /// Blur is measured along the frame's vertical axis; the result is not
    /// clamped, so values above the frame height signal full-frame blur.
    pub fn get_motion_blur(&self, distance: Real, object_speed: Real) -> Real {
        let aov_horizontal = aov(self.sensor_shape.x, self.focal_length);
        let aov_vertical =
            aov_vertical_wrt_frame_size(aov_horizontal, self.frame_shape.x, self.frame_shape.y);
        let fov_vertical = fov(aov_vertical, distance);

        motion_blur_pixels(
            object_speed,
            self.exposure_time,
            self.frame_shape.y,
            fov_vertical,
        )
    }

    /// Pixel density in px/mm at the given distance (mm).
    ///
    /// Returns `x` = horizontal density, `y` = vertical density.
    pub fn get_pixel_density(&self, distance: Real) -> Vec2 {
        let fov = self.get_fov(distance);
        Vec2::new(
            pixel_density(self.frame_shape.x, fov.x),
            pixel_density(self.frame_shape.y, fov.y),
        )
    }
}

fn ensure_positive(name: &'static str, value: Real) -> Result<(), OpticsError> {
    if value > 0.0 {
        Ok(())
    } else {
        Err(OpticsError::InvalidParameter { name, value })
    }
}
