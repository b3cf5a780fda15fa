//! Pinhole-camera geometry formulas.
//!
//! Free functions over scalar values; units are documented per argument and
//! must not be mixed (convert with [`crate::units`] first). None of these
//! functions validate their inputs: degenerate values such as a zero focal
//! length propagate as IEEE infinities/NaNs. Parameter validation happens
//! once, at [`crate::Camera`] construction.

use crate::math::Real;

/// Angle of view in degrees subtended by one sensor dimension.
///
/// Arguments: `sensor_side` in mm, `focal_length` in mm.
///
/// `focal_length == 0` yields a division by zero; the result is then
/// `2 * atan(inf)` = 180 degrees rather than a finite angle.
pub fn aov(sensor_side: Real, focal_length: Real) -> Real {
    2.0 * (sensor_side / (2.0 * focal_length)).atan().to_degrees()
}

/// Vertical angle of view in degrees derived from the horizontal one via the
/// frame aspect ratio.
///
/// Assumes square pixels and no lens distortion, see
/// <http://hugin.sourceforge.net/docs/manual/Field_of_View.html>.
///
/// Arguments: `aov_horizontal` in degrees, frame dimensions in pixels.
pub fn aov_vertical_wrt_frame_size(
    aov_horizontal: Real,
    frame_width: u32,
    frame_height: u32,
) -> Real {
    let aspect_ratio = Real::from(frame_height) / Real::from(frame_width);
    let half_tangent = (aov_horizontal / 2.0).to_radians().tan();
    2.0 * (half_tangent * aspect_ratio).atan().to_degrees()
}

/// Linear field of view at a given distance, in the same unit as `distance`.
///
/// Rectilinear projection of the angle onto a plane: valid for small to
/// moderate angles of view.
///
/// Arguments: `aov` in degrees, `distance` to the scene plane.
pub fn fov(aov: Real, distance: Real) -> Real {
    2.0 * (aov.to_radians() / 2.0).tan() * distance
}

/// Vertical field of view scaled from the horizontal one by the frame aspect
/// ratio.
///
/// Linear counterpart of [`aov_vertical_wrt_frame_size`]; the two derivations
/// agree for square pixels.
pub fn fov_vertical_wrt_frame_size(
    fov_horizontal: Real,
    frame_width: u32,
    frame_height: u32,
) -> Real {
    fov_horizontal * Real::from(frame_height) / Real::from(frame_width)
}

/// Horizontal field of view scaled from the vertical one.
///
/// Exact algebraic inverse of [`fov_vertical_wrt_frame_size`].
pub fn fov_horizontal_wrt_frame_size(
    fov_vertical: Real,
    frame_width: u32,
    frame_height: u32,
) -> Real {
    fov_vertical * Real::from(frame_width) / Real::from(frame_height)
}

/// Pixels per millimetre of scene along one axis.
///
/// Arguments: `frame_side` in pixels, `fov_side` in mm. A zero `fov_side`
/// yields infinity.
pub fn pixel_density(frame_side: u32, fov_side: Real) -> Real {
    Real::from(frame_side) / fov_side
}

/// Scene extent in mm along one axis via similar triangles.
///
/// Numerically equivalent to `fov(aov(sensor_side, focal_length), distance)`
/// up to the tangent/arc-tangent round trip.
///
/// Arguments: `distance` in mm, `sensor_side` in mm, `focal_length` in mm.
pub fn scene_size(distance: Real, sensor_side: Real, focal_length: Real) -> Real {
    distance * sensor_side / focal_length
}

/// Motion blur extent in pixels along one axis.
///
/// Distance travelled during the exposure, mapped to pixels through the
/// frame's pixel density along that axis. Not clamped to the frame size: a
/// result larger than `frame_side` signals full-frame blur.
///
/// Arguments: `object_speed` in mm/s, `exposure_time` in s, `frame_side` in
/// pixels, `scene_side` in mm.
pub fn motion_blur_pixels(
    object_speed: Real,
    exposure_time: Real,
    frame_side: u32,
    scene_side: Real,
) -> Real {
    object_speed * exposure_time * (Real::from(frame_side) / scene_side)
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOL: Real = 0.1;

    #[test]
    fn vertical_fov_derivations_agree() {
        // Angular path (through aov_vertical) and linear path (aspect-ratio
        // scaling) must give the same vertical FOV.
        let cases = [
            (4.8, 6.0, 9600.0, 1920, 1080),
            (36.0, 50.0, 20_000.0, 6000, 4000),
            (6.4, 2.8, 3000.0, 1280, 720),
            (4.8, 12.0, 15_000.0, 1024, 768),
        ];
        for (sensor_w, focal, distance, frame_w, frame_h) in cases {
            let aov_h = aov(sensor_w, focal);
            let fov_h = fov(aov_h, distance);

            let linear = fov_vertical_wrt_frame_size(fov_h, frame_w, frame_h);
            let angular = fov(aov_vertical_wrt_frame_size(aov_h, frame_w, frame_h), distance);

            assert!(
                (linear - angular).abs() < TOL,
                "paths disagree: {linear} vs {angular} for f={focal}"
            );
        }
    }

    #[test]
    fn horizontal_fov_inverts_vertical() {
        for fov_h in [1.0, 7680.0, 0.5, 123.456] {
            let fov_v = fov_vertical_wrt_frame_size(fov_h, 1920, 1080);
            let back = fov_horizontal_wrt_frame_size(fov_v, 1920, 1080);
            assert!((back - fov_h).abs() < 1e-9, "{back} != {fov_h}");
        }
    }

    #[test]
    fn scene_size_matches_fov_derivation() {
        let (sensor_w, focal, distance) = (4.8, 6.0, 9600.0);
        let via_triangles = scene_size(distance, sensor_w, focal);
        let via_aov = fov(aov(sensor_w, focal), distance);
        assert!((via_triangles - via_aov).abs() < 1e-6);
        assert!((via_triangles - 7680.0).abs() < 1e-6);
    }

    #[test]
    fn pixel_density_scales_inversely_with_fov() {
        let d1 = pixel_density(1080, 4320.0);
        let d2 = pixel_density(1080, 8640.0);
        assert!((d1 - 2.0 * d2).abs() < 1e-12);
        assert!((d1 - 0.25).abs() < 1e-12);
    }

    #[test]
    fn motion_blur_scales_linearly() {
        let blur = |speed: Real, exposure: Real| motion_blur_pixels(speed, exposure, 1080, 4320.0);
        assert_eq!(blur(0.0, 1.0 / 30.0), 0.0);
        let base = blur(1000.0, 1.0 / 30.0);
        assert!((blur(2000.0, 1.0 / 30.0) - 2.0 * base).abs() < 1e-9);
        assert!((blur(1000.0, 2.0 / 30.0) - 2.0 * base).abs() < 1e-9);
    }

    #[test]
    fn motion_blur_can_exceed_frame_size() {
        // Very fast object over a long exposure: blur covers more than the
        // whole frame and is reported as such.
        let blur = motion_blur_pixels(100_000.0, 0.5, 1080, 4320.0);
        assert!(blur > 1080.0);
    }

    #[test]
    fn zero_focal_length_degenerates_to_half_turn() {
        let a = aov(4.8, 0.0);
        // atan(inf) = pi/2, so the angle saturates at 180 degrees.
        assert!((a - 180.0).abs() < 1e-9);
        assert!(pixel_density(1080, 0.0).is_infinite());
    }
}
