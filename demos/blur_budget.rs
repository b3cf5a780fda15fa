//! Motion-blur budget for a fixed surveillance camera.
//!
//! Builds a 1080p camera from datasheet values and reports field of view,
//! pixel density and expected motion blur for a range of scene distances,
//! flagging distances where a car at 30 km/h blurs across more than 100
//! pixels per frame.

use anyhow::{ensure, Result};
use optics_core::{km_h_to_mm_s, m_to_mm, mm_to_m, px_per_mm_to_px_per_m, Camera, FrameShape, Vec2};

fn main() -> Result<()> {
    println!("=== Motion Blur Budget (1/3\" sensor, 6 mm lens, 1080p) ===\n");

    let camera = Camera::new(6.0, Vec2::new(4.8, 3.6), FrameShape::new(1920, 1080))?;
    let object_speed = km_h_to_mm_s(30.0);

    println!(
        "AOV: {:.1} x {:.1} degrees, exposure {:.1} ms\n",
        camera.aov_horizontal(),
        camera.aov_vertical(),
        camera.exposure_time() * 1e3
    );

    println!("distance    FOV (m)          density (px/m)   blur (px)");
    for distance_m in [2.4, 4.8, 9.6, 19.2, 38.4] {
        let distance = m_to_mm(distance_m);
        let fov = camera.get_fov(distance);
        let density = camera.get_pixel_density(distance);
        let blur = camera.get_motion_blur(distance, object_speed);

        let flag = if blur > 100.0 { "  <- over budget" } else { "" };
        println!(
            "{:>6.1} m   {:>5.2} x {:>5.2}   {:>10.1}   {:>11.1}{}",
            distance_m,
            mm_to_m(fov.x),
            mm_to_m(fov.y),
            px_per_mm_to_px_per_m(density.y),
            blur,
            flag
        );
    }

    // Sanity check: blur halves when the distance doubles.
    let near = camera.get_motion_blur(m_to_mm(9.6), object_speed);
    let far = camera.get_motion_blur(m_to_mm(19.2), object_speed);
    ensure!(
        (near - 2.0 * far).abs() < 1e-6,
        "blur should scale inversely with distance: {near} vs {far}"
    );

    Ok(())
}
