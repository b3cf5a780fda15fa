//! Unit conversion helpers.
//!
//! Every formula in this crate works in one fixed unit system (millimetres,
//! seconds, pixels); these helpers bridge to the units that camera datasheets
//! and scene descriptions usually come in. They are plain linear scalings with
//! no validation: negative or zero inputs pass through unchanged.

use crate::math::Real;

/// Convert a speed from km/h to mm/s.
pub fn km_h_to_mm_s(value: Real) -> Real {
    value * 1.0e6 / 3600.0
}

/// Convert a length from metres to millimetres.
pub fn m_to_mm(value: Real) -> Real {
    value * 1.0e3
}

/// Convert a length from millimetres to metres.
pub fn mm_to_m(value: Real) -> Real {
    value / 1.0e3
}

/// Convert a linear pixel density from px/mm to px/m.
pub fn px_per_mm_to_px_per_m(value: Real) -> Real {
    value * 1.0e3
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn length_conversions_roundtrip() {
        for x in [0.0, 1.0, 9.6, -3.2, 1234.5678] {
            assert!((mm_to_m(m_to_mm(x)) - x).abs() < 1e-12, "failed for {x}");
        }
    }

    #[test]
    fn speed_conversion() {
        assert_eq!(km_h_to_mm_s(0.0), 0.0);
        // 30 km/h = 30_000_000 mm / 3600 s
        assert!((km_h_to_mm_s(30.0) - 8333.333333333334).abs() < 1e-9);
        // 3.6 km/h is exactly 1 m/s = 1000 mm/s
        assert!((km_h_to_mm_s(3.6) - 1000.0).abs() < 1e-9);
    }

    #[test]
    fn pixel_density_conversion() {
        assert!((px_per_mm_to_px_per_m(0.25) - 250.0).abs() < 1e-12);
    }
}
