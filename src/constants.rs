//! Physical and constellation constants shared across the crate.
//!
//! These are process-wide immutable values. The numeric literals follow the
//! conventions of the response literature this crate implements (Cutler,
//! arXiv:gr-qc/9703068; arXiv:1803.03368), so regression values elsewhere in
//! the crate depend on them staying exactly as written.

use std::f64::consts::PI;

/// Speed of light in vacuum (m/s).
pub const SPEED_OF_LIGHT: f64 = 299_792_458.0;

/// Newtonian gravitational constant (m^3 kg^-1 s^-2).
pub const GRAVITATIONAL_CONSTANT: f64 = 6.67e-11;

/// Solar mass (kg).
pub const SOLAR_MASS_KG: f64 = 2e30;

/// Astronomical unit (m).
pub const ASTRONOMICAL_UNIT_M: f64 = 1.495_978_7e11;

/// Seconds in one year of the heliocentric orbit models.
pub const SIDEREAL_YEAR_S: f64 = 31_536_000.0;

/// Arm length of the LISA and Taiji triangles (m).
pub const TRIANGLE_ARM_LENGTH_M: f64 = 2.5e9;

/// Radius of the TianQin spacecraft orbit around the Earth (m).
pub const TIANQIN_ORBIT_RADIUS_M: f64 = 1e8;

/// Frequency of the TianQin spacecraft rotation around the Earth (Hz),
/// one revolution per 3.65 days.
pub const TIANQIN_SPACECRAFT_FREQ_HZ: f64 = 1.0 / 315_360.0;

/// Frequency of the geocenter orbit around the Sun (Hz) as used by the
/// TianQin orbit model.
pub const EARTH_ORBIT_FREQ_HZ: f64 = 3.14e-8;

/// Eccentricity of the geocenter orbit around the Sun.
pub const EARTH_ORBIT_ECCENTRICITY: f64 = 0.0167;

/// Polar angle of the normal of the fixed TianQin orbital plane (rad),
/// pointed at the reference source RX J0806.3+1527.
pub const TIANQIN_PLANE_THETA_RAD: f64 = -4.7 * PI / 180.0;

/// Azimuthal angle of the normal of the fixed TianQin orbital plane (rad).
pub const TIANQIN_PLANE_PHI_RAD: f64 = 120.5 * PI / 180.0;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_au_light_travel_time_is_about_500_s() {
        let seconds = ASTRONOMICAL_UNIT_M / SPEED_OF_LIGHT;
        assert!(seconds > 498.0 && seconds < 500.0);
    }

    #[test]
    fn tianqin_plane_angles_are_in_range() {
        assert!(TIANQIN_PLANE_THETA_RAD < 0.0 && TIANQIN_PLANE_THETA_RAD > -0.1);
        assert!(TIANQIN_PLANE_PHI_RAD > 2.0 && TIANQIN_PLANE_PHI_RAD < 2.2);
    }
}
