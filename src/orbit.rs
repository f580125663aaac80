//! Orbit models for the LISA, TianQin and Taiji constellations.
//!
//! All three observatories fly three spacecraft in a near-equilateral
//! triangle. LISA and Taiji follow heliocentric orbits at 1 AU with a one
//! year period, the triangle plane inclined so the arm directions stay unit
//! vectors 60 degrees apart at all times (Cutler, arXiv:gr-qc/9703068;
//! Liang, arXiv:1901.09624). TianQin instead orbits the Earth every 3.65
//! days in a fixed plane pointed at RX J0806.3+1527, riding along on the
//! Earth's eccentric heliocentric orbit expanded to second order in the
//! eccentricity (arXiv:1803.03368).
//!
//! Everything is closed form in the ecliptic frame; there is no numerical
//! orbit propagation and no renormalization of the arm vectors.

use std::f64::consts::PI;

use nalgebra::Vector3;
use ndarray::Array1;

use crate::constants::{
    ASTRONOMICAL_UNIT_M, EARTH_ORBIT_ECCENTRICITY, EARTH_ORBIT_FREQ_HZ, SIDEREAL_YEAR_S,
    TIANQIN_ORBIT_RADIUS_M, TIANQIN_PLANE_PHI_RAD, TIANQIN_PLANE_THETA_RAD,
    TIANQIN_SPACECRAFT_FREQ_HZ, TRIANGLE_ARM_LENGTH_M,
};
use crate::error::{ResponseError, Result};

/// Phase offset of the LISA (+) and Taiji (-) guiding centers on the 1 AU
/// orbit, 20 degrees either side of the Earth.
const CENTROID_PHASE_OFFSET_RAD: f64 = 20.0 * PI / 180.0;

/// Detector family tag selecting one of the supported constellations.
///
/// The per-family orbit kinematics live behind this one type so that the
/// tensor and response layers never branch on name strings themselves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Constellation {
    /// ESA/NASA heliocentric triangle trailing the Earth.
    Lisa,
    /// Geocentric triangle in a fixed inclined plane.
    TianQin,
    /// CAS heliocentric triangle leading the Earth.
    Taiji,
}

impl Constellation {
    /// Unit vector along arm `index` at time `t` (seconds), in the ecliptic
    /// frame.
    pub fn arm_direction(&self, index: u8, t: f64) -> Result<Vector3<f64>> {
        check_spacecraft_index(index)?;
        Ok(self.arm_unchecked(index, t))
    }

    /// Arm `index` direction sampled over a time grid.
    pub fn arm_directions(&self, index: u8, times: &Array1<f64>) -> Result<Vec<Vector3<f64>>> {
        check_spacecraft_index(index)?;
        Ok(times.iter().map(|&t| self.arm_unchecked(index, t)).collect())
    }

    /// All three arm directions at one instant.
    pub fn arms(&self, t: f64) -> [Vector3<f64>; 3] {
        [
            self.arm_unchecked(1, t),
            self.arm_unchecked(2, t),
            self.arm_unchecked(3, t),
        ]
    }

    /// Ecliptic-frame position of spacecraft `index` at time `t` (seconds).
    pub fn spacecraft_position(&self, index: u8, t: f64) -> Result<Vector3<f64>> {
        check_spacecraft_index(index)?;
        Ok(self.spacecraft_unchecked(index, t))
    }

    /// Spacecraft `index` position sampled over a time grid.
    pub fn spacecraft_positions(
        &self,
        index: u8,
        times: &Array1<f64>,
    ) -> Result<Vec<Vector3<f64>>> {
        check_spacecraft_index(index)?;
        Ok(times
            .iter()
            .map(|&t| self.spacecraft_unchecked(index, t))
            .collect())
    }

    /// Guiding-center position of the constellation at time `t` (seconds):
    /// the 1 AU circular orbit for LISA and Taiji, the Earth for TianQin.
    pub fn centroid(&self, t: f64) -> Vector3<f64> {
        match self {
            Constellation::Lisa => circular_centroid(t, CENTROID_PHASE_OFFSET_RAD),
            Constellation::Taiji => circular_centroid(t, -CENTROID_PHASE_OFFSET_RAD),
            Constellation::TianQin => earth_orbit(t),
        }
    }

    /// Centroid position sampled over a time grid.
    pub fn centroids(&self, times: &Array1<f64>) -> Vec<Vector3<f64>> {
        times.iter().map(|&t| self.centroid(t)).collect()
    }

    fn arm_unchecked(&self, index: u8, t: f64) -> Vector3<f64> {
        match self {
            Constellation::Lisa | Constellation::Taiji => triangle_arm(index, t),
            Constellation::TianQin => tianqin_arm(index, t),
        }
    }

    fn spacecraft_unchecked(&self, index: u8, t: f64) -> Vector3<f64> {
        match self {
            // Cutler's construction hangs the spacecraft off the un-offset
            // circular guiding orbit, not the 20-degree-shifted centroid
            // used for light-travel-time work.
            Constellation::Lisa => triangle_spacecraft(index, t, circular_centroid(t, 0.0)),
            Constellation::Taiji => {
                triangle_spacecraft(index, t, circular_centroid(t, -CENTROID_PHASE_OFFSET_RAD))
            }
            Constellation::TianQin => tianqin_spacecraft(index, t),
        }
    }
}

fn check_spacecraft_index(index: u8) -> Result<()> {
    if (1..=3).contains(&index) {
        Ok(())
    } else {
        Err(ResponseError::SpacecraftIndex { index })
    }
}

/// Arm direction of the rigid heliocentric triangle (Cutler's model, shared
/// by LISA and Taiji). `alpha` advances one turn per year with a fixed
/// -pi/12 reference phase and pi/3 spacing between arms.
fn triangle_arm(index: u8, t: f64) -> Vector3<f64> {
    let alpha = 2.0 * PI * t / SIDEREAL_YEAR_S - PI / 12.0 - f64::from(index - 1) * PI / 3.0;
    let phi = 2.0 * PI * t / SIDEREAL_YEAR_S;
    Vector3::new(
        phi.cos() * alpha.sin() / 2.0 - phi.sin() * alpha.cos(),
        phi.sin() * alpha.sin() / 2.0 + phi.cos() * alpha.cos(),
        3.0_f64.sqrt() * alpha.sin() / 2.0,
    )
}

/// Heliocentric guiding center on the 1 AU circle at the given phase offset.
fn circular_centroid(t: f64, phase_offset: f64) -> Vector3<f64> {
    let phi = 2.0 * PI * t / SIDEREAL_YEAR_S + phase_offset;
    Vector3::new(
        ASTRONOMICAL_UNIT_M * phi.cos(),
        ASTRONOMICAL_UNIT_M * phi.sin(),
        0.0,
    )
}

/// Spacecraft position of the rigid triangle: guiding center plus the arm
/// combinations that place the three spacecraft at the triangle corners.
fn triangle_spacecraft(index: u8, t: f64, center: Vector3<f64>) -> Vector3<f64> {
    let l = |i: u8| TRIANGLE_ARM_LENGTH_M * triangle_arm(i, t);
    match index {
        1 => center - (l(1) + l(2)) / 3.0,
        2 => center - (l(3) - l(1)) / 3.0,
        _ => center + (l(2) + l(3)) / 3.0,
    }
}

/// Arm direction of the TianQin triangle, rotating in the fixed plane
/// defined by the (theta_s, phi_s) reference direction.
fn tianqin_arm(index: u8, t: f64) -> Vector3<f64> {
    let alpha =
        2.0 * PI * TIANQIN_SPACECRAFT_FREQ_HZ * t + 2.0 * PI / 3.0 * f64::from(index) - PI / 3.0;
    let (sin_ts, cos_ts) = TIANQIN_PLANE_THETA_RAD.sin_cos();
    let (sin_ps, cos_ps) = TIANQIN_PLANE_PHI_RAD.sin_cos();
    Vector3::new(
        cos_ps * sin_ts * alpha.cos() - alpha.sin() * sin_ps,
        sin_ps * sin_ts * alpha.cos() + alpha.sin() * cos_ps,
        -alpha.cos() * cos_ts,
    )
}

/// TianQin spacecraft position: the geocentric circle in the fixed plane,
/// carried along the Earth's eccentric heliocentric orbit (second order in
/// the eccentricity).
fn tianqin_spacecraft(index: u8, t: f64) -> Vector3<f64> {
    let r = ASTRONOMICAL_UNIT_M;
    let r1 = TIANQIN_ORBIT_RADIUS_M;
    let e = EARTH_ORBIT_ECCENTRICITY;
    let alpha = 2.0 * PI * EARTH_ORBIT_FREQ_HZ * t;
    let alpha_n =
        2.0 * PI * TIANQIN_SPACECRAFT_FREQ_HZ * t + 2.0 * PI / 3.0 * f64::from(index - 1);
    let (sin_ts, cos_ts) = TIANQIN_PLANE_THETA_RAD.sin_cos();
    let (sin_ps, cos_ps) = TIANQIN_PLANE_PHI_RAD.sin_cos();

    let x = r1 * (cos_ps * sin_ts * alpha_n.sin() + alpha_n.cos() * sin_ps)
        + r * alpha.cos()
        + 0.5 * r * e * (2.0 * (2.0 * alpha).cos() - 3.0)
        - 1.5 * r * e * e * alpha.cos() * alpha.sin().powi(2);
    let y = r1 * (sin_ps * sin_ts * alpha_n.sin() - alpha_n.cos() * cos_ps)
        + r * alpha.sin()
        + 0.5 * r * e * (2.0 * alpha).sin()
        + 0.25 * r * e * e * (3.0 * (2.0 * alpha).cos() - 1.0) * alpha.sin();
    let z = -r1 * alpha_n.sin() * cos_ts;
    Vector3::new(x, y, z)
}

/// Orbit of the geocenter around the Sun, second order in the eccentricity.
fn earth_orbit(t: f64) -> Vector3<f64> {
    let r = ASTRONOMICAL_UNIT_M;
    let e = EARTH_ORBIT_ECCENTRICITY;
    let alpha = 2.0 * PI * EARTH_ORBIT_FREQ_HZ * t;

    let x = r * alpha.cos() + 0.5 * r * e * ((2.0 * alpha).cos() - 3.0)
        - 1.5 * r * e * e * alpha.cos() * alpha.sin().powi(2);
    let y = r * alpha.sin()
        + 0.5 * r * e * (2.0 * alpha).sin()
        + 0.25 * r * e * e * (3.0 * (2.0 * alpha).cos() - 1.0) * alpha.sin();
    Vector3::new(x, y, 0.0)
}
