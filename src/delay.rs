//! Light-travel-time offsets between a constellation and the solar system
//! barycenter.
//!
//! Projecting the barycenter-to-detector vector onto the propagation
//! direction gives the arrival-time offset of a plane wave at the detector
//! relative to the barycenter (arXiv:1803.03368).

use nalgebra::Vector3;
use ndarray::Array1;

use crate::constants::SPEED_OF_LIGHT;
use crate::error::Result;
use crate::orbit::Constellation;

/// Unit propagation direction of a wave from a source at ecliptic sky
/// position (theta, phi): it points from the source toward the barycenter.
pub fn sky_direction(theta: f64, phi: f64) -> Vector3<f64> {
    -Vector3::new(
        theta.sin() * phi.cos(),
        theta.sin() * phi.sin(),
        theta.cos(),
    )
}

/// Light-travel-time offset of spacecraft `index` relative to the
/// barycenter, per entry of `times` (seconds).
pub fn spacecraft_delay(
    constellation: Constellation,
    index: u8,
    theta: f64,
    phi: f64,
    times: &Array1<f64>,
) -> Result<Array1<f64>> {
    let omega = sky_direction(theta, phi);
    let positions = constellation.spacecraft_positions(index, times)?;
    Ok(Array1::from_iter(
        positions.iter().map(|r| omega.dot(r) / SPEED_OF_LIGHT),
    ))
}

/// Light-travel-time offset of the constellation centroid relative to the
/// barycenter, per entry of `times` (seconds).
pub fn centroid_delay(
    constellation: Constellation,
    theta: f64,
    phi: f64,
    times: &Array1<f64>,
) -> Array1<f64> {
    let omega = sky_direction(theta, phi);
    times.mapv(|t| omega.dot(&constellation.centroid(t)) / SPEED_OF_LIGHT)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::{assert_abs_diff_eq, assert_relative_eq};
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};
    use std::f64::consts::PI;

    #[test]
    fn sky_direction_is_a_unit_vector() {
        let mut rng = StdRng::seed_from_u64(31);
        for _ in 0..100 {
            let omega = sky_direction(rng.gen_range(0.0..PI), rng.gen_range(0.0..2.0 * PI));
            assert_relative_eq!(omega.norm(), 1.0, epsilon = 1e-12);
        }
        // A source at the ecliptic north pole propagates along -z.
        let omega = sky_direction(0.0, 0.0);
        assert_relative_eq!(omega.z, -1.0, epsilon = 1e-12);
    }

    #[test]
    fn heliocentric_delays_are_bounded_by_the_orbit_light_time() {
        let times = Array1::linspace(0.0, 3.2e7, 257);
        let mut rng = StdRng::seed_from_u64(37);
        for _ in 0..20 {
            let theta = rng.gen_range(0.0..PI);
            let phi = rng.gen_range(0.0..2.0 * PI);
            for constellation in [Constellation::Lisa, Constellation::Taiji] {
                for delay in centroid_delay(constellation, theta, phi, &times).iter() {
                    assert!(delay.abs() < 499.5, "centroid delay {delay}");
                }
                for index in 1..=3 {
                    let delays =
                        spacecraft_delay(constellation, index, theta, phi, &times).unwrap();
                    for delay in delays.iter() {
                        assert!(delay.abs() < 506.0, "spacecraft delay {delay}");
                    }
                }
            }
        }
    }

    #[test]
    fn tianqin_delays_are_bounded_by_the_earth_orbit_light_time() {
        let times = Array1::linspace(0.0, 3.2e7, 257);
        let mut rng = StdRng::seed_from_u64(41);
        for _ in 0..20 {
            let theta = rng.gen_range(0.0..PI);
            let phi = rng.gen_range(0.0..2.0 * PI);
            for delay in centroid_delay(Constellation::TianQin, theta, phi, &times).iter() {
                assert!(delay.abs() < 525.0, "centroid delay {delay}");
            }
            let delays = spacecraft_delay(Constellation::TianQin, 2, theta, phi, &times).unwrap();
            for delay in delays.iter() {
                assert!(delay.abs() < 525.0, "spacecraft delay {delay}");
            }
        }
    }

    #[test]
    fn polar_source_sees_no_heliocentric_centroid_delay() {
        // LISA's centroid stays in the ecliptic plane, so a wave coming
        // straight down the z axis arrives simultaneously with the
        // barycenter.
        let times = Array1::linspace(0.0, 1.0e7, 33);
        for delay in centroid_delay(Constellation::Lisa, 0.0, 0.0, &times).iter() {
            assert_abs_diff_eq!(*delay, 0.0, epsilon = 1e-12);
        }
    }

    #[test]
    fn delay_grids_line_up_with_the_time_grid() {
        let times = Array1::linspace(0.0, 1.0e6, 13);
        let delays = spacecraft_delay(Constellation::Lisa, 1, 1.0, 2.0, &times).unwrap();
        assert_eq!(delays.len(), times.len());
        let delays = centroid_delay(Constellation::TianQin, 1.0, 2.0, &times);
        assert_eq!(delays.len(), times.len());
    }
}
