//! Stationary-phase frequency-to-time mapping for compact binary chirps.
//!
//! A drifting constellation's antenna response is a function of time, but the
//! waveform arrives on a frequency grid. Under the stationary phase
//! approximation each frequency is radiated at a well-defined time before
//! coalescence, so the response at frequency f can be evaluated at t(f).
//! The map here is the 3.5PN time-of-arrival expansion for non-spinning
//! binaries (Niu, arXiv:1910.10592, eq. A12), with the harmonic-mode
//! generalization of arXiv:2001.10914, eq. 4.8.

use ndarray::Array1;

use crate::constants::{GRAVITATIONAL_CONSTANT, SOLAR_MASS_KG, SPEED_OF_LIGHT};

/// Time of arrival t(f) for each entry of `frequencies`.
///
/// `tc` is the coalescence time in seconds; `m1` and `m2` are the component
/// masses in solar masses. No inspiral-band check is made: non-positive or
/// above-ISCO frequencies pass straight through the formula and yield IEEE
/// non-finite values or unphysical times rather than errors.
pub fn tf_spa(frequencies: &Array1<f64>, tc: f64, m1: f64, m2: f64) -> Array1<f64> {
    let m1 = m1 * SOLAR_MASS_KG;
    let m2 = m2 * SOLAR_MASS_KG;
    let total = m1 + m2;
    let eta = m1 * m2 / (total * total);
    let chirp = eta.powf(0.6) * total;
    frequencies.mapv(|f| time_at_frequency(f, tc, total, chirp, eta))
}

/// Time of arrival for a single (l, m) harmonic: the mode at frequency f
/// tracks the orbital phase like the dominant emission at f / m, so the base
/// map is evaluated there. This applies to every mode, (2, 2) included.
pub fn tf_spa_from_mode(
    frequencies: &Array1<f64>,
    tc: f64,
    m1: f64,
    m2: f64,
    mode: (u32, u32),
) -> Array1<f64> {
    let m = f64::from(mode.1);
    tf_spa(&(frequencies / m), tc, m1, m2)
}

/// Extract the (l, m) harmonic mode from a trailing `_lm` name token.
///
/// `lisa_a_33` parses as (3, 3). Anything that is not exactly two trailing
/// digits, such as `lisa_a` or `lisa_a_221`, falls back to the dominant
/// (2, 2) mode instead of failing; a typo in the suffix silently selects the
/// dominant mode. Deliberately lenient to match the waveform-mode naming
/// convention of the generators feeding this crate.
pub fn mode_from_name(name: &str) -> (u32, u32) {
    let token = name.rsplit('_').next().unwrap_or(name);
    let digits: Vec<u32> = token.chars().filter_map(|c| c.to_digit(10)).collect();
    if token.len() == 2 && digits.len() == 2 {
        (digits[0], digits[1])
    } else {
        (2, 2)
    }
}

fn time_at_frequency(f: f64, tc: f64, total: f64, chirp: f64, eta: f64) -> f64 {
    let pi = std::f64::consts::PI;
    let c = SPEED_OF_LIGHT;
    let g = GRAVITATIONAL_CONSTANT;
    let v = (g * total * 2.0 * pi * f / c.powi(3)).cbrt();

    // 3.5PN time-of-arrival series, orders v^0 through v^7 with the
    // logarithmic term at v^6.
    let series = 1.0
        + 4.0 / 3.0 * (743.0 / 336.0 + 11.0 / 4.0 * eta) * v.powi(2)
        - 32.0 * pi / 5.0 * v.powi(3)
        + (3_058_673.0 / 508_032.0 + 5429.0 / 504.0 * eta + 617.0 / 72.0 * eta * eta) * v.powi(4)
        + (-7729.0 / 252.0 + 13.0 / 3.0 * eta) * pi * v.powi(5)
        + (-10_052_469_856_691.0 / 23_471_078_400.0
            + 128.0 / 3.0 * pi * pi
            + 6848.0 / 105.0 * 0.577
            + 3424.0 / 105.0 * (16.0 * v * v).ln()
            + (3_147_553_127.0 / 3_048_192.0 - 451.0 / 12.0 * pi * pi) * eta
            - 15211.0 / 1728.0 * eta * eta
            + 25565.0 / 1296.0 * eta * eta * eta)
            * v.powi(6)
        + (-15_419_335.0 / 127_008.0 - 75703.0 / 756.0 * eta + 14809.0 / 378.0 * eta * eta)
            * pi
            * v.powi(7);

    tc - c.powi(5) * 5.0 / 256.0
        * (g * chirp).powf(-5.0 / 3.0)
        * (2.0 * pi * f).powf(-8.0 / 3.0)
        * series
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn time_increases_toward_coalescence_in_band() {
        let tc = 100.0;
        let frequencies = Array1::geomspace(1.0e-5, 3.0e-4, 60).unwrap();
        let times = tf_spa(&frequencies, tc, 1.0e6, 1.0e6);
        for pair in times.windows(2) {
            assert!(pair[0] < pair[1]);
        }
        for &t in times.iter() {
            assert!(t < tc);
        }
    }

    #[test]
    fn in_band_supermassive_binary_is_hours_from_merger() {
        // 5e6 + 3e6 solar masses at 1e-4 Hz: roughly 4.6e4 s before
        // coalescence at this mass pair.
        let frequencies = Array1::from_vec(vec![1.0e-4]);
        let t = tf_spa(&frequencies, 0.0, 5.0e6, 3.0e6)[0];
        assert!(t > -5.0e4 && t < -4.0e4, "t = {t}");
    }

    #[test]
    fn above_isco_frequency_lands_past_coalescence() {
        // 1e-3 Hz sits above the ISCO of a 5e6 + 3e6 solar-mass pair
        // (f_isco ~ 5.5e-4 Hz), where the PN series is outside its
        // convergence domain. The formula still evaluates and comes out at
        // roughly +1.7e3 s, after the nominal coalescence time. Kept as a
        // regression pin on the exact series coefficients.
        let frequencies = Array1::from_vec(vec![1.0e-3]);
        let t = tf_spa(&frequencies, 0.0, 5.0e6, 3.0e6)[0];
        assert!(t > 1.2e3 && t < 2.2e3, "t = {t}");
    }

    #[test]
    fn mode_map_rescales_frequency_by_m() {
        let frequencies = Array1::geomspace(1.0e-4, 1.0e-3, 16).unwrap();
        let (tc, m1, m2) = (12.0, 2.0e6, 1.0e6);
        for mode in [(2, 2), (2, 1), (3, 3), (4, 4)] {
            let mapped = tf_spa_from_mode(&frequencies, tc, m1, m2, mode);
            let rescaled = tf_spa(&(&frequencies / f64::from(mode.1)), tc, m1, m2);
            for (a, b) in mapped.iter().zip(rescaled.iter()) {
                assert_relative_eq!(*a, *b);
            }
        }
    }

    #[test]
    fn mode_names_parse_trailing_digit_pairs() {
        assert_eq!(mode_from_name("lisa_a_33"), (3, 3));
        assert_eq!(mode_from_name("tianqin_e_21"), (2, 1));
        assert_eq!(mode_from_name("lisa_a_22"), (2, 2));
    }

    #[test]
    fn malformed_mode_names_fall_back_to_dominant() {
        // The fallback swallows the parse failure on purpose; callers with a
        // typo in the suffix get the dominant mode, not an error. Candidate
        // for stricter validation in a future revision.
        for name in ["lisa_a", "taiji", "lisa_a_221", "lisa_a_2x", "lisa_a_2", ""] {
            assert_eq!(mode_from_name(name), (2, 2));
        }
    }

    #[test]
    fn non_positive_frequencies_pass_through_as_non_finite() {
        let frequencies = Array1::from_vec(vec![0.0, -1.0e-3]);
        let times = tf_spa(&frequencies, 0.0, 1.0e6, 1.0e6);
        assert!(!times[0].is_finite());
        assert!(times[1].is_nan());
    }
}
