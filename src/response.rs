//! Detector-channel response assembly.
//!
//! The channel strain is h(t) = F+(t) h+ + Fx(t) hx, with the antenna
//! pattern F the Frobenius contraction of the channel's detector tensor with
//! the sky-dependent polarization tensor. Handed a time grid from
//! [`crate::spa::tf_spa`] and frequency-domain polarizations this produces
//! the frequency-domain response; handed a plain time grid and time-domain
//! polarizations it produces the time-domain response with the same code.

use ndarray::{Array1, Zip};
use num_complex::Complex64;
use rayon::prelude::*;
use tracing::debug;

use crate::detector::Detector;
use crate::error::{ResponseError, Result};
use crate::polarization::{polarization_tensor, Polarization};
use crate::waveform::WaveformPolarizations;

/// Antenna-pattern series F(t) of one detector channel for one polarization,
/// per entry of `times`. Samples are independent and evaluated in parallel.
pub fn antenna_pattern(
    detector: &Detector,
    polarization: Polarization,
    theta: f64,
    phi: f64,
    psi: f64,
    times: &Array1<f64>,
) -> Array1<f64> {
    let e = polarization_tensor(theta, phi, psi, polarization);
    let samples: Vec<f64> = times.iter().copied().collect();
    let pattern: Vec<f64> = samples
        .par_iter()
        .map(|&t| detector.tensor(t).dot(&e))
        .collect();
    Array1::from_vec(pattern)
}

/// Net strain of the named detector channel: supplied waveform polarizations
/// projected through the time-dependent antenna patterns and summed over
/// plus and cross.
///
/// `times` must line up with the waveform samples; in the frequency domain
/// it is t(f) from the stationary-phase map evaluated on the waveform's
/// frequency grid. Pure and re-entrant: identical inputs produce identical
/// outputs.
pub fn frequency_response(
    name: &str,
    waveform: &WaveformPolarizations,
    theta: f64,
    phi: f64,
    psi: f64,
    times: &Array1<f64>,
) -> Result<Array1<Complex64>> {
    let detector = Detector::parse(name)?;
    for polarization in [Polarization::Plus, Polarization::Cross] {
        let samples = waveform.get(polarization).len();
        if samples != times.len() {
            return Err(ResponseError::LengthMismatch {
                waveform: samples,
                times: times.len(),
            });
        }
    }
    debug!(name, samples = times.len(), "assembling channel response");

    let mut signal = Array1::<Complex64>::zeros(times.len());
    for polarization in [Polarization::Plus, Polarization::Cross] {
        let pattern = antenna_pattern(&detector, polarization, theta, phi, psi, times);
        Zip::from(&mut signal)
            .and(&pattern)
            .and(waveform.get(polarization))
            .for_each(|s, &f, &h| *s += h * f);
    }
    Ok(signal)
}
