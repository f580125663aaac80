//! Frequency-domain waveform generator wrapper.
//!
//! The response pipeline consumes polarizations from an external source
//! model through a fixed calling convention: an observation duration and
//! sampling rate define a uniform frequency grid, a source-model closure
//! fills in the polarizations on that grid, and an optional
//! parameter-conversion hook maps user-facing parameters into whatever the
//! source model expects. No waveform physics lives in this crate.

use std::collections::BTreeMap;
use std::fmt;

use ndarray::Array1;
use tracing::debug;

use crate::waveform::WaveformPolarizations;

/// Physical parameters handed to a frequency-domain source model.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SourceParams {
    /// Primary mass in solar masses.
    pub mass_1: f64,
    /// Secondary mass in solar masses.
    pub mass_2: f64,
    /// Cartesian spin components of the primary.
    pub spin_1: [f64; 3],
    /// Cartesian spin components of the secondary.
    pub spin_2: [f64; 3],
    /// Inclination of the orbital angular momentum to the line of sight.
    pub inclination: f64,
    /// Reference phase at coalescence.
    pub phase: f64,
    /// Luminosity distance in Mpc.
    pub luminosity_distance: f64,
    /// Reference coalescence time in seconds.
    pub coalescence_time: f64,
    /// Model-specific extra parameters keyed by name.
    pub extra: BTreeMap<String, f64>,
}

/// Frequency-domain source model: polarizations on a frequency grid for a
/// parameter set. Supplied by an external waveform library.
pub type SourceModel =
    Box<dyn Fn(&Array1<f64>, &SourceParams) -> WaveformPolarizations + Send + Sync>;

/// Hook applied to the parameters before the source model runs, e.g. mapping
/// user-facing mass parameterizations to the model's internal one.
pub type ParameterConversion = Box<dyn Fn(&mut SourceParams) + Send + Sync>;

/// Wrapper around an external frequency-domain source model with a fixed
/// duration and sampling rate.
pub struct WaveformGenerator {
    duration: f64,
    sampling_frequency: f64,
    source_model: SourceModel,
    parameter_conversion: Option<ParameterConversion>,
}

impl WaveformGenerator {
    pub fn new(duration: f64, sampling_frequency: f64, source_model: SourceModel) -> Self {
        Self {
            duration,
            sampling_frequency,
            source_model,
            parameter_conversion: None,
        }
    }

    /// Attach a parameter-conversion hook run before every source-model
    /// invocation.
    pub fn with_parameter_conversion(mut self, hook: ParameterConversion) -> Self {
        self.parameter_conversion = Some(hook);
        self
    }

    /// Observation duration in seconds.
    pub fn duration(&self) -> f64 {
        self.duration
    }

    /// Sampling rate in Hz.
    pub fn sampling_frequency(&self) -> f64 {
        self.sampling_frequency
    }

    /// Uniform frequency grid from DC to the Nyquist frequency with
    /// 1/duration spacing.
    pub fn frequency_array(&self) -> Array1<f64> {
        let bins = (self.duration * self.sampling_frequency / 2.0).round() as usize;
        Array1::from_iter((0..=bins).map(|k| k as f64 / self.duration))
    }

    /// Run the source model on this generator's frequency grid.
    pub fn frequency_domain_strain(&self, params: &SourceParams) -> WaveformPolarizations {
        let mut params = params.clone();
        if let Some(convert) = &self.parameter_conversion {
            convert(&mut params);
        }
        let frequencies = self.frequency_array();
        debug!(
            samples = frequencies.len(),
            "generating frequency-domain strain"
        );
        (self.source_model)(&frequencies, &params)
    }
}

impl fmt::Debug for WaveformGenerator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WaveformGenerator")
            .field("duration", &self.duration)
            .field("sampling_frequency", &self.sampling_frequency)
            .field("has_parameter_conversion", &self.parameter_conversion.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use num_complex::Complex64;

    fn flat_source() -> SourceModel {
        Box::new(|frequencies, params| {
            let amplitude = params.mass_1 + params.extra.get("boost").copied().unwrap_or(0.0);
            WaveformPolarizations::new(
                Array1::from_elem(frequencies.len(), Complex64::new(amplitude, 0.0)),
                Array1::from_elem(frequencies.len(), Complex64::new(0.0, amplitude)),
            )
        })
    }

    #[test]
    fn frequency_grid_spans_dc_to_nyquist() {
        let generator = WaveformGenerator::new(16.0, 2.0, flat_source());
        let frequencies = generator.frequency_array();
        assert_eq!(frequencies.len(), 17);
        assert_relative_eq!(frequencies[0], 0.0);
        assert_relative_eq!(frequencies[1], 1.0 / 16.0);
        assert_relative_eq!(frequencies[16], 1.0);
    }

    #[test]
    fn strain_is_evaluated_on_the_generator_grid() {
        let generator = WaveformGenerator::new(8.0, 4.0, flat_source());
        let params = SourceParams {
            mass_1: 3.0,
            ..Default::default()
        };
        let waveform = generator.frequency_domain_strain(&params);
        assert_eq!(waveform.len(), generator.frequency_array().len());
        assert_relative_eq!(waveform.plus[0].re, 3.0);
    }

    #[test]
    fn conversion_hook_runs_before_the_source_model() {
        let generator = WaveformGenerator::new(8.0, 4.0, flat_source())
            .with_parameter_conversion(Box::new(|params| {
                params.extra.insert("boost".to_string(), 10.0);
            }));
        let params = SourceParams {
            mass_1: 3.0,
            ..Default::default()
        };
        let waveform = generator.frequency_domain_strain(&params);
        assert_relative_eq!(waveform.plus[0].re, 13.0);
        // The caller's parameter set is untouched.
        assert!(params.extra.is_empty());
    }
}
