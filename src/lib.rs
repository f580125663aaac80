//! Detector response for spaceborne gravitational-wave observatories.
//!
//! This crate models the time-dependent response of the LISA, TianQin and
//! Taiji constellations to an incoming gravitational waveform: closed-form
//! spacecraft orbits and arm directions in the ecliptic frame, quadrupole
//! detector tensors for the orthogonal `a`/`e` channels, sky-dependent
//! polarization tensors, a 3.5PN stationary-phase map from frequency to
//! emission time, light-travel-time offsets to the solar system barycenter,
//! and the assembled complex detector-channel response.
//!
//! Waveform physics stays outside: polarizations arrive as opaque complex
//! arrays from an external source model (see [`generator`]), and the
//! Bayesian machinery consuming the responses lives downstream.
//!
//! # Example
//!
//! ```rust
//! use ndarray::Array1;
//! use num_complex::Complex64;
//! use space_response::{frequency_response, tf_spa, WaveformPolarizations};
//!
//! // Frequency band of a supermassive binary observed by LISA, mapped to
//! // the emission time of each frequency.
//! let frequencies = Array1::geomspace(1e-4, 1e-3, 64).unwrap();
//! let times = tf_spa(&frequencies, 0.0, 5e6, 3e6);
//!
//! // Polarizations come from an external waveform model; any aligned
//! // complex arrays work here.
//! let waveform = WaveformPolarizations::new(
//!     Array1::from_elem(64, Complex64::new(1e-19, 0.0)),
//!     Array1::from_elem(64, Complex64::new(0.0, 1e-19)),
//! );
//!
//! let strain = frequency_response("lisa_a_22", &waveform, 1.0, 3.0, 0.5, &times).unwrap();
//! assert_eq!(strain.len(), 64);
//! ```

pub mod constants;
pub mod delay;
pub mod detector;
pub mod error;
pub mod generator;
pub mod orbit;
pub mod pattern;
pub mod polarization;
pub mod response;
pub mod spa;
pub mod waveform;

// Re-exports for easier access
pub use delay::{centroid_delay, sky_direction, spacecraft_delay};
pub use detector::{Channel, Detector};
pub use error::{ResponseError, Result};
pub use generator::{ParameterConversion, SourceModel, SourceParams, WaveformGenerator};
pub use orbit::Constellation;
pub use pattern::{fcross, fplus};
pub use polarization::{polarization_tensor, Polarization};
pub use response::{antenna_pattern, frequency_response};
pub use spa::{mode_from_name, tf_spa, tf_spa_from_mode};
pub use waveform::WaveformPolarizations;
