//! Waveform polarization container consumed by the response assembler.

use ndarray::Array1;
use num_complex::Complex64;

use crate::polarization::Polarization;

/// Plus/cross polarization series produced by an external source model.
///
/// The arrays are aligned with whatever grid the producer used, a frequency
/// grid in the usual pipeline. The response assembler only reads them; it
/// never mutates or stores them.
#[derive(Debug, Clone, PartialEq)]
pub struct WaveformPolarizations {
    pub plus: Array1<Complex64>,
    pub cross: Array1<Complex64>,
}

impl WaveformPolarizations {
    pub fn new(plus: Array1<Complex64>, cross: Array1<Complex64>) -> Self {
        Self { plus, cross }
    }

    /// Series for one polarization mode.
    pub fn get(&self, polarization: Polarization) -> &Array1<Complex64> {
        match polarization {
            Polarization::Plus => &self.plus,
            Polarization::Cross => &self.cross,
        }
    }

    /// Number of samples in the plus series; the cross series matches it in
    /// any well-formed waveform.
    pub fn len(&self) -> usize {
        self.plus.len()
    }

    pub fn is_empty(&self) -> bool {
        self.plus.is_empty()
    }
}
