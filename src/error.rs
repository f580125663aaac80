use thiserror::Error;

/// Errors produced by detector response calculations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ResponseError {
    /// Detector/channel name prefix not recognized.
    #[error(
        "unsupported channel name '{name}': expected a 'lisa_a', 'lisa_e', 'lisa_1', 'lisa_2', \
         'tianqin_a', 'tianqin_e', 'taiji_a' or 'taiji_e' prefix"
    )]
    UnknownChannel {
        /// The name that failed to parse.
        name: String,
    },

    /// Spacecraft or arm index outside {1, 2, 3}.
    #[error("spacecraft index {index} out of range: constellations have spacecraft 1, 2 and 3")]
    SpacecraftIndex {
        /// The rejected index.
        index: u8,
    },

    /// Polarization selector other than 'plus' or 'cross'.
    #[error("polarization should be 'plus' or 'cross', got '{name}'")]
    UnknownPolarization {
        /// The rejected selector.
        name: String,
    },

    /// Waveform polarization arrays do not line up with the time grid.
    #[error("waveform length {waveform} does not match time grid length {times}")]
    LengthMismatch {
        /// Number of waveform samples.
        waveform: usize,
        /// Number of time samples.
        times: usize,
    },
}

pub type Result<T> = std::result::Result<T, ResponseError>;
