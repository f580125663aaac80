//! Channel taxonomy and detector tensors.
//!
//! Each constellation exposes two independent orthogonal strain channels,
//! conventionally `a` and `e`, built from the same arm-direction
//! combinations regardless of the constellation. LISA additionally keeps the
//! legacy two-Michelson channels `1` and `2` (D = (u u^T - v v^T)/2 over an
//! arm pair). Channel selection at the API boundary is by name prefix, e.g.
//! `lisa_a_22` or `taiji_e`.

use nalgebra::{Matrix3, Vector3};
use ndarray::Array1;
use rayon::prelude::*;

use crate::error::{ResponseError, Result};
use crate::orbit::Constellation;

/// Strain channel of a constellation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Channel {
    /// Orthogonal combination of all three arms.
    A,
    /// Orthogonal combination of arms 1 and 3.
    E,
    /// Legacy first Michelson channel over arms 1 and 2 (LISA only).
    One,
    /// Legacy second Michelson channel over arms 1 and 3 (LISA only).
    Two,
}

/// One named detector channel: a constellation plus one of its channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Detector {
    pub constellation: Constellation,
    pub channel: Channel,
}

/// Name prefixes accepted at the API boundary. Michelson channels are only
/// defined for LISA, so only LISA rows carry them.
const CHANNEL_PREFIXES: [(&str, Constellation, Channel); 8] = [
    ("lisa_a", Constellation::Lisa, Channel::A),
    ("lisa_e", Constellation::Lisa, Channel::E),
    ("lisa_1", Constellation::Lisa, Channel::One),
    ("lisa_2", Constellation::Lisa, Channel::Two),
    ("tianqin_a", Constellation::TianQin, Channel::A),
    ("tianqin_e", Constellation::TianQin, Channel::E),
    ("taiji_a", Constellation::Taiji, Channel::A),
    ("taiji_e", Constellation::Taiji, Channel::E),
];

impl Detector {
    /// Parse a detector/channel name such as `lisa_a_22`, `tianqin_e` or
    /// `taiji_a_33`. Anything after the channel prefix (typically a harmonic
    /// mode suffix) is ignored here; [`crate::spa::mode_from_name`] reads it.
    pub fn parse(name: &str) -> Result<Self> {
        CHANNEL_PREFIXES
            .iter()
            .find(|(prefix, _, _)| name.starts_with(prefix))
            .map(|&(_, constellation, channel)| Detector {
                constellation,
                channel,
            })
            .ok_or_else(|| ResponseError::UnknownChannel {
                name: name.to_string(),
            })
    }

    /// Detector tensor of this channel at time `t` (seconds), in the
    /// ecliptic frame.
    pub fn tensor(&self, t: f64) -> Matrix3<f64> {
        let [n1, n2, n3] = self.constellation.arms(t);
        combine_arms(self.channel, &n1, &n2, &n3)
    }

    /// Detector tensors over a time grid. Samples are independent, so the
    /// grid is evaluated in parallel.
    pub fn tensors(&self, times: &Array1<f64>) -> Vec<Matrix3<f64>> {
        let samples: Vec<f64> = times.iter().copied().collect();
        samples.par_iter().map(|&t| self.tensor(t)).collect()
    }
}

/// Combine three arm directions into a channel response tensor. The algebra
/// is identical for every constellation; only the arm inputs differ.
fn combine_arms(
    channel: Channel,
    n1: &Vector3<f64>,
    n2: &Vector3<f64>,
    n3: &Vector3<f64>,
) -> Matrix3<f64> {
    match channel {
        Channel::A => (outer(n1) - 2.0 * outer(n2) + outer(n3)) / 6.0,
        Channel::E => (outer(n1) - outer(n3)) * (3.0_f64.sqrt() / 6.0),
        Channel::One => (outer(n1) - outer(n2)) / 2.0,
        Channel::Two => (outer(n1) - outer(n3)) / 2.0,
    }
}

fn outer(n: &Vector3<f64>) -> Matrix3<f64> {
    n * n.transpose()
}
