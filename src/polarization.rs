//! Gravitational-wave polarization tensors in the ecliptic frame.

use nalgebra::{Matrix3, Vector3};

use crate::error::{ResponseError, Result};

/// Polarization mode of a gravitational wave.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Polarization {
    Plus,
    Cross,
}

impl Polarization {
    /// Parse the conventional `plus`/`cross` selector strings; anything else
    /// is an error, never a default.
    pub fn from_name(name: &str) -> Result<Self> {
        match name {
            "plus" => Ok(Polarization::Plus),
            "cross" => Ok(Polarization::Cross),
            _ => Err(ResponseError::UnknownPolarization {
                name: name.to_string(),
            }),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Polarization::Plus => "plus",
            Polarization::Cross => "cross",
        }
    }
}

/// Polarization tensor e_ij of a gravitational wave in the ecliptic frame.
///
/// `theta` and `phi` locate the source, `psi` rotates the polarization basis
/// about the line of sight (conventions of Liang, arXiv:1901.09624). Both
/// tensors are symmetric and traceless, and plus/cross are orthogonal under
/// the Frobenius inner product for any angles.
pub fn polarization_tensor(
    theta: f64,
    phi: f64,
    psi: f64,
    polarization: Polarization,
) -> Matrix3<f64> {
    let p = Vector3::new(
        theta.cos() * phi.cos(),
        theta.cos() * phi.sin(),
        -theta.sin(),
    );
    let q = Vector3::new(phi.sin(), -phi.cos(), 0.0);

    let e_plus = p * p.transpose() - q * q.transpose();
    let e_cross = p * q.transpose() + q * p.transpose();

    let (sin_2psi, cos_2psi) = (2.0 * psi).sin_cos();
    match polarization {
        Polarization::Plus => e_plus * cos_2psi - e_cross * sin_2psi,
        Polarization::Cross => e_plus * sin_2psi + e_cross * cos_2psi,
    }
}
