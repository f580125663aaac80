//! Single-interferometer antenna patterns in the detector frame.
//!
//! Closed-form F+ and Fx for one interferometer whose arms open by `gamma`,
//! with the source at (theta, phi) in the detector frame and polarization
//! angle `psi` (Cutler, arXiv:gr-qc/9703068; Zhao, arXiv:1009.0206). The
//! ecliptic-frame response pipeline does not use these; they are the
//! detector-frame reference expressions.

/// Plus antenna pattern of a single interferometer.
pub fn fplus(gamma: f64, theta: f64, phi: f64, psi: f64) -> f64 {
    let geometry = 0.5 * (1.0 + theta.cos().powi(2)) * (2.0 * phi).cos();
    gamma.sin() * (geometry * (2.0 * psi).cos() - theta.cos() * (2.0 * phi).sin() * (2.0 * psi).sin())
}

/// Cross antenna pattern of a single interferometer.
pub fn fcross(gamma: f64, theta: f64, phi: f64, psi: f64) -> f64 {
    let geometry = 0.5 * (1.0 + theta.cos().powi(2)) * (2.0 * phi).cos();
    gamma.sin() * (geometry * (2.0 * psi).sin() + theta.cos() * (2.0 * phi).sin() * (2.0 * psi).cos())
}
