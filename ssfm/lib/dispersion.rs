//! Frequency-domain linear propagation kernels.
//!
//! For dispersion coefficients *β*₂, *β*₃, *β*₄ the kernel is
//! ```text
//!        β₂       β₃       β₄
//! D(ω) = -- ω² + -- ω³ + --- ω⁴
//!         2        6      24
//! ```
//! and the linear part of the envelope equation is advanced over a distance
//! *Δz* by multiplying the spectrum by `exp(i D(ω) Δz)`.

use ndarray as nd;
use num_complex::Complex64 as C64;
use crate::{ Arr1, error::PropError };

/// Dispersion coefficients up to fourth order.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Dispersion {
    /// Group-velocity dispersion.
    pub beta2: f64,
    /// Third-order dispersion.
    pub beta3: f64,
    /// Fourth-order dispersion.
    pub beta4: f64,
}

impl Dispersion {
    /// Create a new set of coefficients.
    pub fn new(beta2: f64, beta3: f64, beta4: f64) -> Self {
        Self { beta2, beta3, beta4 }
    }

    /// Second-order dispersion only.
    pub fn gvd(beta2: f64) -> Self { Self { beta2, ..Self::default() } }

    pub(crate) fn validate(&self) -> Result<(), PropError> {
        PropError::check_param("beta2", self.beta2)?;
        PropError::check_param("beta3", self.beta3)?;
        PropError::check_param("beta4", self.beta4)?;
        Ok(())
    }

    /// Evaluate the kernel at a single angular frequency.
    pub fn eval(&self, w: f64) -> f64 {
        let w2 = w * w;
        self.beta2 / 2.0 * w2
            + self.beta3 / 6.0 * w2 * w
            + self.beta4 / 24.0 * w2 * w2
    }

    /// Evaluate the kernel elementwise over a frequency axis, preserving its
    /// ordering.
    pub fn kernel<S>(&self, w: &Arr1<S>) -> nd::Array1<f64>
    where S: nd::Data<Elem = f64>
    {
        w.mapv(|wk| self.eval(wk))
    }
}

/// Compute the phase factors `exp(i D dz)` for a precomputed kernel.
pub fn phase_factors<S>(kernel: &Arr1<S>, dz: f64) -> nd::Array1<C64>
where S: nd::Data<Elem = f64>
{
    kernel.mapv(|dk| C64::cis(dk * dz))
}
