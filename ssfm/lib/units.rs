#![allow(non_upper_case_globals)]

//! Characteristic length and power scales of pulse propagation.
//!
//! Quantities follow the usual soliton normalization: for a pulse of duration
//! *t*₀ and peak power *P*₀ in a fiber with group-velocity dispersion *β*₂ and
//! nonlinear coefficient *γ*,
//! ```text
//! L_D  = t₀² / |β₂|        dispersion length
//! L_NL = 1 / (γ P₀)        nonlinear length
//! N²   = L_D / L_NL        soliton order
//! z₀   = (π / 2) L_D       soliton period
//! ```
//! Any consistent unit system works (e.g. ps, m, W); nothing here converts
//! between systems except [`self_steepening_param`].

use std::f64::consts::{ FRAC_PI_2, TAU };

/// speed of light in vacuum (m s^-1)
pub const c: f64 = 2.99792458e8;
//             +/- 0 (exact)

/// Dispersion length `t0² / |beta2|`.
pub fn dispersion_length(beta2: f64, t0: f64) -> f64 {
    t0.powi(2) / beta2.abs()
}

/// Nonlinear length `1 / (gamma p0)`.
pub fn nonlinear_length(gamma: f64, p0: f64) -> f64 {
    (gamma * p0).recip()
}

/// Soliton order `√(L_D / L_NL)`.
pub fn soliton_order(beta2: f64, gamma: f64, t0: f64, p0: f64) -> f64 {
    (dispersion_length(beta2, t0) / nonlinear_length(gamma, p0)).sqrt()
}

/// Peak power of the fundamental (`N = 1`) soliton, `|beta2| / (gamma t0²)`.
pub fn fundamental_power(beta2: f64, gamma: f64, t0: f64) -> f64 {
    beta2.abs() / gamma / t0.powi(2)
}

/// Soliton period `(π/2) L_D`.
pub fn soliton_period(beta2: f64, t0: f64) -> f64 {
    FRAC_PI_2 * dispersion_length(beta2, t0)
}

/// Optical shock time `1 / ω₀` (s) for a carrier of vacuum wavelength
/// `wavelength` (m).
///
/// This is the self-steepening coefficient of the envelope equation when time
/// is measured in seconds; rescale it to whatever time unit the rest of the
/// fiber parameters use.
pub fn shock_time(wavelength: f64) -> f64 {
    wavelength / (TAU * c)
}

/// Dimensionless self-steepening coefficient `1 / (ω₀ t₀)` for a carrier of
/// vacuum wavelength `wavelength` (m) and a pulse duration `t0` (s).
///
/// This is the coefficient to use in normalized units only; see
/// [`shock_time`] for the dimensional one.
pub fn self_steepening_param(wavelength: f64, t0: f64) -> f64 {
    shock_time(wavelength) / t0
}

/// A collection of natural scales for a given fiber and pulse.
///
/// Normalized quantities are the ones the envelope equation takes when
/// `β₂ = -1`, `γ = 1` and `t₀ = 1`.
#[derive(Copy, Clone, Debug)]
pub struct Units {
    /// Pulse duration.
    pub t: f64,
    /// Dispersion length.
    pub z: f64,
    /// Power scale `1 / (γ L_D)`, the fundamental soliton peak power.
    pub p: f64,
}

impl Units {
    /// Construct from dispersion, nonlinearity and pulse duration.
    pub fn from_fiber(beta2: f64, gamma: f64, t0: f64) -> Self {
        let z = dispersion_length(beta2, t0);
        Self { t: t0, z, p: (gamma * z).recip() }
    }

    /// Convert a time to natural units.
    pub fn to_nat_time<T, U>(&self, x: T) -> U
    where T: std::ops::Mul<f64, Output = U>
    {
        x * self.t.recip()
    }

    /// Convert a dimensionless time to the base unit system.
    pub fn from_nat_time<T, U>(&self, x: T) -> U
    where T: std::ops::Mul<f64, Output = U>
    {
        x * self.t
    }

    /// Convert a propagation distance to natural units.
    pub fn to_nat_length<T, U>(&self, x: T) -> U
    where T: std::ops::Mul<f64, Output = U>
    {
        x * self.z.recip()
    }

    /// Convert a dimensionless propagation distance to the base unit system.
    pub fn from_nat_length<T, U>(&self, x: T) -> U
    where T: std::ops::Mul<f64, Output = U>
    {
        x * self.z
    }

    /// Convert a power to natural units.
    pub fn to_nat_power<T, U>(&self, x: T) -> U
    where T: std::ops::Mul<f64, Output = U>
    {
        x * self.p.recip()
    }
}
