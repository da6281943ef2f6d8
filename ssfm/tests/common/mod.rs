#![allow(dead_code)]

use ndarray as nd;
use num_complex::Complex64 as C64;
use ssfm::{ grid::TimeGrid, propagate::FiberParams, pulse, units };

/// Normalized fiber: `β₂ = -1`, `γ = 1`, `t₀ = 1`.
pub const BETA2: f64 = -1.0;
pub const GAMMA: f64 = 1.0;
pub const T0: f64 = 1.0;

pub fn params() -> FiberParams { FiberParams::new(BETA2, GAMMA) }

/// Periodic grid on `[-t_max, t_max)` carrying a fundamental soliton at z = 0.
pub fn soliton_setup(n: usize, t_max: f64) -> (TimeGrid, nd::Array1<C64>) {
    let grid = TimeGrid::periodic(-t_max, t_max, n).unwrap();
    let p0 = units::fundamental_power(BETA2, GAMMA, T0);
    let a0 = pulse::sech_pulse(grid.t(), p0, T0);
    (grid, a0)
}

/// RMS deviation between the intensity profiles of two fields.
pub fn intensity_rms<S, T>(a: &nd::ArrayBase<S, nd::Ix1>, b: &nd::ArrayBase<T, nd::Ix1>)
    -> f64
where
    S: nd::Data<Elem = C64>,
    T: nd::Data<Elem = C64>,
{
    assert_eq!(a.len(), b.len());
    let sum: f64
        = a.iter().zip(b)
        .map(|(ak, bk)| (ak.norm_sqr() - bk.norm_sqr()).powi(2))
        .sum();
    (sum / a.len() as f64).sqrt()
}
