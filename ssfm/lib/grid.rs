//! Uniform sampling grids for the time and propagation axes.
//!
//! Both grids are validated once on construction and are immutable afterward.

use ndarray as nd;
use crate::{
    Arr1,
    error::GridError,
    spectral::ang_freq,
    utils::array_diff,
};

pub type GridResult<T> = Result<T, GridError>;

// relative tolerance on deviations from the first grid spacing
const UNIFORM_RTOL: f64 = 1e-6;

/// Check that `x` is finite, strictly increasing and uniformly spaced,
/// returning the spacing `x[1] - x[0]`.
pub fn check_uniform<S>(x: &Arr1<S>) -> GridResult<f64>
where S: nd::Data<Elem = f64>
{
    let n = x.len();
    if n < 2 { return Err(GridError::TooShort(n)); }
    if let Some(k) = x.iter().position(|xk| !xk.is_finite()) {
        return Err(GridError::NonFinite(k));
    }
    let dx = array_diff(x);
    let expected = dx[0];
    for (index, &step) in dx.iter().enumerate() {
        if step <= 0.0 {
            return Err(GridError::NotIncreasing { index, step });
        }
        if (step - expected).abs() > UNIFORM_RTOL * expected {
            return Err(GridError::NonUniform { index, step, expected });
        }
    }
    Ok(expected)
}

/// A uniform time grid together with its angular-frequency axis.
///
/// The frequency axis is in natural FFT order (see
/// [`ang_freq`][crate::spectral::ang_freq]), which is the order in which
/// dispersion kernels are applied.
#[derive(Clone, Debug)]
pub struct TimeGrid {
    t: nd::Array1<f64>,
    dt: f64,
    w: nd::Array1<f64>,
}

impl TimeGrid {
    /// Validate a time coordinate array.
    pub fn new<S>(t: &Arr1<S>) -> GridResult<Self>
    where S: nd::Data<Elem = f64>
    {
        let dt = check_uniform(t)?;
        let w = ang_freq(t.len(), dt);
        Ok(Self { t: t.to_owned(), dt, w })
    }

    /// Create a grid of `n` points on the half-open interval `[t_min, t_max)`,
    /// i.e. a periodic grid that excludes its right endpoint.
    pub fn periodic(t_min: f64, t_max: f64, n: usize) -> GridResult<Self> {
        let dt = (t_max - t_min) / n as f64;
        let t: nd::Array1<f64>
            = (0..n).map(|k| t_min + k as f64 * dt).collect();
        Self::new(&t)
    }

    /// Number of samples.
    pub fn len(&self) -> usize { self.t.len() }

    /// Always `false`; grids have at least 2 points.
    pub fn is_empty(&self) -> bool { self.t.is_empty() }

    /// Sampling interval.
    pub fn dt(&self) -> f64 { self.dt }

    /// Time coordinates.
    pub fn t(&self) -> &nd::Array1<f64> { &self.t }

    /// Angular frequencies in natural FFT order.
    pub fn w(&self) -> &nd::Array1<f64> { &self.w }
}

/// A uniform grid of propagation distances.
#[derive(Clone, Debug)]
pub struct ZGrid {
    z: nd::Array1<f64>,
    dz: f64,
}

impl ZGrid {
    /// Validate a propagation coordinate array.
    pub fn new<S>(z: &Arr1<S>) -> GridResult<Self>
    where S: nd::Data<Elem = f64>
    {
        let dz = check_uniform(z)?;
        Ok(Self { z: z.to_owned(), dz })
    }

    /// Create a grid of `nz` points from 0 to `z_max`, inclusive.
    pub fn linspace(z_max: f64, nz: usize) -> GridResult<Self> {
        let z: nd::Array1<f64> = nd::Array1::linspace(0.0, z_max, nz);
        Self::new(&z)
    }

    /// Number of samples, including the origin.
    pub fn len(&self) -> usize { self.z.len() }

    /// Always `false`; grids have at least 2 points.
    pub fn is_empty(&self) -> bool { self.z.is_empty() }

    /// Number of integration steps, `len() - 1`.
    pub fn steps(&self) -> usize { self.z.len() - 1 }

    /// Step size.
    pub fn dz(&self) -> f64 { self.dz }

    /// Propagation coordinates.
    pub fn z(&self) -> &nd::Array1<f64> { &self.z }
}
