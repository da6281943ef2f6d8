//! Split-step Fourier integration of the generalized nonlinear Schrödinger
//! equation
//! ```text
//! ∂A     β₂ ∂²A   β₃ ∂³A     β₄ ∂⁴A
//! -- = -i-- ---  + -- ---  + i-- ---  + i γ ( |A|² A + i s ∂(|A|² A)/∂t )
//! ∂z     2  ∂t²    6  ∂t³    24 ∂t⁴
//! ```
//! over a uniform grid of propagation distances.
//!
//! Each step applies the linear (dispersion) part in the frequency domain and
//! the nonlinear part in the time domain, in one of two orders; see
//! [`Splitting`] and [`docs`][crate::docs#split-step-integration].
//!
//! ```
//! use ndarray as nd;
//! use ssfm::{
//!     propagate::{ FiberParams, Splitting, propagate },
//!     pulse::sech_pulse,
//! };
//!
//! let t: nd::Array1<f64> = nd::Array1::linspace(-20.0, 20.0, 256);
//! let z: nd::Array1<f64> = nd::Array1::linspace(0.0, 1.0, 501);
//! let a0 = sech_pulse(&t, 1.0, 1.0);
//! let params = FiberParams::new(-1.0, 1.0);
//! let traj = propagate(&z, &t, &a0, &params, 100, Splitting::Symmetric)
//!     .unwrap();
//! assert_eq!(traj.len(), 6);
//! assert!(traj.is_finite());
//! ```

use ndarray as nd;
use num_complex::Complex64 as C64;
use crate::{
    Arr1,
    dispersion::{ Dispersion, phase_factors },
    error::{ LengthError, PropError },
    grid::{ TimeGrid, ZGrid },
    nonlinear::Nonlinearity,
    spectral::Transform,
    trajectory::{ Recorder, Trajectory },
};

pub type PropResult<T> = Result<T, PropError>;

/// Ordering of the linear and nonlinear sub-steps within each step.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Splitting {
    /// Nonlinear over `dz`, then linear over `dz`. First-order accurate.
    Simple,
    /// Linear over `dz/2`, nonlinear over `dz`, linear over `dz/2`.
    /// Second-order accurate.
    #[default]
    Symmetric,
}

/// Physical parameters of the medium.
///
/// The default is a linear, dispersionless medium; set coefficients with the
/// `with_*` methods.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct FiberParams {
    /// Dispersion coefficients.
    pub dispersion: Dispersion,
    /// Nonlinear coefficient.
    pub gamma: f64,
    /// Self-steepening coefficient.
    pub s: f64,
}

impl FiberParams {
    /// Second-order dispersion `beta2` and nonlinear coefficient `gamma`, with
    /// no higher-order dispersion or self-steepening.
    pub fn new(beta2: f64, gamma: f64) -> Self {
        Self { dispersion: Dispersion::gvd(beta2), gamma, s: 0.0 }
    }

    /// Replace the dispersion coefficients.
    pub fn with_dispersion(mut self, dispersion: Dispersion) -> Self {
        self.dispersion = dispersion;
        self
    }

    /// Set the third-order dispersion.
    pub fn with_beta3(mut self, beta3: f64) -> Self {
        self.dispersion.beta3 = beta3;
        self
    }

    /// Set the fourth-order dispersion.
    pub fn with_beta4(mut self, beta4: f64) -> Self {
        self.dispersion.beta4 = beta4;
        self
    }

    /// Set the self-steepening coefficient.
    pub fn with_self_steepening(mut self, s: f64) -> Self {
        self.s = s;
        self
    }

    /// The nonlinear operator described by these parameters.
    pub fn nonlinearity(&self) -> Nonlinearity {
        Nonlinearity::new(self.gamma, self.s)
    }

    /// Check that every coefficient is finite.
    pub fn validate(&self) -> PropResult<()> {
        self.dispersion.validate()?;
        self.nonlinearity().validate()
    }
}

// apply the precomputed linear factors `exp(i D dz)` to `q` *in place*
fn apply_split_linear<S>(
    transform: &mut Transform,
    factors: &nd::Array1<C64>,
    q: &mut Arr1<S>,
)
where S: nd::DataMut<Elem = C64>
{
    transform.forward_inplace(q);
    nd::Zip::from(&mut *q).and(factors)
        .for_each(|qk, fk| { *qk *= *fk; });
    transform.inverse_inplace(q);
}

/// Advances a time-domain field by one fixed step.
///
/// The dispersion kernel, its phase factors and the transform plans are
/// computed once on construction.
#[derive(Debug)]
pub struct Stepper {
    splitting: Splitting,
    dz: f64,
    transform: Transform,
    w: nd::Array1<f64>,
    // exp(i D dz) for simple splitting, exp(i D dz/2) for symmetric
    factors: nd::Array1<C64>,
    nonlinearity: Nonlinearity,
}

impl Stepper {
    /// Prepare to take steps of size `dz` on a time grid.
    pub fn new(
        grid: &TimeGrid,
        params: &FiberParams,
        dz: f64,
        splitting: Splitting,
    ) -> Self
    {
        let kernel = params.dispersion.kernel(grid.w());
        let linear_dz = match splitting {
            Splitting::Simple => dz,
            Splitting::Symmetric => dz / 2.0,
        };
        Self {
            splitting,
            dz,
            transform: Transform::new(grid.len()),
            w: grid.w().clone(),
            factors: phase_factors(&kernel, linear_dz),
            nonlinearity: params.nonlinearity(),
        }
    }

    /// Step size.
    pub fn dz(&self) -> f64 { self.dz }

    /// Sub-step ordering.
    pub fn splitting(&self) -> Splitting { self.splitting }

    /// Advance `q` by one step *in place*.
    pub fn step<S>(&mut self, q: &mut Arr1<S>)
    where S: nd::DataMut<Elem = C64>
    {
        let Self { splitting, dz, transform, w, factors, nonlinearity } = self;
        match splitting {
            Splitting::Simple => {
                nonlinearity.apply(q, *dz, transform, w);
                apply_split_linear(transform, factors, q);
            },
            Splitting::Symmetric => {
                apply_split_linear(transform, factors, q);
                nonlinearity.apply(q, *dz, transform, w);
                apply_split_linear(transform, factors, q);
            },
        }
    }

    /// Advance `q` by `steps` steps *in place*.
    pub fn evolve<S>(&mut self, q: &mut Arr1<S>, steps: usize)
    where S: nd::DataMut<Elem = C64>
    {
        for _ in 0..steps { self.step(q); }
    }
}

/// Propagate an initial field `a0` sampled on time coordinates `t` over
/// propagation coordinates `z`, keeping every `n_skip`-th field.
///
/// The initial field is always kept, paired with `z[0]` rather than a literal
/// 0; the two coincide only for grids that start at the origin. Both
/// coordinate arrays must be uniform and strictly increasing with at least 2
/// points.
///
/// Numerical blow-up from under-resolved grids or overly large steps is not
/// detected beyond a logged warning; see [`Trajectory::is_finite`].
pub fn propagate<S, T, U>(
    z: &Arr1<S>,
    t: &Arr1<T>,
    a0: &Arr1<U>,
    params: &FiberParams,
    n_skip: usize,
    splitting: Splitting,
) -> PropResult<Trajectory>
where
    S: nd::Data<Elem = f64>,
    T: nd::Data<Elem = f64>,
    U: nd::Data<Elem = C64>,
{
    let z_grid = ZGrid::new(z)?;
    let t_grid = TimeGrid::new(t)?;
    propagate_grid(&z_grid, &t_grid, a0, params, n_skip, splitting)
}

/// Like [`propagate`], but for pre-validated grids.
pub fn propagate_grid<S>(
    z_grid: &ZGrid,
    t_grid: &TimeGrid,
    a0: &Arr1<S>,
    params: &FiberParams,
    n_skip: usize,
    splitting: Splitting,
) -> PropResult<Trajectory>
where S: nd::Data<Elem = C64>
{
    LengthError::check(a0, t_grid.t())?;
    PropError::check_stride(n_skip)?;
    params.validate()?;

    let z = z_grid.z();
    let nz = z_grid.len();
    log::debug!(
        "propagating {} samples over {} steps (dz = {:e}, {:?} splitting, \
        {:?}, {:?})",
        t_grid.len(), z_grid.steps(), z_grid.dz(), splitting,
        params.dispersion, params.nonlinearity(),
    );

    let mut stepper = Stepper::new(t_grid, params, z_grid.dz(), splitting);
    let mut q: nd::Array1<C64> = a0.to_owned();
    let mut recorder = Recorder::new(nz, n_skip, z[0], &q);
    for (idx, &zk) in z.iter().enumerate().skip(1) {
        stepper.step(&mut q);
        recorder.observe(idx, zk, &q);
    }
    let traj = recorder.finish();
    log::debug!("propagation finished; kept {} fields", traj.len());
    if !traj.is_finite() {
        log::warn!(
            "propagation produced non-finite field values; the grid may be \
            under-resolved or the step size too large"
        );
    }
    Ok(traj)
}

/// Propagate `a0` over a distance `z_max` in `steps` equal steps, returning
/// only the final field.
pub fn propagate_final<S>(
    t_grid: &TimeGrid,
    a0: &Arr1<S>,
    params: &FiberParams,
    z_max: f64,
    steps: usize,
    splitting: Splitting,
) -> PropResult<nd::Array1<C64>>
where S: nd::Data<Elem = C64>
{
    LengthError::check(a0, t_grid.t())?;
    PropError::check_steps(steps)?;
    PropError::check_distance(z_max)?;
    params.validate()?;
    let dz = z_max / steps as f64;
    let mut stepper = Stepper::new(t_grid, params, dz, splitting);
    let mut q: nd::Array1<C64> = a0.to_owned();
    stepper.evolve(&mut q, steps);
    Ok(q)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ analysis, pulse::sech_pulse, spectral::fft };

    #[test]
    fn rejects_bad_input() {
        let t: nd::Array1<f64> = nd::Array1::linspace(-5.0, 5.0, 16);
        let z: nd::Array1<f64> = nd::Array1::linspace(0.0, 1.0, 11);
        let a0 = sech_pulse(&t, 1.0, 1.0);
        let params = FiberParams::new(-1.0, 1.0);

        let short = a0.slice(nd::s![..8]);
        assert!(matches!(
            propagate(&z, &t, &short, &params, 1, Splitting::Simple),
            Err(PropError::Length(LengthError(8, 16))),
        ));
        assert!(matches!(
            propagate(&z, &t, &a0, &params, 0, Splitting::Simple),
            Err(PropError::BadStride(0)),
        ));
        let single = nd::array![0.0];
        assert!(matches!(
            propagate(&single, &t, &a0, &params, 1, Splitting::Simple),
            Err(PropError::Grid(_)),
        ));
        let nan = params.with_self_steepening(f64::NAN);
        assert!(matches!(
            propagate(&z, &t, &a0, &nan, 1, Splitting::Simple),
            Err(PropError::BadParam("s", _)),
        ));
        assert!(matches!(
            propagate_final(
                &TimeGrid::new(&t).unwrap(), &a0, &params, 1.0, 0,
                Splitting::Simple,
            ),
            Err(PropError::BadSteps(0)),
        ));
    }

    #[test]
    fn builder_sets_coefficients() {
        let params = FiberParams::new(-1.0, 2.0)
            .with_beta3(0.1)
            .with_beta4(-0.01)
            .with_self_steepening(0.2);
        assert_eq!(params.dispersion, Dispersion::new(-1.0, 0.1, -0.01));
        assert_eq!(
            params.nonlinearity(),
            Nonlinearity::SelfSteepened { gamma: 2.0, s: 0.2 },
        );
        assert_eq!(FiberParams::default().nonlinearity(), Nonlinearity::Kerr { gamma: 0.0 });
    }

    #[test]
    fn symmetric_conserves_energy() {
        let grid = TimeGrid::periodic(-20.0, 20.0, 256).unwrap();
        let a0 = sech_pulse(grid.t(), 2.0, 1.0);
        let params = FiberParams::new(-1.0, 1.0).with_beta3(0.05);
        let mut stepper = Stepper::new(&grid, &params, 1e-2, Splitting::Symmetric);
        let mut q = a0.clone();
        stepper.evolve(&mut q, 200);
        let e0 = analysis::energy(&a0, grid.dt());
        let e1 = analysis::energy(&q, grid.dt());
        assert!(((e1 - e0) / e0).abs() < 1e-10);
    }

    #[test]
    fn linear_medium_keeps_spectral_modulus() {
        let grid = TimeGrid::periodic(-20.0, 20.0, 128).unwrap();
        let a0 = sech_pulse(grid.t(), 1.0, 0.5);
        let params = FiberParams::new(-1.0, 0.0).with_beta4(0.02);
        let q = propagate_final(&grid, &a0, &params, 3.0, 30, Splitting::Simple)
            .unwrap();
        let s0 = fft(&a0);
        let s1 = fft(&q);
        s0.iter().zip(&s1)
            .for_each(|(a, b)| assert!((a.norm() - b.norm()).abs() < 1e-12));
    }
}
