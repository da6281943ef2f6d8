//! Time-domain nonlinear sub-steps.
//!
//! The nonlinear part of the envelope equation is
//! ```text
//! ∂A
//! -- = i γ ( |A|² A + i s ∂(|A|² A)/∂t )
//! ∂z
//! ```
//! With `s = 0` this is a pure, intensity-dependent phase rotation that can be
//! applied exactly. With `s ≠ 0` the time derivative couples neighboring
//! samples, and the sub-step is instead taken with a single fourth-order
//! Runge-Kutta step, evaluating the derivative spectrally.

use ndarray as nd;
use num_complex::Complex64 as C64;
use crate::{
    Arr1,
    error::PropError,
    spectral::Transform,
    utils::array_step,
};

/// Selects the nonlinear operator applied in each step.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Nonlinearity {
    /// Instantaneous cubic (Kerr) nonlinearity.
    Kerr { gamma: f64 },
    /// Cubic nonlinearity with self-steepening.
    SelfSteepened { gamma: f64, s: f64 },
}

impl Nonlinearity {
    /// Select the operator for a nonlinear coefficient `gamma` and
    /// self-steepening coefficient `s`, using [`Self::Kerr`] when `s == 0`.
    pub fn new(gamma: f64, s: f64) -> Self {
        if s == 0.0 {
            Self::Kerr { gamma }
        } else {
            Self::SelfSteepened { gamma, s }
        }
    }

    pub(crate) fn validate(&self) -> Result<(), PropError> {
        PropError::check_param("gamma", self.gamma())?;
        PropError::check_param("s", self.s())?;
        Ok(())
    }

    /// Nonlinear coefficient.
    pub fn gamma(&self) -> f64 {
        match self {
            Self::Kerr { gamma } => *gamma,
            Self::SelfSteepened { gamma, .. } => *gamma,
        }
    }

    /// Self-steepening coefficient (0 for [`Self::Kerr`]).
    pub fn s(&self) -> f64 {
        match self {
            Self::Kerr { .. } => 0.0,
            Self::SelfSteepened { s, .. } => *s,
        }
    }

    /// Advance the time-domain field `q` over a distance `dz` *in place*.
    ///
    /// `transform` and the natural-order angular frequencies `w` are only used
    /// when self-steepening is active.
    pub fn apply<S, T>(
        &self,
        q: &mut Arr1<S>,
        dz: f64,
        transform: &mut Transform,
        w: &Arr1<T>,
    )
    where
        S: nd::DataMut<Elem = C64>,
        T: nd::Data<Elem = f64>,
    {
        match *self {
            Self::Kerr { gamma } => kerr_step(q, gamma, dz),
            Self::SelfSteepened { gamma, s } if s == 0.0 =>
                kerr_step(q, gamma, dz),
            Self::SelfSteepened { gamma, s } =>
                self_steepening_step(q, gamma, s, dz, transform, w),
        }
    }
}

/// Apply the Kerr phase rotation `A → A exp(i γ |A|² dz)` *in place*.
///
/// Every sample keeps its modulus.
pub fn kerr_step<S>(q: &mut Arr1<S>, gamma: f64, dz: f64)
where S: nd::DataMut<Elem = C64>
{
    q.map_inplace(|qk| { *qk *= C64::cis(gamma * qk.norm_sqr() * dz); });
}

// right-hand side of the self-steepened nonlinear equation
//   i γ |A|² A - γ s ∂(|A|² A)/∂t
fn self_steepening_rhs<S, T>(
    q: &Arr1<S>,
    gamma: f64,
    s: f64,
    transform: &mut Transform,
    w: &Arr1<T>,
) -> nd::Array1<C64>
where
    S: nd::Data<Elem = C64>,
    T: nd::Data<Elem = f64>,
{
    let p: nd::Array1<C64> = q.mapv(|qk| qk.norm_sqr() * qk);
    let dp = transform.derivative(&p, w);
    nd::Zip::from(&p).and(&dp)
        .map_collect(|pk, dpk| C64::i() * gamma * *pk - *dpk * (gamma * s))
}

/// Take a single fourth-order Runge-Kutta step of the self-steepened
/// nonlinear equation *in place*.
///
/// See also [`kerr_step`] for the `s = 0` case, to which
/// [`Nonlinearity::apply`] defers.
pub fn self_steepening_step<S, T>(
    q: &mut Arr1<S>,
    gamma: f64,
    s: f64,
    dz: f64,
    transform: &mut Transform,
    w: &Arr1<T>,
)
where
    S: nd::DataMut<Elem = C64>,
    T: nd::Data<Elem = f64>,
{
    let dzh = dz / 2.0;
    let k1 = self_steepening_rhs(q, gamma, s, transform, w);
    let k2 = self_steepening_rhs(
        &array_step(q, dzh, &k1), gamma, s, transform, w);
    let k3 = self_steepening_rhs(
        &array_step(q, dzh, &k2), gamma, s, transform, w);
    let k4 = self_steepening_rhs(
        &array_step(q, dz, &k3), gamma, s, transform, w);
    nd::Zip::from(q).and(&k1).and(&k2).and(&k3).and(&k4)
        .for_each(|qk, k1k, k2k, k3k, k4k| {
            *qk += (*k1k + (*k2k + *k3k) * 2.0 + *k4k) * (dz / 6.0);
        });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ grid::TimeGrid, pulse::sech_pulse };

    #[test]
    fn kerr_preserves_modulus() {
        let mut q: nd::Array1<C64>
            = (0..64).map(|k| C64::from_polar(1.0 + 0.1 * k as f64, 0.3 * k as f64))
            .collect();
        let before = q.mapv(|qk| qk.norm());
        kerr_step(&mut q, 1.3, 0.7);
        q.iter().zip(&before)
            .for_each(|(qk, bk)| assert!((qk.norm() - bk).abs() < 1e-12));
    }

    #[test]
    fn kerr_phase_matches_intensity() {
        let mut q = nd::array![C64::new(2.0, 0.0)];
        kerr_step(&mut q, 0.5, 0.25);
        // phase γ |A|² dz = 0.5
        assert!((q[0].arg() - 0.5).abs() < 1e-12);
    }

    #[test]
    fn zero_steepening_is_kerr() {
        assert_eq!(Nonlinearity::new(1.0, 0.0), Nonlinearity::Kerr { gamma: 1.0 });
        let grid = TimeGrid::periodic(-10.0, 10.0, 128).unwrap();
        let q0 = sech_pulse(grid.t(), 1.0, 1.0);
        let mut tr = Transform::new(grid.len());

        let mut qa = q0.clone();
        Nonlinearity::SelfSteepened { gamma: 1.0, s: 0.0 }
            .apply(&mut qa, 0.01, &mut tr, grid.w());
        let mut qb = q0.clone();
        kerr_step(&mut qb, 1.0, 0.01);
        assert_eq!(qa, qb);
    }

    #[test]
    fn steepening_agrees_with_kerr_for_small_s() {
        let grid = TimeGrid::periodic(-15.0, 15.0, 256).unwrap();
        let q0 = sech_pulse(grid.t(), 1.0, 1.0);
        let mut tr = Transform::new(grid.len());

        let mut qs = q0.clone();
        self_steepening_step(&mut qs, 1.0, 1e-9, 1e-3, &mut tr, grid.w());
        let mut qk = q0.clone();
        kerr_step(&mut qk, 1.0, 1e-3);
        qs.iter().zip(&qk)
            .for_each(|(a, b)| assert!((*a - *b).norm() < 1e-10));
    }

    #[test]
    fn steepening_preserves_energy_to_step_order() {
        let grid = TimeGrid::periodic(-15.0, 15.0, 256).unwrap();
        let mut q = sech_pulse(grid.t(), 1.0, 1.0);
        let mut tr = Transform::new(grid.len());
        let e0: f64 = q.iter().map(|qk| qk.norm_sqr()).sum();
        for _ in 0..100 {
            self_steepening_step(&mut q, 1.0, 0.2, 1e-3, &mut tr, grid.w());
        }
        let e1: f64 = q.iter().map(|qk| qk.norm_sqr()).sum();
        assert!(((e1 - e0) / e0).abs() < 1e-6);
    }
}
