//! Initial pulse envelopes and closed-form reference solutions.

use ndarray as nd;
use num_complex::Complex64 as C64;
use crate::{ Arr1, units };

/// Hyperbolic-secant envelope `√P₀ sech(t/t₀)` with peak power `p0` and
/// duration `t0`.
pub fn sech_pulse<S>(t: &Arr1<S>, p0: f64, t0: f64) -> nd::Array1<C64>
where S: nd::Data<Elem = f64>
{
    let amp = p0.sqrt();
    t.mapv(|tk| C64::from(amp / (tk / t0).cosh()))
}

/// Fundamental soliton of the cubic NLS with anomalous dispersion
/// `beta2 < 0`, duration `t0`, evaluated at propagation distance `z`.
///
/// The intensity profile is independent of `z`; only a uniform phase
/// `z / 2L_D` accumulates, where `L_D` is the
/// [dispersion length][units::dispersion_length].
pub fn fundamental_soliton<S>(
    t: &Arr1<S>,
    beta2: f64,
    gamma: f64,
    t0: f64,
    z: f64,
) -> nd::Array1<C64>
where S: nd::Data<Elem = f64>
{
    let p0 = units::fundamental_power(beta2, gamma, t0);
    let phase = C64::cis(z / 2.0 / units::dispersion_length(beta2, t0));
    sech_pulse(t, p0, t0).mapv(|ak| ak * phase)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn peak_values() {
        let t = nd::array![-1.0, 0.0, 1.0];
        let a = sech_pulse(&t, 4.0, 1.0);
        assert!((a[1].re - 2.0).abs() < 1e-12);
        assert!((a[0] - a[2]).norm() < 1e-12);
        assert!((a[2].re - 2.0 / 1.0_f64.cosh()).abs() < 1e-12);
    }

    #[test]
    fn soliton_phase_rotates() {
        let t = nd::array![0.0];
        // L_D = 1, so the phase is z / 2
        let a = fundamental_soliton(&t, -1.0, 1.0, 1.0, 1.0);
        assert!((a[0].norm() - 1.0).abs() < 1e-12);
        assert!((a[0].arg() - 0.5).abs() < 1e-12);
    }
}
