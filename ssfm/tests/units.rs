use ndarray as nd;
use ssfm::{
    analysis,
    grid::TimeGrid,
    propagate::{ FiberParams, Splitting, propagate_final },
    pulse,
    units::{ self, Units },
};

// fiber in ps, m, W
const BETA2: f64 = -0.01276;
const GAMMA: f64 = 0.045;
const T0: f64 = 0.0284;
const WAVELENGTH: f64 = 1550e-9;
const Z: f64 = 0.2;
const NT: usize = 512;
const STEPS: usize = 800;

// propagate the same self-steepened soliton on a grid spanning ±20 t₀
fn run(beta2: f64, gamma: f64, t0: f64, s: f64, z: f64)
    -> (TimeGrid, nd::Array1<f64>)
{
    let grid = TimeGrid::periodic(-20.0 * t0, 20.0 * t0, NT).unwrap();
    let p0 = units::fundamental_power(beta2, gamma, t0);
    let a0 = pulse::sech_pulse(grid.t(), p0, t0);
    let params = FiberParams::new(beta2, gamma).with_self_steepening(s);
    let q = propagate_final(&grid, &a0, &params, z, STEPS, Splitting::Symmetric)
        .unwrap();
    (grid, analysis::intensity(&q))
}

#[test]
fn physical_and_natural_units_agree() {
    let uu = Units::from_fiber(BETA2, GAMMA, T0);
    let s_phys = units::shock_time(WAVELENGTH) * 1e12;
    let s_nat = units::self_steepening_param(WAVELENGTH, T0 * 1e-12);
    assert!((s_phys / T0 - s_nat).abs() < 1e-12);

    let (grid_phys, int_phys) = run(BETA2, GAMMA, T0, s_phys, Z);
    let (grid_nat, int_nat) = run(-1.0, 1.0, 1.0, s_nat, uu.to_nat_length(Z));

    let t_rescaled: nd::Array1<f64> = uu.to_nat_time(grid_phys.t().clone());
    t_rescaled.iter().zip(grid_nat.t())
        .for_each(|(a, b)| assert!((a - b).abs() < 1e-9));

    let int_rescaled: nd::Array1<f64> = uu.to_nat_power(int_phys);
    int_rescaled.iter().zip(&int_nat)
        .for_each(|(a, b)| assert!((a - b).abs() < 1e-8, "{a} vs {b}"));

    // the peak has moved, and by the same amount in both unit systems
    let peak_nat = grid_nat.t()[ssfm::utils::argmax(&int_nat).unwrap()];
    let peak_phys = grid_phys.t()[ssfm::utils::argmax(&int_rescaled).unwrap()];
    assert!(peak_nat > 0.0);
    assert!((uu.to_nat_time::<f64, f64>(peak_phys) - peak_nat).abs() < 1e-9);
    assert!((uu.from_nat_time::<f64, f64>(peak_nat) - peak_phys).abs() < 1e-12);
}
