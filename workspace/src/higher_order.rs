use std::path::PathBuf;
use ndarray as nd;
use num_complex::Complex64 as C64;
use whooie::{ mkdir, write_npz };
use ssfm::{
    analysis,
    grid::{ TimeGrid, ZGrid },
    propagate::{ FiberParams, Splitting, propagate_grid },
    pulse,
    units,
};

// units: ps, m, W
const BETA2: f64 = -0.01276; // ps² m⁻¹
const BETA3: f64 = 8.119e-5; // ps³ m⁻¹
const BETA4: f64 = -1.321e-7; // ps⁴ m⁻¹
const GAMMA: f64 = 0.045; // W⁻¹ m⁻¹
const T0: f64 = 0.0284; // ps
const WAVELENGTH: f64 = 1550e-9; // m
const NT: usize = 4096;
const T_MAX: f64 = 4.5; // ps
const Z_MAX: f64 = 1.0; // m
const NZ: usize = 10001;
const N_SKIP: usize = 50;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let p0 = units::fundamental_power(BETA2, GAMMA, T0);
    let uu = units::Units::from_fiber(BETA2, GAMMA, T0);
    // shock time 1/ω₀ in ps, to match the other coefficients
    let s = units::shock_time(WAVELENGTH) * 1e12;
    let s_nat = units::self_steepening_param(WAVELENGTH, T0 * 1e-12);
    let z_nat: f64 = uu.to_nat_length(Z_MAX);
    println!(
        "P0 = {p0:.3} W; L_D = {:.4} m; z_max = {z_nat:.2} L_D; \
        s = {s:.3e} ps ({s_nat:.4} in natural units)",
        uu.z,
    );

    let t_grid = TimeGrid::periodic(-T_MAX, T_MAX, NT)?;
    let z_grid = ZGrid::linspace(Z_MAX, NZ)?;
    let a0: nd::Array1<C64> = pulse::sech_pulse(t_grid.t(), p0, T0);
    let params = FiberParams::new(BETA2, GAMMA)
        .with_beta3(BETA3)
        .with_beta4(BETA4);

    let traj = propagate_grid(
        &z_grid, &t_grid, &a0, &params, N_SKIP, Splitting::Symmetric)?;
    let traj_ss = propagate_grid(
        &z_grid, &t_grid, &a0, &params.with_self_steepening(s), N_SKIP,
        Splitting::Symmetric,
    )?;
    for (label, tr) in [("dispersion only", &traj), ("self-steepening", &traj_ss)] {
        let q = tr.final_field();
        let t_peak = analysis::peak_time(t_grid.t(), &q).unwrap_or(f64::NAN);
        let p_peak = analysis::intensity(&q).fold(0.0_f64, |acc, ik| acc.max(*ik));
        println!(
            "{label}: final peak at {:+.3} t0 with {:.3} P0; centroid {:+.4} ps; \
            energy {:.4e} pJ",
            uu.to_nat_time::<f64, f64>(t_peak),
            uu.to_nat_power::<f64, f64>(p_peak),
            analysis::centroid(t_grid.t(), &q),
            analysis::energy(&q, t_grid.dt()),
        );
    }
    // leading-order peak drift t_c = s I₀ z, with I₀ = 1 in natural units
    let t_guide: f64 = uu.from_nat_time(s_nat * z_nat);
    println!("self-steepening guide drift at z_max: {t_guide:+.4} ps");

    let t_nat: nd::Array1<f64> = uu.to_nat_time(t_grid.t().clone());
    let intensity_nat: nd::Array2<f64> = uu.to_nat_power(traj_ss.intensity());

    let w_shifted = ssfm::utils::fft_shift(t_grid.w());
    let outdir = PathBuf::from("output");
    mkdir!(outdir);
    write_npz!(
        outdir.join("higher_order.npz"),
        arrays: {
            "t" => t_grid.t(),
            "t_nat" => &t_nat,
            "w" => &w_shifted,
            "z" => traj.z(),
            "A" => traj.fields(),
            "A_ss" => traj_ss.fields(),
            "intensity_ss_nat" => &intensity_nat,
            "intensity" => &analysis::normalize_floored(&traj.intensity()),
            "intensity_ss" => &analysis::normalize_floored(&traj_ss.intensity()),
            "spectrum" => &analysis::normalize_floored(
                &analysis::spectral_intensity(traj.fields())),
            "spectrum_ss" => &analysis::normalize_floored(
                &analysis::spectral_intensity(traj_ss.fields())),
        }
    );
    Ok(())
}
