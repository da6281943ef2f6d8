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

const BETA2: f64 = -1.0;
const GAMMA: f64 = 1.0;
const T0: f64 = 1.0;
const NT: usize = 2048;
const T_MAX: f64 = 50.0;
const Z_MAX: f64 = 12.0;
const NZ: usize = 20000;
const N_SKIP: usize = 100;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let p0 = units::fundamental_power(BETA2, GAMMA, T0);
    let t_grid = TimeGrid::periodic(-T_MAX, T_MAX, NT)?;
    let z_grid = ZGrid::linspace(Z_MAX, NZ)?;
    let a0: nd::Array1<C64> = pulse::sech_pulse(t_grid.t(), p0, T0);
    let params = FiberParams::new(BETA2, GAMMA);

    let traj = propagate_grid(
        &z_grid, &t_grid, &a0, &params, N_SKIP, Splitting::Symmetric)?;
    let z_period = units::soliton_period(BETA2, T0);
    let mut exact: nd::Array2<C64> = nd::Array2::zeros(traj.fields().raw_dim());
    exact.rows_mut().into_iter().zip(traj.z())
        .for_each(|(mut row, &zk)| {
            row.assign(
                &pulse::fundamental_soliton(t_grid.t(), BETA2, GAMMA, T0, zk));
        });
    let intensity_err: nd::Array1<f64>
        = nd::Zip::from(traj.fields().rows()).and(exact.rows())
        .map_collect(|q, a| {
            let dev: f64
                = q.iter().zip(a)
                .map(|(qk, ak)| (qk.norm_sqr() - ak.norm_sqr()).powi(2))
                .sum();
            (dev / q.len() as f64).sqrt()
        });
    println!(
        "soliton period z0 = {z_period:.5}; max intensity deviation = {:.3e}",
        intensity_err.fold(0.0_f64, |acc, e| acc.max(*e)),
    );

    let temporal = analysis::normalize_floored(&traj.intensity());
    let spectral = analysis::normalize_floored(
        &analysis::spectral_intensity(traj.fields()));
    let w_shifted = ssfm::utils::fft_shift(t_grid.w());

    let outdir = PathBuf::from("output");
    mkdir!(outdir);
    write_npz!(
        outdir.join("soliton.npz"),
        arrays: {
            "t" => t_grid.t(),
            "w" => &w_shifted,
            "z" => traj.z(),
            "z0" => &nd::array![z_period],
            "A" => traj.fields(),
            "intensity" => &temporal,
            "spectrum" => &spectral,
            "intensity_err" => &intensity_err,
        }
    );
    Ok(())
}
