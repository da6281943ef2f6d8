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
const S: f64 = 0.2;
const NT: usize = 2048;
const T_MAX: f64 = 10.0;
const Z_MAX: f64 = 10.0;
const NZ: usize = 20000;
const N_SKIP: usize = 100;
const PROFILE_Z: [f64; 3] = [0.0, 5.0, 10.0];

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let p0 = units::fundamental_power(BETA2, GAMMA, T0);
    let t_grid = TimeGrid::periodic(-T_MAX, T_MAX, NT)?;
    let z_grid = ZGrid::linspace(Z_MAX, NZ)?;
    let a0: nd::Array1<C64> = pulse::sech_pulse(t_grid.t(), p0, T0);
    let params = FiberParams::new(BETA2, GAMMA).with_self_steepening(S);

    let traj = propagate_grid(
        &z_grid, &t_grid, &a0, &params, N_SKIP, Splitting::Symmetric)?;
    if !traj.is_finite() {
        anyhow::bail!("propagation diverged; refine the time grid or step size");
    }

    let guide = analysis::steepening_guide(traj.z(), S, p0);
    let peaks: nd::Array1<f64>
        = traj.fields().rows().into_iter()
        .map(|q| analysis::peak_time(t_grid.t(), &q).unwrap_or(f64::NAN))
        .collect();

    let profile_idx: Vec<usize>
        = PROFILE_Z.iter()
        .filter_map(|&zk| traj.nearest(zk))
        .collect();
    let profile_z: nd::Array1<f64>
        = profile_idx.iter().map(|&k| traj.z()[k]).collect();
    let profiles: nd::Array2<f64>
        = analysis::intensity(&traj.fields().select(nd::Axis(0), &profile_idx));
    for (zk, q) in profile_z.iter().zip(profiles.rows()) {
        let k = ssfm::utils::argmax(&q).unwrap_or(0);
        println!("z = {zk:5.2}: peak at t = {:+.4}", t_grid.t()[k]);
    }

    let temporal = analysis::normalize_floored(&traj.intensity());
    let spectral = analysis::normalize_floored(
        &analysis::spectral_intensity(traj.fields()));
    let w_shifted = ssfm::utils::fft_shift(t_grid.w());

    let outdir = PathBuf::from("output");
    mkdir!(outdir);
    write_npz!(
        outdir.join("self_steepening.npz"),
        arrays: {
            "t" => t_grid.t(),
            "w" => &w_shifted,
            "z" => traj.z(),
            "A" => traj.fields(),
            "intensity" => &temporal,
            "spectrum" => &spectral,
            "t_c" => &guide,
            "t_peak" => &peaks,
            "profile_z" => &profile_z,
            "profiles" => &profiles,
        }
    );
    Ok(())
}
