use std::path::PathBuf;
use ndarray as nd;
use whooie::{ mkdir, write_npz };
use ssfm::{
    convergence::{ ConvergenceRow, Reference, convergence_sweep, observed_orders },
    grid::TimeGrid,
    propagate::FiberParams,
    pulse,
    units,
};

const BETA2: f64 = -1.0;
const GAMMA: f64 = 1.0;
const T0: f64 = 1.0;
const NT: usize = 1024;
const T_MAX: f64 = 25.0;
const Z_MAX: f64 = 5.0;
const STEPS: [usize; 6] = [25, 50, 100, 200, 400, 800];

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let p0 = units::fundamental_power(BETA2, GAMMA, T0);
    let t_grid = TimeGrid::periodic(-T_MAX, T_MAX, NT)?;
    let a0 = pulse::sech_pulse(t_grid.t(), p0, T0);
    let params = FiberParams::new(BETA2, GAMMA);
    let exact = pulse::fundamental_soliton(t_grid.t(), BETA2, GAMMA, T0, Z_MAX);

    let rows: Vec<ConvergenceRow> = convergence_sweep(
        &t_grid, &a0, &params, Z_MAX, &STEPS, &Reference::Exact(exact))?;
    println!("{:>10}  {:>12}  {:>12}", "dz", "rms simple", "rms symmetric");
    rows.iter()
        .map(ConvergenceRow::as_tuple)
        .for_each(|(dz, rms1, rms2)| {
            println!("{dz:10.3e}  {rms1:12.5e}  {rms2:12.5e}");
        });
    observed_orders(&rows).iter()
        .for_each(|(p1, p2)| {
            println!("observed orders: simple {p1:.3}, symmetric {p2:.3}");
        });

    let dz: nd::Array1<f64> = rows.iter().map(|row| row.dz).collect();
    let rms1: nd::Array1<f64> = rows.iter().map(|row| row.rms_simple).collect();
    let rms2: nd::Array1<f64> = rows.iter().map(|row| row.rms_symmetric).collect();

    let outdir = PathBuf::from("output");
    mkdir!(outdir);
    write_npz!(
        outdir.join("convergence.npz"),
        arrays: {
            "dz" => &dz,
            "rms1" => &rms1,
            "rms2" => &rms2,
        }
    );
    Ok(())
}
