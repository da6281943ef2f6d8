//! Step-size studies comparing simple and symmetric splitting.
//!
//! Each candidate step size is given as a number of equal steps over a fixed
//! propagation distance, so that every run ends exactly at that distance and
//! can be compared against the same reference field.

use ndarray as nd;
use num_complex::Complex64 as C64;
use crate::{
    Arr1,
    error::{ LengthError, PropError },
    grid::TimeGrid,
    propagate::{ FiberParams, PropResult, Splitting, propagate_final },
};

/// Field against which final states are compared.
#[derive(Clone, Debug)]
pub enum Reference {
    /// A known field at the end of the propagation distance, e.g. a
    /// closed-form solution.
    Exact(nd::Array1<C64>),
    /// A symmetric-splitting run with the given (large) number of steps.
    Fine { steps: usize },
}

/// Final-state errors for a single step size.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ConvergenceRow {
    /// Step size.
    pub dz: f64,
    /// RMS error under [`Splitting::Simple`].
    pub rms_simple: f64,
    /// RMS error under [`Splitting::Symmetric`].
    pub rms_symmetric: f64,
}

impl ConvergenceRow {
    /// Convert to a `(dz, rms_simple, rms_symmetric)` tuple.
    pub fn as_tuple(&self) -> (f64, f64, f64) {
        (self.dz, self.rms_simple, self.rms_symmetric)
    }
}

/// Root-mean-square deviation `√(Σ|a - b|² / N)` between two fields.
pub fn rms_error<S, T>(a: &Arr1<S>, b: &Arr1<T>) -> Result<f64, LengthError>
where
    S: nd::Data<Elem = C64>,
    T: nd::Data<Elem = C64>,
{
    LengthError::check(a, b)?;
    let sum: f64
        = a.iter().zip(b)
        .map(|(ak, bk)| (*ak - *bk).norm_sqr())
        .sum();
    Ok((sum / a.len() as f64).sqrt())
}

/// Run both splitting schemes for each entry of `step_counts` over a distance
/// `z_max` and compute the RMS deviation of each final field from
/// `reference`.
///
/// Rows are returned in the order of `step_counts`.
pub fn convergence_sweep<S>(
    grid: &TimeGrid,
    a0: &Arr1<S>,
    params: &FiberParams,
    z_max: f64,
    step_counts: &[usize],
    reference: &Reference,
) -> PropResult<Vec<ConvergenceRow>>
where S: nd::Data<Elem = C64>
{
    let ref_field: nd::Array1<C64>
        = match reference {
            Reference::Exact(field) => {
                LengthError::check(field, grid.t())?;
                field.clone()
            },
            Reference::Fine { steps } => {
                log::debug!("computing reference field with {steps} steps");
                propagate_final(
                    grid, a0, params, z_max, *steps, Splitting::Symmetric)?
            },
        };
    step_counts.iter()
        .map(|&steps| {
            let simple = propagate_final(
                grid, a0, params, z_max, steps, Splitting::Simple)?;
            let symmetric = propagate_final(
                grid, a0, params, z_max, steps, Splitting::Symmetric)?;
            let row = ConvergenceRow {
                dz: z_max / steps as f64,
                rms_simple: rms_error(&simple, &ref_field)?,
                rms_symmetric: rms_error(&symmetric, &ref_field)?,
            };
            log::debug!(
                "dz = {:e}: simple {:e}, symmetric {:e}",
                row.dz, row.rms_simple, row.rms_symmetric,
            );
            Ok(row)
        })
        .collect()
}

/// Estimate observed convergence orders between successive rows as
/// `log(e[k] / e[k + 1]) / log(dz[k] / dz[k + 1])`, returned as
/// `(simple, symmetric)` pairs.
pub fn observed_orders(rows: &[ConvergenceRow]) -> Vec<(f64, f64)> {
    rows.iter().zip(rows.iter().skip(1))
        .map(|(r0, r1)| {
            let h = (r0.dz / r1.dz).ln();
            (
                (r0.rms_simple / r1.rms_simple).ln() / h,
                (r0.rms_symmetric / r1.rms_symmetric).ln() / h,
            )
        })
        .collect()
}
