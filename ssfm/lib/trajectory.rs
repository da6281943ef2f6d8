//! Down-sampled records of a propagation run.
//!
//! A run of `nz` longitudinal samples with retention stride `n_skip` keeps the
//! initial state plus every step whose (1-based) index is a multiple of
//! `n_skip`, for a total of `1 + (nz - 1) / n_skip` snapshots. Storage for
//! exactly that many snapshots is allocated up front.
//!
//! In all 2D arrays, the first (or zero-th) axis indexes propagation distance.

use ndarray as nd;
use num_complex::Complex64 as C64;
use crate::{ Arr1, analysis };

/// Accumulates retained snapshots during a run.
#[derive(Clone, Debug)]
pub struct Recorder {
    n_skip: usize,
    z: nd::Array1<f64>,
    fields: nd::Array2<C64>,
    filled: usize,
}

impl Recorder {
    /// Number of snapshots retained from `nz` longitudinal samples at stride
    /// `n_skip`.
    ///
    /// *Panics if `n_skip == 0`*.
    pub fn capacity(nz: usize, n_skip: usize) -> usize {
        1 + nz.saturating_sub(1) / n_skip
    }

    /// Allocate storage for a run over `nz` longitudinal samples and store the
    /// initial state `q0` at position `z0`.
    ///
    /// *Panics if `n_skip == 0`*.
    pub fn new<S>(nz: usize, n_skip: usize, z0: f64, q0: &Arr1<S>) -> Self
    where S: nd::Data<Elem = C64>
    {
        let cap = Self::capacity(nz, n_skip);
        let mut z: nd::Array1<f64> = nd::Array1::zeros(cap);
        let mut fields: nd::Array2<C64> = nd::Array2::zeros((cap, q0.len()));
        z[0] = z0;
        fields.slice_mut(nd::s![0, ..]).assign(q0);
        Self { n_skip, z, fields, filled: 1 }
    }

    /// Offer the state after the step ending at longitudinal index `idx`
    /// (1-based) and position `z`, keeping it if `idx` is a multiple of the
    /// stride. Returns `true` if the state was kept.
    pub fn observe<S>(&mut self, idx: usize, z: f64, q: &Arr1<S>) -> bool
    where S: nd::Data<Elem = C64>
    {
        if idx % self.n_skip != 0 || self.filled >= self.z.len() {
            return false;
        }
        self.z[self.filled] = z;
        self.fields.slice_mut(nd::s![self.filled, ..]).assign(q);
        self.filled += 1;
        true
    }

    /// Number of snapshots stored so far.
    pub fn filled(&self) -> usize { self.filled }

    /// Finish recording, discarding any unused capacity.
    pub fn finish(self) -> Trajectory {
        let Self { mut z, mut fields, filled, .. } = self;
        if filled < z.len() {
            z = z.slice(nd::s![..filled]).to_owned();
            fields = fields.slice(nd::s![..filled, ..]).to_owned();
        }
        Trajectory { z, fields }
    }
}

/// Retained propagation distances and time-domain field snapshots.
#[derive(Clone, Debug)]
pub struct Trajectory {
    z: nd::Array1<f64>,
    fields: nd::Array2<C64>,
}

impl Trajectory {
    /// Number of retained snapshots.
    pub fn len(&self) -> usize { self.z.len() }

    /// `true` if nothing was retained (never the case for a completed run).
    pub fn is_empty(&self) -> bool { self.z.is_empty() }

    /// Retained propagation distances, starting with the first coordinate of
    /// the propagation grid.
    pub fn z(&self) -> &nd::Array1<f64> { &self.z }

    /// Retained fields, one snapshot per row.
    pub fn fields(&self) -> &nd::Array2<C64> { &self.fields }

    /// The `k`-th retained field.
    ///
    /// *Panics if `k` is out of bounds*.
    pub fn field(&self, k: usize) -> nd::ArrayView1<'_, C64> {
        self.fields.row(k)
    }

    /// The last retained field.
    ///
    /// *Panics if the trajectory is empty*.
    pub fn final_field(&self) -> nd::ArrayView1<'_, C64> {
        self.fields.row(self.len() - 1)
    }

    /// Index of the retained snapshot closest to `z0`.
    pub fn nearest(&self, z0: f64) -> Option<usize> {
        self.z.iter().enumerate()
            .map(|(k, zk)| (k, (zk - z0).abs()))
            .min_by(|l, r| l.1.total_cmp(&r.1))
            .map(|(k, _)| k)
    }

    /// `|A|²` for every retained snapshot.
    pub fn intensity(&self) -> nd::Array2<f64> {
        analysis::intensity(&self.fields)
    }

    /// `true` if every retained sample is finite.
    pub fn is_finite(&self) -> bool { analysis::is_finite(&self.fields) }

    /// Decompose into `(z, fields)` arrays.
    pub fn into_parts(self) -> (nd::Array1<f64>, nd::Array2<C64>) {
        (self.z, self.fields)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn capacity_formula() {
        assert_eq!(Recorder::capacity(20000, 100), 200);
        assert_eq!(Recorder::capacity(2, 1), 2);
        assert_eq!(Recorder::capacity(10, 3), 4);
        assert_eq!(Recorder::capacity(10, 100), 1);
    }

    #[test]
    fn keeps_multiples_of_stride() {
        let q0 = nd::Array1::from_elem(4, C64::new(1.0, 0.0));
        let mut rec = Recorder::new(10, 3, 0.0, &q0);
        let kept: Vec<usize>
            = (1..10)
            .filter(|&idx| {
                let q = nd::Array1::from_elem(4, C64::new(idx as f64, 0.0));
                rec.observe(idx, idx as f64 * 0.5, &q)
            })
            .collect();
        assert_eq!(kept, vec![3, 6, 9]);
        let traj = rec.finish();
        assert_eq!(traj.len(), 4);
        assert_eq!(traj.z(), &nd::array![0.0, 1.5, 3.0, 4.5]);
        assert_eq!(traj.final_field()[2], C64::new(9.0, 0.0));
        assert_eq!(traj.nearest(2.9), Some(2));
    }

    #[test]
    fn finish_trims_unused() {
        let q0 = nd::Array1::from_elem(2, C64::new(0.0, 1.0));
        let rec = Recorder::new(5, 1, 0.0, &q0);
        let traj = rec.finish();
        assert_eq!(traj.len(), 1);
        assert_eq!(traj.fields().dim(), (1, 2));
    }
}
