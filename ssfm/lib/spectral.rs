//! Discrete Fourier transforms and frequency axes for uniformly sampled
//! envelopes.
//!
//! Envelopes are expanded as
//! ```text
//! A(t) = Σ_k Ã(ω_k) exp(-i ω_k t)
//! ```
//! so that the "forward" transform here carries the `+i` exponent and the
//! `1/N` normalization, and time derivatives map to multiplication by `-i ω`:
//! ```text
//! forward:  X[k] = (1/N) Σ_n x[n] exp(+2πi kn/N)
//! inverse:  x[n] =       Σ_k X[k] exp(-2πi kn/N)
//! ```
//! With this convention, `exp(i D(ω) dz)` (see [`dispersion`][crate::dispersion])
//! is the exact propagator for the linear part of the envelope equation; see
//! [`docs`][crate::docs#sign-conventions].
//!
//! ```
//! use ndarray as nd;
//! use num_complex::Complex64 as C64;
//! use ssfm::spectral::Transform;
//!
//! let x: nd::Array1<C64>
//!     = (0..12).map(|k| C64::new(k as f64, -(k as f64).sqrt())).collect();
//! let mut tr = Transform::new(x.len());
//! let f = tr.forward(&x);
//! let y = tr.inverse(&f);
//! assert!(x.iter().zip(&y).all(|(xk, yk)| (*xk - *yk).norm() < 1e-12));
//! ```

use std::{ f64::consts::TAU, sync::Arc };
use ndarray as nd;
use num_complex::Complex64 as C64;
use num_traits::Zero;
use rustfft::{ Fft, FftPlanner };
use crate::Arr1;

/// Sample frequencies (cycles per unit time) of an `n`-point transform with
/// sampling interval `dt`, in natural FFT order: the first `(n + 1) / 2` bins
/// hold non-negative frequencies, the rest negative ones in increasing order.
pub fn fft_freq(n: usize, dt: f64) -> nd::Array1<f64> {
    let df = (n as f64 * dt).recip();
    let n_pos = (n + 1) / 2;
    (0..n)
        .map(|k| {
            let k = if k < n_pos { k as f64 } else { k as f64 - n as f64 };
            k * df
        })
        .collect()
}

/// Like [`fft_freq`], but return angular frequencies `ω = 2π f`.
pub fn ang_freq(n: usize, dt: f64) -> nd::Array1<f64> {
    let mut w = fft_freq(n, dt);
    w.map_inplace(|wk| { *wk *= TAU; });
    w
}

// run `f` on the contents of `x` as a contiguous slice, copying through a
// temporary buffer if `x` is not in standard layout
fn with_slice<S, F>(x: &mut Arr1<S>, f: F)
where
    S: nd::DataMut<Elem = C64>,
    F: FnOnce(&mut [C64]),
{
    if let Some(buf) = x.as_slice_mut() {
        f(buf);
    } else {
        let mut buf: Vec<C64> = x.to_vec();
        f(&mut buf);
        x.iter_mut().zip(buf)
            .for_each(|(xk, bk)| { *xk = bk; });
    }
}

/// Planned forward/inverse transform pair for a fixed length.
///
/// Planning happens once on construction; every call afterward reuses the
/// plans and a shared scratch buffer.
pub struct Transform {
    n: usize,
    fwd: Arc<dyn Fft<f64>>,
    inv: Arc<dyn Fft<f64>>,
    scratch: Vec<C64>,
}

impl std::fmt::Debug for Transform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Transform").field("n", &self.n).finish()
    }
}

impl Transform {
    /// Plan transforms for arrays of length `n`.
    ///
    /// Transforms of length 0 are undefined; callers should ensure `n ≥ 1`.
    pub fn new(n: usize) -> Self {
        let mut planner = FftPlanner::new();
        // rustfft's "inverse" carries the +i exponent we want going forward
        let fwd = planner.plan_fft_inverse(n);
        let inv = planner.plan_fft_forward(n);
        let scratch_len
            = fwd.get_inplace_scratch_len()
            .max(inv.get_inplace_scratch_len());
        Self { n, fwd, inv, scratch: vec![C64::zero(); scratch_len] }
    }

    /// Transform length.
    pub fn len(&self) -> usize { self.n }

    /// `true` if the transform length is 0.
    pub fn is_empty(&self) -> bool { self.n == 0 }

    /// Perform the forward transform in place.
    pub fn forward_inplace<S>(&mut self, x: &mut Arr1<S>)
    where S: nd::DataMut<Elem = C64>
    {
        let Self { n, fwd, scratch, .. } = self;
        with_slice(x, |buf| fwd.process_with_scratch(buf, scratch));
        let norm = (*n as f64).recip();
        x.map_inplace(|xk| { *xk *= norm; });
    }

    /// Perform the inverse transform in place.
    pub fn inverse_inplace<S>(&mut self, x: &mut Arr1<S>)
    where S: nd::DataMut<Elem = C64>
    {
        let Self { inv, scratch, .. } = self;
        with_slice(x, |buf| inv.process_with_scratch(buf, scratch));
    }

    /// Perform the forward transform.
    pub fn forward<S>(&mut self, x: &Arr1<S>) -> nd::Array1<C64>
    where S: nd::Data<Elem = C64>
    {
        let mut f = x.to_owned();
        self.forward_inplace(&mut f);
        f
    }

    /// Perform the inverse transform.
    pub fn inverse<S>(&mut self, f: &Arr1<S>) -> nd::Array1<C64>
    where S: nd::Data<Elem = C64>
    {
        let mut x = f.to_owned();
        self.inverse_inplace(&mut x);
        x
    }

    /// Compute the time derivative of `x` spectrally, given the angular
    /// frequency axis `w` in natural order.
    ///
    /// The Nyquist component of even-length arrays is discarded, since it has
    /// no well-defined derivative.
    pub fn derivative<S, T>(&mut self, x: &Arr1<S>, w: &Arr1<T>)
        -> nd::Array1<C64>
    where
        S: nd::Data<Elem = C64>,
        T: nd::Data<Elem = f64>,
    {
        let nyquist = (self.n % 2 == 0).then_some(self.n / 2);
        let mut dx = self.forward(x);
        dx.iter_mut().zip(w).enumerate()
            .for_each(|(k, (dxk, wk))| {
                if Some(k) == nyquist {
                    *dxk = C64::zero();
                } else {
                    *dxk *= -C64::i() * *wk;
                }
            });
        self.inverse_inplace(&mut dx);
        dx
    }
}

/// Perform the one-dimensional forward transform, planning a new transform.
pub fn fft<S>(x: &Arr1<S>) -> nd::Array1<C64>
where S: nd::Data<Elem = C64>
{
    Transform::new(x.len()).forward(x)
}

/// Perform the one-dimensional inverse transform, planning a new transform.
pub fn ifft<S>(f: &Arr1<S>) -> nd::Array1<C64>
where S: nd::Data<Elem = C64>
{
    Transform::new(f.len()).inverse(f)
}
