//! Post-run diagnostics and array reductions for external plotting.
//!
//! Nothing here renders anything; functions return plain arrays shaped like
//! the trajectories they were computed from.

use ndarray as nd;
use num_complex::Complex64 as C64;
use crate::{
    Arr1,
    Arr2,
    spectral::Transform,
    utils::{ argmax, fft_shift, trapz },
};

/// Intensities below this fraction of the reference peak are clamped by
/// [`normalize_floored`], so that log-scaled maps stay finite.
pub const INTENSITY_FLOOR: f64 = 1e-6;

/// Pulse energy `∫|A|² dt`, by the trapezoidal rule.
///
/// *Panics if `q` has length less than 2*.
pub fn energy<S>(q: &Arr1<S>, dt: f64) -> f64
where S: nd::Data<Elem = C64>
{
    trapz(&q.mapv(|qk| qk.norm_sqr()), dt)
}

/// `true` if every sample is finite.
pub fn is_finite<S, D>(q: &nd::ArrayBase<S, D>) -> bool
where
    S: nd::Data<Elem = C64>,
    D: nd::Dimension,
{
    q.iter().all(|qk| qk.re.is_finite() && qk.im.is_finite())
}

/// Elementwise `|A|²`.
pub fn intensity<S, D>(q: &nd::ArrayBase<S, D>) -> nd::Array<f64, D>
where
    S: nd::Data<Elem = C64>,
    D: nd::Dimension,
{
    q.mapv(|qk| qk.norm_sqr())
}

/// Spectral intensity `|Ã(ω)|²` of every row of `fields`, shifted to
/// ascending frequency order.
///
/// Pair with [`fft_shift`] applied to the frequency axis.
pub fn spectral_intensity<S>(fields: &Arr2<S>) -> nd::Array2<f64>
where S: nd::Data<Elem = C64>
{
    let (_, n) = fields.dim();
    let mut transform = Transform::new(n);
    let mut out: nd::Array2<f64> = nd::Array2::zeros(fields.raw_dim());
    nd::Zip::from(fields.rows()).and(out.rows_mut())
        .for_each(|row, mut out_row| {
            let spectrum = transform.forward(&row);
            out_row.assign(&fft_shift(&spectrum).mapv(|sk| sk.norm_sqr()));
        });
    out
}

/// Normalize a map by the peak of its first row and clamp values below
/// [`INTENSITY_FLOOR`].
///
/// Returns the map unchanged (apart from clamping) if the first row is
/// identically zero.
pub fn normalize_floored<S>(map: &Arr2<S>) -> nd::Array2<f64>
where S: nd::Data<Elem = f64>
{
    let peak = map.rows().into_iter().next()
        .map(|row| row.fold(0.0_f64, |acc, x| acc.max(*x)))
        .filter(|p| *p > 0.0)
        .unwrap_or(1.0);
    map.mapv(|x| (x / peak).max(INTENSITY_FLOOR))
}

/// Time coordinate of the intensity maximum of `q`.
pub fn peak_time<S, T>(t: &Arr1<S>, q: &Arr1<T>) -> Option<f64>
where
    S: nd::Data<Elem = f64>,
    T: nd::Data<Elem = C64>,
{
    argmax(&intensity(q)).map(|k| t[k])
}

/// Intensity-weighted mean time `∫ t |A|² dt / ∫ |A|² dt`.
pub fn centroid<S, T>(t: &Arr1<S>, q: &Arr1<T>) -> f64
where
    S: nd::Data<Elem = f64>,
    T: nd::Data<Elem = C64>,
{
    let (num, den)
        = t.iter().zip(q)
        .fold((0.0, 0.0), |(num, den), (tk, qk)| {
            let ik = qk.norm_sqr();
            (num + tk * ik, den + ik)
        });
    num / den
}

/// Guide line `t_c(z) = s I₀ z` for the drift of a self-steepened pulse peak
/// with initial peak intensity `i0`.
pub fn steepening_guide<S>(z: &Arr1<S>, s: f64, i0: f64) -> nd::Array1<f64>
where S: nd::Data<Elem = f64>
{
    z.mapv(|zk| s * i0 * zk)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ grid::TimeGrid, pulse::sech_pulse };

    #[test]
    fn sech_energy() {
        // ∫ P₀ sech²(t/t₀) dt = 2 P₀ t₀
        let grid = TimeGrid::periodic(-30.0, 30.0, 2048).unwrap();
        let q = sech_pulse(grid.t(), 3.0, 1.5);
        assert!((energy(&q, grid.dt()) - 9.0).abs() < 1e-6);
    }

    #[test]
    fn finiteness() {
        let mut q = nd::Array2::from_elem((2, 3), C64::new(1.0, -1.0));
        assert!(is_finite(&q));
        q[[1, 2]] = C64::new(0.0, f64::NAN);
        assert!(!is_finite(&q));
    }

    #[test]
    fn spectral_map_is_centered() {
        let grid = TimeGrid::periodic(-20.0, 20.0, 256).unwrap();
        let q = sech_pulse(grid.t(), 1.0, 1.0);
        let fields = nd::stack(nd::Axis(0), &[q.view(), q.view()]).unwrap();
        let spectrum = spectral_intensity(&fields);
        assert_eq!(spectrum.dim(), (2, 256));
        // after shifting, ω = 0 sits at index n/2
        assert_eq!(argmax(&spectrum.row(0)), Some(128));
    }

    #[test]
    fn floor_and_normalize() {
        let map = nd::array![[0.0, 2.0], [4.0, 1e-9]];
        let norm = normalize_floored(&map);
        assert_eq!(norm, nd::array![[INTENSITY_FLOOR, 1.0], [2.0, INTENSITY_FLOOR]]);
    }

    #[test]
    fn peak_and_centroid() {
        let grid = TimeGrid::periodic(-10.0, 10.0, 200).unwrap();
        let shifted = grid.t().mapv(|tk| tk - 2.0);
        let q = sech_pulse(&shifted, 1.0, 1.0);
        assert!((peak_time(grid.t(), &q).unwrap() - 2.0).abs() < 1e-9);
        assert!((centroid(grid.t(), &q) - 2.0).abs() < 1e-3);
    }

    #[test]
    fn guide_slope() {
        let z = nd::array![0.0, 5.0, 10.0];
        assert_eq!(steepening_guide(&z, 0.2, 1.0), nd::array![0.0, 1.0, 2.0]);
    }
}
