//! Miscellaneous tools.

use ndarray::{ self as nd, Ix1, concatenate };
use num_complex::Complex64 as C64;
use num_traits::Float;
use crate::Arr1;

/// Integrate using the trapezoidal rule.
///
/// *Panics if `y` has length less than 2*.
pub fn trapz<S, A>(y: &nd::ArrayBase<S, Ix1>, dx: A) -> A
where
    S: nd::Data<Elem = A>,
    A: Float,
{
    let n: usize = y.len();
    let two = A::one() + A::one();
    let inner = y.iter().skip(1).take(n - 2)
        .fold(A::zero(), |acc, yk| acc + *yk);
    (dx / two) * (y[0] + two * inner + y[n - 1])
}

/// Return the index of the largest element of an array, ignoring NaNs.
///
/// Returns `None` if `x` is empty or contains only NaNs.
pub fn argmax<S, A>(x: &nd::ArrayBase<S, Ix1>) -> Option<usize>
where
    S: nd::Data<Elem = A>,
    A: Float,
{
    x.iter().enumerate()
        .filter(|(_, xk)| !xk.is_nan())
        .fold(None, |acc: Option<(usize, A)>, (k, &xk)| {
            match acc {
                Some((_, best)) if best >= xk => acc,
                _ => Some((k, xk)),
            }
        })
        .map(|(k, _)| k)
}

// return an array of differences between adjacent elements of a source array
pub(crate) fn array_diff<S, A>(a: &Arr1<S>) -> nd::Array1<A>
where
    S: nd::Data<Elem = A>,
    A: std::ops::Sub<A, Output = A> + Copy,
{
    a.iter().zip(a.iter().skip(1))
        .map(|(ak, akp1)| *akp1 - *ak)
        .collect()
}

// perform the operation `a + v * b` succinctly
pub(crate) fn array_step<S, T>(a: &Arr1<S>, v: f64, b: &Arr1<T>)
    -> nd::Array1<C64>
where
    S: nd::Data<Elem = C64>,
    T: nd::Data<Elem = C64>,
{
    nd::Zip::from(a).and(b)
        .map_collect(|ak, bk| *ak + *bk * v)
}

/// Return a copy of `x` with indices shifted to map super-Nyquist frequency
/// components to negative frequencies, i.e. from natural FFT order to
/// ascending frequency order.
///
/// This is for display only; propagation always works in natural order.
pub fn fft_shift<S, A>(x: &nd::ArrayBase<S, Ix1>) -> nd::Array1<A>
where
    S: nd::Data<Elem = A>,
    A: Clone,
{
    let n = x.len();
    let (p, m)
        = if n % 2 == 0 {
            x.view().split_at(nd::Axis(0), n / 2)
        } else {
            x.view().split_at(nd::Axis(0), n / 2 + 1)
        };
    concatenate!(nd::Axis(0), m.into_owned(), p.into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trapz_integrates_linear_exactly() {
        let x: nd::Array1<f64> = nd::Array1::linspace(0.0, 2.0, 21);
        let dx = x[1] - x[0];
        let y = x.mapv(|xk| 3.0 * xk + 1.0);
        assert!((trapz(&y, dx) - 8.0).abs() < 1e-12);
    }

    #[test]
    fn argmax_skips_nan() {
        let x = nd::array![1.0, f64::NAN, 4.0, 2.0, 4.0];
        assert_eq!(argmax(&x), Some(2));
        let empty: nd::Array1<f64> = nd::Array1::zeros(0);
        assert_eq!(argmax(&empty), None);
    }

    #[test]
    fn diff_and_step() {
        let a = nd::array![0.0, 1.0, 4.0, 9.0];
        assert_eq!(array_diff(&a), nd::array![1.0, 3.0, 5.0]);
        let q = nd::array![C64::new(1.0, 0.0), C64::new(0.0, 1.0)];
        let k = nd::array![C64::new(2.0, 2.0), C64::new(-2.0, 0.0)];
        let r = array_step(&q, 0.5, &k);
        assert_eq!(r, nd::array![C64::new(2.0, 1.0), C64::new(-1.0, 1.0)]);
    }

    #[test]
    fn shift_even_and_odd() {
        let even = nd::array![0, 1, -2, -1];
        assert_eq!(fft_shift(&even), nd::array![-2, -1, 0, 1]);
        let odd = nd::array![0, 1, 2, -2, -1];
        assert_eq!(fft_shift(&odd), nd::array![-2, -1, 0, 1, 2]);
    }
}
