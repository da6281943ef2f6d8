//! Collection of all error types.
//!
//! All errors derive [`thiserror::Error`], making them composable when allowed
//! and compatible with application code using [`anyhow`][anyhow].
//!
//! [anyhow]: https://crates.io/crates/anyhow

use ndarray as nd;
use thiserror::Error;

/// Returned when an operation requiring equal-length arrays encounters arrays
/// with unequal length.
#[derive(Debug, Error)]
#[error("encountered arrays with incompatible lengths; got {0} and {1}")]
pub struct LengthError(pub usize, pub usize);

impl LengthError {
    // Ok if `a` and `b` have equal lengths, otherwise the pair of lengths
    pub(crate) fn check<S, T>(
        a: &nd::ArrayBase<S, nd::Ix1>,
        b: &nd::ArrayBase<T, nd::Ix1>,
    ) -> Result<(), Self>
    where
        S: nd::RawData,
        T: nd::RawData,
    {
        if a.len() == b.len() {
            Ok(())
        } else {
            Err(Self(a.len(), b.len()))
        }
    }
}

/// Returned when a coordinate array fails to describe a uniform,
/// strictly increasing grid.
#[derive(Debug, Error)]
pub enum GridError {
    /// Fewer than two sample points.
    #[error("grids must have at least 2 points; got {0}")]
    TooShort(usize),

    /// A non-finite coordinate value.
    #[error("encountered non-finite grid coordinate at index {0}")]
    NonFinite(usize),

    /// Adjacent coordinates that do not increase.
    #[error("grids must be strictly increasing; got step {step:e} at index {index}")]
    NotIncreasing { index: usize, step: f64 },

    /// Adjacent coordinates with a spacing that differs from the first.
    #[error("grids must be uniformly spaced; got step {step:e} at index {index}, expected {expected:e}")]
    NonUniform { index: usize, step: f64, expected: f64 },
}

/// Returned from propagation and convergence functions.
#[derive(Debug, Error)]
pub enum PropError {
    /// Returned when a zero retention stride is encountered.
    #[error("retention stride must be greater than 0; got {0}")]
    BadStride(usize),

    /// Returned when a zero step count is encountered.
    #[error("step count must be greater than 0; got {0}")]
    BadSteps(usize),

    /// Returned when a physical parameter is NaN or infinite.
    #[error("parameter `{0}` must be finite; got {1}")]
    BadParam(&'static str, f64),

    /// Returned when a propagation distance is non-positive or non-finite.
    #[error("propagation distance must be positive and finite; got {0}")]
    BadDistance(f64),

    /// [`GridError`]
    #[error("grid error: {0}")]
    Grid(#[from] GridError),

    /// [`LengthError`]
    #[error("array length error: {0}")]
    Length(#[from] LengthError),
}

impl PropError {
    pub(crate) fn check_stride(n_skip: usize) -> Result<(), Self> {
        (n_skip != 0).then_some(()).ok_or(Self::BadStride(n_skip))
    }

    pub(crate) fn check_steps(steps: usize) -> Result<(), Self> {
        (steps != 0).then_some(()).ok_or(Self::BadSteps(steps))
    }

    pub(crate) fn check_param(name: &'static str, value: f64)
        -> Result<(), Self>
    {
        value.is_finite().then_some(()).ok_or(Self::BadParam(name, value))
    }

    pub(crate) fn check_distance(z_max: f64) -> Result<(), Self> {
        (z_max.is_finite() && z_max > 0.0).then_some(())
            .ok_or(Self::BadDistance(z_max))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn length_check_reports_both_lengths() {
        let a: nd::Array1<f64> = nd::Array1::zeros(4);
        let b: nd::Array1<u8> = nd::Array1::zeros(4);
        assert!(LengthError::check(&a, &b).is_ok());
        let c = a.slice(nd::s![..3]);
        assert!(matches!(LengthError::check(&a, &c), Err(LengthError(4, 3))));
        assert!(matches!(
            PropError::from(LengthError(1, 2)),
            PropError::Length(LengthError(1, 2)),
        ));
    }

    #[test]
    fn check_helpers() {
        assert!(PropError::check_stride(1).is_ok());
        assert!(matches!(PropError::check_distance(-1.0), Err(PropError::BadDistance(_))));
        assert!(matches!(
            PropError::check_param("gamma", f64::INFINITY),
            Err(PropError::BadParam("gamma", _)),
        ));
    }
}
