//! Provides functions and higher-level constructs for the propagation of
//! optical pulse envelopes under the generalized nonlinear Schrödinger equation
//! via the pseudo-spectral split-step Fourier method.
//!
//! Provides implementations for the following:
//! - Propagation:
//!     - Simple (first-order) and symmetric (Strang, second-order) operator
//!       splitting
//!     - Group-velocity dispersion with optional third- and fourth-order terms
//!     - Kerr nonlinearity with optional self-steepening
//!     - Decimated trajectory recording
//! - Analysis:
//!     - Closed-form soliton references and natural units
//!     - Step-size convergence studies
//!     - Temporal and spectral intensity maps for plotting
//!
//! See [`docs`] for theoretical background.

pub mod error;
pub mod grid;
pub mod spectral;
pub mod dispersion;
pub mod nonlinear;
pub mod trajectory;
pub mod propagate;
pub mod convergence;
pub mod pulse;
pub mod units;
pub mod analysis;
pub mod utils;

pub mod docs;

pub type Arr1<S> = ndarray::ArrayBase<S, ndarray::Ix1>;
pub type Arr2<S> = ndarray::ArrayBase<S, ndarray::Ix2>;
