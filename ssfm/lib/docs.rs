//! Theoretical background.
//!
//! # Contents
//! - [Background](#background)
//! - [Sign conventions](#sign-conventions)
//! - [Split-step integration](#split-step-integration)
//! - [Self-steepening](#self-steepening)
//! - [Solitons and units](#solitons-and-units)
//!
//! # Background
//! The slowly varying envelope *A*(*z*, *t*) of an optical pulse travelling
//! through a single-mode fiber obeys a generalized nonlinear Schrödinger
//! equation (NLS)[^1]. Here *z* is the propagation distance and *t* is time in
//! a frame moving at the group velocity of the pulse. Keeping dispersion up to
//! fourth order and the lowest-order correction to the Kerr nonlinearity,
//! ```text
//! ∂A      i β₂ ∂²A   β₃ ∂³A   i β₄ ∂⁴A          (        i s ∂         )
//! -- = -  ---- --- + -- --- + ---- --- + i γ ( |A|²A + --- -- (|A|²A) )
//! ∂z       2   ∂t²   6  ∂t³    24  ∂t⁴                 1  ∂t
//! ```
//! where *β*ₖ are the coefficients of the Taylor expansion of the propagation
//! constant about the carrier frequency, *γ* is the nonlinear coefficient and
//! *s* = 1/(*ω*₀ *t*₀) is the self-steepening parameter for carrier frequency
//! *ω*₀ and pulse duration *t*₀. With *β*₃ = *β*₄ = *s* = 0 this reduces to
//! the cubic NLS.
//!
//! The right-hand side splits naturally into a linear part *L̂*, which acts on
//! the time derivatives only, and a nonlinear part *N̂*, which is local in *t*
//! apart from the self-steepening term. Neither part is hard to integrate on
//! its own, which is the basis of the [split-step
//! method](#split-step-integration).
//!
//! # Sign conventions
//! Time is discretized on a uniform periodic grid
//! ```text
//! t[n] = t₀ + n δt, n ∊ {0, ..., N - 1}
//! ```
//! and the spectrum is defined with a positive exponent and a 1/*N*
//! normalization,
//! ```text
//!          1  N-1              +2πi k n / N
//! Ã[k] =  --- Σ   A[n] e
//!          N  n=0
//! ```
//! with the inverse carrying the negative exponent and no normalization. The
//! angular frequency of bin *k* is *ω*[*k*] = 2π *f*[*k*] where *f* is the
//! usual FFT sample frequency in natural order (non-negative frequencies
//! first), so that
//! ```text
//!                 -i ω t
//! A(t) = Σ Ã(ω) e
//! ```
//! and hence ∂/∂*t* acts as multiplication by -*i* *ω* in the frequency domain.
//! Substituting into the linear part of the NLS,
//! ```text
//! ∂Ã            β₂       β₃       β₄
//! -- = i D(ω) Ã, D(ω) = -- ω² +  -- ω³ + -- ω⁴
//! ∂z            2        6        24
//! ```
//! so that a linear step of length *dz* is the pointwise multiplication
//! ```text
//!               i D(ω) dz
//! Ã(z + dz) = e           Ã(z)
//! ```
//! which is exact for any *dz*. This choice reproduces the standard result
//! that a positive *β*₃ delays the trailing edge of a pulse.
//!
//! The sample at the Nyquist frequency of an even-length grid has no unique
//! sign, and is discarded when spectral derivatives are taken.
//!
//! # Split-step integration
//! Formally, a step of length *dz* is
//! ```text
//!              (L̂ + N̂) dz
//! A(z + dz) = e            A(z)
//! ```
//! Since *L̂* and *N̂* do not commute, the exponential cannot be factored
//! exactly, but the Baker-Campbell-Hausdorff formula gives
//! ```text
//!  (L̂ + N̂) dz    L̂ dz  N̂ dz    [L̂, N̂] dz²/2    O(dz³)
//! e            = e     e      e              e
//! ```
//! Discarding the commutator gives the simple split step, which applies the
//! full nonlinear step followed by the full linear step and carries a local
//! error of *O*(*dz*²). Over a fixed distance this accumulates to a global
//! error of *O*(*dz*): first-order convergence.
//!
//! Sandwiching one of the operators between two half-steps of the other
//! cancels the leading commutator (Strang splitting):
//! ```text
//!              L̂ dz/2  N̂ dz  L̂ dz/2
//! A(z + dz) = e       e     e       A(z) + O(dz³)
//! ```
//! which converges at second order globally for the same number of FFTs per
//! step. Both schemes are available via [`Splitting`][crate::propagate::Splitting].
//!
//! A single symmetric step looks like this:
//! ```text
//!        A(z, t)
//!           |
//!           '--> FFT ---.
//!                       |
//!                       V
//!                 i D(ω) dz/2
//!                e
//!                       |
//!           .-- iFFT <--'
//!           |
//!           V
//!     i γ |A|² dz
//!    e
//!           |
//!           '--> FFT ---.
//!                       |
//!                       V
//!                 i D(ω) dz/2
//!                e
//!                       |
//!           .-- iFFT <--'
//!           |
//!           V
//!     A(z + dz, t)
//! ```
//! The pure Kerr term preserves |*A*| pointwise, so its step is solved exactly
//! by a phase rotation. Since the linear step is unitary as well, both schemes
//! conserve the discrete pulse energy Σ|*A*|² *δt* to rounding error when
//! *s* = 0.
//!
//! # Self-steepening
//! With *s* ≠ 0 the nonlinear part becomes
//! ```text
//! ∂A                      ∂
//! -- = i γ |A|²A - γ s -- (|A|²A)
//! ∂z                      ∂t
//! ```
//! which no longer has a closed-form solution. It is advanced by a single
//! classical fourth-order Runge-Kutta step of length *dz* (the full *dz* in
//! both splitting schemes), with the time derivative taken spectrally. The
//! local error of this step is *O*(*dz*⁵), well below that of the splitting
//! itself. Since the steepening term is a pure time derivative, it carries
//! the peak of the pulse towards later times at a rate of roughly *s* *γ* *P*₀
//! per unit length, and eventually forms an optical shock on the trailing edge.
//!
//! # Solitons and units
//! Natural scales for a pulse of duration *t*₀ and peak power *P*₀ are the
//! dispersion and nonlinear lengths,
//! ```text
//!        t₀²              1
//! L_D = ----,  L_NL = ------
//!       |β₂|            γ P₀
//! ```
//! and the soliton order *N*² = *L*<sub>*D*</sub>/*L*<sub>*NL*</sub>. For
//! anomalous dispersion (*β*₂ < 0) and *N* = 1 the cubic NLS admits the
//! fundamental soliton
//! ```text
//!                             i z / 2L_D
//! A(z, t) = √P₀ sech(t / t₀) e
//! ```
//! whose intensity profile is invariant under propagation. It serves as the
//! reference solution for accuracy checks; see
//! [`fundamental_soliton`][crate::pulse::fundamental_soliton] and
//! [`units`][crate::units].
//!
//! [^1]: G. P. Agrawal, *Nonlinear Fiber Optics*, 5th ed. (Academic Press,
//! 2013).
//!
//! [^2]: G. Strang, "On the construction and comparison of difference
//! schemes." SIAM J. Numer. Anal. **5** 3 506-517 (1968).
