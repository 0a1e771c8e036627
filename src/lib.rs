//! # rft-effect
//!
//! Effect sizes and their significance for one-dimensional (functional)
//! data under Random Field Theory.
//!
//! This crate converts among Cohen's d, t-values and p-values for scalar
//! (0D) and functional (1D) one- and two-sample designs:
//! - Cohen's d for one- and two-sample designs, pointwise over a domain
//! - Field-maximum probabilities for smooth 1D Student-t fields
//! - Smoothness (FWHM / Lipschitz-Killing curvature) of residual fields
//! - Critical d-values recalibrated from a canonical baseline to any
//!   sample size, design and smoothness
//!
//! ## Quick Start
//!
//! ```
//! use rft_effect::{d2p, d_critical, Design, Dim};
//!
//! // Scalar two-sample design, 10 subjects per group
//! let p = d2p(0.8, 20_usize, Dim::Scalar, Design::TwoSample).unwrap();
//! assert!((p.scalar().unwrap() - 0.045241).abs() < 1e-5);
//!
//! // What counts as a "Large" effect for 101-point curves with FWHM 20?
//! let set = d_critical(20_usize, Dim::functional(101, 20.0), Design::TwoSample, None).unwrap();
//! assert!(set.get("Large").unwrap() > 0.8);
//! ```
//!
//! Every conversion accepts scalars or arrays for its first two numeric
//! arguments; two arrays produce an outer-product matrix with the second
//! argument along rows.

#![warn(missing_docs)]
#![warn(clippy::all)]

// Core modules
mod config;
mod constants;
mod converter;
mod error;
mod thread_pool;
mod types;

// Functional modules
pub mod analysis;
pub mod output;
pub mod simulation;
pub mod statistics;

// Re-exports for public API
pub use analysis::{interpret, Arg, CriticalValueSet, FunctionalEffect, Values};
pub use config::Config;
pub use constants::{BASELINE_N, CANONICAL_D, CANONICAL_LABELS, CANONICAL_P, FOUR_LN2};
pub use converter::Converter;
pub use error::{Error, Result};
pub use statistics::{
    d_one_sample, d_two_sample, estimate_fwhm, estimate_lkc, fwhm2lkc, lkc2fwhm,
};
pub use types::{Design, Dim, FunctionalSample, SampleSize};

/// Cohen's d to t-value with default configuration.
///
/// See [`Converter::d2t`].
pub fn d2t(d: impl Into<Arg<f64>>, n: impl Into<Arg<SampleSize>>, design: Design) -> Result<Values> {
    Converter::new().d2t(d, n, design)
}

/// t-value to Cohen's d with default configuration.
pub fn t2d(t: impl Into<Arg<f64>>, n: impl Into<Arg<SampleSize>>, design: Design) -> Result<Values> {
    Converter::new().t2d(t, n, design)
}

/// Probability to critical t-value with default configuration.
pub fn p2t(p: impl Into<Arg<f64>>, v: impl Into<Arg<f64>>, dim: Dim) -> Result<Values> {
    Converter::new().p2t(p, v, dim)
}

/// t-value to probability with default configuration.
pub fn t2p(t: impl Into<Arg<f64>>, v: impl Into<Arg<f64>>, dim: Dim) -> Result<Values> {
    Converter::new().t2p(t, v, dim)
}

/// Cohen's d to probability with default configuration.
///
/// Computed as `d2t` followed by `t2p` with the design's degrees of
/// freedom.
pub fn d2p(
    d: impl Into<Arg<f64>>,
    n: impl Into<Arg<SampleSize>>,
    dim: Dim,
    design: Design,
) -> Result<Values> {
    Converter::new().d2p(d, n, dim, design)
}

/// Probability to critical Cohen's d with default configuration.
pub fn p2d(
    p: impl Into<Arg<f64>>,
    n: impl Into<Arg<SampleSize>>,
    dim: Dim,
    design: Design,
) -> Result<Values> {
    Converter::new().p2d(p, n, dim, design)
}

/// Critical d-values for a target scenario with default configuration.
///
/// See [`Converter::d_critical`].
pub fn d_critical(
    n: impl Into<SampleSize>,
    dim: Dim,
    design: Design,
    baseline: Option<&CriticalValueSet>,
) -> Result<CriticalValueSet> {
    Converter::new().d_critical(n, dim, design, baseline)
}
