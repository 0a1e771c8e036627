//! Statistical building blocks.
//!
//! This module provides the numeric primitives the conversion engine is
//! built from:
//! - Cohen's d effect sizes and residual fields ([`effect`])
//! - Smoothness estimation and LKC/FWHM conversion ([`smoothness`])
//! - Student-t survival functions for scalar data ([`distribution`])
//! - Field-maximum survival functions for 1D Student-t fields ([`rft`])

pub mod distribution;
pub mod effect;
pub mod rft;
pub mod smoothness;

pub use distribution::{t_isf, t_sf};
pub use effect::{
    d_one_sample, d_one_sample_scalar, d_two_sample, d_two_sample_scalar, residuals_one_sample,
    residuals_two_sample,
};
pub use rft::{field_isf, field_sf, TField};
pub use smoothness::{estimate_fwhm, estimate_lkc, fwhm2lkc, lkc2fwhm, lkc2resels, resels2lkc};
