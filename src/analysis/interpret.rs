//! Labelling effect sizes against a critical value set.

use nalgebra::DMatrix;
use serde::Serialize;

use crate::config::Config;
use crate::error::Result;
use crate::statistics::{
    d_one_sample, d_two_sample, estimate_fwhm, residuals_one_sample, residuals_two_sample,
};
use crate::types::{Design, Dim, SampleSize};

use super::conversion::d2p_value;
use super::critical::{derive_critical_values, CriticalValueSet};

/// Label of the largest threshold in `set` not exceeding `|d|`.
///
/// Returns `None` when `|d|` is below every threshold (or NaN).
pub fn interpret(d: f64, set: &CriticalValueSet) -> Option<&str> {
    let magnitude = d.abs();
    set.iter()
        .filter(|&(_, threshold, _)| threshold <= magnitude)
        .max_by(|a, b| a.1.total_cmp(&b.1))
        .map(|(label, _, _)| label)
}

/// Summary of a functional effect: its d-curve, smoothness, and the
/// significance and label of its peak.
#[derive(Debug, Clone, Serialize)]
pub struct FunctionalEffect {
    /// Design the effect was computed for.
    pub design: Design,
    /// Sample size (total, or the two group sizes).
    pub sample_size: SampleSize,
    /// Pointwise Cohen's d.
    pub d: Vec<f64>,
    /// FWHM estimated from the residuals.
    pub fwhm: f64,
    /// Largest absolute d-value.
    pub d_max: f64,
    /// Domain position of `d_max`.
    pub argmax: usize,
    /// Field-maximum probability of `d_max`.
    pub p_max: f64,
    /// Label of `d_max` against the recalibrated critical values.
    pub label: Option<String>,
    /// Critical values recalibrated for this sample size and smoothness.
    pub critical: CriticalValueSet,
}

impl FunctionalEffect {
    /// Summarize a one-sample functional effect against `mu = 0`.
    pub fn one_sample(
        y: &DMatrix<f64>,
        baseline: &CriticalValueSet,
        config: &Config,
    ) -> Result<Self> {
        let d = d_one_sample(y, 0.0)?;
        let fwhm = estimate_fwhm(&residuals_one_sample(y))?;
        Self::summarize(
            d.as_slice().to_vec(),
            fwhm,
            SampleSize::Total(y.nrows()),
            Design::OneSample,
            baseline,
            config,
        )
    }

    /// Summarize the difference between two independent groups.
    pub fn two_sample(
        y0: &DMatrix<f64>,
        y1: &DMatrix<f64>,
        baseline: &CriticalValueSet,
        config: &Config,
    ) -> Result<Self> {
        let d = d_two_sample(y0, y1)?;
        let fwhm = estimate_fwhm(&residuals_two_sample(y0, y1)?)?;
        Self::summarize(
            d.as_slice().to_vec(),
            fwhm,
            SampleSize::Groups(y0.nrows(), y1.nrows()),
            Design::TwoSample,
            baseline,
            config,
        )
    }

    fn summarize(
        d: Vec<f64>,
        fwhm: f64,
        n: SampleSize,
        design: Design,
        baseline: &CriticalValueSet,
        config: &Config,
    ) -> Result<Self> {
        let dim = Dim::functional(d.len(), fwhm);
        let (argmax, d_max) = d
            .iter()
            .map(|x| x.abs())
            .enumerate()
            .max_by(|a, b| a.1.total_cmp(&b.1))
            .unwrap_or((0, 0.0));

        let p_max = d2p_value(d_max, n, dim, design, config)?;
        let critical = derive_critical_values(baseline, n, dim, design, config)?;
        let label = interpret(d_max, &critical).map(str::to_string);

        Ok(Self {
            design,
            sample_size: n,
            d,
            fwhm,
            d_max,
            argmax,
            p_max,
            label,
            critical,
        })
    }

    /// Whether the peak is significant at level `alpha`.
    pub fn is_significant(&self, alpha: f64) -> bool {
        self.p_max < alpha
    }
}
