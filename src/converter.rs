//! `Converter` front end: vectorized d/t/p conversions and critical values.

use nalgebra::DMatrix;

use crate::analysis::{
    broadcast, conversion, derive_critical_values, minimum_sample_size, Arg, CriticalValueSet,
    FunctionalEffect, Values,
};
use crate::config::Config;
use crate::error::Result;
use crate::types::{Design, Dim, SampleSize};

/// Converts among Cohen's d, t-values and p-values.
///
/// The first two numeric arguments of every conversion accept either a
/// scalar or an array (see [`broadcast`](mod@crate::analysis::broadcast)).
///
/// # Example
///
/// ```
/// use rft_effect::{Converter, Design, Dim};
///
/// let converter = Converter::new();
/// let p = converter
///     .d2p(0.8, 20_usize, Dim::Scalar, Design::TwoSample)
///     .unwrap();
/// assert!((p.scalar().unwrap() - 0.045241).abs() < 1e-5);
///
/// // Critical d-values for a smooth 101-point field
/// let p = converter
///     .d2p(vec![0.5, 0.8], 20_usize, Dim::functional(101, 25.0), Design::TwoSample)
///     .unwrap();
/// assert_eq!(p.shape(), vec![2]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Converter {
    config: Config,
}

impl Converter {
    /// Create with default configuration (Bonferroni cap enabled).
    pub fn new() -> Self {
        Self {
            config: Config::default(),
        }
    }

    /// Field probabilities from the Euler-characteristic estimate alone.
    pub fn rft_only() -> Self {
        Self {
            config: Config {
                bonferroni: false,
                ..Config::default()
            },
        }
    }

    /// Create from an explicit configuration.
    pub fn with_config(config: Config) -> Self {
        Self { config }
    }

    /// Enable or disable the Bonferroni cap on field probabilities.
    pub fn bonferroni(mut self, enabled: bool) -> Self {
        self.config.bonferroni = enabled;
        self
    }

    /// Set the absolute tolerance of inverse survival searches.
    pub fn root_tolerance(mut self, tolerance: f64) -> Self {
        self.config.root_tolerance = tolerance;
        self
    }

    /// Set the iteration cap of inverse survival searches.
    pub fn max_iterations(mut self, n: usize) -> Self {
        self.config.max_iterations = n;
        self
    }

    /// Get the current configuration.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Cohen's d to t-value.
    pub fn d2t(
        &self,
        d: impl Into<Arg<f64>>,
        n: impl Into<Arg<SampleSize>>,
        design: Design,
    ) -> Result<Values> {
        broadcast(&d.into(), &n.into(), |d, n| {
            conversion::d2t_value(d, n, design)
        })
    }

    /// t-value to Cohen's d.
    pub fn t2d(
        &self,
        t: impl Into<Arg<f64>>,
        n: impl Into<Arg<SampleSize>>,
        design: Design,
    ) -> Result<Values> {
        broadcast(&t.into(), &n.into(), |t, n| {
            conversion::t2d_value(t, n, design)
        })
    }

    /// Probability to critical t-value for `v` degrees of freedom.
    pub fn p2t(&self, p: impl Into<Arg<f64>>, v: impl Into<Arg<f64>>, dim: Dim) -> Result<Values> {
        let dim = dim.validate()?;
        broadcast(&p.into(), &v.into(), |p, v| {
            conversion::p2t_value(p, v, dim, &self.config)
        })
    }

    /// t-value to upper-tail probability for `v` degrees of freedom.
    pub fn t2p(&self, t: impl Into<Arg<f64>>, v: impl Into<Arg<f64>>, dim: Dim) -> Result<Values> {
        let dim = dim.validate()?;
        broadcast(&t.into(), &v.into(), |t, v| {
            conversion::t2p_value(t, v, dim, &self.config)
        })
    }

    /// Cohen's d to upper-tail probability.
    pub fn d2p(
        &self,
        d: impl Into<Arg<f64>>,
        n: impl Into<Arg<SampleSize>>,
        dim: Dim,
        design: Design,
    ) -> Result<Values> {
        let dim = dim.validate()?;
        broadcast(&d.into(), &n.into(), |d, n| {
            conversion::d2p_value(d, n, dim, design, &self.config)
        })
    }

    /// Probability to critical Cohen's d.
    pub fn p2d(
        &self,
        p: impl Into<Arg<f64>>,
        n: impl Into<Arg<SampleSize>>,
        dim: Dim,
        design: Design,
    ) -> Result<Values> {
        let dim = dim.validate()?;
        broadcast(&p.into(), &n.into(), |p, n| {
            conversion::p2d_value(p, n, dim, design, &self.config)
        })
    }

    /// Critical d-values for a target scenario.
    ///
    /// The probabilities of `baseline` (the canonical set when `None`) are
    /// inverted for sample size `n`, dimensionality `dim` and `design`.
    pub fn d_critical(
        &self,
        n: impl Into<SampleSize>,
        dim: Dim,
        design: Design,
        baseline: Option<&CriticalValueSet>,
    ) -> Result<CriticalValueSet> {
        let baseline = baseline.unwrap_or_else(|| CriticalValueSet::baseline());
        derive_critical_values(baseline, n.into(), dim, design, &self.config)
    }

    /// Smallest total sample size at which `d` is significant at `alpha`.
    pub fn minimum_sample_size(
        &self,
        d: f64,
        alpha: f64,
        design: Design,
        dim: Dim,
        max_n: usize,
    ) -> Result<Option<usize>> {
        minimum_sample_size(d, alpha, design, dim, max_n, &self.config)
    }

    /// Summarize a one-sample functional effect against the canonical baseline.
    pub fn one_sample_effect(&self, y: &DMatrix<f64>) -> Result<FunctionalEffect> {
        FunctionalEffect::one_sample(y, CriticalValueSet::baseline(), &self.config)
    }

    /// Summarize a two-sample functional effect against the canonical baseline.
    pub fn two_sample_effect(
        &self,
        y0: &DMatrix<f64>,
        y1: &DMatrix<f64>,
    ) -> Result<FunctionalEffect> {
        FunctionalEffect::two_sample(y0, y1, CriticalValueSet::baseline(), &self.config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn test_presets() {
        assert!(Converter::new().config().bonferroni);
        assert!(!Converter::rft_only().config().bonferroni);
        let c = Converter::new().root_tolerance(1e-9).max_iterations(50);
        assert_eq!(c.config().root_tolerance, 1e-9);
        assert_eq!(c.config().max_iterations, 50);
    }

    #[test]
    fn test_invalid_dim_rejected_before_work() {
        let c = Converter::new();
        let err = c.d2p(
            vec![0.1, 0.2],
            20_usize,
            Dim::functional(101, -1.0),
            Design::TwoSample,
        );
        assert_eq!(err, Err(Error::InvalidSmoothness { q: 101, fwhm: -1.0 }));
    }

    #[test]
    fn test_rft_only_never_smaller() {
        let dim = Dim::functional(101, 2.0);
        let capped = Converter::new().t2p(3.0, 10.0, dim).unwrap();
        let raw = Converter::rft_only().t2p(3.0, 10.0, dim).unwrap();
        assert!(raw.scalar().unwrap() >= capped.scalar().unwrap());
    }

    #[test]
    fn test_d_critical_custom_baseline() {
        let labels = vec!["weak".to_string(), "strong".to_string()];
        let base = CriticalValueSet::new(vec![0.3, 1.0], vec![0.2, 0.01], Some(labels)).unwrap();
        let set = Converter::new()
            .d_critical(30_usize, Dim::Scalar, Design::OneSample, Some(&base))
            .unwrap();
        assert_eq!(set.labels(), base.labels());
        assert_eq!(set.p_values(), base.p_values());
        assert!(set.d_values()[0] < set.d_values()[1]);
    }
}
