//! Minimum sample size for an effect to reach significance.

use crate::config::Config;
use crate::error::{Error, Result};
use crate::types::{Design, Dim, SampleSize};

use super::conversion::d2p_value;

/// Smallest sample size at which `d` has an upper-tail probability below
/// `alpha`.
///
/// Two-sample designs search even totals starting at 4; one-sample designs
/// search every n starting at 2. Returns `Ok(None)` if `max_n` is reached
/// first.
pub fn minimum_sample_size(
    d: f64,
    alpha: f64,
    design: Design,
    dim: Dim,
    max_n: usize,
    config: &Config,
) -> Result<Option<usize>> {
    if !(0.0..=1.0).contains(&alpha) {
        return Err(Error::InvalidProbability(alpha));
    }
    let dim = dim.validate()?;

    let (start, step) = match design {
        Design::OneSample => (2, 1),
        Design::TwoSample => (4, 2),
    };

    for n in (start..=max_n).step_by(step) {
        let p = d2p_value(d, SampleSize::Total(n), dim, design, config)?;
        if p < alpha {
            tracing::debug!(d, alpha, n, p, "minimum sample size found");
            return Ok(Some(n));
        }
    }
    Ok(None)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_large_effect_needs_few_subjects() {
        let config = Config::default();
        let n = minimum_sample_size(2.0, 0.05, Design::TwoSample, Dim::Scalar, 200, &config)
            .unwrap()
            .unwrap();
        assert!(n % 2 == 0);
        assert!(n <= 10);

        let p_at = d2p_value(2.0, SampleSize::Total(n), Dim::Scalar, Design::TwoSample, &config)
            .unwrap();
        assert!(p_at < 0.05);
        if n > 4 {
            let p_before =
                d2p_value(2.0, SampleSize::Total(n - 2), Dim::Scalar, Design::TwoSample, &config)
                    .unwrap();
            assert!(p_before >= 0.05);
        }
    }

    #[test]
    fn test_functional_needs_more_than_scalar() {
        let config = Config::default();
        let scalar = minimum_sample_size(0.5, 0.05, Design::OneSample, Dim::Scalar, 500, &config)
            .unwrap()
            .unwrap();
        let field = minimum_sample_size(
            0.5,
            0.05,
            Design::OneSample,
            Dim::functional(101, 20.0),
            500,
            &config,
        )
        .unwrap()
        .unwrap();
        assert!(field > scalar);
    }

    #[test]
    fn test_unreachable_within_limit() {
        let config = Config::default();
        let n = minimum_sample_size(0.01, 0.05, Design::TwoSample, Dim::Scalar, 40, &config);
        assert_eq!(n, Ok(None));
    }

    #[test]
    fn test_invalid_alpha() {
        let config = Config::default();
        assert_eq!(
            minimum_sample_size(0.5, 1.5, Design::OneSample, Dim::Scalar, 40, &config),
            Err(Error::InvalidProbability(1.5))
        );
    }
}
