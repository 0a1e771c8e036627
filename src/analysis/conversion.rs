//! Scalar conversions among Cohen's d, t-values and p-values.
//!
//! ```text
//! t = d / s          s = sqrt(1/n)            (one-sample, v = n - 1)
//!                    s = sqrt(1/n0 + 1/n1)    (two-sample, v = n0 + n1 - 2)
//! p = sf(t; v)                                (scalar data)
//! p = field_sf(t; v, Q, FWHM)                 (functional data)
//! ```
//!
//! `d2p` is always `d2t` followed by `t2p`, and `p2d` is `p2t` followed by
//! `t2d`, so the t-value formulas and the survival functions are the only
//! sources of truth.

use crate::config::Config;
use crate::error::Result;
use crate::statistics::{t_isf, t_sf, TField};
use crate::types::{Design, Dim, SampleSize};

/// Convert a d-value to a t-value.
pub fn d2t_value(d: f64, n: SampleSize, design: Design) -> Result<f64> {
    Ok(d / n.standard_error_factor(design)?)
}

/// Convert a t-value to a d-value.
pub fn t2d_value(t: f64, n: SampleSize, design: Design) -> Result<f64> {
    Ok(t * n.standard_error_factor(design)?)
}

fn field(v: f64, q: usize, fwhm: f64, config: &Config) -> Result<TField> {
    Ok(TField::new(v, q, fwhm)?.bonferroni(config.bonferroni))
}

/// Upper-tail probability of a t-value with `v` degrees of freedom.
///
/// For functional data this is the probability that the field maximum
/// exceeds `t`.
pub fn t2p_value(t: f64, v: f64, dim: Dim, config: &Config) -> Result<f64> {
    match dim.validate()? {
        Dim::Scalar => t_sf(t, v),
        Dim::Functional { q, fwhm } => Ok(field(v, q, fwhm, config)?.sf(t)),
    }
}

/// Critical t-value whose upper-tail probability is `p`.
pub fn p2t_value(p: f64, v: f64, dim: Dim, config: &Config) -> Result<f64> {
    match dim.validate()? {
        Dim::Scalar => t_isf(p, v),
        Dim::Functional { q, fwhm } => {
            field(v, q, fwhm, config)?.isf(p, config.root_tolerance, config.max_iterations)
        }
    }
}

/// Upper-tail probability of a d-value.
pub fn d2p_value(d: f64, n: SampleSize, dim: Dim, design: Design, config: &Config) -> Result<f64> {
    let t = d2t_value(d, n, design)?;
    t2p_value(t, n.dof(design)?, dim, config)
}

/// Critical d-value whose upper-tail probability is `p`.
pub fn p2d_value(p: f64, n: SampleSize, dim: Dim, design: Design, config: &Config) -> Result<f64> {
    let t = p2t_value(p, n.dof(design)?, dim, config)?;
    t2d_value(t, n, design)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn test_t_formulas() {
        let t = d2t_value(0.5, SampleSize::Total(16), Design::OneSample).unwrap();
        assert!((t - 2.0).abs() < 1e-12);

        // Two groups of 10: s = sqrt(0.2)
        let t = d2t_value(1.0, SampleSize::Total(20), Design::TwoSample).unwrap();
        assert!((t - 5.0_f64.sqrt()).abs() < 1e-12);

        let t = d2t_value(1.0, SampleSize::Groups(4, 12), Design::TwoSample).unwrap();
        assert!((t - 1.0 / (0.25_f64 + 1.0 / 12.0).sqrt()).abs() < 1e-12);
    }

    #[test]
    fn test_odd_two_sample_total() {
        assert_eq!(
            d2t_value(0.5, SampleSize::Total(21), Design::TwoSample),
            Err(Error::InvalidSampleSizeParity(21))
        );
        assert!(d2t_value(0.5, SampleSize::Total(21), Design::OneSample).is_ok());
    }

    #[test]
    fn test_d2p_uses_design_dof() {
        let config = Config::default();
        let p = d2p_value(0.5, SampleSize::Total(20), Dim::Scalar, Design::TwoSample, &config)
            .unwrap();
        let t = 0.5 / 0.2_f64.sqrt();
        assert!((p - t_sf(t, 18.0).unwrap()).abs() < 1e-15);

        let p = d2p_value(0.5, SampleSize::Total(20), Dim::Scalar, Design::OneSample, &config)
            .unwrap();
        let t = 0.5 * 20.0_f64.sqrt();
        assert!((p - t_sf(t, 19.0).unwrap()).abs() < 1e-15);
    }

    #[test]
    fn test_round_trip_functional() {
        let config = Config::default();
        let dim = Dim::functional(101, 20.0);
        for &d in &[0.3, 0.8, 1.5] {
            let p = d2p_value(d, SampleSize::Total(20), dim, Design::TwoSample, &config).unwrap();
            let back = p2d_value(p, SampleSize::Total(20), dim, Design::TwoSample, &config).unwrap();
            assert!((back - d).abs() / d < 1e-6, "d={} back={}", d, back);
        }
    }

    #[test]
    fn test_functional_requires_valid_field() {
        let config = Config::default();
        assert!(matches!(
            t2p_value(2.0, 10.0, Dim::functional(0, 20.0), &config),
            Err(Error::InvalidSmoothness { .. })
        ));
    }
}
