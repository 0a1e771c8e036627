//! Student-t survival and inverse survival functions for scalar (0D) data.

use statrs::distribution::{Continuous, ContinuousCDF, StudentsT};

use crate::error::{Error, Result};

/// Newton refinement steps applied after the statrs inverse.
const POLISH_STEPS: usize = 4;

/// Standard Student-t distribution with `v` degrees of freedom.
pub(crate) fn students_t(v: f64) -> Result<StudentsT> {
    StudentsT::new(0.0, 1.0, v).map_err(|e| Error::Distribution(e.to_string()))
}

/// Reject probabilities outside `[0, 1]` (including NaN).
pub(crate) fn check_probability(p: f64) -> Result<f64> {
    if (0.0..=1.0).contains(&p) {
        Ok(p)
    } else {
        Err(Error::InvalidProbability(p))
    }
}

/// Upper-tail probability `P(T > t)` with `v` degrees of freedom.
pub fn t_sf(t: f64, v: f64) -> Result<f64> {
    Ok(students_t(v)?.sf(t))
}

/// Threshold `t` such that `P(T > t) = p` with `v` degrees of freedom.
///
/// `p = 0` gives `+∞` and `p = 1` gives `-∞`.
pub fn t_isf(p: f64, v: f64) -> Result<f64> {
    let dist = students_t(v)?;
    isf_with(&dist, check_probability(p)?)
}

pub(crate) fn isf_with(dist: &StudentsT, p: f64) -> Result<f64> {
    if p == 0.0 {
        return Ok(f64::INFINITY);
    }
    if p == 1.0 {
        return Ok(f64::NEG_INFINITY);
    }

    // sf(t) = p  <=>  cdf(-t) = p, which keeps precision for small p
    let mut t = -dist.inverse_cdf(p);

    // Polish against sf so that t2p(p2t(p)) reproduces p
    for _ in 0..POLISH_STEPS {
        let density = dist.pdf(t);
        if density <= 0.0 || !density.is_finite() {
            break;
        }
        let step = (dist.sf(t) - p) / density;
        if !step.is_finite() {
            break;
        }
        t += step;
        if step.abs() <= 1e-15 * t.abs().max(1.0) {
            break;
        }
    }
    Ok(t)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sf_symmetry() {
        assert!((t_sf(0.0, 10.0).unwrap() - 0.5).abs() < 1e-14);
        let a = t_sf(1.3, 7.0).unwrap();
        let b = t_sf(-1.3, 7.0).unwrap();
        assert!((a + b - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_known_critical_values() {
        // Two-sided 5% critical values from standard t tables
        assert!((t_isf(0.025, 10.0).unwrap() - 2.228139).abs() < 1e-5);
        assert!((t_isf(0.025, 18.0).unwrap() - 2.100922).abs() < 1e-5);
        assert!((t_isf(0.05, 5.0).unwrap() - 2.015048).abs() < 1e-5);
    }

    #[test]
    fn test_isf_inverts_sf() {
        for &v in &[3.0, 8.0, 18.0, 51.0] {
            for &p in &[0.49, 0.2, 0.05, 1e-3, 1e-6] {
                let t = t_isf(p, v).unwrap();
                let back = t_sf(t, v).unwrap();
                assert!((back - p).abs() / p < 1e-10, "v={} p={} back={}", v, p, back);
            }
        }
    }

    #[test]
    fn test_probability_bounds() {
        assert_eq!(t_isf(0.0, 5.0).unwrap(), f64::INFINITY);
        assert_eq!(t_isf(1.0, 5.0).unwrap(), f64::NEG_INFINITY);
        assert_eq!(t_isf(1.2, 5.0), Err(Error::InvalidProbability(1.2)));
        assert!(t_isf(-0.1, 5.0).is_err());
        assert!(t_isf(f64::NAN, 5.0).is_err());
    }

    #[test]
    fn test_invalid_dof() {
        assert!(matches!(t_sf(1.0, 0.0), Err(Error::Distribution(_))));
        assert!(matches!(t_sf(1.0, -2.0), Err(Error::Distribution(_))));
    }
}
