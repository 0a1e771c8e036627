//! Design, dimensionality and sample-size types.

use std::str::FromStr;

use nalgebra::DMatrix;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Observations in rows, ordered domain positions in columns.
pub type FunctionalSample = DMatrix<f64>;

/// Experimental design.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Design {
    /// One-sample (or paired) design.
    #[serde(rename = "1sample")]
    OneSample,
    /// Two independent groups.
    #[serde(rename = "2sample")]
    TwoSample,
}

impl Design {
    /// Canonical name, as accepted by [`FromStr`].
    pub fn as_str(&self) -> &'static str {
        match self {
            Design::OneSample => "1sample",
            Design::TwoSample => "2sample",
        }
    }
}

impl FromStr for Design {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "1sample" => Ok(Design::OneSample),
            "2sample" => Ok(Design::TwoSample),
            other => Err(Error::InvalidDesign(other.to_string())),
        }
    }
}

impl std::fmt::Display for Design {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Dimensionality of the dependent variable.
///
/// Functional data carries the field parameters needed for Random Field
/// Theory inference; scalar data needs none.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Dim {
    /// 0D: a single scalar per observation.
    Scalar,
    /// 1D: a smooth field sampled at `q` domain positions.
    Functional {
        /// Number of domain positions (nodes).
        q: usize,
        /// Full width at half maximum in domain units. May be infinite.
        fwhm: f64,
    },
}

impl Dim {
    /// Shorthand for [`Dim::Functional`].
    pub fn functional(q: usize, fwhm: f64) -> Self {
        Dim::Functional { q, fwhm }
    }

    /// Whether this is the 1D case.
    pub fn is_functional(&self) -> bool {
        matches!(self, Dim::Functional { .. })
    }

    /// Check the field parameters of a functional dimensionality.
    pub fn validate(self) -> Result<Self> {
        if let Dim::Functional { q, fwhm } = self {
            if q < 2 || fwhm.is_nan() || fwhm <= 0.0 {
                return Err(Error::InvalidSmoothness { q, fwhm });
            }
        }
        Ok(self)
    }
}

/// Sample size of a design.
///
/// A `Total` for a two-sample design is the combined size of two equal
/// groups and must be even. `Groups` gives unequal two-sample groups.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SampleSize {
    /// One-sample count, or the combined count of two equal groups.
    Total(usize),
    /// Explicit two-sample group sizes `(n0, n1)`.
    Groups(usize, usize),
}

impl From<usize> for SampleSize {
    fn from(n: usize) -> Self {
        SampleSize::Total(n)
    }
}

impl From<(usize, usize)> for SampleSize {
    fn from((n0, n1): (usize, usize)) -> Self {
        SampleSize::Groups(n0, n1)
    }
}

impl SampleSize {
    /// Total number of observations.
    pub fn total(&self) -> usize {
        match *self {
            SampleSize::Total(n) => n,
            SampleSize::Groups(n0, n1) => n0 + n1,
        }
    }

    /// Group sizes used by the t-value formula for `design`.
    ///
    /// The one-sample case yields `(n, n)`, of which only the first is used.
    pub fn groups(&self, design: Design) -> Result<(f64, f64)> {
        match (design, *self) {
            (_, SampleSize::Total(0)) => Err(Error::InvalidSampleSize {
                design,
                reason: "sample size must be positive",
            }),
            (Design::OneSample, SampleSize::Total(n)) => Ok((n as f64, n as f64)),
            (Design::OneSample, SampleSize::Groups(..)) => Err(Error::InvalidSampleSize {
                design,
                reason: "explicit group sizes apply only to two-sample designs",
            }),
            (Design::TwoSample, SampleSize::Total(n)) => {
                if n % 2 != 0 {
                    return Err(Error::InvalidSampleSizeParity(n));
                }
                let half = (n / 2) as f64;
                Ok((half, half))
            }
            (Design::TwoSample, SampleSize::Groups(n0, n1)) => {
                if n0 == 0 || n1 == 0 {
                    return Err(Error::InvalidSampleSize {
                        design,
                        reason: "group sizes must be positive",
                    });
                }
                Ok((n0 as f64, n1 as f64))
            }
        }
    }

    /// Standard-error factor `s` such that `t = d / s` and `d = t · s`.
    ///
    /// ```text
    /// one-sample:  s = sqrt(1/n)
    /// two-sample:  s = sqrt(1/n0 + 1/n1)
    /// ```
    pub fn standard_error_factor(&self, design: Design) -> Result<f64> {
        let (n0, n1) = self.groups(design)?;
        Ok(match design {
            Design::OneSample => (1.0 / n0).sqrt(),
            Design::TwoSample => (1.0 / n0 + 1.0 / n1).sqrt(),
        })
    }

    /// Degrees of freedom: `n - 1` (one-sample) or `n0 + n1 - 2` (two-sample).
    pub fn dof(&self, design: Design) -> Result<f64> {
        self.groups(design)?;
        let (lost, required) = match design {
            Design::OneSample => (1, 2),
            Design::TwoSample => (2, 3),
        };
        let n = self.total();
        if n < required {
            return Err(Error::InsufficientObservations {
                required,
                actual: n,
            });
        }
        Ok((n - lost) as f64)
    }
}
