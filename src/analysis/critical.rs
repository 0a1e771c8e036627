//! Critical value sets: labelled d-value thresholds and their probabilities.
//!
//! The canonical baseline pairs rule-of-thumb d thresholds with their
//! upper-tail probabilities for a scalar two-sample design with n = 20.
//! Only those probabilities carry over to other scenarios: a derived set
//! inverts them under the target sample size, design and smoothness, so
//! that each label stays "equally surprising".

use std::sync::OnceLock;

use serde::{Deserialize, Serialize};

use crate::config::Config;
use crate::constants::{CANONICAL_D, CANONICAL_LABELS, CANONICAL_P, DISPLAY_FLOOR};
use crate::error::{Error, Result};
use crate::types::{Design, Dim, SampleSize};

use super::conversion::p2d_value;

/// Ordered (label, d-value, p-value) triples.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawCriticalValueSet")]
pub struct CriticalValueSet {
    labels: Vec<String>,
    d: Vec<f64>,
    p: Vec<f64>,
}

#[derive(Deserialize)]
struct RawCriticalValueSet {
    labels: Vec<String>,
    d: Vec<f64>,
    p: Vec<f64>,
}

impl TryFrom<RawCriticalValueSet> for CriticalValueSet {
    type Error = Error;

    fn try_from(raw: RawCriticalValueSet) -> Result<Self> {
        Self::new(raw.d, raw.p, Some(raw.labels))
    }
}

impl CriticalValueSet {
    /// Build a set from parallel d-values, p-values and labels.
    ///
    /// Without labels, exactly six values are required and the canonical
    /// labels are used.
    ///
    /// # Errors
    ///
    /// `InvalidLabelShape` if the three sequences differ in length.
    pub fn new(d: Vec<f64>, p: Vec<f64>, labels: Option<Vec<String>>) -> Result<Self> {
        let labels = match labels {
            Some(labels) => labels,
            None if d.len() == CANONICAL_LABELS.len() => {
                CANONICAL_LABELS.iter().map(|s| s.to_string()).collect()
            }
            None => {
                return Err(Error::InvalidLabelShape {
                    labels: 0,
                    d: d.len(),
                    p: p.len(),
                })
            }
        };

        if labels.len() != d.len() || d.len() != p.len() {
            return Err(Error::InvalidLabelShape {
                labels: labels.len(),
                d: d.len(),
                p: p.len(),
            });
        }

        Ok(Self { labels, d, p })
    }

    /// The canonical baseline (scalar, two-sample, n = 20).
    pub fn baseline() -> &'static CriticalValueSet {
        static BASELINE: OnceLock<CriticalValueSet> = OnceLock::new();
        BASELINE.get_or_init(|| CriticalValueSet {
            labels: CANONICAL_LABELS.iter().map(|s| s.to_string()).collect(),
            d: CANONICAL_D.to_vec(),
            p: CANONICAL_P.to_vec(),
        })
    }

    /// Number of thresholds.
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    /// Whether the set has no thresholds.
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Labels in order.
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// Critical d-values in label order.
    pub fn d_values(&self) -> &[f64] {
        &self.d
    }

    /// Probabilities in label order.
    pub fn p_values(&self) -> &[f64] {
        &self.p
    }

    /// Critical d-value for `label`.
    pub fn get(&self, label: &str) -> Option<f64> {
        self.labels.iter().position(|l| l == label).map(|i| self.d[i])
    }

    /// `(label, d)` pairs in order.
    pub fn pairs(&self) -> Vec<(&str, f64)> {
        self.labels
            .iter()
            .map(String::as_str)
            .zip(self.d.iter().copied())
            .collect()
    }

    /// Iterate over `(label, d, p)` triples.
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64, f64)> + '_ {
        self.labels
            .iter()
            .zip(self.d.iter().zip(self.p.iter()))
            .map(|(label, (&d, &p))| (label.as_str(), d, p))
    }
}

/// Render a value to three decimals, or `"< 0.001"` below the display floor.
pub fn format_value(x: f64) -> String {
    if x < DISPLAY_FLOOR {
        "< 0.001".to_string()
    } else {
        format!("{:.3}", x)
    }
}

impl std::fmt::Display for CriticalValueSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let width = self.labels.iter().map(String::len).max().unwrap_or(0);
        for (label, d, p) in self.iter() {
            writeln!(
                f,
                "{:<width$}  d = {:>7}  p = {:>7}",
                label,
                format_value(d),
                format_value(p),
                width = width
            )?;
        }
        Ok(())
    }
}

/// Invert the probabilities of `baseline` under a target scenario.
///
/// Labels and probabilities are kept; every d-value is recomputed with
/// `p2d` for sample size `n`, dimensionality `dim` and `design`.
pub fn derive_critical_values(
    baseline: &CriticalValueSet,
    n: SampleSize,
    dim: Dim,
    design: Design,
    config: &Config,
) -> Result<CriticalValueSet> {
    let dim = dim.validate()?;
    let d = baseline
        .p
        .iter()
        .map(|&p| p2d_value(p, n, dim, design, config))
        .collect::<Result<Vec<_>>>()?;

    tracing::debug!(
        ?n,
        ?dim,
        %design,
        d_min = d.first().copied().unwrap_or(f64::NAN),
        d_max = d.last().copied().unwrap_or(f64::NAN),
        "derived critical values"
    );

    Ok(CriticalValueSet {
        labels: baseline.labels.clone(),
        d,
        p: baseline.p.clone(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_baseline_contents() {
        let base = CriticalValueSet::baseline();
        assert_eq!(base.len(), 6);
        assert_eq!(base.get("Medium"), Some(0.5));
        assert_eq!(base.get("Enormous"), None);
        assert_eq!(base.pairs()[5], ("Huge", 2.0));
        assert_eq!(base.p_values()[3], 0.045241);
    }

    #[test]
    fn test_default_labels_need_six_values() {
        let set = CriticalValueSet::new(vec![0.1; 6], vec![0.5; 6], None).unwrap();
        assert_eq!(set.labels()[0], "Very small");

        assert_eq!(
            CriticalValueSet::new(vec![0.1, 0.2], vec![0.5, 0.4], None),
            Err(Error::InvalidLabelShape { labels: 0, d: 2, p: 2 })
        );
    }

    #[test]
    fn test_custom_labels_must_match() {
        let labels = vec!["low".to_string(), "high".to_string()];
        let set = CriticalValueSet::new(vec![0.3, 0.9], vec![0.2, 0.01], Some(labels.clone()))
            .unwrap();
        assert_eq!(set.get("high"), Some(0.9));

        assert_eq!(
            CriticalValueSet::new(vec![0.3, 0.9], vec![0.2], Some(labels)),
            Err(Error::InvalidLabelShape { labels: 2, d: 2, p: 1 })
        );
    }

    #[test]
    fn test_format_value_floor() {
        assert_eq!(format_value(0.00014728), "< 0.001");
        assert_eq!(format_value(0.045241), "0.045");
        assert_eq!(format_value(1.2), "1.200");
    }

    #[test]
    fn test_derived_baseline_reproduces_itself() {
        let base = CriticalValueSet::baseline();
        let derived = derive_critical_values(
            base,
            SampleSize::Total(20),
            Dim::Scalar,
            Design::TwoSample,
            &Config::default(),
        )
        .unwrap();
        assert_eq!(derived.labels(), base.labels());
        for (a, b) in derived.d_values().iter().zip(base.d_values()) {
            // Baseline probabilities are rounded, so allow 1% slack
            assert!((a - b).abs() / b < 1e-2, "{} vs {}", a, b);
        }
    }

    #[test]
    fn test_larger_samples_lower_thresholds() {
        let config = Config::default();
        let base = CriticalValueSet::baseline();
        let small = derive_critical_values(
            base,
            SampleSize::Total(20),
            Dim::Scalar,
            Design::TwoSample,
            &config,
        )
        .unwrap();
        let large = derive_critical_values(
            base,
            SampleSize::Total(60),
            Dim::Scalar,
            Design::TwoSample,
            &config,
        )
        .unwrap();
        for (s, l) in small.d_values().iter().zip(large.d_values()) {
            assert!(l < s);
        }
    }

    #[test]
    fn test_deserialize_validates_lengths() {
        let ok = r#"{"labels":["a"],"d":[0.5],"p":[0.1]}"#;
        let set: CriticalValueSet = serde_json::from_str(ok).unwrap();
        assert_eq!(set.get("a"), Some(0.5));

        let bad = r#"{"labels":["a","b"],"d":[0.5],"p":[0.1]}"#;
        assert!(serde_json::from_str::<CriticalValueSet>(bad).is_err());
    }

    #[test]
    fn test_display_rows() {
        let text = CriticalValueSet::baseline().to_string();
        assert_eq!(text.lines().count(), 6);
        assert!(text.lines().last().unwrap().contains("< 0.001"));
    }
}
