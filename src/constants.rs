//! Numeric constants and the canonical rule-of-thumb baseline.

/// `4 ln 2`, the factor relating Gaussian-kernel FWHM to roughness.
pub const FOUR_LN2: f64 = 4.0 * std::f64::consts::LN_2;

/// LKC values above this are reported as infinite.
pub const LKC_SATURATION: f64 = 1e9;

/// Interpretation labels of the canonical baseline, smallest to largest.
pub const CANONICAL_LABELS: [&str; 6] =
    ["Very small", "Small", "Medium", "Large", "Very large", "Huge"];

/// Rule-of-thumb Cohen's d thresholds (Sawilowsky 2009).
pub const CANONICAL_D: [f64; 6] = [0.01, 0.2, 0.5, 0.8, 1.2, 2.0];

/// Upper-tail probabilities of [`CANONICAL_D`] for a scalar two-sample
/// design with a total sample size of 20.
pub const CANONICAL_P: [f64; 6] = [0.4912, 0.33003, 0.139126, 0.045241, 0.0075904, 0.00014728];

/// Total sample size of the baseline scenario.
pub const BASELINE_N: usize = 20;

/// Probabilities below this are displayed as `"< 0.001"`.
pub const DISPLAY_FLOOR: f64 = 0.001;
