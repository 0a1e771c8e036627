//! Error type shared by every conversion, estimator and table constructor.

use crate::types::Design;

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Usage errors raised by the statistical routines.
///
/// All errors are raised synchronously before (or instead of) producing a
/// number. Saturation of FWHM/LKC at zero or infinity is not an error.
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// Design name other than `"1sample"` or `"2sample"`.
    InvalidDesign(String),

    /// Odd combined sample size supplied for a two-sample design.
    InvalidSampleSizeParity(usize),

    /// Sample size not usable with the requested design.
    InvalidSampleSize {
        /// Design the sample size was used with.
        design: Design,
        /// What was wrong with it.
        reason: &'static str,
    },

    /// Too few observations (or degrees of freedom) for the computation.
    InsufficientObservations {
        /// Minimum count needed.
        required: usize,
        /// Count supplied.
        actual: usize,
    },

    /// Two samples with different numbers of domain positions.
    ShapeMismatch {
        /// Column count of the first sample.
        expected: usize,
        /// Column count of the second sample.
        actual: usize,
    },

    /// Labels, d-values and p-values of a critical value set differ in length.
    InvalidLabelShape {
        /// Number of labels.
        labels: usize,
        /// Number of d-values.
        d: usize,
        /// Number of p-values.
        p: usize,
    },

    /// Residual field too small to difference along the domain.
    DegenerateSmoothnessInput {
        /// Observation count.
        rows: usize,
        /// Domain length.
        cols: usize,
    },

    /// Functional dimensionality with an unusable domain length or FWHM.
    InvalidSmoothness {
        /// Domain length.
        q: usize,
        /// Full width at half maximum.
        fwhm: f64,
    },

    /// Probability outside `[0, 1]`.
    InvalidProbability(f64),

    /// The field survival function never falls to this probability.
    ThresholdNotFound {
        /// Target probability.
        p: f64,
    },

    /// The Student-t distribution rejected its parameters.
    Distribution(String),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::InvalidDesign(name) => write!(
                f,
                "unknown design \"{}\": only \"1sample\" and \"2sample\" are supported",
                name
            ),
            Error::InvalidSampleSizeParity(n) => write!(
                f,
                "unsupported sample size n = {}: a single two-sample size is the total \
                 of two equal groups and must be even (pass explicit group sizes instead)",
                n
            ),
            Error::InvalidSampleSize { design, reason } => {
                write!(f, "invalid sample size for {} design: {}", design, reason)
            }
            Error::InsufficientObservations { required, actual } => write!(
                f,
                "insufficient observations: need at least {}, got {}",
                required, actual
            ),
            Error::ShapeMismatch { expected, actual } => write!(
                f,
                "domain length mismatch: expected {} positions, got {}",
                expected, actual
            ),
            Error::InvalidLabelShape { labels, d, p } => write!(
                f,
                "critical value set needs equal lengths: {} labels, {} d-values, {} p-values",
                labels, d, p
            ),
            Error::DegenerateSmoothnessInput { rows, cols } => write!(
                f,
                "cannot estimate smoothness of a {}x{} residual field: need at least 2 rows and 2 columns",
                rows, cols
            ),
            Error::InvalidSmoothness { q, fwhm } => write!(
                f,
                "invalid field parameters Q = {}, FWHM = {}: need Q >= 2 and FWHM > 0",
                q, fwhm
            ),
            Error::InvalidProbability(p) => write!(f, "probability {} is outside [0, 1]", p),
            Error::ThresholdNotFound { p } => write!(
                f,
                "no field threshold has maximum-exceedance probability {}",
                p
            ),
            Error::Distribution(msg) => write!(f, "Student-t distribution error: {}", msg),
        }
    }
}

impl std::error::Error for Error {}
