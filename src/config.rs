//! Configuration for probability conversions.

/// Configuration options for [`Converter`](crate::Converter).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    /// Cap the field survival probability by the Bonferroni bound `Q·sf₀(t)`
    /// (default: true).
    ///
    /// For rough fields the Euler-characteristic approximation can exceed
    /// the Bonferroni bound; the smaller of the two is reported.
    pub bonferroni: bool,

    /// Absolute tolerance on the threshold found by inverse survival
    /// searches (default: 1e-12).
    pub root_tolerance: f64,

    /// Iteration cap for inverse survival searches (default: 200).
    pub max_iterations: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bonferroni: true,
            root_tolerance: 1e-12,
            max_iterations: 200,
        }
    }
}
