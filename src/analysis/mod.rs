//! Conversion engine and the layers built on it.
//!
//! 1. **Broadcasting** ([`broadcast`]): scalar-or-array arguments and outer-product evaluation
//! 2. **Conversion** ([`conversion`]): scalar d/t/p kernels for both designs and dimensionalities
//! 3. **Critical values** ([`critical`]): canonical baseline and recalibrated thresholds
//! 4. **Sample size** ([`power`]): smallest n reaching significance
//! 5. **Interpretation** ([`interpret`]): labelling scalar and functional effects

pub mod broadcast;
pub mod conversion;
pub mod critical;
pub mod interpret;
pub mod power;

pub use broadcast::{broadcast, Arg, Values};
pub use conversion::{d2p_value, d2t_value, p2d_value, p2t_value, t2d_value, t2p_value};
pub use critical::{derive_critical_values, format_value, CriticalValueSet};
pub use interpret::{interpret, FunctionalEffect};
pub use power::minimum_sample_size;
