//! Convenience re-exports.

pub use crate::blend::{BlendState, blend_filter, lerp};
pub use crate::slew_rate::{SlewRateState, slew_rate_filter};
pub use crate::state::FilterState;
