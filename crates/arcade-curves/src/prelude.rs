//! Convenience re-exports.
//!
//! ```
//! use arcade_curves::prelude::*;
//!
//! let curve = ResponseCurve::from_points(&[(0.0, 400.0), (200.0, 600.0)])?;
//! assert!((curve.evaluate(100.0) - 500.0).abs() < 1e-3);
//! # Ok::<(), CurveError>(())
//! ```

pub use crate::curve::ResponseCurve;
pub use crate::error::CurveError;
pub use crate::keyframe::Keyframe;
