//! Error types for curve construction.

use std::fmt;

/// Error type for curve operations.
///
/// Evaluation never fails; only building a curve from keyframes can.
#[derive(Debug, Clone, PartialEq)]
pub enum CurveError {
    /// The curve has no keyframes.
    Empty,

    /// A keyframe coordinate or tangent is NaN or infinite.
    NonFinite {
        /// Index of the offending keyframe.
        index: usize,
        /// Which component is not finite ("x", "y", "in_tangent", "out_tangent").
        component: &'static str,
    },

    /// Keyframes are not strictly increasing in x.
    NotIncreasing {
        /// Index of the keyframe that breaks the ordering.
        index: usize,
        /// x of the previous keyframe.
        previous: f32,
        /// x of the offending keyframe.
        x: f32,
    },
}

impl fmt::Display for CurveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "curve has no keyframes"),
            Self::NonFinite { index, component } => {
                write!(f, "keyframe {} has a non-finite {}", index, component)
            }
            Self::NotIncreasing { index, previous, x } => {
                write!(
                    f,
                    "keyframe {} at x={} does not follow previous x={}",
                    index, x, previous
                )
            }
        }
    }
}

impl std::error::Error for CurveError {}
