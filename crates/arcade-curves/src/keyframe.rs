//! A single curve keyframe and segment interpolation.

use serde::{Deserialize, Serialize};

/// One (x, y) control point of a [`ResponseCurve`](crate::ResponseCurve).
///
/// Tangents are slopes (dy/dx). A segment uses Hermite interpolation only
/// when the left key's `out_tangent` and the right key's `in_tangent` are
/// both present.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Keyframe {
    /// Input coordinate.
    pub x: f32,
    /// Output value at `x`.
    pub y: f32,
    /// Incoming slope, used by the segment ending at this key.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub in_tangent: Option<f32>,
    /// Outgoing slope, used by the segment starting at this key.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub out_tangent: Option<f32>,
}

impl Keyframe {
    /// Create a keyframe without tangents.
    pub const fn new(x: f32, y: f32) -> Self {
        Self {
            x,
            y,
            in_tangent: None,
            out_tangent: None,
        }
    }

    /// Attach incoming and outgoing slopes.
    pub const fn with_tangents(mut self, in_tangent: f32, out_tangent: f32) -> Self {
        self.in_tangent = Some(in_tangent);
        self.out_tangent = Some(out_tangent);
        self
    }

    /// Interpolate the segment `self..=next` at `x`.
    ///
    /// `x` must lie within the segment; callers clamp beforehand.
    #[inline]
    pub(crate) fn interpolate(&self, next: &Keyframe, x: f32) -> f32 {
        let span = next.x - self.x;
        if span <= 0.0 {
            return next.y;
        }
        let t = (x - self.x) / span;

        match (self.out_tangent, next.in_tangent) {
            (Some(m0), Some(m1)) => {
                let t2 = t * t;
                let t3 = t2 * t;
                let h00 = 2.0 * t3 - 3.0 * t2 + 1.0;
                let h10 = t3 - 2.0 * t2 + t;
                let h01 = -2.0 * t3 + 3.0 * t2;
                let h11 = t3 - t2;
                h00 * self.y + h10 * m0 * span + h01 * next.y + h11 * m1 * span
            }
            _ => self.y + (next.y - self.y) * t,
        }
    }
}

impl From<(f32, f32)> for Keyframe {
    fn from((x, y): (f32, f32)) -> Self {
        Self::new(x, y)
    }
}
