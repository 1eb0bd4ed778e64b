//! Validated keyframe curve and its evaluator.

use serde::{Deserialize, Serialize};

use crate::error::CurveError;
use crate::keyframe::Keyframe;

/// Piecewise response curve over an ordered keyframe set.
///
/// A `ResponseCurve` can only be built through validation, so every value
/// of this type has at least one keyframe, finite coordinates and strictly
/// increasing x. Deserialization goes through the same checks.
///
/// # Example
///
/// ```
/// use arcade_curves::ResponseCurve;
///
/// // Identity shaping for a [-1, 1] steering axis
/// let steer = ResponseCurve::linear(-1.0, -1.0, 1.0, 1.0)?;
/// assert!((steer.evaluate(0.3) - 0.3).abs() < 1e-6);
/// assert!((steer.evaluate(4.0) - 1.0).abs() < 1e-6);
/// # Ok::<(), arcade_curves::CurveError>(())
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Keyframe>", into = "Vec<Keyframe>")]
pub struct ResponseCurve {
    keys: Vec<Keyframe>,
}

impl ResponseCurve {
    /// Build a curve from keyframes.
    ///
    /// # Errors
    ///
    /// Returns [`CurveError`] if the set is empty, contains a non-finite
    /// component, or is not strictly increasing in x.
    pub fn new(keys: Vec<Keyframe>) -> Result<Self, CurveError> {
        Self::validate_keys(&keys)?;
        Ok(Self { keys })
    }

    /// Build a tangent-free curve from `(x, y)` pairs.
    ///
    /// # Errors
    ///
    /// Same as [`ResponseCurve::new`].
    pub fn from_points(points: &[(f32, f32)]) -> Result<Self, CurveError> {
        Self::new(points.iter().copied().map(Keyframe::from).collect())
    }

    /// Straight line between two points.
    ///
    /// # Errors
    ///
    /// Returns [`CurveError`] if `x1 <= x0` or a coordinate is not finite.
    pub fn linear(x0: f32, y0: f32, x1: f32, y1: f32) -> Result<Self, CurveError> {
        Self::new(vec![Keyframe::new(x0, y0), Keyframe::new(x1, y1)])
    }

    /// A curve that returns `value` everywhere.
    ///
    /// A non-finite `value` is replaced by zero.
    pub fn constant(value: f32) -> Self {
        let value = if value.is_finite() { value } else { 0.0 };
        Self {
            keys: vec![Keyframe::new(0.0, value)],
        }
    }

    /// Evaluate the curve at `x`.
    ///
    /// Outside the keyed domain the nearest boundary value is returned. A NaN
    /// input evaluates to the first key's value.
    pub fn evaluate(&self, x: f32) -> f32 {
        let Some((first, rest)) = self.keys.split_first() else {
            return 0.0;
        };
        if x.is_nan() || x <= first.x {
            return first.y;
        }

        for pair in self.keys.windows(2) {
            if let [a, b] = pair {
                if x <= b.x {
                    return a.interpolate(b, x);
                }
            }
        }

        rest.last().map_or(first.y, |last| last.y)
    }

    /// The keyframes, ordered by x.
    pub fn keys(&self) -> &[Keyframe] {
        &self.keys
    }

    /// The keyed input domain `(min_x, max_x)`.
    pub fn domain(&self) -> (f32, f32) {
        match (self.keys.first(), self.keys.last()) {
            (Some(first), Some(last)) => (first.x, last.x),
            _ => (0.0, 0.0),
        }
    }

    /// Whether every segment interpolates linearly.
    pub fn is_piecewise_linear(&self) -> bool {
        self.keys
            .windows(2)
            .all(|pair| matches!(pair, [a, b] if a.out_tangent.is_none() || b.in_tangent.is_none()))
    }

    fn validate_keys(keys: &[Keyframe]) -> Result<(), CurveError> {
        if keys.is_empty() {
            return Err(CurveError::Empty);
        }

        let mut previous: Option<f32> = None;
        for (index, key) in keys.iter().enumerate() {
            let components = [
                ("x", Some(key.x)),
                ("y", Some(key.y)),
                ("in_tangent", key.in_tangent),
                ("out_tangent", key.out_tangent),
            ];
            for (component, value) in components {
                if value.is_some_and(|v| !v.is_finite()) {
                    return Err(CurveError::NonFinite { index, component });
                }
            }

            if let Some(prev) = previous.filter(|prev| key.x <= *prev) {
                return Err(CurveError::NotIncreasing {
                    index,
                    previous: prev,
                    x: key.x,
                });
            }
            previous = Some(key.x);
        }
        Ok(())
    }
}

impl TryFrom<Vec<Keyframe>> for ResponseCurve {
    type Error = CurveError;

    fn try_from(keys: Vec<Keyframe>) -> Result<Self, Self::Error> {
        Self::new(keys)
    }
}

impl From<ResponseCurve> for Vec<Keyframe> {
    fn from(curve: ResponseCurve) -> Self {
        curve.keys
    }
}
