//! Rising Slew Rate Limiter
//!
//! Limits how fast the output may rise, in units per second; drops are
//! applied immediately. Used for progressive throttle: the pedal value
//! ramps up while held and snaps back to zero on release.

/// State for the rising slew rate limiter.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SlewRateState {
    /// Maximum rise per second.
    pub rise_per_second: f32,
    /// Previous output.
    pub value: f32,
}

impl SlewRateState {
    /// Create a limiter starting at zero.
    ///
    /// Negative or non-finite rates are treated as zero (output never rises).
    pub fn new(rise_per_second: f32) -> Self {
        let rise_per_second = if rise_per_second.is_finite() {
            rise_per_second.max(0.0)
        } else {
            0.0
        };
        Self {
            rise_per_second,
            value: 0.0,
        }
    }
}

impl Default for SlewRateState {
    fn default() -> Self {
        Self::new(0.5)
    }
}

/// Move toward `target`, rising by at most `rise_per_second * dt`.
///
/// Non-finite or negative `dt` counts as zero elapsed time.
#[inline]
pub fn slew_rate_filter(state: &mut SlewRateState, target: f32, dt: f32) -> f32 {
    if !target.is_finite() {
        return state.value;
    }
    let dt = if dt.is_finite() { dt.max(0.0) } else { 0.0 };

    if target > state.value {
        state.value = (state.value + state.rise_per_second * dt).min(target);
    } else {
        state.value = target;
    }
    state.value
}
