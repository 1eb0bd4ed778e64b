//! Per-tick Blend Filter
//!
//! A first-order low-pass expressed as a linear blend toward the target on
//! every call. The blend factor is dimensionless and is NOT scaled by the
//! elapsed time: running the same filter at twice the tick rate makes it
//! settle twice as fast. Steering feel is tuned against that coupling.

/// Linear interpolation with `t` clamped to `[0, 1]`.
#[inline]
pub fn lerp(from: f32, to: f32, t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    from + (to - from) * t
}

/// State for the blend filter.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct BlendState {
    /// Fraction of the remaining distance covered per call, in `[0, 1]`.
    pub blend: f32,
    /// Previous output.
    pub value: f32,
}

impl BlendState {
    /// Create a blend filter starting at zero.
    ///
    /// Non-finite factors are treated as a pass-through (`1.0`).
    ///
    /// ```
    /// use arcade_filters::BlendState;
    ///
    /// let state = BlendState::new(0.2);
    /// assert!((state.blend - 0.2).abs() < f32::EPSILON);
    /// assert!(state.value.abs() < f32::EPSILON);
    /// ```
    pub fn new(blend: f32) -> Self {
        let blend = if blend.is_finite() {
            blend.clamp(0.0, 1.0)
        } else {
            1.0
        };
        Self { blend, value: 0.0 }
    }

    /// Change the blend factor without touching the filter memory.
    pub fn set_blend(&mut self, blend: f32) {
        if blend.is_finite() {
            self.blend = blend.clamp(0.0, 1.0);
        }
    }
}

impl Default for BlendState {
    fn default() -> Self {
        Self::new(0.2)
    }
}

/// Advance the blend filter one tick toward `target` and return the output.
///
/// A non-finite target leaves the state unchanged.
#[inline]
pub fn blend_filter(state: &mut BlendState, target: f32) -> f32 {
    if target.is_finite() {
        state.value = lerp(state.value, target, state.blend);
    }
    state.value
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lerp_clamps_t() {
        assert!((lerp(0.0, 10.0, 0.5) - 5.0).abs() < 1e-6);
        assert!((lerp(0.0, 10.0, -1.0) - 0.0).abs() < 1e-6);
        assert!((lerp(0.0, 10.0, 2.0) - 10.0).abs() < 1e-6);
    }

    #[test]
    fn test_blend_step_response() {
        let mut state = BlendState::new(0.2);
        let first = blend_filter(&mut state, 60.0);
        assert!((first - 12.0).abs() < 1e-4);
        let second = blend_filter(&mut state, 60.0);
        assert!((second - 21.6).abs() < 1e-4);
    }

    #[test]
    fn test_blend_settles_by_tick_count_not_time() {
        // Same number of calls, same output, whatever the caller's dt would be.
        let mut slow = BlendState::new(0.2);
        let mut fast = BlendState::new(0.2);
        for _ in 0..10 {
            blend_filter(&mut slow, 1.0);
            blend_filter(&mut fast, 1.0);
        }
        assert!((slow.value - fast.value).abs() < f32::EPSILON);
        assert!((slow.value - (1.0 - 0.8f32.powi(10))).abs() < 1e-5);
    }

    #[test]
    fn test_full_blend_is_pass_through() {
        let mut state = BlendState::new(1.0);
        assert!((blend_filter(&mut state, -7.5) + 7.5).abs() < 1e-6);
    }

    #[test]
    fn test_non_finite_target_holds() {
        let mut state = BlendState::new(0.5);
        blend_filter(&mut state, 4.0);
        let held = blend_filter(&mut state, f32::NAN);
        assert!((held - 2.0).abs() < 1e-6);
    }

    #[test]
    fn test_new_sanitizes_blend() {
        assert!((BlendState::new(3.0).blend - 1.0).abs() < f32::EPSILON);
        assert!((BlendState::new(-3.0).blend).abs() < f32::EPSILON);
        assert!((BlendState::new(f32::NAN).blend - 1.0).abs() < f32::EPSILON);
    }
}
