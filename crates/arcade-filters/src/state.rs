//! Filter state trait.

use crate::blend::BlendState;
use crate::slew_rate::SlewRateState;

/// Common operations on filter state.
pub trait FilterState: Copy + Clone + std::fmt::Debug {
    /// Reset the filter memory to its initial value, keeping its tuning.
    fn reset(&mut self);

    /// The current filter output.
    fn output(&self) -> f32;
}

impl FilterState for BlendState {
    fn reset(&mut self) {
        self.value = 0.0;
    }

    fn output(&self) -> f32 {
        self.value
    }
}

impl FilterState for SlewRateState {
    fn reset(&mut self) {
        self.value = 0.0;
    }

    fn output(&self) -> f32 {
        self.value
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{blend_filter, slew_rate_filter};

    #[test]
    fn test_reset_keeps_tuning() {
        let mut blend = BlendState::new(0.3);
        blend_filter(&mut blend, 10.0);
        blend.reset();
        assert!(blend.output().abs() < f32::EPSILON);
        assert!((blend.blend - 0.3).abs() < f32::EPSILON);

        let mut slew = SlewRateState::new(2.0);
        slew_rate_filter(&mut slew, 1.0, 0.1);
        slew.reset();
        assert!(slew.output().abs() < f32::EPSILON);
        assert!((slew.rise_per_second - 2.0).abs() < f32::EPSILON);
    }
}
