//! Turn indicators.

use serde::{Deserialize, Serialize};

/// Which indicator is flashing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BlinkerState {
    /// No indicator.
    #[default]
    Off,
    /// Left indicator.
    Left,
    /// Right indicator.
    Right,
}

/// Indicator toggle logic driven by button-down edges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Blinkers {
    state: BlinkerState,
}

impl Blinkers {
    /// Current indicator state.
    pub fn state(&self) -> BlinkerState {
        self.state
    }

    /// Apply one frame of button edges.
    ///
    /// Only the first pressed button counts, in the order left, right,
    /// clear. Pressing the active side turns it off.
    pub fn update(&mut self, left: bool, right: bool, clear: bool) -> BlinkerState {
        self.state = if left {
            Self::toggle(self.state, BlinkerState::Left)
        } else if right {
            Self::toggle(self.state, BlinkerState::Right)
        } else if clear {
            BlinkerState::Off
        } else {
            self.state
        };
        self.state
    }

    /// Turn the indicators off.
    pub fn clear(&mut self) {
        self.state = BlinkerState::Off;
    }

    fn toggle(current: BlinkerState, side: BlinkerState) -> BlinkerState {
        if current == side {
            BlinkerState::Off
        } else {
            side
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_press_side_toggles() {
        let mut blinkers = Blinkers::default();
        assert_eq!(blinkers.update(true, false, false), BlinkerState::Left);
        assert_eq!(blinkers.update(true, false, false), BlinkerState::Off);
    }

    #[test]
    fn test_other_side_switches() {
        let mut blinkers = Blinkers::default();
        blinkers.update(true, false, false);
        assert_eq!(blinkers.update(false, true, false), BlinkerState::Right);
    }

    #[test]
    fn test_clear_and_idle() {
        let mut blinkers = Blinkers::default();
        blinkers.update(false, true, false);
        assert_eq!(blinkers.update(false, false, false), BlinkerState::Right);
        assert_eq!(blinkers.update(false, false, true), BlinkerState::Off);
    }

    #[test]
    fn test_left_wins_over_simultaneous_presses() {
        let mut blinkers = Blinkers::default();
        assert_eq!(blinkers.update(true, true, true), BlinkerState::Left);
    }
}
