//! Input collaborator contract.

/// Named-channel driver input.
///
/// Axis values are nominally in `[-1, 1]`; the controller clamps whatever it
/// receives, so implementations do not need to.
pub trait InputSource {
    /// Current value of an analogue channel.
    fn axis(&self, channel: &str) -> f32;

    /// Whether the button went down during the current frame.
    fn button_down(&self, channel: &str) -> bool;

    /// Whether the button is currently held.
    fn button_held(&self, channel: &str) -> bool;
}

impl<T: InputSource + ?Sized> InputSource for &T {
    fn axis(&self, channel: &str) -> f32 {
        (**self).axis(channel)
    }

    fn button_down(&self, channel: &str) -> bool {
        (**self).button_down(channel)
    }

    fn button_held(&self, channel: &str) -> bool {
        (**self).button_held(channel)
    }
}

/// An input source with every axis centred and every button released.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NeutralInput;

impl InputSource for NeutralInput {
    fn axis(&self, _channel: &str) -> f32 {
        0.0
    }

    fn button_down(&self, _channel: &str) -> bool {
        false
    }

    fn button_held(&self, _channel: &str) -> bool {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn read_throttle(input: &impl InputSource) -> f32 {
        input.axis("Throttle")
    }

    #[test]
    fn test_neutral_input_is_idle() {
        let input = NeutralInput;
        assert_eq!(read_throttle(&input), 0.0);
        assert!(!input.button_down("Boost"));
        assert!(!input.button_held("Boost"));
    }

    #[test]
    fn test_reference_forwards() {
        let input = NeutralInput;
        let by_ref: &dyn InputSource = &input;
        assert_eq!(read_throttle(&by_ref), 0.0);
    }
}
