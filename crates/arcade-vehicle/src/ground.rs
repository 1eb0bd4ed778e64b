//! Per-frame memoized ground contact.
//!
//! Asking every wheel whether it touches the ground is a physics query; the
//! answer cannot change within a render frame, so it is computed at most
//! once per [`FrameId`].

use arcade_interfaces::{FrameId, PhysicsBody, WheelId};
use tracing::trace;

/// "Are all wheels grounded", cached against the frame it was computed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GroundContactCache {
    last_frame: Option<FrameId>,
    grounded: bool,
}

impl GroundContactCache {
    /// An empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether every wheel in `wheels` is active and grounded.
    ///
    /// The first call for a given `frame` queries `body`; later calls with
    /// the same frame return the stored answer. A different frame forces a
    /// fresh query and replaces the stored one.
    pub fn is_grounded<B: PhysicsBody + ?Sized>(
        &mut self,
        body: &B,
        wheels: &[WheelId],
        frame: FrameId,
    ) -> bool {
        if self.last_frame == Some(frame) {
            return self.grounded;
        }

        self.grounded = wheels
            .iter()
            .all(|&wheel| body.wheel_active(wheel) && body.wheel_grounded(wheel));
        self.last_frame = Some(frame);
        trace!(frame = frame.0, grounded = self.grounded, "ground contact refreshed");
        self.grounded
    }

    #[cfg(test)]
    fn cached(&self, frame: FrameId) -> Option<bool> {
        (self.last_frame == Some(frame)).then_some(self.grounded)
    }

    /// Drop the stored answer.
    pub fn invalidate(&mut self) {
        self.last_frame = None;
        self.grounded = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use arcade_test_helpers::RecordingBody;

    fn wheels() -> Vec<WheelId> {
        (0..4).map(WheelId).collect()
    }

    #[test]
    fn test_queries_once_per_frame() {
        let body = RecordingBody::four_wheel();
        let mut cache = GroundContactCache::new();

        assert!(cache.is_grounded(&body, &wheels(), FrameId(7)));
        assert!(cache.is_grounded(&body, &wheels(), FrameId(7)));
        assert!(cache.is_grounded(&body, &wheels(), FrameId(7)));
        assert_eq!(body.grounded_queries(), 4);

        assert!(cache.is_grounded(&body, &wheels(), FrameId(8)));
        assert_eq!(body.grounded_queries(), 8);
    }

    #[test]
    fn test_stale_frame_is_not_reported() {
        let body = RecordingBody::four_wheel();
        let mut cache = GroundContactCache::new();
        cache.is_grounded(&body, &wheels(), FrameId(1));

        assert_eq!(cache.cached(FrameId(1)), Some(true));
        assert_eq!(cache.cached(FrameId(2)), None);

        cache.is_grounded(&body, &wheels(), FrameId(2));
        assert_eq!(cache.cached(FrameId(1)), None);
        assert_eq!(cache.cached(FrameId(2)), Some(true));
    }

    #[test]
    fn test_airborne_wheel_clears_grounded() {
        let mut body = RecordingBody::four_wheel();
        body.set_grounded(2, false);
        let mut cache = GroundContactCache::new();
        assert!(!cache.is_grounded(&body, &wheels(), FrameId(1)));
    }

    #[test]
    fn test_inactive_wheel_clears_grounded() {
        let mut body = RecordingBody::four_wheel();
        body.set_active(0, false);
        let mut cache = GroundContactCache::new();
        assert!(!cache.is_grounded(&body, &wheels(), FrameId(1)));
        // The inactive wheel short-circuits before its contact query.
        assert_eq!(body.grounded_queries(), 0);
    }

    #[test]
    fn test_change_within_frame_is_not_seen() {
        let mut body = RecordingBody::four_wheel();
        let mut cache = GroundContactCache::new();
        assert!(cache.is_grounded(&body, &wheels(), FrameId(3)));

        body.set_grounded(1, false);
        assert!(cache.is_grounded(&body, &wheels(), FrameId(3)));
        assert!(!cache.is_grounded(&body, &wheels(), FrameId(4)));
    }

    #[test]
    fn test_invalidate_forces_requery() {
        let body = RecordingBody::four_wheel();
        let mut cache = GroundContactCache::new();
        cache.is_grounded(&body, &wheels(), FrameId(5));
        cache.invalidate();
        assert_eq!(cache.last_frame, None);
        cache.is_grounded(&body, &wheels(), FrameId(5));
        assert_eq!(body.grounded_queries(), 8);
    }
}
