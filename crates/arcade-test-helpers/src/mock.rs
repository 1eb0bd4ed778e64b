//! Test doubles for the controller's collaborators.
//!
//! [`RecordingBody`] stands in for the physics solver: it integrates nothing,
//! remembers every command and counts ground-contact queries.
//! [`ScriptedInput`] is an input source whose axes and buttons are set
//! directly by the test.

use std::cell::Cell;
use std::collections::{BTreeMap, HashMap, HashSet};

use arcade_interfaces::{InputSource, PhysicsBody, Pose, WheelCommand, WheelId};
use glam::Vec3;

/// Which actuator channel a wheel write targeted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WheelChannel {
    Motor,
    Brake,
    Steer,
}

/// One recorded wheel write.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WheelWrite {
    pub wheel: WheelId,
    pub channel: WheelChannel,
    pub value: f32,
}

#[derive(Debug, Clone, Copy)]
struct MockWheel {
    active: bool,
    grounded: bool,
    command: WheelCommand,
}

impl Default for MockWheel {
    fn default() -> Self {
        Self {
            active: true,
            grounded: true,
            command: WheelCommand::default(),
        }
    }
}

/// A [`PhysicsBody`] that records instead of simulating.
#[derive(Debug, Default)]
pub struct RecordingBody {
    pub velocity: Vec3,
    pub angular_velocity: Vec3,
    pub pose: Pose,
    wheels: BTreeMap<WheelId, MockWheel>,
    writes: Vec<WheelWrite>,
    forces: Vec<Vec3>,
    velocity_writes: Vec<Vec3>,
    grounded_queries: Cell<usize>,
}

impl RecordingBody {
    /// A body at the origin with the given wheels, all active and grounded.
    pub fn with_wheels(ids: &[u16]) -> Self {
        let wheels = ids
            .iter()
            .map(|&id| (WheelId(id), MockWheel::default()))
            .collect();
        Self {
            wheels,
            ..Self::default()
        }
    }

    /// Stock four-wheel car: ids 0..=3.
    pub fn four_wheel() -> Self {
        Self::with_wheels(&[0, 1, 2, 3])
    }

    /// Set the velocity to `mps` along the current forward axis.
    pub fn set_forward_speed(&mut self, mps: f32) {
        self.velocity = self.pose.forward() * mps;
    }

    pub fn set_grounded(&mut self, id: u16, grounded: bool) {
        self.wheels.entry(WheelId(id)).or_default().grounded = grounded;
    }

    pub fn set_active(&mut self, id: u16, active: bool) {
        self.wheels.entry(WheelId(id)).or_default().active = active;
    }

    /// Overwrite a wheel's current steer angle without recording a write.
    pub fn set_current_steer(&mut self, id: u16, angle: f32) {
        self.wheels.entry(WheelId(id)).or_default().command.steer_angle = angle;
    }

    /// Latest command state of a wheel.
    pub fn wheel(&self, id: u16) -> Option<WheelCommand> {
        self.wheels.get(&WheelId(id)).map(|w| w.command)
    }

    /// Every wheel write since the last [`RecordingBody::clear`].
    pub fn writes(&self) -> &[WheelWrite] {
        &self.writes
    }

    pub fn writes_to(&self, channel: WheelChannel) -> Vec<WheelWrite> {
        self.writes
            .iter()
            .filter(|w| w.channel == channel)
            .copied()
            .collect()
    }

    /// Forces added since the last [`RecordingBody::clear`].
    pub fn forces(&self) -> &[Vec3] {
        &self.forces
    }

    /// Velocities written since the last [`RecordingBody::clear`].
    pub fn velocity_writes(&self) -> &[Vec3] {
        &self.velocity_writes
    }

    /// Number of per-wheel ground queries so far.
    pub fn grounded_queries(&self) -> usize {
        self.grounded_queries.get()
    }

    /// Forget recorded writes, forces and query counts. Wheel state stays.
    pub fn clear(&mut self) {
        self.writes.clear();
        self.forces.clear();
        self.velocity_writes.clear();
        self.grounded_queries.set(0);
    }

    fn record(&mut self, wheel: WheelId, channel: WheelChannel, value: f32) {
        self.writes.push(WheelWrite {
            wheel,
            channel,
            value,
        });
        let state = self.wheels.entry(wheel).or_default();
        match channel {
            WheelChannel::Motor => state.command.motor_torque = value,
            WheelChannel::Brake => state.command.brake_torque = value,
            WheelChannel::Steer => state.command.steer_angle = value,
        }
    }
}

impl PhysicsBody for RecordingBody {
    fn velocity(&self) -> Vec3 {
        self.velocity
    }

    fn set_velocity(&mut self, velocity: Vec3) {
        self.velocity_writes.push(velocity);
        self.velocity = velocity;
    }

    fn set_angular_velocity(&mut self, angular_velocity: Vec3) {
        self.angular_velocity = angular_velocity;
    }

    fn add_force(&mut self, force: Vec3) {
        self.forces.push(force);
    }

    fn pose(&self) -> Pose {
        self.pose
    }

    fn set_pose(&mut self, pose: Pose) {
        self.pose = pose;
    }

    fn wheel_active(&self, wheel: WheelId) -> bool {
        self.wheels.get(&wheel).is_some_and(|w| w.active)
    }

    fn wheel_grounded(&self, wheel: WheelId) -> bool {
        self.grounded_queries.set(self.grounded_queries.get() + 1);
        self.wheels.get(&wheel).is_some_and(|w| w.grounded)
    }

    fn wheel_steer_angle(&self, wheel: WheelId) -> f32 {
        self.wheels
            .get(&wheel)
            .map_or(0.0, |w| w.command.steer_angle)
    }

    fn set_wheel_motor_torque(&mut self, wheel: WheelId, torque: f32) {
        self.record(wheel, WheelChannel::Motor, torque);
    }

    fn set_wheel_brake_torque(&mut self, wheel: WheelId, torque: f32) {
        self.record(wheel, WheelChannel::Brake, torque);
    }

    fn set_wheel_steer_angle(&mut self, wheel: WheelId, angle: f32) {
        self.record(wheel, WheelChannel::Steer, angle);
    }
}

/// An [`InputSource`] driven directly by the test.
///
/// Unset axes read as zero and unset buttons as released. Reads are
/// counted so tests can assert that a code path never consulted input.
#[derive(Debug, Default)]
pub struct ScriptedInput {
    axes: HashMap<String, f32>,
    held: HashSet<String>,
    down: HashSet<String>,
    reads: Cell<usize>,
}

impl ScriptedInput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_axis(mut self, channel: &str, value: f32) -> Self {
        self.set_axis(channel, value);
        self
    }

    pub fn with_held(mut self, channel: &str) -> Self {
        self.hold(channel);
        self
    }

    pub fn set_axis(&mut self, channel: &str, value: f32) {
        self.axes.insert(channel.to_owned(), value);
    }

    pub fn hold(&mut self, channel: &str) {
        self.held.insert(channel.to_owned());
    }

    pub fn release(&mut self, channel: &str) {
        self.held.remove(channel);
        self.down.remove(channel);
    }

    /// Press a button this frame: it reads as down and held.
    pub fn press(&mut self, channel: &str) {
        self.down.insert(channel.to_owned());
        self.held.insert(channel.to_owned());
    }

    /// End the frame: button-down edges are cleared, held buttons stay.
    pub fn end_frame(&mut self) {
        self.down.clear();
    }

    /// Total number of axis and button reads so far.
    pub fn reads(&self) -> usize {
        self.reads.get()
    }

    fn bump(&self) {
        self.reads.set(self.reads.get() + 1);
    }
}

impl InputSource for ScriptedInput {
    fn axis(&self, channel: &str) -> f32 {
        self.bump();
        self.axes.get(channel).copied().unwrap_or(0.0)
    }

    fn button_down(&self, channel: &str) -> bool {
        self.bump();
        self.down.contains(channel)
    }

    fn button_held(&self, channel: &str) -> bool {
        self.bump();
        self.held.contains(channel)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recording_body_counts_ground_queries() {
        let mut body = RecordingBody::with_wheels(&[0, 1]);
        body.set_grounded(1, false);
        assert!(body.wheel_grounded(WheelId(0)));
        assert!(!body.wheel_grounded(WheelId(1)));
        assert_eq!(body.grounded_queries(), 2);
        body.clear();
        assert_eq!(body.grounded_queries(), 0);
    }

    #[test]
    fn test_recording_body_records_commands() {
        let mut body = RecordingBody::four_wheel();
        body.set_wheel_motor_torque(WheelId(2), 150.0);
        body.set_wheel_steer_angle(WheelId(0), 12.0);
        assert_eq!(body.writes().len(), 2);
        assert_eq!(body.writes_to(WheelChannel::Motor)[0].value, 150.0);
        assert_eq!(body.wheel(0).map(|c| c.steer_angle), Some(12.0));
        assert_eq!(body.wheel_steer_angle(WheelId(0)), 12.0);
    }

    #[test]
    fn test_unknown_wheel_is_inactive() {
        let body = RecordingBody::with_wheels(&[0]);
        assert!(body.wheel_active(WheelId(0)));
        assert!(!body.wheel_active(WheelId(9)));
    }

    #[test]
    fn test_scripted_input_edges() {
        let mut input = ScriptedInput::new().with_axis("Throttle", 0.5);
        input.press("Boost");
        assert_eq!(input.axis("Throttle"), 0.5);
        assert!(input.button_down("Boost"));
        input.end_frame();
        assert!(!input.button_down("Boost"));
        assert!(input.button_held("Boost"));
        assert_eq!(input.reads(), 4);
    }
}
