//! Boost tank and drift gate.
//!
//! Boost is a bounded accumulator: it regenerates on the frame step while the
//! player holds authority, and is burned on the fixed step while the boost
//! button is held. The charge never leaves `[0, max_boost]`.

use arcade_errors::ResourceError;
use tracing::debug;

use crate::lockout::Authority;

/// Auxiliary resources owned by one controller.
#[derive(Debug, Clone, PartialEq)]
pub struct ResourceManager {
    boost: f32,
    max_boost: f32,
    regen_rate: f32,
    allow_boost: bool,
    allow_drift: bool,
    drift: bool,
}

impl ResourceManager {
    /// Create a full tank.
    ///
    /// Negative or non-finite capacities and rates are treated as zero.
    pub fn new(max_boost: f32, regen_rate: f32, allow_boost: bool, allow_drift: bool) -> Self {
        let max_boost = non_negative(max_boost);
        Self {
            boost: max_boost,
            max_boost,
            regen_rate: non_negative(regen_rate),
            allow_boost,
            allow_drift,
            drift: false,
        }
    }

    /// Advance regeneration by `dt` seconds.
    ///
    /// Regen only runs while `authority` is [`Authority::Player`] and boost
    /// is permitted. Negative or non-finite `dt` is ignored.
    pub fn tick(&mut self, dt: f32, authority: Authority) {
        if authority != Authority::Player || !self.allow_boost {
            return;
        }
        if !(dt.is_finite() && dt > 0.0) {
            return;
        }
        self.boost = (self.boost + dt * self.regen_rate).min(self.max_boost);
    }

    /// Burn `amount` of boost.
    ///
    /// Returns `false` and leaves the charge untouched when the request is
    /// denied.
    pub fn consume(&mut self, amount: f32) -> bool {
        match self.try_consume(amount) {
            Ok(()) => true,
            Err(err) => {
                debug!(error = %err, "boost request denied");
                false
            }
        }
    }

    /// Burn `amount` of boost, reporting why a request was denied.
    ///
    /// # Errors
    ///
    /// - [`ResourceError::Disabled`] if boost is not permitted
    /// - [`ResourceError::InvalidAmount`] for negative or non-finite amounts
    /// - [`ResourceError::Exhausted`] if `amount` exceeds the charge
    pub fn try_consume(&mut self, amount: f32) -> Result<(), ResourceError> {
        if !self.allow_boost {
            return Err(ResourceError::Disabled);
        }
        if !(amount.is_finite() && amount >= 0.0) {
            return Err(ResourceError::InvalidAmount(amount));
        }
        if amount > self.boost {
            return Err(ResourceError::exhausted(amount, self.boost));
        }
        self.boost = (self.boost - amount).max(0.0);
        Ok(())
    }

    /// Current charge.
    pub fn boost(&self) -> f32 {
        self.boost
    }

    /// Capacity.
    pub fn max_boost(&self) -> f32 {
        self.max_boost
    }

    /// Regen rate in charge per second.
    pub fn regen_rate(&self) -> f32 {
        self.regen_rate
    }

    /// Set the charge, clamped to `[0, max_boost]`. Non-finite values are ignored.
    pub fn set_boost(&mut self, boost: f32) {
        if boost.is_finite() {
            self.boost = boost.clamp(0.0, self.max_boost);
        }
    }

    /// Change capacity, re-clamping the current charge.
    pub fn set_max_boost(&mut self, max_boost: f32) {
        self.max_boost = non_negative(max_boost);
        self.boost = self.boost.min(self.max_boost);
    }

    /// Change the regen rate.
    pub fn set_regen_rate(&mut self, regen_rate: f32) {
        self.regen_rate = non_negative(regen_rate);
    }

    /// Fill the tank.
    pub fn refill(&mut self) {
        self.boost = self.max_boost;
    }

    /// Whether boost may regenerate or be burned at all.
    pub fn boost_allowed(&self) -> bool {
        self.allow_boost
    }

    /// Enable or disable the boost subsystem.
    pub fn set_allow_boost(&mut self, allow: bool) {
        self.allow_boost = allow;
    }

    /// Request drift. Ignored while drift is not permitted.
    pub fn set_drift(&mut self, enabled: bool) {
        self.drift = enabled && self.allow_drift;
    }

    /// Whether drift is permitted at all.
    pub fn drift_allowed(&self) -> bool {
        self.allow_drift
    }

    /// Whether drift is currently engaged.
    pub fn drift(&self) -> bool {
        self.drift
    }

    /// Enable or disable drift. Disabling also disengages it.
    pub fn set_allow_drift(&mut self, allow: bool) {
        self.allow_drift = allow;
        self.drift = self.drift && allow;
    }
}

fn non_negative(value: f32) -> f32 {
    if value.is_finite() { value.max(0.0) } else { 0.0 }
}
