//! Countdown lockout: who holds control authority.
//!
//! ```text
//!   activate(Scripted) ──► Scripted ──release()──► Player
//!   activate(Player)   ─────────────────────────► Player
//! ```
//!
//! There is no in-session way back from `Player`; only a restart can
//! re-enter `Scripted`.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Control authority over the vehicle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Authority {
    /// Countdown in progress: input ignored, fixed forward velocity applied.
    Scripted,
    /// Full driver input authority.
    Player,
}

impl fmt::Display for Authority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Scripted => write!(f, "scripted"),
            Self::Player => write!(f, "player"),
        }
    }
}

/// The lockout state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Lockout {
    authority: Authority,
}

impl Lockout {
    /// Start in the given authority.
    pub fn new(start: Authority) -> Self {
        Self { authority: start }
    }

    /// Current authority.
    pub fn authority(&self) -> Authority {
        self.authority
    }

    /// Whether the scripted countdown profile is in control.
    pub fn is_locked(&self) -> bool {
        self.authority == Authority::Scripted
    }

    /// Hand control to the player.
    ///
    /// Returns `true` if this call performed the `Scripted -> Player`
    /// transition, `false` if the player already had control.
    pub fn release(&mut self) -> bool {
        let changed = self.is_locked();
        self.authority = Authority::Player;
        changed
    }

    /// Re-enter an authority as part of a full restart.
    pub(crate) fn restart(&mut self, start: Authority) {
        self.authority = start;
    }
}

impl Default for Lockout {
    fn default() -> Self {
        Self::new(Authority::Scripted)
    }
}
