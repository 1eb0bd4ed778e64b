//! Shared test utilities for the arcade vehicle workspace.
//!
//! # Modules
//!
//! - [`mod@must`] - Unwrap helpers with good error messages and `#[track_caller]`
//! - [`assertions`] - Float assertion macros
//! - [`mock`] - Recording physics body and scripted input source
//! - [`prelude`] - Convenience re-exports
//!
//! # Usage
//!
//! ```toml
//! [dev-dependencies]
//! arcade-test-helpers = { workspace = true }
//! ```
//!
//! ```rust,ignore
//! use arcade_test_helpers::prelude::*;
//! ```

#![deny(unsafe_op_in_unsafe_fn)]
#![allow(clippy::unwrap_used, clippy::panic)]

pub mod assertions;
pub mod must;
pub mod prelude;

#[cfg(feature = "mock")]
pub mod mock;

pub use must::*;

#[cfg(feature = "mock")]
pub use mock::{RecordingBody, ScriptedInput, WheelChannel, WheelWrite};
