//! Convenience re-exports for common test utilities.
//!
//! ```rust,ignore
//! use arcade_test_helpers::prelude::*;
//! ```

pub use crate::must::{must, must_err, must_some, must_with};

#[cfg(feature = "mock")]
pub use crate::mock::{RecordingBody, ScriptedInput, WheelChannel, WheelWrite};

pub use crate::{assert_approx_eq, assert_in_range};

pub type TestResult = Result<(), Box<dyn std::error::Error>>;
