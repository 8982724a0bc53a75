//! # Binding Smoke-Test Harness
//!
//! Verifies that the binding surface is loadable and semantically correct for
//! a representative sample of its enumerations and value objects.

pub mod binding_smoke_test;
pub mod builtin;
pub mod errors;
pub mod registry;
pub mod report;

use std::fmt;

pub use errors::{ensure, ensure_eq, AssertionFailure, SmokeError, SmokeResult};
pub use registry::SmokeRegistry;
pub use report::{SmokeReport, TestOutcome, TestStatus};

/// A named smoke test
#[derive(Clone, Copy)]
pub struct SmokeTest {
    pub name: &'static str,
    pub description: &'static str,
    pub run: fn() -> SmokeResult,
}

impl SmokeTest {
    pub fn new(name: &'static str, description: &'static str, run: fn() -> SmokeResult) -> Self {
        Self {
            name,
            description,
            run,
        }
    }
}

impl fmt::Debug for SmokeTest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SmokeTest")
            .field("name", &self.name)
            .field("description", &self.description)
            .finish()
    }
}
