//! # Smoke Test Registry
//!
//! An explicit, ordered table of named smoke tests. Nothing registers itself;
//! callers build the table and run it.
//!
//! ## Usage
//!
//! ```rust
//! use dimension_core::config::HarnessConfig;
//! use dimension_core::harness::SmokeRegistry;
//!
//! let registry = SmokeRegistry::builtin();
//! let report = registry.run(&HarnessConfig::default());
//! assert!(report.is_success());
//! ```

use super::errors::SmokeError;
use super::report::{SmokeReport, TestOutcome, TestStatus};
use super::SmokeTest;
use crate::config::HarnessConfig;
use crate::error::{Result, SchemaError};
use crate::logging::log_smoke_outcome;
use std::any::Any;
use std::panic;
use std::time::Instant;
use tracing::{debug, info};

#[derive(Debug, Default)]
pub struct SmokeRegistry {
    tests: Vec<SmokeTest>,
}

impl SmokeRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry holding the built-in binding tests
    pub fn builtin() -> Self {
        Self {
            tests: super::builtin::tests(),
        }
    }

    /// Append a test. Names must be unique.
    pub fn register(&mut self, test: SmokeTest) -> Result<()> {
        if self.tests.iter().any(|existing| existing.name == test.name) {
            return Err(SchemaError::DuplicateTest(test.name.to_string()));
        }
        debug!(test = test.name, "Registered smoke test");
        self.tests.push(test);
        Ok(())
    }

    pub fn tests(&self) -> &[SmokeTest] {
        &self.tests
    }

    pub fn len(&self) -> usize {
        self.tests.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tests.is_empty()
    }

    /// Run the selected tests in registration order
    pub fn run(&self, config: &HarnessConfig) -> SmokeReport {
        info!(tests = self.tests.len(), fail_fast = config.fail_fast, "Running smoke tests");

        let mut report = SmokeReport::default();
        let mut stopped = false;

        for test in &self.tests {
            if stopped || !config.selects(test.name) {
                report.outcomes.push(TestOutcome {
                    name: test.name.to_string(),
                    status: TestStatus::Skipped,
                    message: None,
                    duration_ms: 0,
                });
                continue;
            }

            let outcome = run_one(test);
            log_smoke_outcome(
                &outcome.name,
                outcome.status.as_str(),
                outcome.duration_ms,
                outcome.message.as_deref(),
            );

            if outcome.status == TestStatus::Failed && config.fail_fast {
                stopped = true;
            }
            report.outcomes.push(outcome);
        }

        info!(
            passed = report.passed(),
            failed = report.failed(),
            skipped = report.skipped(),
            "Smoke tests finished"
        );
        report
    }
}

fn run_one(test: &SmokeTest) -> TestOutcome {
    let started = Instant::now();
    let result = panic::catch_unwind(test.run)
        .unwrap_or_else(|payload| Err(SmokeError::Panicked(panic_message(payload))));
    let duration_ms = started.elapsed().as_millis() as u64;

    let (status, message) = match result {
        Ok(()) => (TestStatus::Passed, None),
        Err(e) => (TestStatus::Failed, Some(e.to_string())),
    };

    TestOutcome {
        name: test.name.to_string(),
        status,
        message,
        duration_ms,
    }
}

fn panic_message(payload: Box<dyn Any + Send>) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        message.to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "non-string panic payload".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::harness::errors::{ensure_eq, SmokeResult};

    fn passes() -> SmokeResult {
        Ok(())
    }

    fn fails() -> SmokeResult {
        ensure_eq("fails", "Double", "Float")?;
        Ok(())
    }

    fn panics() -> SmokeResult {
        panic!("binding exploded")
    }

    fn registry(tests: &[(&'static str, fn() -> SmokeResult)]) -> SmokeRegistry {
        let mut registry = SmokeRegistry::new();
        for (name, run) in tests {
            registry
                .register(SmokeTest::new(*name, "test", *run))
                .unwrap();
        }
        registry
    }

    #[test]
    fn test_duplicate_name_rejected() {
        let mut registry = registry(&[("one", passes)]);
        assert_eq!(
            registry.register(SmokeTest::new("one", "again", passes)),
            Err(SchemaError::DuplicateTest("one".to_string()))
        );
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_runs_in_registration_order() {
        let report = registry(&[("first", passes), ("second", fails), ("third", passes)])
            .run(&HarnessConfig::default());

        let names: Vec<&str> = report.outcomes.iter().map(|o| o.name.as_str()).collect();
        assert_eq!(names, ["first", "second", "third"]);
        assert_eq!(report.passed(), 2);
        assert_eq!(report.failed(), 1);
    }

    #[test]
    fn test_failure_message_carries_literals() {
        let report = registry(&[("second", fails)]).run(&HarnessConfig::default());
        let message = report.outcomes[0].message.as_deref().unwrap();
        assert_eq!(message, "fails: expected \"Double\", got \"Float\"");
    }

    #[test]
    fn test_fail_fast_skips_remaining() {
        let config = HarnessConfig {
            fail_fast: true,
            ..Default::default()
        };
        let report = registry(&[("a", fails), ("b", passes)]).run(&config);
        assert_eq!(report.outcomes[0].status, TestStatus::Failed);
        assert_eq!(report.outcomes[1].status, TestStatus::Skipped);
    }

    #[test]
    fn test_filter_skips_unselected() {
        let config = HarnessConfig {
            filter: Some("keep".to_string()),
            ..Default::default()
        };
        let report = registry(&[("keep_me", passes), ("drop_me", fails)]).run(&config);
        assert_eq!(report.passed(), 1);
        assert_eq!(report.skipped(), 1);
        assert!(report.is_success());
    }

    #[test]
    fn test_panic_becomes_failure() {
        let report = registry(&[("boom", panics), ("after", passes)])
            .run(&HarnessConfig::default());
        assert_eq!(report.outcomes[0].status, TestStatus::Failed);
        assert!(report.outcomes[0]
            .message
            .as_deref()
            .unwrap()
            .contains("binding exploded"));
        assert_eq!(report.outcomes[1].status, TestStatus::Passed);
    }

    #[test]
    fn test_builtin_registry_passes() {
        let registry = SmokeRegistry::builtin();
        assert!(!registry.is_empty());
        let report = registry.run(&HarnessConfig::default());
        assert!(report.is_success(), "{report}");
        assert_eq!(report.passed(), registry.len());
    }
}
