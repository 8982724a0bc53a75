use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TestStatus {
    Passed,
    Failed,
    Skipped,
}

impl TestStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Passed => "passed",
            Self::Failed => "failed",
            Self::Skipped => "skipped",
        }
    }
}

impl fmt::Display for TestStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// Result of running (or skipping) one smoke test
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TestOutcome {
    pub name: String,
    pub status: TestStatus,
    pub message: Option<String>,
    pub duration_ms: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SmokeReport {
    pub outcomes: Vec<TestOutcome>,
}

impl SmokeReport {
    pub fn passed(&self) -> usize {
        self.count(TestStatus::Passed)
    }

    pub fn failed(&self) -> usize {
        self.count(TestStatus::Failed)
    }

    pub fn skipped(&self) -> usize {
        self.count(TestStatus::Skipped)
    }

    /// True when nothing failed
    pub fn is_success(&self) -> bool {
        self.failed() == 0
    }

    pub fn failures(&self) -> impl Iterator<Item = &TestOutcome> {
        self.outcomes
            .iter()
            .filter(|outcome| outcome.status == TestStatus::Failed)
    }

    fn count(&self, status: TestStatus) -> usize {
        self.outcomes
            .iter()
            .filter(|outcome| outcome.status == status)
            .count()
    }
}

impl fmt::Display for SmokeReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for outcome in &self.outcomes {
            write!(f, "{:<8} {}", outcome.status, outcome.name)?;
            if let Some(message) = &outcome.message {
                write!(f, " - {message}")?;
            }
            writeln!(f)?;
        }
        write!(
            f,
            "{} passed, {} failed, {} skipped",
            self.passed(),
            self.failed(),
            self.skipped()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn outcome(name: &str, status: TestStatus) -> TestOutcome {
        TestOutcome {
            name: name.to_string(),
            status,
            message: None,
            duration_ms: 0,
        }
    }

    #[test]
    fn test_counts() {
        let report = SmokeReport {
            outcomes: vec![
                outcome("a", TestStatus::Passed),
                outcome("b", TestStatus::Failed),
                outcome("c", TestStatus::Skipped),
                outcome("d", TestStatus::Passed),
            ],
        };
        assert_eq!(report.passed(), 2);
        assert_eq!(report.failed(), 1);
        assert_eq!(report.skipped(), 1);
        assert!(!report.is_success());
        assert_eq!(report.failures().next().map(|o| o.name.as_str()), Some("b"));
    }

    #[test]
    fn test_empty_report_is_success() {
        assert!(SmokeReport::default().is_success());
    }

    #[test]
    fn test_display_summary() {
        let report = SmokeReport {
            outcomes: vec![outcome("a", TestStatus::Passed)],
        };
        assert!(report
            .to_string()
            .ends_with("1 passed, 0 failed, 0 skipped"));
    }
}
