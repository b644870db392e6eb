//! Core types for convention verification.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Name of one algorithm unit, taken from a directory entry's stem.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UnitName(pub String);

impl UnitName {
    pub fn new(name: &str) -> Self {
        Self(name.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The name with underscores removed and case folded, as it appears
    /// in type names (`jaro_winkler` -> `jarowinkler` for `JaroWinkler`).
    pub fn folded(&self) -> String {
        self.0.replace('_', "").to_lowercase()
    }
}

impl fmt::Display for UnitName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&self.0)
    }
}

impl From<&str> for UnitName {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

/// One structural check in the battery.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PredicateId {
    /// Unit name is non-empty ASCII `[A-Za-z0-9_]`.
    NameIsValid,
    /// Index document lists the unit as a numbered inline-code entry.
    DocumentedInIndex,
    /// String wrapper declares `fn <unit>(`.
    HasStringShortcut,
    /// String wrapper delegates to the default-constructed type and carries
    /// the fixed wrapper doc line.
    StringShortcutDelegates,
    /// Normalized wrapper declares `fn <unit>(` and calls `.nval()`.
    HasNormalizedShortcut,
    /// Aggregation file declares and re-exports the unit module.
    IsExported,
    /// Aggregation file has a `#[case::<unit>(` smoke-test entry.
    IsSmokeTested,
    /// The unit's own source file defines tests.
    HasUnitTests,
}

impl PredicateId {
    /// All predicates in canonical order.
    pub fn all() -> &'static [PredicateId] {
        &[
            Self::NameIsValid,
            Self::DocumentedInIndex,
            Self::HasStringShortcut,
            Self::StringShortcutDelegates,
            Self::HasNormalizedShortcut,
            Self::IsExported,
            Self::IsSmokeTested,
            Self::HasUnitTests,
        ]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::NameIsValid => "name-is-valid",
            Self::DocumentedInIndex => "documented-in-index",
            Self::HasStringShortcut => "has-string-shortcut",
            Self::StringShortcutDelegates => "string-shortcut-delegates",
            Self::HasNormalizedShortcut => "has-normalized-shortcut",
            Self::IsExported => "is-exported",
            Self::IsSmokeTested => "is-smoke-tested",
            Self::HasUnitTests => "has-unit-tests",
        }
    }

    /// Human-readable description of what the predicate checks.
    pub fn description(&self) -> &'static str {
        match self {
            Self::NameIsValid => "unit name is ASCII alphanumeric or underscore",
            Self::DocumentedInIndex => "unit is listed in the index document",
            Self::HasStringShortcut => "string wrapper function exists",
            Self::StringShortcutDelegates => "string wrapper delegates to the default type",
            Self::HasNormalizedShortcut => "normalized wrapper function exists",
            Self::IsExported => "unit module is declared and re-exported",
            Self::IsSmokeTested => "unit has a smoke-test case",
            Self::HasUnitTests => "unit source file defines tests",
        }
    }
}

impl fmt::Display for PredicateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for PredicateId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::all()
            .iter()
            .copied()
            .find(|p| p.as_str() == s)
            .ok_or_else(|| format!("unknown predicate: {}", s))
    }
}

/// Result of checking one predicate against one unit.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckResult {
    pub predicate: PredicateId,
    pub unit: UnitName,
    /// Whether the convention holds.
    pub passed: bool,
    /// Where the check looked and what it expected, when it failed.
    pub details: Option<String>,
    pub checked_at: DateTime<Utc>,
}

impl CheckResult {
    pub fn pass(predicate: PredicateId, unit: &UnitName) -> Self {
        Self {
            predicate,
            unit: unit.clone(),
            passed: true,
            details: None,
            checked_at: Utc::now(),
        }
    }

    pub fn fail(predicate: PredicateId, unit: &UnitName, details: impl Into<String>) -> Self {
        Self {
            predicate,
            unit: unit.clone(),
            passed: false,
            details: Some(details.into()),
            checked_at: Utc::now(),
        }
    }

    /// The outcome without its timestamp, for comparing runs.
    pub fn outcome(&self) -> (PredicateId, &str, bool, Option<&str>) {
        (
            self.predicate,
            self.unit.as_str(),
            self.passed,
            self.details.as_deref(),
        )
    }
}

impl fmt::Display for CheckResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let status = if self.passed { "PASS" } else { "FAIL" };
        write!(f, "[{}] {}/{}", status, self.predicate, self.unit)?;
        if let Some(ref details) = self.details {
            write!(f, ": {}", details)?;
        }
        Ok(())
    }
}

/// Summary statistics from a verification run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VerificationSummary {
    /// Checks that ran.
    pub total: usize,
    pub passed: usize,
    pub failed: usize,
    /// (predicate, unit) pairs removed by a filter.
    pub skipped: usize,
    /// Units discovered after skip-set exclusion.
    pub units: usize,
    pub started_at: DateTime<Utc>,
    pub completed_at: DateTime<Utc>,
}

impl VerificationSummary {
    pub fn all_passed(&self) -> bool {
        self.failed == 0
    }

    /// Pass rate as a percentage.
    pub fn pass_rate(&self) -> f64 {
        if self.total == 0 {
            return 100.0;
        }
        (self.passed as f64 / self.total as f64) * 100.0
    }
}

impl fmt::Display for VerificationSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}/{} passed ({:.1}%), {} failed, {} skipped",
            self.passed,
            self.total,
            self.pass_rate(),
            self.failed,
            self.skipped,
        )
    }
}
