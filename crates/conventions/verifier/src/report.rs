//! Verification report generation.
//!
//! Produces structured reports of check results with box-drawing display
//! and per-predicate breakdowns.

use crate::layout::Layout;
use crate::types::{CheckResult, PredicateId, UnitName, VerificationSummary};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Per-predicate report.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PredicateReport {
    pub predicate: PredicateId,
    /// Results for every unit this predicate ran on.
    pub results: Vec<CheckResult>,
    pub passed: usize,
    pub failed: usize,
}

impl PredicateReport {
    /// Build from a filtered set of results.
    pub fn from_results(predicate: PredicateId, results: Vec<CheckResult>) -> Self {
        let passed = results.iter().filter(|r| r.passed).count();
        let failed = results.len() - passed;
        Self {
            predicate,
            results,
            passed,
            failed,
        }
    }

    pub fn all_passed(&self) -> bool {
        self.failed == 0
    }
}

impl fmt::Display for PredicateReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let icon = if self.all_passed() { "+" } else { "!" };
        writeln!(
            f,
            "  [{}] {} ({}/{})",
            icon,
            self.predicate,
            self.passed,
            self.results.len(),
        )?;
        for r in self.results.iter().filter(|r| !r.passed) {
            writeln!(f, "      [x] {}", r)?;
        }
        Ok(())
    }
}

/// A complete report for one verification run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VerificationReport {
    pub layout: Layout,
    /// Units the battery ran on.
    pub units: Vec<UnitName>,
    /// All individual results, in unit-then-predicate order.
    pub results: Vec<CheckResult>,
    pub predicates: Vec<PredicateReport>,
    pub summary: VerificationSummary,
}

impl VerificationReport {
    /// Create a report from a list of results.
    pub fn from_results(
        layout: Layout,
        units: Vec<UnitName>,
        results: Vec<CheckResult>,
        skipped: usize,
        started_at: DateTime<Utc>,
        completed_at: DateTime<Utc>,
    ) -> Self {
        let total = results.len();
        let passed = results.iter().filter(|r| r.passed).count();
        let failed = total - passed;

        let mut predicates = Vec::new();
        for predicate in layout.predicates() {
            let pred_results: Vec<CheckResult> = results
                .iter()
                .filter(|r| r.predicate == *predicate)
                .cloned()
                .collect();
            if !pred_results.is_empty() {
                predicates.push(PredicateReport::from_results(*predicate, pred_results));
            }
        }

        let summary = VerificationSummary {
            total,
            passed,
            failed,
            skipped,
            units: units.len(),
            started_at,
            completed_at,
        };

        Self {
            layout,
            units,
            results,
            predicates,
            summary,
        }
    }

    pub fn all_passed(&self) -> bool {
        self.summary.all_passed()
    }

    /// Get only failed results.
    pub fn failures(&self) -> Vec<&CheckResult> {
        self.results.iter().filter(|r| !r.passed).collect()
    }

    /// Failed results for one unit.
    pub fn failures_for(&self, unit: &str) -> Vec<&CheckResult> {
        self.results
            .iter()
            .filter(|r| !r.passed && r.unit.as_str() == unit)
            .collect()
    }

    /// Look up the result of one (predicate, unit) pair.
    pub fn result(&self, predicate: PredicateId, unit: &str) -> Option<&CheckResult> {
        self.results
            .iter()
            .find(|r| r.predicate == predicate && r.unit.as_str() == unit)
    }
}

impl fmt::Display for VerificationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "+-------------------------------------------------+")?;
        writeln!(f, "|   Convention Verification Report ({:<10})    |", self.layout)?;
        writeln!(f, "+-------------------------------------------------+")?;
        writeln!(
            f,
            "| Units: {:3}  Checks: {:4}  Failed: {:4}          |",
            self.summary.units, self.summary.total, self.summary.failed,
        )?;
        writeln!(f, "+-------------------------------------------------+")?;
        writeln!(f)?;

        for p in &self.predicates {
            write!(f, "{}", p)?;
        }

        writeln!(f)?;
        if self.all_passed() {
            writeln!(f, "  ALL CONVENTIONS HOLD FOR {} UNIT(S)", self.summary.units)?;
        } else {
            writeln!(f, "  {} CHECK(S) FAILED", self.summary.failed)?;
        }
        Ok(())
    }
}
