//! Verification runner.
//!
//! Discovers units, loads the reference sources once, and runs every
//! selected predicate on every selected unit. No failure stops the battery.

use crate::config::VerifierConfig;
use crate::discovery::{discover, Discovery};
use crate::error::{VerifyError, VerifyResult};
use crate::layout::Layout;
use crate::predicates::{check_predicate, CheckContext};
use crate::report::VerificationReport;
use crate::sources::Sources;
use crate::types::{PredicateId, UnitName};
use chrono::Utc;
use std::path::PathBuf;

/// Runs the convention battery against one repository.
pub struct Verifier {
    config: VerifierConfig,
}

impl Verifier {
    /// Create a verifier with the layout's defaults.
    pub fn new(root: impl Into<PathBuf>, layout: Layout) -> Self {
        Self {
            config: VerifierConfig::new(root, layout),
        }
    }

    pub fn with_config(config: VerifierConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &VerifierConfig {
        &self.config
    }

    /// Discover units without running any check.
    pub fn discover(&self) -> VerifyResult<Discovery> {
        let paths = self.config.resolved_paths();
        discover(&paths.units_dir, &self.config.skip_set())
    }

    /// Run the configured battery (or filtered subset) and produce a report.
    pub fn run_all(&self) -> VerifyResult<VerificationReport> {
        let predicates = self.config.active_predicates()?;
        self.run(&predicates, &self.config.units)
    }

    /// Run one predicate against every unit.
    pub fn run_predicate(&self, predicate: PredicateId) -> VerifyResult<VerificationReport> {
        if !self.config.layout.runs(predicate) {
            return Err(VerifyError::InvalidConfiguration(format!(
                "predicate {} is not part of the {} layout",
                predicate, self.config.layout
            )));
        }
        self.run(&[predicate], &self.config.units)
    }

    /// Run the battery against one unit.
    pub fn run_unit(&self, unit: &str) -> VerifyResult<VerificationReport> {
        let predicates = self.config.active_predicates()?;
        self.run(&predicates, &[UnitName::new(unit)])
    }

    fn run(
        &self,
        predicates: &[PredicateId],
        unit_filter: &[UnitName],
    ) -> VerifyResult<VerificationReport> {
        let started_at = Utc::now();
        let layout = self.config.layout;
        let paths = self.config.resolved_paths();
        let discovery = discover(&paths.units_dir, &self.config.skip_set())?;
        let units = select_units(&discovery, unit_filter)?;

        tracing::info!(
            layout = %layout,
            root = %self.config.root.display(),
            units = units.len(),
            predicates = predicates.len(),
            "starting verification"
        );

        let sources = Sources::load(&paths, predicates)?;
        let ctx = CheckContext {
            layout,
            test_markers: &self.config.test_markers,
        };

        let mut results = Vec::with_capacity(units.len() * predicates.len());
        for (unit, unit_source) in &units {
            for predicate in predicates {
                let result = check_predicate(*predicate, unit, unit_source, &sources, ctx)?;
                tracing::debug!(
                    predicate = %predicate,
                    unit = %unit,
                    passed = result.passed,
                    details = result.details.as_deref().unwrap_or(""),
                    "check finished"
                );
                results.push(result);
            }
        }

        let possible = discovery.len() * layout.predicates().len();
        let skipped = possible - results.len();
        let completed_at = Utc::now();
        let report = VerificationReport::from_results(
            layout,
            units.into_iter().map(|(unit, _)| unit).collect(),
            results,
            skipped,
            started_at,
            completed_at,
        );
        if report.all_passed() {
            tracing::info!(summary = %report.summary, "verification finished");
        } else {
            tracing::warn!(
                failed = report.summary.failed,
                summary = %report.summary,
                "verification finished with failures"
            );
        }
        Ok(report)
    }
}

/// Units to check with their source files: every discovered unit, or the
/// filtered subset.
fn select_units(
    discovery: &Discovery,
    filter: &[UnitName],
) -> VerifyResult<Vec<(UnitName, PathBuf)>> {
    for unit in filter {
        if !discovery.contains(unit) {
            return Err(VerifyError::InvalidConfiguration(format!(
                "unknown unit: {} (not discovered in {})",
                unit,
                discovery.dir.display()
            )));
        }
    }
    Ok(discovery
        .units
        .iter()
        .filter(|(u, _)| filter.is_empty() || filter.contains(u))
        .map(|(u, path)| (u.clone(), path.clone()))
        .collect())
}
