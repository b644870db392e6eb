//! Predicate definitions and check functions.
//!
//! Every predicate is a pure function of one unit name and the loaded
//! sources. Failures carry the file searched and the pattern expected.

use crate::error::VerifyResult;
use crate::layout::Layout;
use crate::sources::{loaded, SourceText, Sources};
use crate::types::{CheckResult, PredicateId, UnitName};
use std::path::Path;

/// Settings a predicate may consult besides the sources.
#[derive(Debug, Clone, Copy)]
pub struct CheckContext<'a> {
    pub layout: Layout,
    pub test_markers: &'a [String],
}

/// Dispatch: check one predicate against one unit.
///
/// `unit_source` is the unit's own file, as found by discovery. Returns an
/// error only when a file cannot be read.
pub fn check_predicate(
    predicate: PredicateId,
    unit: &UnitName,
    unit_source: &Path,
    sources: &Sources,
    ctx: CheckContext<'_>,
) -> VerifyResult<CheckResult> {
    let result = match predicate {
        PredicateId::NameIsValid => check_name_is_valid(unit),
        PredicateId::DocumentedInIndex => {
            check_documented_in_index(unit, loaded(&sources.index_doc, "index document")?)
        }
        PredicateId::HasStringShortcut => check_has_string_shortcut(
            unit,
            loaded(&sources.string_wrapper, "string wrapper")?,
        ),
        PredicateId::StringShortcutDelegates => check_string_shortcut_delegates(
            unit,
            loaded(&sources.string_wrapper, "string wrapper")?,
        ),
        PredicateId::HasNormalizedShortcut => check_has_normalized_shortcut(
            unit,
            loaded(&sources.normalized_wrapper, "normalized wrapper")?,
        ),
        PredicateId::IsExported => check_is_exported(
            unit,
            loaded(&sources.aggregation, "aggregation file")?,
            ctx.layout,
        ),
        PredicateId::IsSmokeTested => {
            check_is_smoke_tested(unit, loaded(&sources.aggregation, "aggregation file")?)
        }
        PredicateId::HasUnitTests => {
            check_has_unit_tests(unit, &SourceText::read(unit_source)?, ctx.test_markers)
        }
    };
    Ok(result)
}

/// Whether a name is non-empty and consists of ASCII `[A-Za-z0-9_]` only.
pub fn is_valid_name(name: &str) -> bool {
    !name.is_empty() && name.bytes().all(|b| b.is_ascii_alphanumeric() || b == b'_')
}

fn check_name_is_valid(unit: &UnitName) -> CheckResult {
    if is_valid_name(unit.as_str()) {
        CheckResult::pass(PredicateId::NameIsValid, unit)
    } else {
        CheckResult::fail(
            PredicateId::NameIsValid,
            unit,
            format!("name {:?} is not ASCII alphanumeric/underscore", unit.as_str()),
        )
    }
}

fn check_documented_in_index(unit: &UnitName, index: &SourceText) -> CheckResult {
    let entry = format!("1. `{}`", unit.folded());
    if index.folded.contains(&entry) {
        CheckResult::pass(PredicateId::DocumentedInIndex, unit)
    } else {
        CheckResult::fail(
            PredicateId::DocumentedInIndex,
            unit,
            missing(index, &entry),
        )
    }
}

fn shortcut_decl(unit: &UnitName) -> String {
    format!("fn {}(", unit)
}

fn check_has_string_shortcut(unit: &UnitName, wrapper: &SourceText) -> CheckResult {
    let decl = shortcut_decl(unit);
    if wrapper.contains(&decl) {
        CheckResult::pass(PredicateId::HasStringShortcut, unit)
    } else {
        CheckResult::fail(PredicateId::HasStringShortcut, unit, missing(wrapper, &decl))
    }
}

fn check_string_shortcut_delegates(unit: &UnitName, wrapper: &SourceText) -> CheckResult {
    let folded = unit.folded();
    let call = format!("{}::default().for_str(s1, s2).", folded);
    let doc = format!("/// a wrapper for [{}].\n", folded);

    let mut absent = Vec::new();
    if !wrapper.contains_compact(&call) {
        absent.push(call);
    }
    if !wrapper.folded.contains(&doc) {
        absent.push(doc.trim_end().to_string());
    }

    if absent.is_empty() {
        CheckResult::pass(PredicateId::StringShortcutDelegates, unit)
    } else {
        CheckResult::fail(
            PredicateId::StringShortcutDelegates,
            unit,
            missing(wrapper, &absent.join("` and `")),
        )
    }
}

fn check_has_normalized_shortcut(unit: &UnitName, wrapper: &SourceText) -> CheckResult {
    let decl = shortcut_decl(unit);
    let call = format!("{}::default().for_str(s1, s2).nval()", unit.folded());

    let mut absent = Vec::new();
    if !wrapper.contains(&decl) {
        absent.push(decl);
    }
    if !wrapper.contains_compact(&call) {
        absent.push(call);
    }

    if absent.is_empty() {
        CheckResult::pass(PredicateId::HasNormalizedShortcut, unit)
    } else {
        CheckResult::fail(
            PredicateId::HasNormalizedShortcut,
            unit,
            missing(wrapper, &absent.join("` and `")),
        )
    }
}

fn check_is_exported(unit: &UnitName, aggregation: &SourceText, layout: Layout) -> CheckResult {
    let absent: Vec<String> = layout
        .export_patterns(unit)
        .into_iter()
        .filter(|p| !aggregation.contains(p))
        .collect();

    if absent.is_empty() {
        CheckResult::pass(PredicateId::IsExported, unit)
    } else {
        CheckResult::fail(
            PredicateId::IsExported,
            unit,
            missing(aggregation, &absent.join("` and `")),
        )
    }
}

fn check_is_smoke_tested(unit: &UnitName, aggregation: &SourceText) -> CheckResult {
    let case = format!("#[case::{}(", unit);
    if aggregation.contains(&case) {
        CheckResult::pass(PredicateId::IsSmokeTested, unit)
    } else {
        CheckResult::fail(PredicateId::IsSmokeTested, unit, missing(aggregation, &case))
    }
}

fn check_has_unit_tests(unit: &UnitName, source: &SourceText, markers: &[String]) -> CheckResult {
    if markers.iter().any(|m| source.contains(m)) {
        CheckResult::pass(PredicateId::HasUnitTests, unit)
    } else {
        CheckResult::fail(
            PredicateId::HasUnitTests,
            unit,
            format!(
                "{} has none of the test markers `{}`",
                source.path.display(),
                markers.join("`, `")
            ),
        )
    }
}

fn missing(source: &SourceText, pattern: &str) -> String {
    format!("{} lacks `{}`", source.path.display(), pattern)
}
