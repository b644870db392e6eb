//! Snapshot of the reference files a battery searches.

use crate::config::ResolvedPaths;
use crate::error::{VerifyError, VerifyResult};
use crate::types::PredicateId;
use std::path::{Path, PathBuf};

/// One reference file held in memory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceText {
    pub path: PathBuf,
    pub text: String,
    /// Lower-cased text.
    pub folded: String,
    /// Lower-cased text with all whitespace removed.
    pub compact: String,
}

impl SourceText {
    /// Line endings are normalized to `\n` before any search.
    pub fn new(path: impl Into<PathBuf>, text: String) -> Self {
        let text = if text.contains('\r') {
            text.replace("\r\n", "\n").replace('\r', "\n")
        } else {
            text
        };
        let folded = text.to_lowercase();
        let compact = strip_whitespace(&folded);
        Self {
            path: path.into(),
            text,
            folded,
            compact,
        }
    }

    pub fn read(path: &Path) -> VerifyResult<Self> {
        let text = std::fs::read_to_string(path).map_err(|e| VerifyError::setup(path, &e))?;
        tracing::debug!(path = %path.display(), bytes = text.len(), "loaded source");
        Ok(Self::new(path, text))
    }

    pub fn contains(&self, needle: &str) -> bool {
        self.text.contains(needle)
    }

    /// Whether the whitespace-free, lower-cased text contains `pattern`
    /// once its own whitespace is removed.
    pub fn contains_compact(&self, pattern: &str) -> bool {
        self.compact.contains(&strip_whitespace(&pattern.to_lowercase()))
    }
}

/// Remove every whitespace character.
pub fn strip_whitespace(s: &str) -> String {
    s.chars().filter(|c| !c.is_whitespace()).collect()
}

/// Shared reference files, each read once per run.
///
/// Only the files some active predicate needs are loaded; the rest stay
/// `None`. Per-unit source files are read by the predicate that needs them.
#[derive(Debug, Clone)]
pub struct Sources {
    pub aggregation: Option<SourceText>,
    pub string_wrapper: Option<SourceText>,
    pub normalized_wrapper: Option<SourceText>,
    pub index_doc: Option<SourceText>,
}

impl Sources {
    /// Load what `predicates` need from `paths`.
    pub fn load(paths: &ResolvedPaths, predicates: &[PredicateId]) -> VerifyResult<Self> {
        let needs = |ps: &[PredicateId]| ps.iter().any(|p| predicates.contains(p));

        let aggregation = if needs(&[PredicateId::IsExported, PredicateId::IsSmokeTested]) {
            Some(SourceText::read(&paths.aggregation)?)
        } else {
            None
        };
        let string_wrapper = if needs(&[
            PredicateId::HasStringShortcut,
            PredicateId::StringShortcutDelegates,
        ]) {
            Some(SourceText::read(&paths.string_wrapper)?)
        } else {
            None
        };
        let normalized_wrapper = if needs(&[PredicateId::HasNormalizedShortcut]) {
            Some(read_required(
                paths.normalized_wrapper.as_deref(),
                "normalized wrapper",
            )?)
        } else {
            None
        };
        let index_doc = if needs(&[PredicateId::DocumentedInIndex]) {
            Some(read_required(paths.index_doc.as_deref(), "index document")?)
        } else {
            None
        };

        Ok(Self {
            aggregation,
            string_wrapper,
            normalized_wrapper,
            index_doc,
        })
    }
}

fn read_required(path: Option<&Path>, what: &str) -> VerifyResult<SourceText> {
    match path {
        Some(p) => SourceText::read(p),
        None => Err(VerifyError::InvalidConfiguration(format!(
            "no {} path configured",
            what
        ))),
    }
}

/// Accessor used by predicates for a file they were promised.
pub(crate) fn loaded<'a>(source: &'a Option<SourceText>, what: &str) -> VerifyResult<&'a SourceText> {
    source
        .as_ref()
        .ok_or_else(|| VerifyError::InvalidConfiguration(format!("{} was not loaded", what)))
}
