//! Verifier configuration.
//!
//! Read from `conventions.toml` at the inspected repository root, or from an
//! explicit path. Any field left out takes the active layout's default.

use crate::error::{VerifyError, VerifyResult};
use crate::layout::Layout;
use crate::types::{PredicateId, UnitName};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

/// Default configuration file name, looked up in the repository root.
pub const CONFIG_FILE_NAME: &str = "conventions.toml";

/// Marker proving a unit's source file defines test cases.
pub const DEFAULT_TEST_MARKER: &str = "#[rstest]";

/// Per-file path overrides, relative to the repository root.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PathOverrides {
    pub units_dir: Option<PathBuf>,
    pub aggregation: Option<PathBuf>,
    pub string_wrapper: Option<PathBuf>,
    pub normalized_wrapper: Option<PathBuf>,
    pub index_doc: Option<PathBuf>,
}

/// Absolute locations of every file a layout inspects.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedPaths {
    pub units_dir: PathBuf,
    pub aggregation: PathBuf,
    pub string_wrapper: PathBuf,
    pub normalized_wrapper: Option<PathBuf>,
    pub index_doc: Option<PathBuf>,
}

/// Configuration for a verification run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct VerifierConfig {
    /// Repository being inspected.
    #[serde(skip)]
    pub root: PathBuf,
    pub layout: Layout,
    /// Overrides the layout's default skip set when present.
    pub skip: Option<Vec<String>>,
    /// Filter to specific predicates (empty = the whole battery).
    pub predicates: Vec<PredicateId>,
    /// Filter to specific units (empty = every discovered unit).
    pub units: Vec<UnitName>,
    pub test_markers: Vec<String>,
    pub paths: PathOverrides,
}

impl Default for VerifierConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            layout: Layout::default(),
            skip: None,
            predicates: Vec::new(),
            units: Vec::new(),
            test_markers: vec![DEFAULT_TEST_MARKER.to_string()],
            paths: PathOverrides::default(),
        }
    }
}

impl VerifierConfig {
    /// Defaults for a layout, rooted at `root`.
    pub fn new(root: impl Into<PathBuf>, layout: Layout) -> Self {
        Self {
            root: root.into(),
            layout,
            ..Default::default()
        }
    }

    /// Load configuration for the repository at `root`.
    ///
    /// An explicit `path` must exist. Without one, `conventions.toml` in
    /// `root` is used when present and defaults otherwise.
    pub fn load(path: Option<&Path>, root: &Path) -> VerifyResult<Self> {
        let config_path = match path {
            Some(p) => p.to_path_buf(),
            None => {
                let default_path = root.join(CONFIG_FILE_NAME);
                if !default_path.exists() {
                    tracing::debug!(root = %root.display(), "no config file, using defaults");
                    return Ok(Self {
                        root: root.to_path_buf(),
                        ..Default::default()
                    });
                }
                default_path
            }
        };

        let contents = std::fs::read_to_string(&config_path)
            .map_err(|e| VerifyError::setup(&config_path, &e))?;
        let mut config = Self::from_toml(&contents)?;
        config.root = root.to_path_buf();
        tracing::debug!(path = %config_path.display(), layout = %config.layout, "loaded config");
        Ok(config)
    }

    /// Parse configuration from TOML text. `root` is left at its default.
    pub fn from_toml(contents: &str) -> VerifyResult<Self> {
        toml::from_str(contents).map_err(|e| VerifyError::Config(e.to_string()))
    }

    /// Render the configuration as TOML.
    pub fn to_toml(&self) -> VerifyResult<String> {
        toml::to_string_pretty(self).map_err(|e| VerifyError::Config(e.to_string()))
    }

    /// Effective skip set.
    pub fn skip_set(&self) -> BTreeSet<String> {
        match &self.skip {
            Some(names) => names.iter().cloned().collect(),
            None => self
                .layout
                .default_skip()
                .iter()
                .map(|s| s.to_string())
                .collect(),
        }
    }

    /// Paths of every inspected file, joined onto the root.
    pub fn resolved_paths(&self) -> ResolvedPaths {
        let layout = self.layout;
        let join = |over: &Option<PathBuf>, default: &str| {
            self.root.join(over.as_deref().unwrap_or_else(|| Path::new(default)))
        };
        let join_opt = |over: &Option<PathBuf>, default: Option<&str>| match (over, default) {
            (Some(p), _) => Some(self.root.join(p)),
            (None, Some(d)) => Some(self.root.join(d)),
            (None, None) => None,
        };

        ResolvedPaths {
            units_dir: join(&self.paths.units_dir, layout.units_dir()),
            aggregation: join(&self.paths.aggregation, layout.aggregation()),
            string_wrapper: join(&self.paths.string_wrapper, layout.string_wrapper()),
            normalized_wrapper: join_opt(&self.paths.normalized_wrapper, layout.normalized_wrapper()),
            index_doc: join_opt(&self.paths.index_doc, layout.index_doc()),
        }
    }

    /// Predicates to run: the layout's battery narrowed by the filter.
    pub fn active_predicates(&self) -> VerifyResult<Vec<PredicateId>> {
        if self.predicates.is_empty() {
            return Ok(self.layout.predicates().to_vec());
        }
        for p in &self.predicates {
            if !self.layout.runs(*p) {
                return Err(VerifyError::InvalidConfiguration(format!(
                    "predicate {} is not part of the {} layout",
                    p, self.layout
                )));
            }
        }
        Ok(self
            .layout
            .predicates()
            .iter()
            .copied()
            .filter(|p| self.predicates.contains(p))
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let cfg = VerifierConfig::default();
        assert_eq!(cfg.layout, Layout::Namespaced);
        assert!(cfg.skip.is_none());
        assert!(cfg.predicates.is_empty());
        assert_eq!(cfg.test_markers, vec!["#[rstest]".to_string()]);
    }

    #[test]
    fn test_skip_set_follows_layout() {
        let flat = VerifierConfig::new(".", Layout::Flat);
        assert!(flat.skip_set().contains("str"));
        let ns = VerifierConfig::new(".", Layout::Namespaced);
        assert!(!ns.skip_set().contains("str"));
        assert!(ns.skip_set().contains("counter"));
    }

    #[test]
    fn test_explicit_skip_replaces_default() {
        let cfg = VerifierConfig {
            skip: Some(vec!["helpers".into()]),
            ..VerifierConfig::new(".", Layout::Flat)
        };
        let skip = cfg.skip_set();
        assert_eq!(skip.len(), 1);
        assert!(skip.contains("helpers"));
    }

    #[test]
    fn test_from_toml() {
        let cfg = VerifierConfig::from_toml(
            r#"
layout = "flat"
predicates = ["is-exported"]
units = ["jaccard"]

[paths]
aggregation = "src/main.rs"
"#,
        )
        .unwrap();
        assert_eq!(cfg.layout, Layout::Flat);
        assert_eq!(cfg.predicates, vec![PredicateId::IsExported]);
        assert_eq!(cfg.units, vec![UnitName::new("jaccard")]);
        assert_eq!(cfg.paths.aggregation, Some(PathBuf::from("src/main.rs")));
        assert_eq!(cfg.test_markers, vec!["#[rstest]".to_string()]);
    }

    #[test]
    fn test_from_toml_rejects_unknown_keys() {
        let err = VerifierConfig::from_toml("layuot = \"flat\"").unwrap_err();
        assert!(matches!(err, VerifyError::Config(_)));
    }

    #[test]
    fn test_toml_round_trip() {
        let cfg = VerifierConfig {
            skip: Some(vec!["algorithm".into()]),
            ..VerifierConfig::default()
        };
        let text = cfg.to_toml().unwrap();
        let back = VerifierConfig::from_toml(&text).unwrap();
        assert_eq!(back.skip, cfg.skip);
        assert_eq!(back.layout, cfg.layout);
    }

    #[test]
    fn test_resolved_paths_flat() {
        let paths = VerifierConfig::new("/repo", Layout::Flat).resolved_paths();
        assert_eq!(paths.units_dir, PathBuf::from("/repo/src/textdistance"));
        assert_eq!(paths.string_wrapper, PathBuf::from("/repo/src/textdistance/str.rs"));
        assert!(paths.normalized_wrapper.is_none());
        assert!(paths.index_doc.is_none());
    }

    #[test]
    fn test_resolved_paths_overrides() {
        let mut cfg = VerifierConfig::new("/repo", Layout::Namespaced);
        cfg.paths.index_doc = Some(PathBuf::from("docs/INDEX.md"));
        let paths = cfg.resolved_paths();
        assert_eq!(paths.index_doc, Some(PathBuf::from("/repo/docs/INDEX.md")));
        assert_eq!(paths.normalized_wrapper, Some(PathBuf::from("/repo/src/nstr.rs")));
    }

    #[test]
    fn test_active_predicates_rejects_foreign_predicate() {
        let cfg = VerifierConfig {
            predicates: vec![PredicateId::DocumentedInIndex],
            ..VerifierConfig::new(".", Layout::Flat)
        };
        assert!(matches!(
            cfg.active_predicates(),
            Err(VerifyError::InvalidConfiguration(_))
        ));
    }

    #[test]
    fn test_active_predicates_keeps_canonical_order() {
        let cfg = VerifierConfig {
            predicates: vec![PredicateId::HasUnitTests, PredicateId::NameIsValid],
            ..VerifierConfig::default()
        };
        assert_eq!(
            cfg.active_predicates().unwrap(),
            vec![PredicateId::NameIsValid, PredicateId::HasUnitTests]
        );
    }

    #[test]
    fn test_load_missing_default_config() {
        let dir = tempfile::tempdir().unwrap();
        let cfg = VerifierConfig::load(None, dir.path()).unwrap();
        assert_eq!(cfg.root, dir.path());
        assert_eq!(cfg.layout, Layout::Namespaced);
    }

    #[test]
    fn test_load_missing_explicit_config_is_setup_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.toml");
        let err = VerifierConfig::load(Some(&missing), dir.path()).unwrap_err();
        assert!(err.is_setup());
    }

    #[test]
    fn test_load_default_config_file() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(CONFIG_FILE_NAME), "layout = \"flat\"\n").unwrap();
        let cfg = VerifierConfig::load(None, dir.path()).unwrap();
        assert_eq!(cfg.layout, Layout::Flat);
        assert_eq!(cfg.root, dir.path());
    }
}
