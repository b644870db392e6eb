//! Unit discovery from a directory listing.

use crate::error::{VerifyError, VerifyResult};
use crate::types::UnitName;
use std::collections::{BTreeMap, BTreeSet};
use std::path::{Path, PathBuf};

/// Units found in one directory snapshot, after skip-set exclusion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Discovery {
    pub dir: PathBuf,
    /// Each unit with the path of its own source file.
    pub units: BTreeMap<UnitName, PathBuf>,
    /// Entries dropped because their stem is in the skip set.
    pub skipped: BTreeSet<UnitName>,
}

impl Discovery {
    pub fn len(&self) -> usize {
        self.units.len()
    }

    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }

    pub fn contains(&self, unit: &UnitName) -> bool {
        self.units.contains_key(unit)
    }

    pub fn iter(&self) -> impl Iterator<Item = &UnitName> {
        self.units.keys()
    }

    /// `<dir>/<stem>.rs`, built from the entry's raw stem.
    pub fn source_path(&self, unit: &UnitName) -> Option<&Path> {
        self.units.get(unit).map(PathBuf::as_path)
    }
}

/// Collect `{stem(entry)} \ skip` for every entry of `dir`.
///
/// Directories count like files. Names that are not valid UTF-8 are kept in
/// lossy form so the name check can still report them; their source path
/// keeps the original bytes.
pub fn discover(dir: &Path, skip: &BTreeSet<String>) -> VerifyResult<Discovery> {
    let entries = std::fs::read_dir(dir).map_err(|e| VerifyError::setup(dir, &e))?;

    let mut units = BTreeMap::new();
    let mut skipped = BTreeSet::new();
    for entry in entries {
        let entry = entry.map_err(|e| VerifyError::setup(dir, &e))?;
        let path = entry.path();
        let Some(stem) = path.file_stem() else {
            continue;
        };
        let name = UnitName(stem.to_string_lossy().into_owned());

        if skip.contains(name.as_str()) {
            skipped.insert(name);
            continue;
        }
        if entry.file_type().map(|t| t.is_dir()).unwrap_or(false) {
            tracing::warn!(
                entry = %path.display(),
                unit = %name,
                "directory entry discovered as a unit"
            );
        }
        let mut file_name = stem.to_os_string();
        file_name.push(".rs");
        units.insert(name, dir.join(file_name));
    }

    if units.is_empty() {
        return Err(VerifyError::NoUnits {
            dir: dir.to_path_buf(),
        });
    }

    tracing::debug!(dir = %dir.display(), units = units.len(), skipped = skipped.len(), "discovered units");
    Ok(Discovery {
        dir: dir.to_path_buf(),
        units,
        skipped,
    })
}
