//! The two file-organization conventions of the inspected library.
//!
//! The flat convention keeps every algorithm next to its string wrapper in
//! `src/textdistance/`. The namespaced convention moves algorithms to
//! `src/algorithms/`, adds a normalized wrapper and a README index, and
//! tightens the wrapper checks. The flat battery is a subset of the
//! namespaced one.

use crate::types::{PredicateId, UnitName};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Layout convention selecting the battery and path templates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Layout {
    /// `src/textdistance/*.rs` with `src/textdistance/str.rs`.
    Flat,
    /// `src/algorithms/*.rs` with `src/str.rs`, `src/nstr.rs` and `README.md`.
    #[default]
    Namespaced,
}

const FLAT_PREDICATES: &[PredicateId] = &[
    PredicateId::HasStringShortcut,
    PredicateId::IsExported,
    PredicateId::IsSmokeTested,
    PredicateId::HasUnitTests,
];

const NAMESPACED_PREDICATES: &[PredicateId] = &[
    PredicateId::NameIsValid,
    PredicateId::DocumentedInIndex,
    PredicateId::HasStringShortcut,
    PredicateId::StringShortcutDelegates,
    PredicateId::HasNormalizedShortcut,
    PredicateId::IsExported,
    PredicateId::IsSmokeTested,
    PredicateId::HasUnitTests,
];

impl Layout {
    pub fn all() -> &'static [Layout] {
        &[Self::Flat, Self::Namespaced]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Flat => "flat",
            Self::Namespaced => "namespaced",
        }
    }

    /// Predicates run under this layout, in canonical order.
    pub fn predicates(&self) -> &'static [PredicateId] {
        match self {
            Self::Flat => FLAT_PREDICATES,
            Self::Namespaced => NAMESPACED_PREDICATES,
        }
    }

    pub fn runs(&self, predicate: PredicateId) -> bool {
        self.predicates().contains(&predicate)
    }

    /// Infrastructure files that live among the units but are not algorithms.
    pub fn default_skip(&self) -> &'static [&'static str] {
        match self {
            Self::Flat => &["algorithm", "counter", "str"],
            Self::Namespaced => &["algorithm", "counter"],
        }
    }

    pub fn units_dir(&self) -> &'static str {
        match self {
            Self::Flat => "src/textdistance",
            Self::Namespaced => "src/algorithms",
        }
    }

    pub fn aggregation(&self) -> &'static str {
        "src/lib.rs"
    }

    pub fn string_wrapper(&self) -> &'static str {
        match self {
            Self::Flat => "src/textdistance/str.rs",
            Self::Namespaced => "src/str.rs",
        }
    }

    pub fn normalized_wrapper(&self) -> Option<&'static str> {
        match self {
            Self::Flat => None,
            Self::Namespaced => Some("src/nstr.rs"),
        }
    }

    pub fn index_doc(&self) -> Option<&'static str> {
        match self {
            Self::Flat => None,
            Self::Namespaced => Some("README.md"),
        }
    }

    /// Module declaration and re-export patterns expected in the
    /// aggregation file.
    pub fn export_patterns(&self, unit: &UnitName) -> [String; 2] {
        match self {
            Self::Flat => [format!("mod {}", unit), format!("pub use self::{}::", unit)],
            Self::Namespaced => [
                format!("pub mod {};", unit),
                format!("pub use self::algorithms::{}::", unit),
            ],
        }
    }
}

impl fmt::Display for Layout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for Layout {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "flat" => Ok(Self::Flat),
            "namespaced" => Ok(Self::Namespaced),
            other => Err(format!("unknown layout: {}", other)),
        }
    }
}
