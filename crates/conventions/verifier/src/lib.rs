//! Convention Verifier for text-distance algorithm libraries
//!
//! Enumerates the algorithm units of a library source tree and checks that
//! each one is wired through every integration point: exported, wrapped,
//! documented and tested.
//!
//! # Battery
//!
//! | Predicate | Flat | Namespaced |
//! |-----------|------|------------|
//! | `name-is-valid` | | ✓ |
//! | `documented-in-index` | | ✓ |
//! | `has-string-shortcut` | ✓ | ✓ |
//! | `string-shortcut-delegates` | | ✓ |
//! | `has-normalized-shortcut` | | ✓ |
//! | `is-exported` | ✓ | ✓ |
//! | `is-smoke-tested` | ✓ | ✓ |
//! | `has-unit-tests` | ✓ | ✓ |
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use conventions_verifier::{Layout, Verifier};
//!
//! let verifier = Verifier::new("path/to/textdistance", Layout::Namespaced);
//! let report = verifier.run_all().unwrap();
//! for failure in report.failures() {
//!     println!("{}", failure);
//! }
//! ```

#![deny(unsafe_code)]

pub mod config;
pub mod discovery;
pub mod error;
pub mod layout;
pub mod predicates;
pub mod report;
pub mod runner;
pub mod sources;
pub mod types;

// Re-export key types at crate root.
pub use config::{PathOverrides, ResolvedPaths, VerifierConfig, CONFIG_FILE_NAME};
pub use discovery::{discover, Discovery};
pub use error::{VerifyError, VerifyResult};
pub use layout::Layout;
pub use predicates::{check_predicate, is_valid_name, CheckContext};
pub use report::{PredicateReport, VerificationReport};
pub use runner::Verifier;
pub use sources::{SourceText, Sources};
pub use types::{CheckResult, PredicateId, UnitName, VerificationSummary};
