//! Miniature text-distance repositories written to a temp dir.

#![allow(dead_code)]

use conventions_verifier::Layout;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub const UNITS: &[&str] = &["hamming", "jaccard", "jaro_winkler", "sorensen_dice", "lig3"];

pub struct Fixture {
    dir: TempDir,
    pub layout: Layout,
}

/// `jaro_winkler` -> `JaroWinkler`, `lig3` -> `Lig3`.
pub fn type_name(unit: &str) -> String {
    unit.split('_')
        .map(|part| {
            let mut chars = part.chars();
            match chars.next() {
                Some(c) => c.to_ascii_uppercase().to_string() + chars.as_str(),
                None => String::new(),
            }
        })
        .collect()
}

fn unit_source(unit: &str) -> String {
    format!(
        "pub struct {ty};\n\n#[cfg(test)]\nmod tests {{\n    use super::*;\n    use rstest::rstest;\n\n    #[rstest]\n    #[case(\"\", \"\", 0)]\n    fn basic(#[case] s1: &str, #[case] s2: &str, #[case] exp: usize) {{}}\n}}\n",
        ty = type_name(unit)
    )
}

fn str_wrapper(units: &[&str]) -> String {
    let mut out = String::from("//! Helper functions for strings.\n\nuse super::*;\n");
    for unit in units {
        let ty = type_name(unit);
        out.push_str(&format!(
            "\n/// Calculate {ty} for two strings.\n///\n/// A wrapper for [{ty}].\npub fn {unit}(s1: &str, s2: &str) -> f64 {{\n    {ty}::default().for_str(s1, s2).nval()\n}}\n"
        ));
    }
    out
}

fn nstr_wrapper(units: &[&str]) -> String {
    let mut out = String::from("//! Normalized helper functions for strings.\n\nuse super::*;\n");
    for unit in units {
        let ty = type_name(unit);
        out.push_str(&format!(
            "\n/// Calculate normalized {ty} for two strings.\n///\n/// A wrapper for [`{ty}`].\npub fn {unit}(s1: &str, s2: &str) -> f64 {{\n    {ty}::default().for_str(s1, s2).nval()\n}}\n"
        ));
    }
    out
}

fn readme(units: &[&str]) -> String {
    let mut out = String::from("# textdistance\n\n## Algorithms\n\n");
    for unit in units {
        out.push_str(&format!("1. `{}`\n", type_name(unit)));
    }
    out
}

fn smoke_tests(units: &[&str]) -> String {
    let mut out = String::from("\n#[cfg(test)]\nmod tests {\n    use super::*;\n    use rstest::rstest;\n\n    #[rstest]\n");
    for (i, unit) in units.iter().enumerate() {
        out.push_str(&format!("    #[case::{}({})]\n", unit, i + 1));
    }
    out.push_str("    fn basic(#[case] alg: usize) {}\n}\n");
    out
}

fn namespaced_lib(units: &[&str]) -> String {
    let mut out = String::from("mod algorithm;\nmod counter;\n\npub mod nstr;\npub mod str;\n\nmod algorithms {\n");
    for unit in units {
        out.push_str(&format!("    pub mod {};\n", unit));
    }
    out.push_str("}\n\npub use self::algorithm::Algorithm;\n");
    for unit in units {
        out.push_str(&format!(
            "pub use self::algorithms::{}::{};\n",
            unit,
            type_name(unit)
        ));
    }
    out.push_str(&smoke_tests(units));
    out
}

fn flat_lib(units: &[&str]) -> String {
    let mut out = String::from("mod algorithm;\npub mod str;\n\n");
    for unit in units {
        out.push_str(&format!(
            "mod {unit};\npub use self::{unit}::{};\n",
            type_name(unit)
        ));
    }
    out.push_str(&smoke_tests(units));
    out
}

impl Fixture {
    /// A repository where every unit in `units` is fully wired.
    pub fn new(layout: Layout, units: &[&str]) -> Self {
        let dir = tempfile::tempdir().unwrap();
        let fixture = Self { dir, layout };
        match layout {
            Layout::Namespaced => {
                fixture.write("src/lib.rs", &namespaced_lib(units));
                fixture.write("src/str.rs", &str_wrapper(units));
                fixture.write("src/nstr.rs", &nstr_wrapper(units));
                fixture.write("README.md", &readme(units));
                fixture.write("src/algorithm.rs", "pub trait Algorithm {}\n");
                fixture.write("src/counter.rs", "pub struct Counter;\n");
                fixture.write("src/algorithms/algorithm.rs", "pub use crate::Algorithm;\n");
                for unit in units {
                    fixture.write(&format!("src/algorithms/{}.rs", unit), &unit_source(unit));
                }
            }
            Layout::Flat => {
                fixture.write("src/lib.rs", &flat_lib(units));
                fixture.write("src/textdistance/str.rs", &str_wrapper(units));
                fixture.write("src/textdistance/algorithm.rs", "pub trait Algorithm {}\n");
                fixture.write("src/textdistance/counter.rs", "pub struct Counter;\n");
                for unit in units {
                    fixture.write(&format!("src/textdistance/{}.rs", unit), &unit_source(unit));
                }
            }
        }
        fixture
    }

    pub fn default_namespaced() -> Self {
        Self::new(Layout::Namespaced, UNITS)
    }

    pub fn default_flat() -> Self {
        Self::new(Layout::Flat, UNITS)
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn file(&self, rel: &str) -> PathBuf {
        self.dir.path().join(rel)
    }

    pub fn units_dir(&self) -> &'static str {
        self.layout.units_dir()
    }

    pub fn write(&self, rel: &str, contents: &str) {
        let path = self.file(rel);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, contents).unwrap();
    }

    pub fn read(&self, rel: &str) -> String {
        fs::read_to_string(self.file(rel)).unwrap()
    }

    pub fn append(&self, rel: &str, extra: &str) {
        let mut text = self.read(rel);
        text.push_str(extra);
        self.write(rel, &text);
    }

    /// Remove every line of `rel` containing `needle`; panics if none did.
    pub fn remove_lines(&self, rel: &str, needle: &str) {
        let text = self.read(rel);
        let kept: Vec<&str> = text.lines().filter(|l| !l.contains(needle)).collect();
        assert_ne!(kept.len(), text.lines().count(), "no line of {} contains {:?}", rel, needle);
        self.write(rel, &(kept.join("\n") + "\n"));
    }
}
