mod common;

use common::Fixture;
use conventions_verifier::{is_valid_name, Layout, PredicateId, UnitName, Verifier};
use proptest::prelude::*;

proptest! {
    #[test]
    fn identifier_names_are_valid(name in "[A-Za-z0-9_]{1,24}") {
        prop_assert!(is_valid_name(&name));
    }

    #[test]
    fn names_with_other_characters_are_invalid(
        prefix in "[a-z_]{0,8}",
        bad in "[-. @é]",
        suffix in "[a-z0-9]{0,8}",
    ) {
        let name = format!("{}{}{}", prefix, bad, suffix);
        prop_assert!(!is_valid_name(&name));
    }

    #[test]
    fn folding_drops_underscores_and_case(name in "[A-Za-z][A-Za-z0-9_]{0,16}") {
        let folded = UnitName::new(&name).folded();
        prop_assert!(!folded.contains('_'));
        prop_assert_eq!(folded.clone(), folded.to_lowercase());
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(16))]

    #[test]
    fn every_generated_unit_passes_when_wired(
        names in prop::collection::btree_set("[a-z][a-z0-9]{0,5}(_[a-z0-9]{1,4})?", 1..5),
    ) {
        // Prefix keeps names clear of the skip set and of each other.
        let units: Vec<String> = names.iter().map(|n| format!("u{}x", n)).collect();
        let refs: Vec<&str> = units.iter().map(|s| s.as_str()).collect();
        let fixture = Fixture::new(Layout::Namespaced, &refs);

        let report = Verifier::new(fixture.path(), Layout::Namespaced).run_all().unwrap();
        prop_assert!(report.all_passed(), "{}", report);
        prop_assert_eq!(report.summary.units, units.len());
        prop_assert_eq!(
            report.results.iter().filter(|r| r.predicate == PredicateId::NameIsValid).count(),
            units.len()
        );
    }
}
