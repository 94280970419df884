//! Property-based tests for the Rigid generator
//!
//! These tests use proptest to verify invariants across many randomly
//! generated inputs, catching edge cases that hand-written tests might miss.

use proptest::prelude::*;

use rigid::emit::{ConstantGroup, EmitConfig};
use rigid_core::{CategorySet, ResourceRecord, assign_unique_names, sanitize_name, strip_qualifiers};

// =============================================================================
// Sanitizer Properties
// =============================================================================

#[cfg(test)]
mod sanitizer_tests {
    use super::*;

    proptest! {
        /// Property: every output is a legal symbol name
        #[test]
        fn sanitized_names_are_legal(raw in ".*") {
            let name = sanitize_name(&raw);
            prop_assert!(!name.is_empty());
            prop_assert!(name.bytes().all(|b| b.is_ascii_alphanumeric() || b == b'_'));
            prop_assert!(!name.starts_with(|c: char| c.is_ascii_digit()));
        }

        /// Property: sanitizing is deterministic
        #[test]
        fn sanitizing_is_deterministic(raw in ".*") {
            prop_assert_eq!(sanitize_name(&raw), sanitize_name(&raw));
        }

        /// Property: legal names that do not start with a digit pass through unchanged
        #[test]
        fn legal_names_are_fixed_points(raw in "[A-Za-z_][A-Za-z0-9_]{0,24}") {
            prop_assert_eq!(sanitize_name(&raw), raw);
        }

        /// Property: output length is the input byte length, plus one when prefixed
        #[test]
        fn one_replacement_per_byte(raw in ".*") {
            let name = sanitize_name(&raw);
            prop_assert!(name.len() == raw.len() || name.len() == raw.len() + 1);
        }

        /// Property: density and device qualifiers never change the derived name
        #[test]
        fn qualifiers_collapse(
            stem in "[a-z][a-z0-9_-]{0,12}",
            qualifier in prop::sample::select(vec!["@2x", "@3x", "~ipad", "~iphone", "@2x~ipad"])
        ) {
            let qualified = format!("{stem}{qualifier}");
            prop_assert_eq!(strip_qualifiers(&qualified), stem.clone());
        }
    }
}

// =============================================================================
// Record Set Properties
// =============================================================================

#[cfg(test)]
mod record_tests {
    use super::*;

    proptest! {
        /// Property: inserting the same (raw value, origin) twice leaves the set unchanged
        #[test]
        fn insert_is_idempotent(raw in ".{0,16}", file_derived in any::<bool>()) {
            let mut set = CategorySet::new();
            prop_assert!(set.insert(ResourceRecord::new(raw.clone(), file_derived)));
            prop_assert!(!set.insert(ResourceRecord::new(raw, file_derived)));
            prop_assert_eq!(set.len(), 1);
        }

        /// Property: unique naming never hands out the same name twice
        #[test]
        fn unique_names_are_unique(raws in prop::collection::hash_set("[a-c -]{0,4}", 0..24)) {
            let records: Vec<ResourceRecord> = raws.into_iter().map(ResourceRecord::from_value).collect();
            let named = assign_unique_names(&records);
            prop_assert_eq!(named.len(), records.len());

            let mut names: Vec<&str> = named.iter().map(|(name, _)| name.as_str()).collect();
            names.dedup();
            prop_assert_eq!(names.len(), records.len());
        }
    }
}

// =============================================================================
// Constant Group Properties
// =============================================================================

#[cfg(test)]
mod group_tests {
    use super::*;

    proptest! {
        /// Property: every `=` of a rendered group sits in the same column, and cases are sorted
        #[test]
        fn equals_signs_share_one_column(
            raws in prop::collection::hash_set("[A-Za-z][A-Za-z0-9 ]{0,20}", 1..16),
            indent in 1usize..8
        ) {
            let records: Vec<ResourceRecord> = raws.into_iter().map(ResourceRecord::from_value).collect();
            let group = ConstantGroup::from_records("Image", &records);
            let rendered = group.render(0, &EmitConfig::new().with_indent_width(indent));

            let cases: Vec<&str> = rendered.lines().filter(|line| line.trim_start().starts_with("case ")).collect();
            prop_assert_eq!(cases.len(), records.len());

            let columns: Vec<usize> = cases.iter().map(|line| line.find(" = \"").unwrap()).collect();
            prop_assert!(columns.windows(2).all(|pair| pair[0] == pair[1]));

            let names: Vec<&str> = cases
                .iter()
                .map(|line| line.trim_start().trim_start_matches("case ").split(' ').next().unwrap())
                .collect();
            prop_assert!(names.windows(2).all(|pair| pair[0] < pair[1]));
        }
    }
}
