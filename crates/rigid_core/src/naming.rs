//! Turn arbitrary resource values into identifier-legal symbol names.
//!
//! The rules are deliberately byte-oriented so the result never depends on locale or Unicode tables:
//!
//! 1. File-derived values drop their density/device qualifiers (`@2x`, `@3x`, `~ipad`, `~iphone`).
//! 2. Every byte outside `[A-Za-z0-9_]` becomes `_`.
//! 3. An empty name, or one starting with a digit, gets the [`NAME_PREFIX`] prepended.

use std::collections::HashSet;

use crate::record::ResourceRecord;

/// Qualifier suffixes stripped from file stems, applied in this order.
pub const QUALIFIER_SUFFIXES: &[&str] = &["@2x", "@3x", "~ipad", "~iphone"];

/// Leading character used when a sanitized name would otherwise be empty or start with a digit.
pub const NAME_PREFIX: char = 'i';

/// Byte written in place of every character that is not legal inside an identifier.
const REPLACEMENT: u8 = b'_';

/// Remove every density/device qualifier from a file stem.
///
/// ## Examples
/// ```rust
/// use rigid_core::strip_qualifiers;
/// assert_eq!(strip_qualifiers("icon@2x~ipad"), "icon");
/// assert_eq!(strip_qualifiers("icon@4x"), "icon@4x");
/// ```
pub fn strip_qualifiers(stem: &str) -> String {
    QUALIFIER_SUFFIXES
        .iter()
        .fold(stem.to_string(), |name, qualifier| name.replace(qualifier, ""))
}

/// Sanitize a raw value into a valid symbol name.
///
/// ## Parameters
/// - `raw`: the value as discovered (file stem or attribute value).
///
/// ## Returns
/// - (`String`): a non-empty name made of `[A-Za-z0-9_]` that does not start with a digit.
///
/// ## Notes
/// - Multi-byte UTF-8 characters become one underscore per byte.
/// - Qualifier stripping is not done here; see [`strip_qualifiers`].
pub fn sanitize_name(raw: &str) -> String {
    let bytes: Vec<u8> = raw
        .bytes()
        .map(|b| if is_symbol_byte(b) { b } else { REPLACEMENT })
        .collect();

    // Only ASCII survives the mapping above.
    let mut name: String = bytes.into_iter().map(char::from).collect();

    if name.is_empty() || name.starts_with(|c: char| c.is_ascii_digit()) {
        name.insert(0, NAME_PREFIX);
    }
    name
}

/// Check whether a byte may appear in a symbol name.
#[inline]
fn is_symbol_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == REPLACEMENT
}

/// Assign every record a name that is unique within the group.
///
/// Records are ordered by derived name, then raw value. The first record keeps its derived name; later records
/// whose derived name is already taken get the smallest free numeric suffix (`_2`, `_3`, ...). A suffix never
/// reuses a name that some other record derives on its own.
///
/// ## Returns
/// - `Vec<(String, &ResourceRecord)>`: unique names paired with their records, sorted by name.
///
/// ## Examples
/// ```rust
/// use rigid_core::{assign_unique_names, ResourceRecord};
/// let a = ResourceRecord::from_value("My-View");
/// let b = ResourceRecord::from_value("My View");
/// let names: Vec<String> = assign_unique_names([&a, &b]).into_iter().map(|(n, _)| n).collect();
/// assert_eq!(names, vec!["My_View", "My_View_2"]);
/// ```
pub fn assign_unique_names<'a, I>(records: I) -> Vec<(String, &'a ResourceRecord)>
where
    I: IntoIterator<Item = &'a ResourceRecord>,
{
    let mut ordered: Vec<&ResourceRecord> = records.into_iter().collect();
    ordered.sort_by(|lhs, rhs| {
        lhs.derived_name()
            .cmp(rhs.derived_name())
            .then_with(|| lhs.raw_value().cmp(rhs.raw_value()))
            .then_with(|| lhs.is_file_derived().cmp(&rhs.is_file_derived()))
    });

    let derived: HashSet<&str> = ordered.iter().map(|r| r.derived_name()).collect();
    let mut used: HashSet<String> = HashSet::with_capacity(ordered.len());
    let mut named = Vec::with_capacity(ordered.len());

    for record in ordered {
        let base = record.derived_name();
        let name = if used.contains(base) {
            (2usize..)
                .map(|n| format!("{base}_{n}"))
                .find(|candidate| !used.contains(candidate) && !derived.contains(candidate.as_str()))
                .unwrap_or_else(|| base.to_string())
        } else {
            base.to_string()
        };
        used.insert(name.clone());
        named.push((name, record));
    }

    named.sort_by(|(lhs, _), (rhs, _)| lhs.cmp(rhs));
    named
}
