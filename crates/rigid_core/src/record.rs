//! Resource records: one discovered identifier with its symbol name and origin.

use std::hash::{Hash, Hasher};
use std::path::Path;

use crate::naming::{sanitize_name, strip_qualifiers};

/// Identity of a record: raw value plus origin.
///
/// The derived name is deliberately not part of the key, so `"My-View"` and `"My View"` are distinct records
/// even though both sanitize to `My_View`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RecordKey {
    pub raw_value: String,
    pub is_file_derived: bool,
}

/// An immutable, discovered resource identifier.
#[derive(Debug, Clone)]
pub struct ResourceRecord {
    key: RecordKey,
    derived_name: String,
}

impl ResourceRecord {
    /// Create a record from a raw value and its origin.
    pub fn new(raw_value: impl Into<String>, is_file_derived: bool) -> Self {
        let raw_value = raw_value.into();
        let derived_name = sanitize_name(&raw_value);
        Self {
            key: RecordKey {
                raw_value,
                is_file_derived,
            },
            derived_name,
        }
    }

    /// Create a record for a value extracted from markup (not file-derived).
    pub fn from_value(value: impl Into<String>) -> Self {
        Self::new(value, false)
    }

    /// Create a file-derived record from a path.
    ///
    /// The raw value is the file stem (last component without its final extension) with the density/device
    /// qualifiers removed, so `icon@2x.png` and `icon~ipad.png` both become `icon`.
    pub fn from_file(path: &Path) -> Self {
        let stem = path.file_stem().map(|s| s.to_string_lossy()).unwrap_or_default();
        Self::new(strip_qualifiers(&stem), true)
    }

    pub fn key(&self) -> &RecordKey {
        &self.key
    }

    pub fn raw_value(&self) -> &str {
        &self.key.raw_value
    }

    pub fn derived_name(&self) -> &str {
        &self.derived_name
    }

    pub fn is_file_derived(&self) -> bool {
        self.key.is_file_derived
    }
}

impl PartialEq for ResourceRecord {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}

impl Eq for ResourceRecord {}

impl Hash for ResourceRecord {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key.hash(state);
    }
}
