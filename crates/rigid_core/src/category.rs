//! Semantic categories and the deduplicated record sets that belong to them.

use std::collections::HashSet;
use std::collections::hash_set;
use std::fmt;

use crate::record::ResourceRecord;

/// The kinds of resources Rigid collects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Category {
    /// Image files (`png`, `pdf`, `jpg`, `jpeg`, `tiff`).
    Images,
    /// Interface fragments (`xib`).
    Nibs,
    /// Layout-root files (`storyboard`).
    Storyboards,
    /// `storyboardIdentifier` attributes on any element.
    ScreenIdentifiers,
    /// `reuseIdentifier` on `tableViewCell`.
    TableCells,
    /// `reuseIdentifier` on `collectionViewCell`.
    CollectionCells,
    /// `reuseIdentifier` on `collectionReusableView`.
    ReusableCells,
    /// `identifier` on `segue`.
    Segues,
    /// `name` on data-model `entity` elements.
    Entities,
}

impl Category {
    pub const ALL: [Category; 9] = [
        Category::Images,
        Category::Nibs,
        Category::Storyboards,
        Category::ScreenIdentifiers,
        Category::TableCells,
        Category::CollectionCells,
        Category::ReusableCells,
        Category::Segues,
        Category::Entities,
    ];

    /// Short lowercase label used in logs.
    pub fn label(self) -> &'static str {
        match self {
            Category::Images => "images",
            Category::Nibs => "nibs",
            Category::Storyboards => "storyboards",
            Category::ScreenIdentifiers => "screen identifiers",
            Category::TableCells => "table cells",
            Category::CollectionCells => "collection cells",
            Category::ReusableCells => "reusable cells",
            Category::Segues => "segues",
            Category::Entities => "entities",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A deduplicated set of records for one category.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategorySet {
    records: HashSet<ResourceRecord>,
}

impl CategorySet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a record; returns `false` if an equal record was already present.
    pub fn insert(&mut self, record: ResourceRecord) -> bool {
        self.records.insert(record)
    }

    /// Union another collection of records into this set.
    pub fn union<I: IntoIterator<Item = ResourceRecord>>(&mut self, records: I) {
        self.records.extend(records);
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn contains(&self, record: &ResourceRecord) -> bool {
        self.records.contains(record)
    }

    pub fn iter(&self) -> hash_set::Iter<'_, ResourceRecord> {
        self.records.iter()
    }

    /// Records ordered by derived name, then raw value.
    pub fn sorted(&self) -> Vec<&ResourceRecord> {
        let mut records: Vec<&ResourceRecord> = self.records.iter().collect();
        records.sort_by(|lhs, rhs| {
            lhs.derived_name()
                .cmp(rhs.derived_name())
                .then_with(|| lhs.raw_value().cmp(rhs.raw_value()))
        });
        records
    }
}

impl FromIterator<ResourceRecord> for CategorySet {
    fn from_iter<I: IntoIterator<Item = ResourceRecord>>(iter: I) -> Self {
        Self {
            records: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a CategorySet {
    type Item = &'a ResourceRecord;
    type IntoIter = hash_set::Iter<'a, ResourceRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

/// One [`CategorySet`] per [`Category`]; the result of scanning a project.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    sets: [CategorySet; Category::ALL.len()],
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, category: Category) -> &CategorySet {
        &self.sets[category as usize]
    }

    pub fn get_mut(&mut self, category: Category) -> &mut CategorySet {
        &mut self.sets[category as usize]
    }

    pub fn insert(&mut self, category: Category, record: ResourceRecord) -> bool {
        self.get_mut(category).insert(record)
    }

    /// Total number of records across every category.
    pub fn total(&self) -> usize {
        self.sets.iter().map(CategorySet::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.sets.iter().all(CategorySet::is_empty)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_indices_match_all() {
        for (index, category) in Category::ALL.iter().enumerate() {
            assert_eq!(*category as usize, index);
        }
    }

    #[test]
    fn test_insert_is_idempotent() {
        let mut set = CategorySet::new();
        assert!(set.insert(ResourceRecord::from_value("Home")));
        assert!(!set.insert(ResourceRecord::from_value("Home")));
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_union_merges_and_dedups() {
        let mut set: CategorySet = [ResourceRecord::from_value("a")].into_iter().collect();
        set.union([ResourceRecord::from_value("a"), ResourceRecord::from_value("b")]);
        assert_eq!(set.len(), 2);
        assert!(set.contains(&ResourceRecord::from_value("b")));
    }

    #[test]
    fn test_sorted_orders_by_derived_name() {
        let set: CategorySet = ["zeta", "Alpha", "beta", "9lives"]
            .into_iter()
            .map(ResourceRecord::from_value)
            .collect();
        let names: Vec<&str> = set.sorted().iter().map(|r| r.derived_name()).collect();
        assert_eq!(names, vec!["Alpha", "beta", "i9lives", "zeta"]);
    }

    #[test]
    fn test_catalog_starts_empty() {
        let catalog = Catalog::new();
        assert!(catalog.is_empty());
        assert_eq!(catalog.total(), 0);
        for category in Category::ALL {
            assert!(catalog.get(category).is_empty());
        }
    }

    #[test]
    fn test_catalog_insert_targets_category() {
        let mut catalog = Catalog::new();
        catalog.insert(Category::Segues, ResourceRecord::from_value("showDetail"));
        assert_eq!(catalog.get(Category::Segues).len(), 1);
        assert!(catalog.get(Category::Images).is_empty());
        assert_eq!(catalog.total(), 1);
    }
}
