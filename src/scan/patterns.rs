//! Attribute patterns searched in each kind of markup document.

use rigid_core::Category;
use rigid_markup::{PatternTable, SearchPattern};

/// Patterns for interface-layout documents (storyboards).
pub fn layout_patterns() -> PatternTable<Category> {
    PatternTable::new()
        .with(Category::ScreenIdentifiers, SearchPattern::any("storyboardIdentifier"))
        .with(Category::TableCells, SearchPattern::named("tableViewCell", "reuseIdentifier"))
        .with(
            Category::CollectionCells,
            SearchPattern::named("collectionViewCell", "reuseIdentifier"),
        )
        .with(
            Category::ReusableCells,
            SearchPattern::named("collectionReusableView", "reuseIdentifier"),
        )
        .with(Category::Segues, SearchPattern::named("segue", "identifier"))
}

/// Patterns for data-model `contents` documents.
pub fn model_patterns() -> PatternTable<Category> {
    PatternTable::new().with(Category::Entities, SearchPattern::named("entity", "name"))
}
