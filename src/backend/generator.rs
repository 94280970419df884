//! Declaration generator: turns a scanned [`Catalog`] into the ordered root units of the output document.

use rigid_core::{Catalog, Category};

use super::templates::{cross_platform, image_extension, imports, nib_extensions, segue_extension, storyboard_extension};
use crate::emit::{CommentHeader, ConstantGroup, EmitConfig, Unit, render_document};
use crate::version::RIGID_VERSION;

/// Builds the document for one catalog.
pub struct DeclarationGenerator<'a> {
    catalog: &'a Catalog,
    config: &'a EmitConfig,
}

impl<'a> DeclarationGenerator<'a> {
    pub fn new(catalog: &'a Catalog, config: &'a EmitConfig) -> Self {
        Self { catalog, config }
    }

    /// Root units in output order. Categories without records contribute nothing.
    pub fn generate(&self) -> Vec<Unit> {
        let mut units: Vec<Unit> = Vec::new();

        units.push(self.header().into());
        units.push(imports(self.config).into());

        self.images(&mut units);
        self.screens(&mut units);
        self.cells(&mut units);
        self.segues(&mut units);
        self.entities(&mut units);
        self.nibs(&mut units);

        units
    }

    /// Render the whole document.
    pub fn render(&self) -> String {
        render_document(&self.generate(), self.config)
    }

    fn header(&self) -> CommentHeader {
        let mut header = CommentHeader::new();
        header.append("");
        header.append(self.config.file_name.as_str());
        header.append(format!("{} (v{})", self.config.description, RIGID_VERSION));
        header.append("");
        header
    }

    /// Constant group for `category`, or `None` when nothing was found.
    fn group(&self, category: Category, name: &str) -> Option<ConstantGroup> {
        let records = self.catalog.get(category);
        if records.is_empty() {
            return None;
        }
        tracing::debug!(%category, records = records.len(), "emitting {name}");
        Some(ConstantGroup::from_records(name, records))
    }

    fn images(&self, units: &mut Vec<Unit>) {
        if let Some(group) = self.group(Category::Images, "Image") {
            units.push(group.into());
            units.push(cross_platform(self.config, image_extension).into());
        }
    }

    fn screens(&self, units: &mut Vec<Unit>) {
        let Some(screens) = self.group(Category::ScreenIdentifiers, "ViewController") else {
            return;
        };
        units.push(screens.into());
        if let Some(storyboards) = self.group(Category::Storyboards, "Storyboard") {
            units.push(storyboards.into());
        }
        units.push(cross_platform(self.config, storyboard_extension).into());
    }

    fn cells(&self, units: &mut Vec<Unit>) {
        let groups = [
            (Category::TableCells, "TableViewCell"),
            (Category::CollectionCells, "CollectionViewCell"),
            (Category::ReusableCells, "CollectionViewReusableCell"),
        ];
        units.extend(
            groups
                .into_iter()
                .filter_map(|(category, name)| self.group(category, name))
                .map(Unit::from),
        );
    }

    fn segues(&self, units: &mut Vec<Unit>) {
        if let Some(group) = self.group(Category::Segues, "Segue") {
            units.push(group.into());
            units.push(cross_platform(self.config, segue_extension).into());
        }
    }

    fn entities(&self, units: &mut Vec<Unit>) {
        if let Some(group) = self.group(Category::Entities, "Entity") {
            units.push(group.into());
        }
    }

    fn nibs(&self, units: &mut Vec<Unit>) {
        if let Some(group) = self.group(Category::Nibs, "Nib") {
            units.push(group.into());
            units.push(cross_platform(self.config, nib_extensions).into());
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use rigid_core::ResourceRecord;
    use std::path::Path;

    fn header_and_imports() -> String {
        format!(
            "//\n//  Rigid.swift\n//  Rigid: strongly-typed resource identifiers (v{RIGID_VERSION})\n//\n\
             \n#if os(iOS) || os(tvOS)\nimport UIKit\n#else\nimport AppKit\n#endif\n"
        )
    }

    #[test]
    fn test_empty_catalog_yields_header_and_imports_only() {
        let catalog = Catalog::new();
        let config = EmitConfig::default();
        let generator = DeclarationGenerator::new(&catalog, &config);
        assert_eq!(generator.generate().len(), 2);
        assert_eq!(generator.render(), header_and_imports());
    }

    #[test]
    fn test_entities_have_no_companion() {
        let mut catalog = Catalog::new();
        catalog.insert(Category::Entities, ResourceRecord::from_value("User"));
        let config = EmitConfig::default();
        let rendered = DeclarationGenerator::new(&catalog, &config).render();
        assert_eq!(
            rendered,
            format!(
                "{}\npublic enum Entity: String {{\n    case User = \"User\"\n}}\n",
                header_and_imports()
            )
        );
    }

    #[test]
    fn test_sections_follow_fixed_order() {
        let mut catalog = Catalog::new();
        catalog.insert(Category::Nibs, ResourceRecord::from_file(Path::new("Cell.xib")));
        catalog.insert(Category::Entities, ResourceRecord::from_value("User"));
        catalog.insert(Category::Segues, ResourceRecord::from_value("show"));
        catalog.insert(Category::ReusableCells, ResourceRecord::from_value("Header"));
        catalog.insert(Category::TableCells, ResourceRecord::from_value("Row"));
        catalog.insert(Category::Storyboards, ResourceRecord::from_file(Path::new("Main.storyboard")));
        catalog.insert(Category::ScreenIdentifiers, ResourceRecord::from_value("Home"));
        catalog.insert(Category::Images, ResourceRecord::from_file(Path::new("logo.png")));

        let config = EmitConfig::default();
        let rendered = DeclarationGenerator::new(&catalog, &config).render();
        let order = [
            "public enum Image",
            "extension UIImage",
            "public enum ViewController",
            "public enum Storyboard",
            "extension UIStoryboard ",
            "public enum TableViewCell",
            "public enum CollectionViewReusableCell",
            "public enum Segue",
            "extension UIStoryboardSegue",
            "public enum Entity",
            "public enum Nib",
            "extension UINib",
            "extension NSNib",
        ];
        let positions: Vec<usize> = order.iter().map(|needle| rendered.find(needle).unwrap()).collect();
        assert!(positions.windows(2).all(|pair| pair[0] < pair[1]), "{positions:?}");
        assert!(!rendered.contains("public enum CollectionViewCell"));
    }

    #[test]
    fn test_storyboards_without_identifiers_emit_nothing() {
        let mut catalog = Catalog::new();
        catalog.insert(Category::Storyboards, ResourceRecord::from_file(Path::new("Main.storyboard")));
        let config = EmitConfig::default();
        assert_eq!(DeclarationGenerator::new(&catalog, &config).render(), header_and_imports());
    }
}
