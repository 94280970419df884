//! Map directory entries to what the scanner does with them.

use std::path::Path;

/// Extensions of raster and vector images, matched case-sensitively.
pub const IMAGE_EXTENSIONS: &[&str] = &["png", "pdf", "jpg", "jpeg", "tiff"];

pub const NIB_EXTENSION: &str = "xib";
pub const STORYBOARD_EXTENSION: &str = "storyboard";
pub const MODEL_BUNDLE_EXTENSION: &str = "xcdatamodeld";
pub const MODEL_EXTENSION: &str = "xcdatamodel";

/// Name of the markup file inside a model package.
pub const MODEL_CONTENTS: &str = "contents";

/// Directories the walker yields but never descends into.
pub const PACKAGE_EXTENSIONS: &[&str] = &[
    "xcodeproj",
    "xcworkspace",
    MODEL_BUNDLE_EXTENSION,
    MODEL_EXTENSION,
    "app",
    "bundle",
    "framework",
    "playground",
];

/// What the scanner does with one entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    /// File name becomes an image identifier.
    Image,
    /// File name becomes a nib identifier.
    Nib,
    /// File name becomes a storyboard identifier and the document is searched.
    Storyboard,
    /// Versioned data model; its model packages are scanned in turn.
    ModelBundle,
    /// Single data model; its `contents` document is searched for entities.
    Model,
    Ignored,
}

/// Classify an entry by its extension.
///
/// Package directories are recognised by name alone, so a plain file that happens to end in `.xcdatamodel` is
/// treated as a model too and simply yields nothing when its `contents` is missing.
pub fn classify(path: &Path) -> EntryKind {
    let Some(extension) = path.extension().and_then(|ext| ext.to_str()) else {
        return EntryKind::Ignored;
    };

    match extension {
        ext if IMAGE_EXTENSIONS.contains(&ext) => EntryKind::Image,
        NIB_EXTENSION => EntryKind::Nib,
        STORYBOARD_EXTENSION => EntryKind::Storyboard,
        MODEL_BUNDLE_EXTENSION => EntryKind::ModelBundle,
        MODEL_EXTENSION => EntryKind::Model,
        _ => EntryKind::Ignored,
    }
}

/// Whether a directory is an opaque package.
pub fn is_package(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| PACKAGE_EXTENSIONS.contains(&ext))
}

/// Whether an entry is hidden (its name starts with a dot).
pub fn is_hidden(path: &Path) -> bool {
    path.file_name()
        .and_then(|name| name.to_str())
        .is_some_and(|name| name.starts_with('.'))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_images() {
        for name in ["a.png", "a@2x.png", "b.pdf", "c.jpg", "d.jpeg", "e.tiff"] {
            assert_eq!(classify(Path::new(name)), EntryKind::Image, "{name}");
        }
    }

    #[test]
    fn test_extensions_are_case_sensitive() {
        assert_eq!(classify(Path::new("a.PNG")), EntryKind::Ignored);
        assert_eq!(classify(Path::new("Main.Storyboard")), EntryKind::Ignored);
    }

    #[test]
    fn test_layout_and_model_kinds() {
        assert_eq!(classify(Path::new("Cell.xib")), EntryKind::Nib);
        assert_eq!(classify(Path::new("Main.storyboard")), EntryKind::Storyboard);
        assert_eq!(classify(Path::new("Model.xcdatamodeld")), EntryKind::ModelBundle);
        assert_eq!(classify(Path::new("Model.xcdatamodeld/Model.xcdatamodel")), EntryKind::Model);
    }

    #[test]
    fn test_ignored() {
        assert_eq!(classify(Path::new("main.swift")), EntryKind::Ignored);
        assert_eq!(classify(Path::new("README")), EntryKind::Ignored);
        assert_eq!(classify(Path::new("Info.plist")), EntryKind::Ignored);
    }

    #[test]
    fn test_packages() {
        assert!(is_package(Path::new("App.xcodeproj")));
        assert!(is_package(Path::new("Model.xcdatamodeld")));
        assert!(is_package(Path::new("Kit.framework")));
        assert!(!is_package(Path::new("Assets")));
        assert!(!is_package(Path::new("Main.storyboard")));
    }

    #[test]
    fn test_hidden() {
        assert!(is_hidden(Path::new(".git")));
        assert!(is_hidden(Path::new("dir/.DS_Store")));
        assert!(!is_hidden(Path::new("dir/visible.png")));
    }
}
