//! Emission configuration for the generated declaration document

/// Name of the generated file inside the destination directory.
pub const DEFAULT_FILE_NAME: &str = "Rigid.swift";

/// Compilation condition selecting the UIKit branch of platform-specific blocks.
pub const DEFAULT_PLATFORM_CONDITION: &str = "os(iOS) || os(tvOS)";

/// One-line description written into the comment header.
pub const DEFAULT_DESCRIPTION: &str = "Rigid: strongly-typed resource identifiers";

/// Emission configuration
#[derive(Debug, Clone)]
pub struct EmitConfig {
    /// Number of spaces per indentation step
    pub indent_width: usize,
    /// Condition of the `#if` guarding UIKit code (the `#else` branch targets AppKit)
    pub platform_condition: String,
    /// File name of the generated document
    pub file_name: String,
    /// Description line of the comment header
    pub description: String,
}

impl Default for EmitConfig {
    fn default() -> Self {
        Self {
            indent_width: 4,
            platform_condition: DEFAULT_PLATFORM_CONDITION.to_string(),
            file_name: DEFAULT_FILE_NAME.to_string(),
            description: DEFAULT_DESCRIPTION.to_string(),
        }
    }
}

impl EmitConfig {
    /// Create a new config with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the indentation width
    pub fn with_indent_width(mut self, width: usize) -> Self {
        self.indent_width = width;
        self
    }

    /// Set the platform condition
    pub fn with_condition(mut self, condition: impl Into<String>) -> Self {
        self.platform_condition = condition.into();
        self
    }

    /// Set the generated file name
    pub fn with_file_name(mut self, name: impl Into<String>) -> Self {
        self.file_name = name.into();
        self
    }
}
