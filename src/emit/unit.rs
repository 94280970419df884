//! The closed set of emission units and the structural ones (lines, headers, conditionals, aggregates).
//!
//! Declarations with real content live next door: [`Method`] and [`Argument`] in `method.rs`, [`ConstantGroup`] and
//! [`Extension`] in `group.rs`.

use super::config::EmitConfig;
use super::group::{ConstantGroup, Extension};
use super::method::{Argument, Method};
use super::writer::EmitWriter;

/// A node of the emission tree.
///
/// Each variant renders itself given the indentation depth (in columns) chosen by its parent. Units that open a
/// block (`Method` bodies, `ConstantGroup` cases, `Extension` members) render their children one indentation step
/// deeper; `Conditional` and `Aggregate` are transparent and pass their own depth through.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Unit {
    Line(Line),
    CommentHeader(CommentHeader),
    Argument(Argument),
    Method(Method),
    ConstantGroup(ConstantGroup),
    Extension(Extension),
    Conditional(Conditional),
    Aggregate(Vec<Unit>),
}

impl Unit {
    /// Render this unit at `depth` columns.
    pub fn render(&self, depth: usize, config: &EmitConfig) -> String {
        match self {
            Unit::Line(line) => line.render(depth, config),
            Unit::CommentHeader(header) => header.render(depth, config),
            Unit::Argument(argument) => argument.render(),
            Unit::Method(method) => method.render(depth, config),
            Unit::ConstantGroup(group) => group.render(depth, config),
            Unit::Extension(extension) => extension.render(depth, config),
            Unit::Conditional(conditional) => conditional.render(depth, config),
            Unit::Aggregate(units) => units.iter().map(|unit| unit.render(depth, config)).collect(),
        }
    }

    /// Bundle units so they render in order with no separators.
    pub fn aggregate(units: impl IntoIterator<Item = Unit>) -> Self {
        Unit::Aggregate(units.into_iter().collect())
    }

    /// Several lines rendered at the same depth (a method body, typically).
    pub fn lines(lines: impl IntoIterator<Item = Line>) -> Self {
        Unit::Aggregate(lines.into_iter().map(Unit::Line).collect())
    }
}

impl From<Line> for Unit {
    fn from(line: Line) -> Self {
        Unit::Line(line)
    }
}

impl From<CommentHeader> for Unit {
    fn from(header: CommentHeader) -> Self {
        Unit::CommentHeader(header)
    }
}

impl From<Argument> for Unit {
    fn from(argument: Argument) -> Self {
        Unit::Argument(argument)
    }
}

impl From<Method> for Unit {
    fn from(method: Method) -> Self {
        Unit::Method(method)
    }
}

impl From<ConstantGroup> for Unit {
    fn from(group: ConstantGroup) -> Self {
        Unit::ConstantGroup(group)
    }
}

impl From<Extension> for Unit {
    fn from(extension: Extension) -> Self {
        Unit::Extension(extension)
    }
}

impl From<Conditional> for Unit {
    fn from(conditional: Conditional) -> Self {
        Unit::Conditional(conditional)
    }
}

/// A literal line, optionally nested a number of steps deeper than the depth it is rendered at.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    text: String,
    nesting: usize,
}

impl Line {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            nesting: 0,
        }
    }

    /// A line `nesting` indentation steps deeper than its siblings.
    pub fn nested(text: impl Into<String>, nesting: usize) -> Self {
        Self {
            text: text.into(),
            nesting,
        }
    }

    pub fn render(&self, depth: usize, config: &EmitConfig) -> String {
        let mut writer = EmitWriter::new(depth + self.nesting * config.indent_width, config.indent_width);
        writer.writeln(&self.text);
        writer.finish()
    }
}

/// A block of `//` comment lines.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommentHeader {
    lines: Vec<String>,
}

impl CommentHeader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one comment line; an empty string renders as a bare `//`.
    pub fn append(&mut self, line: impl Into<String>) {
        self.lines.push(line.into());
    }

    pub fn render(&self, depth: usize, config: &EmitConfig) -> String {
        let mut writer = EmitWriter::new(depth, config.indent_width);
        for line in &self.lines {
            if line.is_empty() {
                writer.writeln("//");
            } else {
                writer.writeln(&format!("//  {line}"));
            }
        }
        writer.finish()
    }
}

/// Two alternative subtrees selected by a compilation condition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Conditional {
    condition: String,
    if_branch: Box<Unit>,
    else_branch: Box<Unit>,
    line_breaks: bool,
}

impl Conditional {
    pub fn new(condition: impl Into<String>, if_branch: impl Into<Unit>, else_branch: impl Into<Unit>) -> Self {
        Self {
            condition: condition.into(),
            if_branch: Box::new(if_branch.into()),
            else_branch: Box::new(else_branch.into()),
            line_breaks: false,
        }
    }

    /// Break the line after `#if` and `#else`.
    ///
    /// Needed when the branches are bare lines (imports); block units such as extensions start with their own
    /// newline.
    pub fn with_line_breaks(mut self) -> Self {
        self.line_breaks = true;
        self
    }

    pub fn render(&self, depth: usize, config: &EmitConfig) -> String {
        let mut writer = EmitWriter::new(depth, config.indent_width);

        writer.newline();
        writer.write(&format!("#if {}", self.condition));
        if self.line_breaks {
            writer.newline();
        }
        writer.raw(&self.if_branch.render(depth, config));

        writer.write("#else");
        if self.line_breaks {
            writer.newline();
        }
        writer.raw(&self.else_branch.render(depth, config));

        writer.writeln("#endif");
        writer.finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> EmitConfig {
        EmitConfig::default()
    }

    #[test]
    fn test_line_renders_with_newline() {
        assert_eq!(Line::new("import UIKit").render(0, &config()), "import UIKit\n");
        assert_eq!(Line::new("return x").render(8, &config()), "        return x\n");
    }

    #[test]
    fn test_nested_line() {
        let line = Line::nested("body()", 1);
        assert_eq!(line.render(4, &config()), "        body()\n");
    }

    #[test]
    fn test_comment_header() {
        let mut header = CommentHeader::new();
        header.append("");
        header.append("Rigid.swift");
        header.append("");
        assert_eq!(header.render(0, &config()), "//\n//  Rigid.swift\n//\n");
    }

    #[test]
    fn test_conditional_with_line_breaks() {
        let conditional =
            Conditional::new("os(iOS)", Line::new("import UIKit"), Line::new("import AppKit")).with_line_breaks();
        assert_eq!(
            conditional.render(0, &config()),
            "\n#if os(iOS)\nimport UIKit\n#else\nimport AppKit\n#endif\n"
        );
    }

    #[test]
    fn test_conditional_without_line_breaks_relies_on_branches() {
        let conditional = Conditional::new("os(iOS)", Line::new("a"), Line::new("b"));
        assert_eq!(conditional.render(0, &config()), "\n#if os(iOS)a\n#elseb\n#endif\n");
    }

    #[test]
    fn test_aggregate_concatenates_in_order() {
        let unit = Unit::aggregate([Line::new("first").into(), Line::new("second").into()]);
        assert_eq!(unit.render(0, &config()), "first\nsecond\n");
    }

    #[test]
    fn test_empty_aggregate_renders_nothing() {
        assert_eq!(Unit::aggregate([]).render(4, &config()), "");
    }

    #[test]
    fn test_lines_share_depth() {
        let body = Unit::lines([Line::new("if x {"), Line::nested("y()", 1), Line::new("}")]);
        assert_eq!(body.render(4, &config()), "    if x {\n        y()\n    }\n");
    }

    #[test]
    fn test_argument_unit_renders_signature_fragment() {
        let unit: Unit = Argument::labeled("named", "name", "Image").into();
        assert_eq!(unit.render(8, &config()), "named name: Image");
    }
}
