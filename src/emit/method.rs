//! Member declarations: callable signatures with optional bodies.

use super::config::EmitConfig;
use super::unit::{Line, Unit};
use super::writer::EmitWriter;

/// The four callable shapes the generator emits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MethodKind {
    Static,
    Instance,
    Initializer,
    Convenience,
}

impl MethodKind {
    pub fn keyword(self) -> &'static str {
        match self {
            MethodKind::Static => "static func",
            MethodKind::Instance => "func",
            MethodKind::Initializer => "init",
            MethodKind::Convenience => "convenience init",
        }
    }

    /// Initializers are anonymous; functions carry a name.
    pub fn is_named(self) -> bool {
        matches!(self, MethodKind::Static | MethodKind::Instance)
    }
}

/// A labeled argument: `label? name: type`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Argument {
    label: Option<String>,
    name: String,
    ty: String,
}

impl Argument {
    pub fn new(name: impl Into<String>, ty: impl Into<String>) -> Self {
        Self {
            label: None,
            name: name.into(),
            ty: ty.into(),
        }
    }

    /// An argument with an external label distinct from its name.
    pub fn labeled(label: impl Into<String>, name: impl Into<String>, ty: impl Into<String>) -> Self {
        Self {
            label: Some(label.into()),
            name: name.into(),
            ty: ty.into(),
        }
    }

    pub fn render(&self) -> String {
        match &self.label {
            Some(label) => format!("{label} {}: {}", self.name, self.ty),
            None => format!("{}: {}", self.name, self.ty),
        }
    }
}

/// A member declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Method {
    kind: MethodKind,
    name: Option<String>,
    arguments: Vec<Argument>,
    return_type: Option<String>,
    body: Option<Box<Unit>>,
}

impl Method {
    pub fn new(kind: MethodKind) -> Self {
        Self {
            kind,
            name: None,
            arguments: Vec::new(),
            return_type: None,
            body: None,
        }
    }

    /// Shorthand for a named `Static`/`Instance` method.
    pub fn named(kind: MethodKind, name: impl Into<String>) -> Self {
        Self::new(kind).with_name(name)
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_argument(mut self, argument: Argument) -> Self {
        self.arguments.push(argument);
        self
    }

    pub fn with_arguments(mut self, arguments: impl IntoIterator<Item = Argument>) -> Self {
        self.arguments.extend(arguments);
        self
    }

    pub fn returning(mut self, return_type: impl Into<String>) -> Self {
        self.return_type = Some(return_type.into());
        self
    }

    pub fn with_body(mut self, body: impl Into<Unit>) -> Self {
        self.body = Some(Box::new(body.into()));
        self
    }

    /// Body made of lines, each at the body's depth plus its own nesting.
    pub fn with_body_lines(self, lines: impl IntoIterator<Item = Line>) -> Self {
        self.with_body(Unit::lines(lines))
    }

    pub fn kind(&self) -> MethodKind {
        self.kind
    }

    pub fn has_body(&self) -> bool {
        self.body.is_some()
    }

    fn signature(&self) -> String {
        let mut signature = String::from(self.kind.keyword());
        if self.kind.is_named() {
            if let Some(name) = &self.name {
                signature.push(' ');
                signature.push_str(name);
            }
        }

        let arguments: Vec<String> = self.arguments.iter().map(Argument::render).collect();
        signature.push('(');
        signature.push_str(&arguments.join(", "));
        signature.push(')');

        if let Some(return_type) = &self.return_type {
            signature.push_str(" -> ");
            signature.push_str(return_type);
        }
        signature
    }

    /// Render the signature at `depth`; a body is rendered one step deeper and closed at `depth`.
    ///
    /// The output does not end with a newline, so the enclosing block decides the spacing.
    pub fn render(&self, depth: usize, config: &EmitConfig) -> String {
        let mut writer = EmitWriter::new(depth, config.indent_width);
        writer.write(&self.signature());

        if let Some(body) = &self.body {
            writer.write(" {");
            writer.newline();
            writer.raw(&body.render(writer.child_depth(), config));
            writer.write("}");
        }

        writer.finish()
    }
}
