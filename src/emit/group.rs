//! Block declarations: the raw-value enums and the extensions that consume them.

use rigid_core::{ResourceRecord, assign_unique_names};

use super::config::EmitConfig;
use super::method::Method;
use super::writer::EmitWriter;

/// One `case name = "raw"` entry of a [`ConstantGroup`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Member {
    pub name: String,
    pub raw_value: String,
}

/// A `public enum <Name>: String` whose cases are the discovered identifiers of one category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConstantGroup {
    name: String,
    members: Vec<Member>,
}

impl ConstantGroup {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            members: Vec::new(),
        }
    }

    /// Build a group from records, disambiguating colliding derived names.
    ///
    /// Members come out sorted by final name, so the output is stable across runs.
    pub fn from_records<'a>(name: impl Into<String>, records: impl IntoIterator<Item = &'a ResourceRecord>) -> Self {
        let name = name.into();
        let members = assign_unique_names(records)
            .into_iter()
            .map(|(symbol, record)| {
                if symbol != record.derived_name() {
                    warn_renamed(&name, record.raw_value(), record.derived_name(), &symbol);
                }
                Member {
                    name: symbol,
                    raw_value: record.raw_value().to_string(),
                }
            })
            .collect();
        Self { name, members }
    }

    /// Add one member, keeping members sorted by name and names unique.
    ///
    /// A name that is already taken gets the smallest free `_2`, `_3`, ... suffix, as in
    /// [`assign_unique_names`].
    pub fn with_member(mut self, name: impl Into<String>, raw_value: impl Into<String>) -> Self {
        let requested = name.into();
        let raw_value = raw_value.into();
        let name = self.free_name(&requested);
        if name != requested {
            warn_renamed(&self.name, &raw_value, &requested, &name);
        }

        let at = self.members.partition_point(|member| member.name < name);
        self.members.insert(at, Member { name, raw_value });
        self
    }

    fn is_taken(&self, name: &str) -> bool {
        self.members.iter().any(|member| member.name == name)
    }

    fn free_name(&self, requested: &str) -> String {
        if !self.is_taken(requested) {
            return requested.to_string();
        }
        let mut suffix = 2;
        loop {
            let candidate = format!("{requested}_{suffix}");
            if !self.is_taken(&candidate) {
                return candidate;
            }
            suffix += 1;
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn members(&self) -> &[Member] {
        &self.members
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn render(&self, depth: usize, config: &EmitConfig) -> String {
        let mut writer = EmitWriter::new(depth, config.indent_width);
        let width = self.members.iter().map(|m| m.name.len()).max().unwrap_or(0);

        writer.newline();
        writer.write(&format!("public enum {}: String {{", self.name));

        writer.indent();
        for member in &self.members {
            writer.newline();
            writer.write(&format!("case {}", member.name));
            writer.pad(width - member.name.len());
            writer.write(&format!(" = \"{}\"", escape_literal(&member.raw_value)));
        }
        writer.dedent();

        writer.newline();
        writer.writeln("}");
        writer.finish()
    }
}

/// An `extension <Type>` holding companion methods.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Extension {
    name: String,
    methods: Vec<Method>,
}

impl Extension {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            methods: Vec::new(),
        }
    }

    pub fn with_method(mut self, method: Method) -> Self {
        self.methods.push(method);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn methods(&self) -> &[Method] {
        &self.methods
    }

    /// Each method is preceded by a blank line.
    pub fn render(&self, depth: usize, config: &EmitConfig) -> String {
        let mut writer = EmitWriter::new(depth, config.indent_width);

        writer.newline();
        writer.write(&format!("extension {} {{", self.name));
        for method in &self.methods {
            writer.blank_lines(2);
            writer.raw(&method.render(writer.child_depth(), config));
        }

        writer.newline();
        writer.writeln("}");
        writer.finish()
    }
}

fn warn_renamed(group: &str, raw: &str, derived: &str, renamed: &str) {
    tracing::warn!(group, raw, derived, renamed, "duplicate symbol name, using a numeric suffix");
}

/// Escape a raw value for use inside a double-quoted string literal.
fn escape_literal(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '\\' => escaped.push_str("\\\\"),
            '"' => escaped.push_str("\\\""),
            '\n' => escaped.push_str("\\n"),
            '\r' => escaped.push_str("\\r"),
            '\t' => escaped.push_str("\\t"),
            _ => escaped.push(c),
        }
    }
    escaped
}
