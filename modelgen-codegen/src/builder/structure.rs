//! In-memory representation of one emitted class or interface.

use std::collections::BTreeSet;

use super::{BuiltProperty, LineEmitter, PropertyBuilder, normalize_spaces};

/// Whether a structure serializes as a class or an interface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StructureKind {
    #[default]
    Class,
    Interface,
}

impl StructureKind {
    fn keyword(&self) -> &'static str {
        match self {
            StructureKind::Class => "class",
            StructureKind::Interface => "interface",
        }
    }
}

/// One item in a structure body, emitted in insertion order.
#[derive(Debug, Clone)]
enum BodyItem {
    Line(String),
    Blank,
    Region { name: String, body: Vec<BodyItem> },
    Nested(StructureBuilder),
}

/// Accumulates one emitted class or interface before serialization.
///
/// Collects modifiers, base-type references, attributes, body content, and
/// the imports bubbled up from properties and nested structures. Appended
/// lines are whitespace-normalized so callers can concatenate fragments
/// freely.
///
/// # Example
///
/// ```
/// use modelgen_codegen::builder::{PropertyBuilder, PropertyType, StructureBuilder};
/// use modelgen_ir::ScalarType;
///
/// let class = StructureBuilder::class("Book")
///     .base("EntityBase")
///     .property(PropertyBuilder::new(
///         "Title",
///         PropertyType::Scalar(ScalarType::Text),
///     ));
/// let code = class.render();
/// assert!(code.starts_with("public class Book : EntityBase"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct StructureBuilder {
    name: String,
    kind: StructureKind,
    modifiers: Vec<String>,
    bases: Vec<String>,
    attributes: Vec<String>,
    imports: BTreeSet<String>,
    body: Vec<BodyItem>,
}

impl StructureBuilder {
    /// Create a public class builder.
    pub fn class(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: StructureKind::Class,
            modifiers: vec!["public".to_string()],
            ..Self::default()
        }
    }

    /// Create a public interface builder.
    pub fn interface(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: StructureKind::Interface,
            modifiers: vec!["public".to_string()],
            ..Self::default()
        }
    }

    /// Name of the structure.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Add a modifier. Duplicates are removed at serialize time.
    pub fn modifier(mut self, modifier: impl Into<String>) -> Self {
        self.modifiers.push(modifier.into());
        self
    }

    /// Add a base class or interface reference.
    pub fn base(mut self, base: impl Into<String>) -> Self {
        self.bases.push(base.into());
        self
    }

    /// Add an attribute, emitted as `[attribute]` above the header.
    pub fn attribute(mut self, attribute: impl Into<String>) -> Self {
        self.attributes.push(attribute.into());
        self
    }

    /// Register an import requirement on this structure.
    pub fn import(mut self, import: impl Into<String>) -> Self {
        self.imports.insert(import.into());
        self
    }

    /// Append a body line, collapsing doubled separators.
    pub fn line(mut self, line: impl AsRef<str>) -> Self {
        self.push_line(line);
        self
    }

    /// Append a body line (mutable form for emission callbacks).
    pub fn push_line(&mut self, line: impl AsRef<str>) -> &mut Self {
        self.body.push(BodyItem::Line(normalize_spaces(line.as_ref())));
        self
    }

    /// Append a blank body line.
    pub fn blank(mut self) -> Self {
        self.body.push(BodyItem::Blank);
        self
    }

    /// Build a property and append its declaration, bubbling the imports
    /// the property's type requires up to this structure.
    pub fn property(mut self, property: PropertyBuilder) -> Self {
        self.push_property(property);
        self
    }

    /// Mutable form of [`Self::property`] for emission callbacks.
    pub fn push_property(&mut self, property: PropertyBuilder) -> &mut Self {
        let BuiltProperty {
            declaration,
            imports,
        } = property.build();
        self.imports.extend(imports);
        self.body.push(BodyItem::Line(normalize_spaces(&declaration)));
        self
    }

    /// Append a named region. The scope function receives a scratch builder
    /// whose body and imports become the region content.
    pub fn region(mut self, name: impl Into<String>, scope: impl FnOnce(&mut Self)) -> Self {
        let mut inner = Self::default();
        scope(&mut inner);
        self.imports.extend(inner.imports);
        self.body.push(BodyItem::Region {
            name: name.into(),
            body: inner.body,
        });
        self
    }

    /// Nest another structure inside this one, for artifacts declaring a
    /// root type plus auxiliary types.
    pub fn nested(mut self, nested: StructureBuilder) -> Self {
        self.body.push(BodyItem::Nested(nested));
        self
    }

    /// All imports required by this structure, including nested ones.
    pub fn collect_imports(&self) -> BTreeSet<String> {
        let mut imports = self.imports.clone();
        collect_body_imports(&self.body, &mut imports);
        imports
    }

    fn header(&self) -> String {
        let mut seen = BTreeSet::new();
        let mut parts: Vec<&str> = Vec::new();
        for modifier in &self.modifiers {
            if seen.insert(modifier.as_str()) {
                parts.push(modifier);
            }
        }
        parts.push(self.kind.keyword());
        parts.push(&self.name);
        let mut header = parts.join(" ");
        if !self.bases.is_empty() {
            header.push_str(" : ");
            header.push_str(&self.bases.join(", "));
        }
        header
    }

    /// Serialize into a line emitter.
    pub fn emit(&self, out: &mut LineEmitter) {
        for attribute in &self.attributes {
            out.push_line(&format!("[{}]", attribute));
        }
        out.push_line(&self.header());
        out.open_block();
        emit_body(&self.body, out);
        out.close_block();
    }

    /// Serialize to a standalone string.
    pub fn render(&self) -> String {
        let mut emitter = LineEmitter::csharp();
        self.emit(&mut emitter);
        emitter.build()
    }
}

fn emit_body(body: &[BodyItem], out: &mut LineEmitter) {
    for item in body {
        match item {
            BodyItem::Line(line) => {
                out.push_line(line);
            }
            BodyItem::Blank => {
                out.push_blank();
            }
            BodyItem::Region { name, body } => {
                out.push_line(&format!("#region {}", name));
                emit_body(body, out);
                out.push_line("#endregion");
            }
            BodyItem::Nested(nested) => {
                nested.emit(out);
            }
        }
    }
}

fn collect_body_imports(body: &[BodyItem], imports: &mut BTreeSet<String>) {
    for item in body {
        match item {
            BodyItem::Nested(nested) => {
                imports.extend(nested.collect_imports());
            }
            BodyItem::Region { body, .. } => {
                collect_body_imports(body, imports);
            }
            BodyItem::Line(_) | BodyItem::Blank => {}
        }
    }
}
