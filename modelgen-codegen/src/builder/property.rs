//! Single property declaration builder.

use modelgen_ir::ScalarType;

use crate::types::type_info;

/// Import dragged in by list-typed properties.
const COLLECTIONS_IMPORT: &str = "System.Collections.Generic";

/// Type of an emitted property.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PropertyType {
    /// A scalar from the fixed supported set.
    Scalar(ScalarType),
    /// A reference to an emitted entity type.
    Entity(String),
}

impl PropertyType {
    fn text(&self) -> String {
        match self {
            PropertyType::Scalar(ty) => type_info(*ty).keyword.to_string(),
            PropertyType::Entity(name) => name.clone(),
        }
    }
}

/// Property cardinality.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Cardinality {
    /// One value.
    #[default]
    Single,
    /// A list of values.
    List,
}

/// Caller-requested initializer override.
///
/// `Auto` lets the builder pick an initializer from the type; the explicit
/// variants exist because some consumers need to win over that choice
/// (generated tests want literal `null`, DTOs want safe defaults).
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum InitializerPolicy {
    /// Derive the initializer from cardinality and type.
    #[default]
    Auto,
    /// Use the given expression verbatim.
    Custom(String),
    /// Emit no initializer at all.
    Omit,
    /// Initialize to literal `null`.
    Null,
    /// Initialize to the language `default` placeholder.
    Default,
}

/// One built property: the declaration line plus the imports it requires.
///
/// The imports belong to the enclosing structure, not the property itself;
/// [`super::StructureBuilder::property`] bubbles them up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuiltProperty {
    /// The full declaration line.
    pub declaration: String,
    /// Imports required by the property's type or initializer.
    pub imports: Vec<String>,
}

/// Builds one property declaration line.
///
/// # Example
///
/// ```
/// use modelgen_codegen::builder::{PropertyBuilder, PropertyType};
/// use modelgen_ir::ScalarType;
///
/// let built = PropertyBuilder::new("Title", PropertyType::Scalar(ScalarType::Text)).build();
/// assert_eq!(
///     built.declaration,
///     "public string Title { get; set; } = string.Empty;"
/// );
/// ```
#[derive(Debug, Clone)]
pub struct PropertyBuilder {
    name: String,
    ty: PropertyType,
    cardinality: Cardinality,
    nullable: bool,
    policy: InitializerPolicy,
    collection_accessor: Option<String>,
    modifier: Option<String>,
}

impl PropertyBuilder {
    /// Create a builder for a single, required, auto-initialized property.
    pub fn new(name: impl Into<String>, ty: PropertyType) -> Self {
        Self {
            name: name.into(),
            ty,
            cardinality: Cardinality::Single,
            nullable: false,
            policy: InitializerPolicy::Auto,
            collection_accessor: None,
            modifier: Some("public".to_string()),
        }
    }

    /// Set the cardinality.
    pub fn cardinality(mut self, cardinality: Cardinality) -> Self {
        self.cardinality = cardinality;
        self
    }

    /// Shorthand for a list-of property.
    pub fn list(self) -> Self {
        self.cardinality(Cardinality::List)
    }

    /// Make the property nullable.
    pub fn nullable(mut self) -> Self {
        self.nullable = true;
        self
    }

    /// Set the initializer policy.
    pub fn policy(mut self, policy: InitializerPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Use a caller-supplied initializer expression.
    pub fn custom_initializer(self, expr: impl Into<String>) -> Self {
        self.policy(InitializerPolicy::Custom(expr.into()))
    }

    /// Emit the property without any initializer.
    pub fn no_initializer(self) -> Self {
        self.policy(InitializerPolicy::Omit)
    }

    /// Back the property by an accessor expression instead of storage,
    /// for persisted-set properties.
    pub fn collection_accessor(mut self, expr: impl Into<String>) -> Self {
        self.collection_accessor = Some(expr.into());
        self
    }

    /// Override the visibility modifier.
    pub fn modifier(mut self, modifier: impl Into<String>) -> Self {
        self.modifier = Some(modifier.into());
        self
    }

    /// Drop the visibility modifier (interface members).
    pub fn bare(mut self) -> Self {
        self.modifier = None;
        self
    }

    fn type_text(&self) -> String {
        let base = self.ty.text();
        let mut text = match self.cardinality {
            Cardinality::Single => base,
            Cardinality::List => format!("List<{}>", base),
        };
        if self.nullable {
            text.push('?');
        }
        text
    }

    /// Pick the accessor-and-initializer tail of the declaration.
    ///
    /// First match wins: custom initializer, explicit no-initializer,
    /// null placeholder, default placeholder, nullable, list,
    /// collection accessor, type-table default, construct-new fallback.
    fn tail(&self) -> String {
        match &self.policy {
            InitializerPolicy::Custom(expr) => return format!(" {{ get; set; }} = {};", expr),
            InitializerPolicy::Omit => return " { get; set; }".to_string(),
            InitializerPolicy::Null => return " { get; set; } = null;".to_string(),
            InitializerPolicy::Default => return " { get; set; } = default;".to_string(),
            InitializerPolicy::Auto => {}
        }
        if self.nullable {
            return " { get; set; }".to_string();
        }
        if self.cardinality == Cardinality::List {
            return format!(" {{ get; set; }} = new List<{}>();", self.ty.text());
        }
        if let Some(accessor) = &self.collection_accessor {
            return format!(" => {};", accessor);
        }
        let init = match &self.ty {
            PropertyType::Scalar(ty) => type_info(*ty).default_value.to_string(),
            PropertyType::Entity(name) => format!("new {}()", name),
        };
        format!(" {{ get; set; }} = {};", init)
    }

    fn imports(&self) -> Vec<String> {
        let mut imports = Vec::new();
        if self.cardinality == Cardinality::List {
            imports.push(COLLECTIONS_IMPORT.to_string());
        }
        if let PropertyType::Scalar(ty) = &self.ty
            && let Some(import) = type_info(*ty).import
        {
            imports.push(import.to_string());
        }
        imports
    }

    /// Build the declaration line and its import requirements.
    pub fn build(&self) -> BuiltProperty {
        let mut declaration = String::new();
        if let Some(modifier) = &self.modifier {
            declaration.push_str(modifier);
            declaration.push(' ');
        }
        declaration.push_str(&self.type_text());
        declaration.push(' ');
        declaration.push_str(&self.name);
        declaration.push_str(&self.tail());

        BuiltProperty {
            declaration,
            imports: self.imports(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scalar(ty: ScalarType) -> PropertyType {
        PropertyType::Scalar(ty)
    }

    #[test]
    fn test_scalar_default_initializers() {
        let built = PropertyBuilder::new("Count", scalar(ScalarType::Int)).build();
        assert_eq!(built.declaration, "public int Count { get; set; } = 0;");

        let built = PropertyBuilder::new("Active", scalar(ScalarType::Bool)).build();
        assert_eq!(
            built.declaration,
            "public bool Active { get; set; } = false;"
        );

        let built = PropertyBuilder::new("CreatedAt", scalar(ScalarType::Timestamp)).build();
        assert_eq!(
            built.declaration,
            "public DateTime CreatedAt { get; set; } = DateTime.MinValue;"
        );
    }

    #[test]
    fn test_custom_initializer_wins_over_everything() {
        let built = PropertyBuilder::new("Books", PropertyType::Entity("Book".into()))
            .list()
            .custom_initializer("LoadBooks()")
            .build();
        assert_eq!(
            built.declaration,
            "public List<Book> Books { get; set; } = LoadBooks();"
        );
    }

    #[test]
    fn test_omit_beats_null_and_defaults() {
        let built = PropertyBuilder::new("Name", scalar(ScalarType::Text))
            .no_initializer()
            .build();
        assert_eq!(built.declaration, "public string Name { get; set; }");
    }

    #[test]
    fn test_null_placeholder() {
        let built = PropertyBuilder::new("Name", scalar(ScalarType::Text))
            .policy(InitializerPolicy::Null)
            .build();
        assert_eq!(built.declaration, "public string Name { get; set; } = null;");
    }

    #[test]
    fn test_default_placeholder() {
        let built = PropertyBuilder::new("Name", scalar(ScalarType::Text))
            .policy(InitializerPolicy::Default)
            .build();
        assert_eq!(
            built.declaration,
            "public string Name { get; set; } = default;"
        );
    }

    #[test]
    fn test_nullable_suppresses_initializer() {
        let built = PropertyBuilder::new("Rating", scalar(ScalarType::Int))
            .nullable()
            .build();
        assert_eq!(built.declaration, "public int? Rating { get; set; }");
    }

    #[test]
    fn test_list_initializes_empty() {
        let built = PropertyBuilder::new("Books", PropertyType::Entity("Book".into()))
            .list()
            .build();
        assert_eq!(
            built.declaration,
            "public List<Book> Books { get; set; } = new List<Book>();"
        );
        assert_eq!(built.imports, vec![COLLECTIONS_IMPORT.to_string()]);
    }

    #[test]
    fn test_collection_accessor() {
        let built = PropertyBuilder::new("Books", PropertyType::Entity("DbSet<Book>".into()))
            .collection_accessor("Set<Book>()")
            .build();
        assert_eq!(
            built.declaration,
            "public DbSet<Book> Books => Set<Book>();"
        );
    }

    #[test]
    fn test_no_initializer_beats_accessor() {
        let built = PropertyBuilder::new("Books", PropertyType::Entity("DbSet<Book>".into()))
            .collection_accessor("Set<Book>()")
            .no_initializer()
            .build();
        assert_eq!(built.declaration, "public DbSet<Book> Books { get; set; }");
    }

    #[test]
    fn test_entity_fallback_constructs_instance() {
        let built = PropertyBuilder::new("Author", PropertyType::Entity("Author".into())).build();
        assert_eq!(
            built.declaration,
            "public Author Author { get; set; } = new Author();"
        );
    }

    #[test]
    fn test_scalar_imports_are_registered() {
        let built = PropertyBuilder::new("Price", scalar(ScalarType::Double)).build();
        assert_eq!(built.imports, vec!["System.Globalization".to_string()]);

        let built = PropertyBuilder::new("At", scalar(ScalarType::Timestamp)).build();
        assert_eq!(built.imports, vec!["System".to_string()]);
    }

    #[test]
    fn test_nullable_list_keeps_collections_import() {
        let built = PropertyBuilder::new("Tags", scalar(ScalarType::Text))
            .list()
            .nullable()
            .build();
        assert_eq!(built.declaration, "public List<string>? Tags { get; set; }");
        assert_eq!(built.imports, vec![COLLECTIONS_IMPORT.to_string()]);
    }

    #[test]
    fn test_bare_interface_member() {
        let built = PropertyBuilder::new("Id", scalar(ScalarType::Int))
            .bare()
            .no_initializer()
            .build();
        assert_eq!(built.declaration, "int Id { get; set; }");
    }
}
