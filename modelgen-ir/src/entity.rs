//! Entity schema types.

use serde::Deserialize;

/// Scalar field types supported by the generator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScalarType {
    /// 32-bit signed integer.
    Int,
    /// Boolean.
    Bool,
    /// Unicode text.
    Text,
    /// Single-precision floating point.
    Float,
    /// Double-precision floating point.
    Double,
    /// Date and time.
    Timestamp,
}

impl ScalarType {
    /// Schema-facing name of the type.
    pub fn as_str(&self) -> &'static str {
        match self {
            ScalarType::Int => "int",
            ScalarType::Bool => "bool",
            ScalarType::Text => "text",
            ScalarType::Float => "float",
            ScalarType::Double => "double",
            ScalarType::Timestamp => "timestamp",
        }
    }
}

/// A scalar field on an entity. Immutable after load.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Field {
    /// Field name (unique case-insensitively within its entity).
    pub name: String,
    /// Scalar type.
    #[serde(rename = "type")]
    pub ty: ScalarType,
}

impl Field {
    /// Create a new field.
    pub fn new(name: impl Into<String>, ty: ScalarType) -> Self {
        Self {
            name: name.into(),
            ty,
        }
    }
}

/// A user-authored data-model definition.
///
/// Relations are declared on the *parent* side: listing `Child` in
/// `has_many` makes `Child` the "many" side of a 1:N and puts the foreign
/// key on `Child`; listing it in `has_one` makes `Child` a required,
/// lifecycle-bound sub-model that still holds the foreign key back to its
/// owner. `maybe_has_one` is the one exception: the optional key lives on
/// the declaring entity itself.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Entity {
    /// Entity name (unique within the schema).
    pub name: String,
    /// Ordered scalar fields.
    #[serde(default)]
    pub fields: Vec<Field>,
    /// Entities of which this entity has many.
    #[serde(default)]
    pub has_many: Vec<String>,
    /// Entities this entity owns exactly one of.
    #[serde(default)]
    pub has_one: Vec<String>,
    /// Entities this entity optionally references one of.
    #[serde(default)]
    pub maybe_has_one: Vec<String>,
}

impl Entity {
    /// Create an entity with no fields or relations.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            fields: Vec::new(),
            has_many: Vec::new(),
            has_one: Vec::new(),
            maybe_has_one: Vec::new(),
        }
    }

    /// Add a field.
    pub fn field(mut self, name: impl Into<String>, ty: ScalarType) -> Self {
        self.fields.push(Field::new(name, ty));
        self
    }

    /// Declare a 1:N relation to `child`.
    pub fn has_many(mut self, child: impl Into<String>) -> Self {
        self.has_many.push(child.into());
        self
    }

    /// Declare a required owned child.
    pub fn has_one(mut self, child: impl Into<String>) -> Self {
        self.has_one.push(child.into());
        self
    }

    /// Declare an optional reference.
    pub fn maybe_has_one(mut self, target: impl Into<String>) -> Self {
        self.maybe_has_one.push(target.into());
        self
    }

    /// Names of entities this entity requires to exist first, i.e. the
    /// parent side of every non-self required relation declared on it.
    ///
    /// Note the direction: declaring `has_many`/`has_one` children makes
    /// *those* entities depend on this one, not the reverse. This helper
    /// answers the child-side question used by the scheduler.
    pub fn declares_required_child(&self, child: &str) -> bool {
        if child == self.name {
            return false;
        }
        self.has_many.iter().any(|c| c == child) || self.has_one.iter().any(|c| c == child)
    }
}

/// The full, pre-validated entity list for one run.
///
/// Entity order is the author's order and is preserved everywhere order
/// matters (scheduling, emission).
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Schema {
    /// Entities in authored order.
    pub entities: Vec<Entity>,
}

impl Schema {
    /// Create a schema from an entity list.
    pub fn new(entities: Vec<Entity>) -> Self {
        Self { entities }
    }

    /// Look up an entity by name.
    pub fn get(&self, name: &str) -> Option<&Entity> {
        self.entities.iter().find(|e| e.name == name)
    }

    /// Check whether an entity exists.
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Whether `name` is a required sub-model: some other entity owns it
    /// through `has_one`. Owned entities are lifecycle-bound to their owner
    /// and get no independent top-level create/delete surface. Self-edges
    /// do not count as ownership.
    pub fn is_required_submodel(&self, name: &str) -> bool {
        self.entities
            .iter()
            .filter(|e| e.name != name)
            .any(|e| e.has_one.iter().any(|c| c == name))
    }
}
