//! Foreign-key relationship resolution.
//!
//! Relations are declared on the parent side of the schema; the properties
//! they imply surface on the child side (the key holder). The resolver
//! derives that view on demand for one entity at a time, recomputing from
//! the schema on every call so it can never go stale.

use modelgen_ir::{Entity, ForeignProperty, Schema};

/// Default disambiguation prefix for self-referential relations.
const DEFAULT_SELF_PREFIX: &str = "Parent";

/// Resolves the foreign-key-bearing properties implied by the schema's
/// declared relations.
///
/// Callers must only pass entities present in the schema; the resolver
/// performs no name resolution of its own (lints own that) and entities
/// absent from the schema never appear in results.
#[derive(Debug, Clone, Copy)]
pub struct Resolver<'a> {
    schema: &'a Schema,
    self_prefix: &'a str,
}

impl<'a> Resolver<'a> {
    /// Create a resolver with the default self-reference prefix.
    pub fn new(schema: &'a Schema) -> Self {
        Self {
            schema,
            self_prefix: DEFAULT_SELF_PREFIX,
        }
    }

    /// Override the self-reference disambiguation prefix.
    pub fn with_self_prefix(schema: &'a Schema, self_prefix: &'a str) -> Self {
        Self {
            schema,
            self_prefix,
        }
    }

    /// All incoming plural and required-singular relations that must
    /// surface on `target` as foreign-key-bearing properties.
    ///
    /// One entry per distinct incoming edge, in schema order. A self-edge
    /// keeps its cardinality but gets the disambiguation prefix on the
    /// generated names, so a hierarchical entity cannot collide with its
    /// own identity property.
    pub fn foreign_properties(&self, target: &Entity) -> Vec<ForeignProperty> {
        let mut properties = Vec::new();
        for parent in &self.schema.entities {
            if parent.has_many.iter().any(|c| c == &target.name) {
                properties.push(self.incoming(target, parent, true));
            }
            if parent.has_one.iter().any(|c| c == &target.name) {
                properties.push(self.incoming(target, parent, false));
            }
        }
        properties
    }

    /// The optional references declared by `owner` itself.
    ///
    /// Unlike the incoming relations above, an optional relation places
    /// the key on the referencing side, so these resolve from the owner's
    /// own `maybe_has_one` list.
    pub fn optional_references(&self, owner: &Entity) -> Vec<ForeignProperty> {
        owner
            .maybe_has_one
            .iter()
            .map(|name| {
                let is_self = name == &owner.name;
                let property_name = self.property_name(name, is_self);
                ForeignProperty {
                    holder: owner.name.clone(),
                    target: name.clone(),
                    foreign_key_name: format!("{}Id", property_name),
                    property_name,
                    is_self_reference: is_self,
                    is_plural: false,
                    is_optional: true,
                }
            })
            .collect()
    }

    fn incoming(&self, target: &Entity, parent: &Entity, is_plural: bool) -> ForeignProperty {
        let is_self = parent.name == target.name;
        let property_name = self.property_name(&parent.name, is_self);
        ForeignProperty {
            holder: target.name.clone(),
            target: parent.name.clone(),
            foreign_key_name: format!("{}Id", property_name),
            property_name,
            is_self_reference: is_self,
            is_plural,
            is_optional: false,
        }
    }

    fn property_name(&self, target: &str, is_self: bool) -> String {
        if is_self {
            format!("{}{}", self.self_prefix, target)
        } else {
            target.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use modelgen_ir::Entity;

    use super::*;

    fn author_book_schema() -> Schema {
        Schema::new(vec![
            Entity::new("Author")
                .field("Name", modelgen_ir::ScalarType::Text)
                .has_many("Book"),
            Entity::new("Book").field("Title", modelgen_ir::ScalarType::Text),
        ])
    }

    #[test]
    fn test_no_incoming_edges_resolves_empty() {
        let schema = author_book_schema();
        let resolver = Resolver::new(&schema);
        assert!(resolver.foreign_properties(schema.get("Author").unwrap()).is_empty());
    }

    #[test]
    fn test_has_many_surfaces_plural_entry_on_child() {
        let schema = author_book_schema();
        let resolver = Resolver::new(&schema);
        let properties = resolver.foreign_properties(schema.get("Book").unwrap());

        assert_eq!(properties.len(), 1);
        let p = &properties[0];
        assert_eq!(p.holder, "Book");
        assert_eq!(p.target, "Author");
        assert_eq!(p.property_name, "Author");
        assert_eq!(p.foreign_key_name, "AuthorId");
        assert!(p.is_plural);
        assert!(!p.is_optional);
        assert!(!p.is_self_reference);
    }

    #[test]
    fn test_has_one_surfaces_required_single_entry_on_child() {
        let schema = Schema::new(vec![
            Entity::new("Order").has_one("Invoice"),
            Entity::new("Invoice"),
        ]);
        let resolver = Resolver::new(&schema);
        let properties = resolver.foreign_properties(schema.get("Invoice").unwrap());

        assert_eq!(properties.len(), 1);
        assert!(properties[0].is_required_single());
        assert_eq!(properties[0].target, "Order");
        assert!(schema.is_required_submodel("Invoice"));
    }

    #[test]
    fn test_self_reference_gets_disambiguation_prefix() {
        let schema = Schema::new(vec![Entity::new("Node")
            .field("Id", modelgen_ir::ScalarType::Int)
            .has_many("Node")]);
        let resolver = Resolver::new(&schema);
        let properties = resolver.foreign_properties(schema.get("Node").unwrap());

        assert_eq!(properties.len(), 1);
        let p = &properties[0];
        assert!(p.is_self_reference);
        assert!(p.is_plural);
        assert_eq!(p.property_name, "ParentNode");
        assert_eq!(p.foreign_key_name, "ParentNodeId");
        assert_ne!(p.property_name, "Id");
    }

    #[test]
    fn test_custom_self_prefix() {
        let schema = Schema::new(vec![Entity::new("Node").has_many("Node")]);
        let resolver = Resolver::with_self_prefix(&schema, "Owner");
        let properties = resolver.foreign_properties(schema.get("Node").unwrap());
        assert_eq!(properties[0].property_name, "OwnerNode");
    }

    #[test]
    fn test_one_entry_per_distinct_incoming_edge() {
        // Comment is both a plural child of Post and an owned child of
        // Moderation: two distinct edges, two entries.
        let schema = Schema::new(vec![
            Entity::new("Post").has_many("Comment"),
            Entity::new("Moderation").has_one("Comment"),
            Entity::new("Comment"),
        ]);
        let resolver = Resolver::new(&schema);
        let properties = resolver.foreign_properties(schema.get("Comment").unwrap());

        assert_eq!(properties.len(), 2);
        assert!(properties.iter().any(|p| p.target == "Post" && p.is_plural));
        assert!(
            properties
                .iter()
                .any(|p| p.target == "Moderation" && p.is_required_single())
        );
    }

    #[test]
    fn test_optional_reference_keys_the_referencing_side() {
        let schema = Schema::new(vec![
            Entity::new("Book").maybe_has_one("Publisher"),
            Entity::new("Publisher"),
        ]);
        let resolver = Resolver::new(&schema);

        // The key lives on Book, not Publisher.
        let on_book = resolver.optional_references(schema.get("Book").unwrap());
        assert_eq!(on_book.len(), 1);
        assert_eq!(on_book[0].holder, "Book");
        assert_eq!(on_book[0].target, "Publisher");
        assert_eq!(on_book[0].foreign_key_name, "PublisherId");
        assert!(on_book[0].is_optional);
        assert!(!on_book[0].is_plural);

        assert!(
            resolver
                .foreign_properties(schema.get("Publisher").unwrap())
                .is_empty()
        );
    }
}
