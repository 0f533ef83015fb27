//! Derived relation views.

/// One resolved foreign-key-bearing property.
///
/// A `ForeignProperty` is a view computed from the schema on every call,
/// never cached. For the usual (incoming) relations the holder is the
/// referenced entity's *child* side; for optional relations the holder is
/// the declaring entity itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ForeignProperty {
    /// Entity the property surfaces on.
    pub holder: String,
    /// Entity the property refers to.
    pub target: String,
    /// Generated navigation-property name (prefixed for self-references).
    pub property_name: String,
    /// Generated foreign-key property name.
    pub foreign_key_name: String,
    /// Whether the relation points back at the holder itself.
    pub is_self_reference: bool,
    /// Whether the holder is the "many" side of a 1:N.
    pub is_plural: bool,
    /// Whether the key may be absent.
    pub is_optional: bool,
}

impl ForeignProperty {
    /// A required-singular relation: the holder is an owned child of the
    /// target, lifecycle-bound to it.
    pub fn is_required_single(&self) -> bool {
        !self.is_plural && !self.is_optional
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn property(is_plural: bool, is_optional: bool) -> ForeignProperty {
        ForeignProperty {
            holder: "Book".into(),
            target: "Author".into(),
            property_name: "Author".into(),
            foreign_key_name: "AuthorId".into(),
            is_self_reference: false,
            is_plural,
            is_optional,
        }
    }

    #[test]
    fn test_required_single_classification() {
        assert!(property(false, false).is_required_single());
        assert!(!property(true, false).is_required_single());
        assert!(!property(false, true).is_required_single());
    }
}
