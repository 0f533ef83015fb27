//! Schema lints.
//!
//! Generation never runs against a schema with outstanding errors; these
//! lints are the gate. Each lint is a plain function over the schema,
//! walked in a fixed order and collecting diagnostics into one list — an
//! explicit rule table rather than anything reflective.

use std::collections::HashSet;

use modelgen_ir::Schema;
use serde::Serialize;

use crate::error::{Error, Result};

/// Severity level for a diagnostic message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Severity {
    /// A fatal error that prevents generation.
    Error,
    /// A warning that doesn't prevent generation.
    Warning,
}

impl Severity {
    /// Returns true if this is an error severity.
    pub fn is_error(&self) -> bool {
        matches!(self, Severity::Error)
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
        }
    }
}

/// A diagnostic message from a schema lint.
#[derive(Debug, Clone, Serialize)]
pub struct Diagnostic {
    /// The severity level of this diagnostic.
    pub severity: Severity,
    /// The lint that produced this diagnostic.
    pub lint: String,
    /// The diagnostic message.
    pub message: String,
    /// Location in the schema (e.g. "Book.Title").
    pub location: Option<String>,
}

impl Diagnostic {
    /// Create a new error diagnostic.
    pub fn error(lint: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            lint: lint.into(),
            message: message.into(),
            location: None,
        }
    }

    /// Add a location to this diagnostic.
    pub fn at(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }
}

impl std::fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.severity, self.message)?;
        if let Some(loc) = &self.location {
            write!(f, " (at {})", loc)?;
        }
        Ok(())
    }
}

/// Run every lint over the schema and collect the diagnostics.
pub fn run_lints(schema: &Schema) -> Vec<Diagnostic> {
    let lints: &[fn(&Schema, &mut Vec<Diagnostic>)] = &[
        duplicate_entity_names,
        duplicate_field_names,
        unresolved_relation_targets,
    ];
    let mut diagnostics = Vec::new();
    for lint in lints {
        lint(schema, &mut diagnostics);
    }
    diagnostics
}

/// Fail with [`Error::InvalidSchema`] if any lint reports an error.
pub fn ensure_valid(schema: &Schema) -> Result<()> {
    let messages: Vec<String> = run_lints(schema)
        .iter()
        .filter(|d| d.severity.is_error())
        .map(Diagnostic::to_string)
        .collect();
    if messages.is_empty() {
        Ok(())
    } else {
        Err(Error::InvalidSchema { messages })
    }
}

fn duplicate_entity_names(schema: &Schema, diagnostics: &mut Vec<Diagnostic>) {
    let mut seen = HashSet::new();
    for entity in &schema.entities {
        if !seen.insert(entity.name.as_str()) {
            diagnostics.push(
                Diagnostic::error(
                    "duplicate-entity-name",
                    format!("duplicate entity name `{}`", entity.name),
                )
                .at(entity.name.clone()),
            );
        }
    }
}

fn duplicate_field_names(schema: &Schema, diagnostics: &mut Vec<Diagnostic>) {
    for entity in &schema.entities {
        let mut seen = HashSet::new();
        for field in &entity.fields {
            // Field names clash case-insensitively in the emitted code.
            if !seen.insert(field.name.to_lowercase()) {
                diagnostics.push(
                    Diagnostic::error(
                        "duplicate-field-name",
                        format!(
                            "duplicate field name `{}` on entity `{}`",
                            field.name, entity.name
                        ),
                    )
                    .at(format!("{}.{}", entity.name, field.name)),
                );
            }
        }
    }
}

fn unresolved_relation_targets(schema: &Schema, diagnostics: &mut Vec<Diagnostic>) {
    for entity in &schema.entities {
        let relations = entity
            .has_many
            .iter()
            .chain(&entity.has_one)
            .chain(&entity.maybe_has_one);
        for target in relations {
            if !schema.contains(target) {
                diagnostics.push(
                    Diagnostic::error(
                        "unresolved-relation-target",
                        format!(
                            "entity `{}` declares a relation to unknown entity `{}`",
                            entity.name, target
                        ),
                    )
                    .at(entity.name.clone()),
                );
            }
        }
    }
}
