//! Schema data model for the modelgen code generator.
//!
//! This crate provides the type definitions the generation pipeline is built
//! on: the user-authored entity schema and the derived relation views.
//!
//! # Architecture
//!
//! ```text
//! schema file → loader (external) → modelgen-ir (typed schema) → codegen
//! ```
//!
//! The schema is loaded once per run and is read-only afterwards. Everything
//! derived from it (foreign properties, dependency order) is recomputed on
//! demand so it can never go stale.

mod entity;
mod relation;

pub use entity::{Entity, Field, ScalarType, Schema};
pub use relation::ForeignProperty;
