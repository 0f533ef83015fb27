//! Relationship resolution and structural code emission for modelgen.
//!
//! This crate is the core every artifact generator is built on. Generators
//! themselves (DTOs, persistence context, API classes, ...) are external
//! template consumers: they ask the [`resolve::Resolver`] for an entity's
//! relations, iterate the schema directly or through
//! [`schedule::for_each_in_dependency_order`], and drive the emission
//! builders to produce one file per artifact.
//!
//! # Module Organization
//!
//! - [`builder`] - Emission building blocks (LineEmitter, PropertyBuilder,
//!   StructureBuilder, FileAssembler)
//! - [`types`] - Scalar type metadata table
//! - [`resolve`] - Foreign-key relationship resolution
//! - [`schedule`] - Referential-integrity-respecting entity ordering
//! - [`lints`] - Schema lints run before any generation
//! - [`output`] - Path-resolution and file-write collaborators

pub mod builder;
pub mod lints;
pub mod output;
pub mod resolve;
pub mod schedule;
pub mod types;

mod error;

pub use builder::{
    BuiltProperty, Cardinality, FileAssembler, Indent, InitializerPolicy, LineEmitter,
    PropertyBuilder, PropertyType, StructureBuilder, StructureKind,
};
pub use error::{Error, Result};
pub use lints::{Diagnostic, Severity, ensure_valid, run_lints};
pub use output::{DiskWriter, FileWriter, GeneratedFile, MemoryWriter, OutputRoot, PathResolver};
pub use resolve::Resolver;
pub use schedule::{dependency_order, for_each_in_dependency_order};
pub use types::{TypeInfo, type_info};
