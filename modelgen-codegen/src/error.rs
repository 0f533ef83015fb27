use thiserror::Error;

/// Result type for modelgen-codegen operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Fatal generation errors.
///
/// There is no partial-success mode: any of these aborts the whole run.
#[derive(Debug, Error)]
pub enum Error {
    /// The schema contains a cycle of required relations, so no
    /// referential-integrity-respecting order exists.
    #[error("required-relation cycle between entities: {}", entities.join(", "))]
    RelationCycle {
        /// Entities on the cycle, in schema order.
        entities: Vec<String>,
    },

    /// Schema lints reported errors; generation must not proceed.
    #[error("schema is invalid:\n{}", messages.join("\n"))]
    InvalidSchema {
        /// One rendered diagnostic per line.
        messages: Vec<String>,
    },
}
