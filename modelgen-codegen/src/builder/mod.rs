//! Emission building blocks.
//!
//! Bottom-up: [`LineEmitter`] is the indentation-aware primitive,
//! [`PropertyBuilder`] produces single property declarations,
//! [`StructureBuilder`] accumulates one class or interface, and
//! [`FileAssembler`] wraps structures into a complete namespaced file.

mod emitter;
mod file;
mod indent;
mod property;
mod structure;

pub use emitter::LineEmitter;
pub use file::FileAssembler;
pub use indent::Indent;
pub use property::{BuiltProperty, Cardinality, InitializerPolicy, PropertyBuilder, PropertyType};
pub use structure::{StructureBuilder, StructureKind};

/// Collapse runs of consecutive spaces into one.
///
/// Applied to every line appended to a [`StructureBuilder`] so callers can
/// concatenate fragments without worrying about doubled separators.
/// Idempotent.
pub(crate) fn normalize_spaces(line: &str) -> String {
    let mut out = String::with_capacity(line.len());
    let mut previous_was_space = false;
    for ch in line.chars() {
        if ch == ' ' {
            if !previous_was_space {
                out.push(ch);
            }
            previous_was_space = true;
        } else {
            out.push(ch);
            previous_was_space = false;
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_collapses_runs() {
        assert_eq!(normalize_spaces("public   int  Id"), "public int Id");
    }

    #[test]
    fn test_normalize_is_idempotent() {
        let once = normalize_spaces("a   b");
        assert_eq!(once, "a b");
        assert_eq!(normalize_spaces(&once), once);
    }

    #[test]
    fn test_normalize_leaves_single_spaces_alone() {
        assert_eq!(normalize_spaces("a b c"), "a b c");
    }
}
