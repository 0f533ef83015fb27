//! Whole-file assembly.

use std::collections::BTreeSet;

use eyre::Result;

use super::{LineEmitter, StructureBuilder};
use crate::output::{FileWriter, GeneratedFile, PathResolver};

/// Marker prepended to every generated file.
const GENERATED_MARKER: &str = "// <auto-generated/>";

/// Aggregates one or more structures plus extra imports into one file.
///
/// Imports bubbled up from every structure are merged with the assembler's
/// own, deduplicated, and sorted lexically, so output is deterministic
/// regardless of aggregation order. The body is wrapped in a single
/// namespace block behind a generated-file marker.
#[derive(Debug, Clone, Default)]
pub struct FileAssembler {
    namespace: String,
    structures: Vec<StructureBuilder>,
    extra_imports: Vec<String>,
}

impl FileAssembler {
    /// Create an assembler for the given namespace.
    pub fn new(namespace: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
            structures: Vec::new(),
            extra_imports: Vec::new(),
        }
    }

    /// Add a structure.
    pub fn structure(mut self, structure: StructureBuilder) -> Self {
        self.structures.push(structure);
        self
    }

    /// Add an explicit import on top of the bubbled-up ones.
    pub fn import(mut self, import: impl Into<String>) -> Self {
        self.extra_imports.push(import.into());
        self
    }

    /// Add several explicit imports.
    pub fn imports(mut self, imports: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.extra_imports.extend(imports.into_iter().map(Into::into));
        self
    }

    fn merged_imports(&self) -> BTreeSet<String> {
        let mut imports: BTreeSet<String> = self.extra_imports.iter().cloned().collect();
        for structure in &self.structures {
            imports.extend(structure.collect_imports());
        }
        imports
    }

    /// Render the file to its ordered line sequence.
    pub fn render(&self) -> Vec<String> {
        let mut out = LineEmitter::csharp();
        out.push_line(GENERATED_MARKER);

        for import in self.merged_imports() {
            out.push_line(&format!("using {};", import));
        }
        out.push_blank();

        out.push_line(&format!("namespace {}", self.namespace));
        out.open_block();
        for (i, structure) in self.structures.iter().enumerate() {
            if i > 0 {
                out.push_blank();
            }
            structure.emit(&mut out);
        }
        out.close_block();
        out.into_lines()
    }

    /// Render into a [`GeneratedFile`] at the location the path resolver
    /// picks for `(sub_folder, file_name)`.
    pub fn preview(&self, paths: &dyn PathResolver, sub_folder: &str, file_name: &str) -> GeneratedFile {
        GeneratedFile {
            path: paths.resolve(sub_folder, file_name),
            content: to_content(self.render()),
        }
    }

    /// Render and hand the result to the file-write collaborator.
    ///
    /// A failed write aborts the run; there is no retry and no cleanup of
    /// partially written output.
    pub fn write_to(
        &self,
        paths: &dyn PathResolver,
        writer: &mut dyn FileWriter,
        sub_folder: &str,
        file_name: &str,
    ) -> Result<()> {
        let file = self.preview(paths, sub_folder, file_name);
        writer.write(&file)
    }
}

fn to_content(lines: Vec<String>) -> String {
    let mut content = lines.join("\n");
    content.push('\n');
    content
}
