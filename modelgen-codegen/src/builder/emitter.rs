//! Indentation-tracking line accumulator.

use super::Indent;

/// The text-accumulation primitive underlying all emission.
///
/// Tracks an indentation level and serializes to an ordered sequence of
/// lines. Methods return `&mut Self` for chaining.
///
/// # Example
///
/// ```
/// use modelgen_codegen::builder::LineEmitter;
///
/// let mut emitter = LineEmitter::csharp();
/// emitter
///     .push_line("public class Book")
///     .open_block()
///     .push_line("public int Id { get; set; }")
///     .close_block();
/// assert_eq!(
///     emitter.build(),
///     "public class Book\n{\n    public int Id { get; set; }\n}\n"
/// );
/// ```
#[derive(Debug, Clone)]
pub struct LineEmitter {
    indent_level: usize,
    indent: Indent,
    lines: Vec<String>,
}

impl LineEmitter {
    /// Create a new emitter with the specified indentation.
    pub fn new(indent: Indent) -> Self {
        Self {
            indent_level: 0,
            indent,
            lines: Vec::new(),
        }
    }

    /// Create a new emitter with 4-space indentation.
    pub fn csharp() -> Self {
        Self::new(Indent::CSHARP)
    }

    /// Append a line at the current indentation level.
    pub fn push_line(&mut self, s: &str) -> &mut Self {
        let mut line = String::new();
        for _ in 0..self.indent_level {
            line.push_str(self.indent.as_str());
        }
        line.push_str(s);
        self.lines.push(line);
        self
    }

    /// Append a blank line.
    pub fn push_blank(&mut self) -> &mut Self {
        self.lines.push(String::new());
        self
    }

    /// Open a braced block: `{` plus one level of indentation.
    pub fn open_block(&mut self) -> &mut Self {
        self.push_line("{");
        self.push_indent()
    }

    /// Close a braced block: dedent plus `}`.
    pub fn close_block(&mut self) -> &mut Self {
        self.push_dedent();
        self.push_line("}")
    }

    /// Increase the indentation level.
    pub fn push_indent(&mut self) -> &mut Self {
        self.indent_level += 1;
        self
    }

    /// Decrease the indentation level.
    pub fn push_dedent(&mut self) -> &mut Self {
        self.indent_level = self.indent_level.saturating_sub(1);
        self
    }

    /// Current indentation level.
    pub fn current_indent(&self) -> usize {
        self.indent_level
    }

    /// Consume the emitter and return the ordered line sequence.
    pub fn into_lines(self) -> Vec<String> {
        self.lines
    }

    /// Render the accumulated lines as one newline-terminated string.
    pub fn build(&self) -> String {
        let mut out = self.lines.join("\n");
        if !self.lines.is_empty() {
            out.push('\n');
        }
        out
    }
}

impl Default for LineEmitter {
    fn default() -> Self {
        Self::csharp()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_line() {
        let mut emitter = LineEmitter::csharp();
        emitter.push_line("var x = 1;");
        assert_eq!(emitter.build(), "var x = 1;\n");
    }

    #[test]
    fn test_indentation() {
        let mut emitter = LineEmitter::csharp();
        emitter
            .push_line("namespace App")
            .open_block()
            .push_line("// body")
            .close_block();
        assert_eq!(emitter.build(), "namespace App\n{\n    // body\n}\n");
    }

    #[test]
    fn test_blank_line_has_no_indent() {
        let mut emitter = LineEmitter::csharp();
        emitter.push_indent().push_blank().push_line("x");
        assert_eq!(emitter.into_lines(), vec!["", "    x"]);
    }

    #[test]
    fn test_nested_blocks() {
        let mut emitter = LineEmitter::new(Indent::COMPACT);
        emitter
            .push_line("a:")
            .open_block()
            .push_line("b:")
            .open_block()
            .push_line("c")
            .close_block()
            .close_block();
        assert_eq!(
            emitter.into_lines(),
            vec!["a:", "{", "  b:", "  {", "    c", "  }", "}"]
        );
    }

    #[test]
    fn test_dedent_saturates() {
        let mut emitter = LineEmitter::csharp();
        emitter.push_dedent().push_line("x");
        assert_eq!(emitter.build(), "x\n");
    }

    #[test]
    fn test_empty_build() {
        assert_eq!(LineEmitter::csharp().build(), "");
    }
}
