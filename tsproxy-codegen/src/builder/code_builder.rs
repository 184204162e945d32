//! Indentation-aware text buffer that renders code fragments.

use super::{CodeFragment, Indent, Renderable};

/// Accumulates generated lines at the current indentation level.
///
/// ```
/// use tsproxy_codegen::builder::CodeBuilder;
///
/// let mut builder = CodeBuilder::typescript();
/// builder
///     .push_line("export class OrderDto {")
///     .push_indent()
///     .push_line("total: number;")
///     .push_dedent()
///     .push_line("}");
///
/// assert_eq!(builder.build(), "export class OrderDto {\n  total: number;\n}\n");
/// ```
#[derive(Debug, Clone)]
pub struct CodeBuilder {
    indent_level: usize,
    indent: Indent,
    buffer: String,
}

impl CodeBuilder {
    pub fn new(indent: Indent) -> Self {
        Self {
            indent_level: 0,
            indent,
            buffer: String::new(),
        }
    }

    /// Builder with 2-space indentation.
    pub fn typescript() -> Self {
        Self::new(Indent::TYPESCRIPT)
    }

    /// Add a line of code with current indentation.
    pub fn push_line(&mut self, s: &str) -> &mut Self {
        for _ in 0..self.indent_level {
            self.buffer.push_str(self.indent.as_str());
        }
        self.buffer.push_str(s);
        self.buffer.push('\n');
        self
    }

    /// Add a blank line. Blank lines never carry indentation.
    pub fn push_blank(&mut self) -> &mut Self {
        self.buffer.push('\n');
        self
    }

    pub fn push_indent(&mut self) -> &mut Self {
        self.indent_level += 1;
        self
    }

    pub fn push_dedent(&mut self) -> &mut Self {
        self.indent_level = self.indent_level.saturating_sub(1);
        self
    }

    /// Add a single-line `/* ... */` comment.
    pub fn push_comment(&mut self, text: &str) -> &mut Self {
        self.push_line(&format!("/* {text} */"))
    }

    /// Emit a Renderable node.
    pub fn emit(&mut self, node: &impl Renderable) -> &mut Self {
        for fragment in node.to_fragments() {
            self.apply_fragment(fragment);
        }
        self
    }

    /// Apply a single code fragment.
    pub fn apply_fragment(&mut self, fragment: CodeFragment) {
        match fragment {
            CodeFragment::Line(s) => {
                self.push_line(&s);
            }
            CodeFragment::Blank => {
                self.push_blank();
            }
            CodeFragment::Block {
                header,
                body,
                close,
            } => {
                self.push_line(&header);
                self.push_indent();
                for f in body {
                    self.apply_fragment(f);
                }
                self.push_dedent();
                if let Some(c) = close {
                    self.push_line(&c);
                }
            }
            CodeFragment::Indent(fragments) => {
                self.push_indent();
                for f in fragments {
                    self.apply_fragment(f);
                }
                self.push_dedent();
            }
            CodeFragment::Comment(text) => {
                self.push_comment(&text);
            }
        }
    }

    pub fn current_indent(&self) -> usize {
        self.indent_level
    }

    /// Consume the builder and return the generated code.
    pub fn build(self) -> String {
        self.buffer
    }
}

impl Default for CodeBuilder {
    fn default() -> Self {
        Self::typescript()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dedent_saturates() {
        let mut builder = CodeBuilder::typescript();
        builder.push_dedent().push_dedent();
        assert_eq!(builder.current_indent(), 0);
    }

    #[test]
    fn test_blank_line_has_no_indent() {
        let mut builder = CodeBuilder::typescript();
        builder
            .push_indent()
            .push_line("a;")
            .push_blank()
            .push_line("b;");

        assert_eq!(builder.build(), "  a;\n\n  b;\n");
    }

    #[test]
    fn test_comment() {
        let mut builder = CodeBuilder::typescript();
        builder.push_comment("Module 'Sales'");
        assert_eq!(builder.build(), "/* Module 'Sales' */\n");
    }

    #[test]
    fn test_wide_indent() {
        let mut builder = CodeBuilder::new(Indent::WIDE);
        builder
            .push_line("if (x) {")
            .push_indent()
            .push_line("y();")
            .push_dedent()
            .push_line("}");
        assert_eq!(builder.build(), "if (x) {\n    y();\n}\n");
    }

    #[test]
    fn test_emit_nested_blocks() {
        struct Namespace;
        impl Renderable for Namespace {
            fn to_fragments(&self) -> Vec<CodeFragment> {
                vec![CodeFragment::braced(
                    "export namespace Sales {",
                    vec![
                        CodeFragment::Blank,
                        CodeFragment::braced("export class A {", vec![CodeFragment::line("x: number;")]),
                    ],
                )]
            }
        }

        let mut builder = CodeBuilder::typescript();
        builder.emit(&Namespace);
        assert_eq!(
            builder.build(),
            "export namespace Sales {\n\n  export class A {\n    x: number;\n  }\n}\n"
        );
    }

    #[test]
    fn test_indent_fragment_and_unclosed_block() {
        let mut builder = CodeBuilder::typescript();
        builder.apply_fragment(CodeFragment::line("return this.http.get(url)"));
        builder.apply_fragment(CodeFragment::indent(vec![CodeFragment::block(
            ".then(res => {",
            vec![CodeFragment::line("return res")],
            Some("});".to_string()),
        )]));
        builder.apply_fragment(CodeFragment::block("open {", Vec::new(), None));
        assert_eq!(
            builder.build(),
            "return this.http.get(url)\n  .then(res => {\n    return res\n  });\nopen {\n"
        );
    }
}
