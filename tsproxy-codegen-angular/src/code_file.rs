//! Structured TypeScript output file.

use tsproxy_codegen::{
    builder::{CodeBuilder, CodeFragment, Indent, Renderable},
    generation::ImportCollector,
};

use crate::ast::Import;

/// A generated TypeScript file: header comment, imports, then body items.
///
/// Sections and body items are separated by a blank line.
#[derive(Debug, Default)]
pub struct CodeFile {
    header: Option<String>,
    imports: Vec<Import>,
    body: Vec<Vec<CodeFragment>>,
}

impl CodeFile {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the leading `/* ... */` comment. Empty text means none.
    pub fn header(mut self, text: impl Into<String>) -> Self {
        let text = text.into();
        self.header = (!text.trim().is_empty()).then_some(text);
        self
    }

    pub fn import(mut self, import: Import) -> Self {
        self.imports.push(import);
        self
    }

    /// Add one import per module of the collector.
    pub fn imports(mut self, imports: &ImportCollector) -> Self {
        for (module, symbols) in imports.iter() {
            let import = symbols
                .iter()
                .fold(Import::new(module), |import, symbol| import.named(symbol));
            self.imports.push(import);
        }
        self
    }

    /// Add a body element.
    #[allow(clippy::should_implement_trait)]
    pub fn add<R: Renderable>(mut self, node: R) -> Self {
        self.body.push(node.to_fragments());
        self
    }

    pub fn add_all<R: Renderable>(mut self, nodes: impl IntoIterator<Item = R>) -> Self {
        for node in nodes {
            self.body.push(node.to_fragments());
        }
        self
    }

    /// Render with 2-space indentation.
    pub fn render(&self) -> String {
        self.render_with_indent(Indent::TYPESCRIPT)
    }

    pub fn render_with_indent(&self, indent: Indent) -> String {
        let mut builder = CodeBuilder::new(indent);
        let mut sections = 0;

        if let Some(header) = &self.header {
            builder.push_comment(header);
            sections += 1;
        }

        if !self.imports.is_empty() {
            if sections > 0 {
                builder.push_blank();
            }
            for import in &self.imports {
                builder.emit(import);
            }
            sections += 1;
        }

        for fragments in &self.body {
            if sections > 0 {
                builder.push_blank();
            }
            for fragment in fragments {
                builder.apply_fragment(fragment.clone());
            }
            sections += 1;
        }

        builder.build()
    }

    pub fn is_empty(&self) -> bool {
        self.header.is_none() && self.imports.is_empty() && self.body.is_empty()
    }
}
