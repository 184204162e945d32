//! TypeScript import statement.

use tsproxy_codegen::builder::{CodeFragment, Renderable};

/// A named import: `import { A, B } from "module";`.
#[derive(Debug, Clone, PartialEq)]
pub struct Import {
    from: String,
    named: Vec<String>,
}

impl Import {
    pub fn new(from: impl Into<String>) -> Self {
        Self {
            from: from.into(),
            named: Vec::new(),
        }
    }

    /// Import a named export.
    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.named.push(name.into());
        self
    }

    pub fn build(&self) -> String {
        if self.named.is_empty() {
            format!("import \"{}\";", self.from)
        } else {
            format!(
                "import {{ {} }} from \"{}\";",
                self.named.join(", "),
                self.from
            )
        }
    }
}

impl Renderable for Import {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        vec![CodeFragment::line(self.build())]
    }
}
