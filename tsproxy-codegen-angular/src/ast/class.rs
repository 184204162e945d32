//! Model class declaration.

use tsproxy_codegen::builder::{CodeFragment, Renderable};

/// A field of a model class.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldDecl {
    pub name: String,
    pub ty: String,
}

impl FieldDecl {
    pub fn new(name: impl Into<String>, ty: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ty: ty.into(),
        }
    }
}

/// `export class Name { field: type; ... }` for one complex type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassDecl {
    pub name: String,
    pub fields: Vec<FieldDecl>,
}

impl ClassDecl {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            fields: Vec::new(),
        }
    }

    pub fn field(mut self, field: FieldDecl) -> Self {
        self.fields.push(field);
        self
    }

    /// Look up a field by name.
    pub fn get(&self, name: &str) -> Option<&FieldDecl> {
        self.fields.iter().find(|f| f.name == name)
    }
}

impl Renderable for ClassDecl {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        vec![
            CodeFragment::comment(format!("Model '{}'", self.name)),
            CodeFragment::braced(
                format!("export class {} {{", self.name),
                self.fields
                    .iter()
                    .map(|f| CodeFragment::line(format!("{}: {};", f.name, f.ty)))
                    .collect(),
            ),
        ]
    }
}

#[cfg(test)]
mod tests {
    use tsproxy_codegen::builder::CodeBuilder;

    use super::*;

    #[test]
    fn test_render_class() {
        let class = ClassDecl::new("OrderDto")
            .field(FieldDecl::new("id", "string"))
            .field(FieldDecl::new("total", "number"));

        let mut builder = CodeBuilder::typescript();
        builder.emit(&class);
        assert_eq!(
            builder.build(),
            "/* Model 'OrderDto' */\nexport class OrderDto {\n  id: string;\n  total: number;\n}\n"
        );
    }

    #[test]
    fn test_render_empty_class() {
        let mut builder = CodeBuilder::typescript();
        builder.emit(&ClassDecl::new("JToken"));
        assert_eq!(builder.build(), "/* Model 'JToken' */\nexport class JToken {\n}\n");
    }

    #[test]
    fn test_get_field() {
        let class = ClassDecl::new("OrderDto").field(FieldDecl::new("total", "number"));
        assert_eq!(class.get("total").map(|f| f.ty.as_str()), Some("number"));
        assert!(class.get("missing").is_none());
    }
}
