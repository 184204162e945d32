//! Controller method declaration.

use tsproxy_codegen::builder::{CodeFragment, Renderable};

/// A declared method parameter, `name: type`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParamDecl {
    pub name: String,
    pub ty: String,
}

impl ParamDecl {
    pub fn new(name: impl Into<String>, ty: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ty: ty.into(),
        }
    }

    pub fn build(&self) -> String {
        format!("{}: {}", self.name, self.ty)
    }
}

/// One generated method of a controller class.
#[derive(Debug, Clone, PartialEq)]
pub struct MethodDecl {
    /// Backend action name, kept for the leading comment.
    pub action: String,
    pub name: String,
    pub params: Vec<ParamDecl>,
    pub body: Vec<CodeFragment>,
}

impl MethodDecl {
    pub fn new(action: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            action: action.into(),
            name: name.into(),
            params: Vec::new(),
            body: Vec::new(),
        }
    }

    pub fn param(mut self, param: ParamDecl) -> Self {
        self.params.push(param);
        self
    }

    pub fn body(mut self, node: &impl Renderable) -> Self {
        self.body.extend(node.to_fragments());
        self
    }

    /// `name(a: A, b: B)`
    pub fn signature(&self) -> String {
        let params: Vec<String> = self.params.iter().map(ParamDecl::build).collect();
        format!("{}({})", self.name, params.join(", "))
    }
}

impl Renderable for MethodDecl {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        vec![
            CodeFragment::comment(format!("Action '{}'", self.action)),
            CodeFragment::braced(format!("{} {{", self.signature()), self.body.clone()),
        ]
    }
}
