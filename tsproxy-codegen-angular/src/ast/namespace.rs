//! Module namespace block.

use tsproxy_codegen::builder::{CodeFragment, Renderable};

use super::{ClassDecl, ControllerDecl};

/// A declaration inside a module namespace.
#[derive(Debug, Clone, PartialEq)]
pub enum NamespaceItem {
    Class(ClassDecl),
    Controller(ControllerDecl),
}

impl Renderable for NamespaceItem {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        match self {
            NamespaceItem::Class(class) => class.to_fragments(),
            NamespaceItem::Controller(controller) => controller.to_fragments(),
        }
    }
}

/// `export namespace Name { ... }` for one backend module.
#[derive(Debug, Clone, PartialEq)]
pub struct NamespaceDecl {
    pub name: String,
    pub items: Vec<NamespaceItem>,
}

impl NamespaceDecl {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            items: Vec::new(),
        }
    }

    pub fn classes(&self) -> impl Iterator<Item = &ClassDecl> {
        self.items.iter().filter_map(|item| match item {
            NamespaceItem::Class(class) => Some(class),
            NamespaceItem::Controller(_) => None,
        })
    }

    pub fn controllers(&self) -> impl Iterator<Item = &ControllerDecl> {
        self.items.iter().filter_map(|item| match item {
            NamespaceItem::Controller(controller) => Some(controller),
            NamespaceItem::Class(_) => None,
        })
    }
}

impl Renderable for NamespaceDecl {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let mut body = Vec::new();
        for item in &self.items {
            body.push(CodeFragment::blank());
            body.extend(item.to_fragments());
        }
        body.push(CodeFragment::blank());

        vec![
            CodeFragment::comment(format!("Module '{}'", self.name)),
            CodeFragment::braced(format!("export namespace {} {{", self.name), body),
        ]
    }
}
