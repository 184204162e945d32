//! Injectable controller class.

use tsproxy_codegen::builder::{CodeFragment, Renderable};

use super::MethodDecl;

/// `@Injectable() export class Name` holding one method per action.
#[derive(Debug, Clone, PartialEq)]
pub struct ControllerDecl {
    pub name: String,
    pub methods: Vec<MethodDecl>,
}

impl ControllerDecl {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            methods: Vec::new(),
        }
    }

    pub fn method(mut self, method: MethodDecl) -> Self {
        self.methods.push(method);
        self
    }
}

impl Renderable for ControllerDecl {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let mut body = vec![
            CodeFragment::blank(),
            CodeFragment::line("constructor(private http: HttpClient) { }"),
            CodeFragment::blank(),
        ];
        for method in &self.methods {
            body.extend(method.to_fragments());
            body.push(CodeFragment::blank());
        }

        vec![
            CodeFragment::comment(format!("Controller '{}'", self.name)),
            CodeFragment::line("@Injectable()"),
            CodeFragment::braced(format!("export class {} {{", self.name), body),
        ]
    }
}
