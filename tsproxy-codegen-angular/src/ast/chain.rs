//! Returned promise chain of an HTTP call.

use tsproxy_codegen::builder::{CodeFragment, Renderable};

#[derive(Debug, Clone, PartialEq)]
struct Call {
    method: String,
    args: Vec<String>,
}

impl Call {
    fn build(&self) -> String {
        format!(".{}({})", self.method, self.args.join(", "))
    }
}

#[derive(Debug, Clone, PartialEq)]
enum Link {
    /// Calls written on one line.
    Calls(Vec<Call>),
    /// A call taking a block-bodied arrow function.
    Callback {
        method: String,
        params: String,
        body: Vec<String>,
    },
}

/// Builder for a method chain rendered one link per line:
///
/// ```text
/// return this.http.get<T>(url)
///   .toPromise().then(res => { return res })
///   .catch(err => {
///     ...
///   });
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct MethodChain {
    base: String,
    base_args: Vec<String>,
    links: Vec<Link>,
    returned: bool,
}

impl MethodChain {
    pub fn new(base: impl Into<String>) -> Self {
        Self {
            base: base.into(),
            base_args: Vec::new(),
            links: Vec::new(),
            returned: false,
        }
    }

    /// Add an argument to the base call.
    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.base_args.push(arg.into());
        self
    }

    /// Start a new line with a call.
    pub fn call(mut self, method: impl Into<String>, args: Vec<String>) -> Self {
        self.links.push(Link::Calls(vec![Call {
            method: method.into(),
            args,
        }]));
        self
    }

    /// Append a call to the current line.
    pub fn then_call(mut self, method: impl Into<String>, args: Vec<String>) -> Self {
        let call = Call {
            method: method.into(),
            args,
        };
        match self.links.last_mut() {
            Some(Link::Calls(calls)) => calls.push(call),
            _ => self.links.push(Link::Calls(vec![call])),
        }
        self
    }

    /// Start a new line with a call taking `(params) => { body }`.
    pub fn callback(
        mut self,
        method: impl Into<String>,
        params: impl Into<String>,
        body: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        self.links.push(Link::Callback {
            method: method.into(),
            params: params.into(),
            body: body.into_iter().map(Into::into).collect(),
        });
        self
    }

    /// Render as a `return` statement.
    pub fn returned(mut self) -> Self {
        self.returned = true;
        self
    }

    /// The base call with its arguments, without any links.
    pub fn build_base(&self) -> String {
        format!("{}({})", self.base, self.base_args.join(", "))
    }

    /// Build the chain on a single line. Callbacks keep their bodies inline.
    pub fn build_inline(&self) -> String {
        let mut result = self.build_base();
        for link in &self.links {
            match link {
                Link::Calls(calls) => calls.iter().for_each(|c| result.push_str(&c.build())),
                Link::Callback {
                    method,
                    params,
                    body,
                } => result.push_str(&format!(".{method}({params} => {{ {} }})", body.join(" "))),
            }
        }
        result
    }
}

impl Renderable for MethodChain {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let prefix = if self.returned { "return " } else { "" };
        let mut head = format!("{prefix}{}", self.build_base());
        if self.links.is_empty() {
            head.push(';');
            return vec![CodeFragment::line(head)];
        }

        let last = self.links.len() - 1;
        let links = self
            .links
            .iter()
            .enumerate()
            .map(|(i, link)| {
                let end = if i == last { ";" } else { "" };
                match link {
                    Link::Calls(calls) => {
                        let line: String = calls.iter().map(Call::build).collect();
                        CodeFragment::line(format!("{line}{end}"))
                    }
                    Link::Callback {
                        method,
                        params,
                        body,
                    } => CodeFragment::block(
                        format!(".{method}({params} => {{"),
                        body.iter().map(CodeFragment::line).collect(),
                        Some(format!("}}){end}")),
                    ),
                }
            })
            .collect();

        vec![CodeFragment::line(head), CodeFragment::indent(links)]
    }
}

#[cfg(test)]
mod tests {
    use tsproxy_codegen::builder::CodeBuilder;

    use super::*;

    fn render(chain: &MethodChain) -> String {
        let mut builder = CodeBuilder::typescript();
        builder.emit(chain);
        builder.build()
    }

    #[test]
    fn test_base_only() {
        let chain = MethodChain::new("this.http.delete<void>").arg("'/orders/1'").returned();
        assert_eq!(render(&chain), "return this.http.delete<void>('/orders/1');\n");
    }

    #[test]
    fn test_calls_on_one_line() {
        let chain = MethodChain::new("this.http.get<string>")
            .arg("url")
            .call("toPromise", vec![])
            .then_call("then", vec!["res => { return res }".into()]);
        assert_eq!(
            render(&chain),
            "this.http.get<string>(url)\n  .toPromise().then(res => { return res });\n"
        );
    }

    #[test]
    fn test_callback_block() {
        let chain = MethodChain::new("fetch")
            .arg("url")
            .callback("catch", "err", ["console.error(err);", "return null;"])
            .returned();
        assert_eq!(
            render(&chain),
            "return fetch(url)\n  .catch(err => {\n    console.error(err);\n    return null;\n  });\n"
        );
    }

    #[test]
    fn test_build_inline() {
        let chain = MethodChain::new("this.http.post<void>")
            .arg("url")
            .arg("input")
            .then_call("pipe", vec![]);
        assert_eq!(chain.build_inline(), "this.http.post<void>(url, input).pipe()");
        assert_eq!(chain.build_base(), "this.http.post<void>(url, input)");
    }

    #[test]
    fn test_callback_inline() {
        let chain = MethodChain::new("p").callback("then", "x", ["return x;"]);
        assert_eq!(chain.build_inline(), "p().then(x => { return x; })");
    }
}
