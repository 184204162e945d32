//! List command report data structures.

use super::output::{Output, Report};

#[derive(Debug)]
pub struct ActionEntry {
    pub name: String,
    /// Upper-case HTTP verb.
    pub verb: String,
    /// Whether the verb was inferred from the action name.
    pub inferred: bool,
    pub url: String,
}

#[derive(Debug)]
pub struct ControllerEntry {
    pub name: String,
    pub actions: Vec<ActionEntry>,
}

#[derive(Debug)]
pub struct ModuleEntry {
    pub name: String,
    pub controllers: Vec<ControllerEntry>,
}

/// Modules, controllers and actions of an API description.
#[derive(Debug)]
pub struct ListReport {
    pub modules: Vec<ModuleEntry>,
}

impl Report for ListReport {
    fn render(&self, out: &mut dyn Output) {
        if self.modules.is_empty() {
            out.preformatted("No modules defined");
            return;
        }

        for (i, module) in self.modules.iter().enumerate() {
            if i > 0 {
                out.newline();
            }
            out.section(&module.name);
            for controller in &module.controllers {
                out.list_item(0, &controller.name);
                for action in &controller.actions {
                    let marker = if action.inferred { " (inferred)" } else { "" };
                    out.list_item(
                        1,
                        &format!("{:<7} {} {}{}", action.verb, action.name, action.url, marker),
                    );
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reports::BufferOutput;

    #[test]
    fn test_empty_list() {
        let mut out = BufferOutput::default();
        ListReport { modules: Vec::new() }.render(&mut out);
        assert_eq!(out.stdout, ["No modules defined"]);
    }

    #[test]
    fn test_nested_list() {
        let report = ListReport {
            modules: vec![ModuleEntry {
                name: "Sales".into(),
                controllers: vec![ControllerEntry {
                    name: "Orders".into(),
                    actions: vec![
                        ActionEntry {
                            name: "GetOrder".into(),
                            verb: "GET".into(),
                            inferred: true,
                            url: "orders/{id}".into(),
                        },
                        ActionEntry {
                            name: "Archive".into(),
                            verb: "PUT".into(),
                            inferred: false,
                            url: "orders/{id}/archive".into(),
                        },
                    ],
                }],
            }],
        };

        let mut out = BufferOutput::default();
        report.render(&mut out);
        assert_eq!(
            out.stdout,
            [
                "Sales:",
                "  - Orders",
                "    - GET     GetOrder orders/{id} (inferred)",
                "    - PUT     Archive orders/{id}/archive",
            ]
        );
    }
}
