//! Identifier normalization for generated TypeScript.

use tsproxy_core::to_camel_case;
use tsproxy_model::ParameterDescriptor;

/// Keywords that cannot appear as a bare identifier or after a `.`.
pub const RESERVED_WORDS: &[&str] = &[
    "abstract",
    "boolean",
    "break",
    "byte",
    "case",
    "catch",
    "char",
    "class",
    "const",
    "continue",
    "debugger",
    "default",
    "delete",
    "do",
    "double",
    "else",
    "enum",
    "export",
    "extends",
    "false",
    "final",
    "finally",
    "float",
    "for",
    "function",
    "goto",
    "if",
    "implements",
    "import",
    "in",
    "instanceof",
    "int",
    "interface",
    "let",
    "long",
    "native",
    "new",
    "null",
    "package",
    "private",
    "protected",
    "public",
    "return",
    "short",
    "static",
    "super",
    "switch",
    "synchronized",
    "this",
    "throw",
    "throws",
    "transient",
    "true",
    "try",
    "typeof",
    "var",
    "void",
    "volatile",
    "while",
    "with",
];

pub fn is_reserved(name: &str) -> bool {
    RESERVED_WORDS.contains(&name)
}

/// Reduce `name` to `[A-Za-z0-9_]` plus `extra_allowed`, mapping `-` to `_`.
///
/// A name with nothing left becomes `_` followed by 8 random hex digits.
pub fn normalize(name: &str, extra_allowed: &str) -> String {
    let normalized: String = name
        .chars()
        .map(|c| if c == '-' { '_' } else { c })
        .filter(|&c| c.is_ascii_alphanumeric() || c == '_' || extra_allowed.contains(c))
        .collect();

    if normalized.is_empty() {
        let fallback = format!("_{:08x}", rand::random::<u32>());
        tracing::debug!(name, %fallback, "identifier has no valid characters");
        return fallback;
    }
    normalized
}

/// Property access suffix: `.name`, or `['name']` for reserved words.
pub fn access_expression(name: &str) -> String {
    if is_reserved(name) {
        format!("['{name}']")
    } else {
        format!(".{name}")
    }
}

/// A usable local identifier: reserved words get a leading underscore.
pub fn local_identifier(name: &str) -> String {
    if is_reserved(name) {
        format!("_{name}")
    } else {
        name.to_string()
    }
}

/// Camel-cased, normalized name for fields and methods.
pub fn member_name(name: &str) -> String {
    normalize(&to_camel_case(name), "")
}

/// Expression that reads a parameter's value inside the generated method.
///
/// Plain parameters read the declared argument. Members of a flattened
/// complex argument read through it: `input.maxResultCount`.
pub fn to_param_expression(parameter: &ParameterDescriptor) -> String {
    if parameter.is_member() {
        let owner = local_identifier(&member_name(parameter.name_on_method()));
        let name = normalize(&to_camel_case(&parameter.name), ".");
        format!("{owner}{}", access_expression(&name))
    } else {
        local_identifier(&member_name(&parameter.name))
    }
}
