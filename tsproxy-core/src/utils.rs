//! Shared string utilities for code generation.

/// Convert a member name to camelCase by lower-casing its leading character
/// (e.g., "GetOrder" -> "getOrder", "ID" -> "iD").
///
/// The rest of the name is kept verbatim so that wire names such as
/// `user_id` survive unchanged.
pub fn to_camel_case(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        None => String::new(),
        Some(c) => c.to_lowercase().chain(chars).collect(),
    }
}
