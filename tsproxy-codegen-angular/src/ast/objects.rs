//! Inline TypeScript object literal.

/// Builder for single-line object literals such as request payloads.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct JsObject {
    properties: Vec<(String, Value)>,
}

#[derive(Debug, Clone, PartialEq)]
enum Value {
    Raw(String),
    Object(JsObject),
}

impl JsObject {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a property keyed by a quoted string, so wire names that are not
    /// identifiers (`x-request-id`) survive unchanged.
    pub fn raw(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        let key = format!("'{}'", escape_key(&key.into()));
        self.properties.push((key, Value::Raw(value.into())));
        self
    }

    /// Add a property keyed by an identifier.
    pub fn field(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.properties.push((key.into(), Value::Raw(value.into())));
        self
    }

    /// Add a nested object keyed by an identifier.
    pub fn object(mut self, key: impl Into<String>, value: JsObject) -> Self {
        self.properties.push((key.into(), Value::Object(value)));
        self
    }

    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }

    pub fn build_inline(&self) -> String {
        if self.properties.is_empty() {
            return "{}".to_string();
        }

        let properties: Vec<String> = self
            .properties
            .iter()
            .map(|(key, value)| match value {
                Value::Raw(expr) => format!("{key}: {expr}"),
                Value::Object(object) => format!("{key}: {}", object.build_inline()),
            })
            .collect();
        format!("{{ {} }}", properties.join(", "))
    }
}

fn escape_key(key: &str) -> String {
    key.replace('\\', "\\\\").replace('\'', "\\'")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_object() {
        assert_eq!(JsObject::new().build_inline(), "{}");
        assert!(JsObject::new().is_empty());
    }

    #[test]
    fn test_raw_properties() {
        let object = JsObject::new().raw("Name", "name").raw("x-request-id", "requestId");
        assert_eq!(object.build_inline(), "{ 'Name': name, 'x-request-id': requestId }");
    }

    #[test]
    fn test_nested_object() {
        let object = JsObject::new().object("headers", JsObject::new().raw("Tenant", "tenant"));
        assert_eq!(object.build_inline(), "{ headers: { 'Tenant': tenant } }");
    }

    #[test]
    fn test_identifier_field() {
        let object = JsObject::new().field("body", "input").object("headers", JsObject::new());
        assert_eq!(object.build_inline(), "{ body: input, headers: {} }");
    }

    #[test]
    fn test_quote_in_key_is_escaped() {
        assert_eq!(JsObject::new().raw("it's", "x").build_inline(), "{ 'it\\'s': x }");
    }
}
