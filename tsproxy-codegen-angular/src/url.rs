//! Request URL expressions.

use tsproxy_config::AngularConfig;
use tsproxy_core::to_camel_case;
use tsproxy_model::{ActionDescriptor, BindingSource};

use crate::naming::to_param_expression;

/// Builds the quoted URL expression passed to the HTTP client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlBuilder {
    prefix: String,
    encode_query_values: bool,
}

impl Default for UrlBuilder {
    fn default() -> Self {
        Self::new("/", false)
    }
}

impl UrlBuilder {
    pub fn new(prefix: impl Into<String>, encode_query_values: bool) -> Self {
        Self {
            prefix: prefix.into(),
            encode_query_values,
        }
    }

    pub fn from_config(config: &AngularConfig) -> Self {
        Self::new(&config.url_prefix, config.encode_query_values)
    }

    /// Full URL expression including quotes: `'/orders/' + id + ''`.
    ///
    /// The prefix is skipped for templates that already start with `/`.
    pub fn build(&self, action: &ActionDescriptor) -> String {
        let prefix = if action.url.starts_with('/') {
            String::new()
        } else {
            escape_literal(&self.prefix)
        };
        format!("'{prefix}{}'", self.build_url(action))
    }

    /// Body of the URL literal with path parameters spliced in and query
    /// parameters appended, without the surrounding quotes.
    ///
    /// `users/{id}/orders` with a path parameter `id` and a query parameter
    /// `status` becomes `users/' + id + '/orders?status='+status+'`.
    pub fn build_url(&self, action: &ActionDescriptor) -> String {
        let mut url = escape_literal(&action.url);

        for parameter in action.parameters_from(BindingSource::Path) {
            let placeholder = format!("{{{}}}", escape_literal(&parameter.name));
            let splice = format!("' + {} + '", to_param_expression(parameter));
            url = url.replace(&placeholder, &splice);
        }

        let query: Vec<String> = action
            .parameters
            .iter()
            .filter(|p| p.binding_source.is_query_string())
            .map(|p| {
                let key = escape_literal(&to_camel_case(&p.name));
                format!("{key}='+{}", self.query_value(&to_param_expression(p)))
            })
            .collect();

        if query.is_empty() {
            return url;
        }
        let separator = if url.contains('?') { '&' } else { '?' };
        format!("{url}{separator}{}+'", query.join("+'&"))
    }

    fn query_value(&self, expression: &str) -> String {
        if self.encode_query_values {
            format!("encodeURIComponent({expression})")
        } else {
            expression.to_string()
        }
    }
}

/// Escape text for a single-quoted TypeScript string literal.
fn escape_literal(text: &str) -> String {
    text.replace('\\', "\\\\").replace('\'', "\\'")
}

#[cfg(test)]
mod tests {
    use tsproxy_model::{ParameterDescriptor, TypeDescriptor};

    use super::*;

    fn param(name: &str, source: BindingSource) -> ParameterDescriptor {
        ParameterDescriptor::new(name, TypeDescriptor::primitive("String"), source)
    }

    #[test]
    fn test_path_placeholder() {
        let action = ActionDescriptor::new("GetOrders", "users/{id}/orders").param(param("id", BindingSource::Path));
        assert_eq!(UrlBuilder::default().build_url(&action), "users/' + id + '/orders");
    }

    #[test]
    fn test_path_and_query() {
        let action = ActionDescriptor::new("GetOrders", "users/{id}/orders")
            .param(param("id", BindingSource::Path))
            .param(param("status", BindingSource::Query));
        assert_eq!(
            UrlBuilder::default().build_url(&action),
            "users/' + id + '/orders?status='+status+'"
        );
    }

    #[test]
    fn test_query_order_and_model_binding() {
        let action = ActionDescriptor::new("GetAll", "api/orders")
            .param(param("Skip", BindingSource::ModelBinding))
            .param(param("input", BindingSource::Body))
            .param(param("Take", BindingSource::Query));
        assert_eq!(
            UrlBuilder::default().build(&action),
            "'/api/orders?skip='+skip+'&take='+take+''"
        );
    }

    #[test]
    fn test_member_parameters_read_through_argument() {
        let action = ActionDescriptor::new("GetAll", "api/orders").param(
            ParameterDescriptor::new("MaxResultCount", TypeDescriptor::primitive("Int32"), BindingSource::Query)
                .on_method("input"),
        );
        assert_eq!(
            UrlBuilder::default().build_url(&action),
            "api/orders?maxResultCount='+input.maxResultCount+'"
        );
    }

    #[test]
    fn test_encoded_query_values() {
        let action = ActionDescriptor::new("Search", "search").param(param("term", BindingSource::Query));
        assert_eq!(
            UrlBuilder::new("", true).build(&action),
            "'search?term='+encodeURIComponent(term)+''"
        );
    }

    #[test]
    fn test_prefix() {
        let action = ActionDescriptor::new("GetOrder", "orders/{id}").param(param("id", BindingSource::Path));
        assert_eq!(UrlBuilder::default().build(&action), "'/orders/' + id + ''");
        assert_eq!(UrlBuilder::new("api/", false).build(&action), "'api/orders/' + id + ''");

        let rooted = ActionDescriptor::new("Ping", "/ping");
        assert_eq!(UrlBuilder::new("api/", false).build(&rooted), "'/ping'");
    }

    #[test]
    fn test_existing_query_string() {
        let action = ActionDescriptor::new("Export", "orders?format=csv").param(param("day", BindingSource::Query));
        assert_eq!(UrlBuilder::new("", false).build_url(&action), "orders?format=csv&day='+day+'");
    }

    #[test]
    fn test_body_form_and_header_are_excluded() {
        let action = ActionDescriptor::new("Create", "orders")
            .param(param("input", BindingSource::Body))
            .param(param("file", BindingSource::Form))
            .param(param("tenant", BindingSource::Header));
        assert_eq!(UrlBuilder::default().build(&action), "'/orders'");
    }

    #[test]
    fn test_quotes_are_escaped() {
        let action = ActionDescriptor::new("Odd", "it's/{id}").param(param("id", BindingSource::Path));
        assert_eq!(UrlBuilder::new("", false).build(&action), "'it\\'s/' + id + ''");
    }

    #[test]
    fn test_reserved_path_parameter() {
        let action = ActionDescriptor::new("Get", "items/{default}").param(param("default", BindingSource::Path));
        assert_eq!(UrlBuilder::new("", false).build_url(&action), "items/' + _default + '");
    }

    #[test]
    fn test_from_config() {
        let config = AngularConfig {
            url_prefix: "api/".into(),
            encode_query_values: true,
            ..Default::default()
        };
        assert_eq!(UrlBuilder::from_config(&config), UrlBuilder::new("api/", true));
    }
}
