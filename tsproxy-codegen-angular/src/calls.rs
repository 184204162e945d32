//! Controller method emission: verb, payload, signature and call chain.

use std::fmt;

use indexmap::IndexMap;
use tsproxy_codegen::GenerateError;
use tsproxy_config::{Locale, PromiseStyle};
use tsproxy_core::to_camel_case;
use tsproxy_model::{ActionDescriptor, BindingSource, ControllerDescriptor, ParameterDescriptor};

use crate::{
    ast::{JsObject, MethodChain, MethodDecl, ParamDecl},
    naming::{local_identifier, member_name, normalize, to_param_expression},
    state::GenerationState,
    type_mapper::TypeNameResolver,
    url::UrlBuilder,
};

/// HTTP verbs supported by the generated client.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HttpVerb {
    Get,
    Post,
    Put,
    Delete,
    Patch,
    Head,
    Options,
}

/// Action name prefixes and the verb they imply, checked in order.
const VERB_PREFIXES: &[(&str, HttpVerb)] = &[
    ("get", HttpVerb::Get),
    ("put", HttpVerb::Put),
    ("update", HttpVerb::Put),
    ("delete", HttpVerb::Delete),
    ("remove", HttpVerb::Delete),
    ("patch", HttpVerb::Patch),
    ("post", HttpVerb::Post),
    ("create", HttpVerb::Post),
    ("insert", HttpVerb::Post),
];

impl HttpVerb {
    /// Parse a verb name, ignoring case.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "get" => Some(Self::Get),
            "post" => Some(Self::Post),
            "put" => Some(Self::Put),
            "delete" => Some(Self::Delete),
            "patch" => Some(Self::Patch),
            "head" => Some(Self::Head),
            "options" => Some(Self::Options),
            _ => None,
        }
    }

    /// `HttpClient` method name.
    pub fn as_method(&self) -> &'static str {
        match self {
            Self::Get => "get",
            Self::Post => "post",
            Self::Put => "put",
            Self::Delete => "delete",
            Self::Patch => "patch",
            Self::Head => "head",
            Self::Options => "options",
        }
    }

    /// Returns true when the `HttpClient` method takes a body argument.
    pub fn has_body(&self) -> bool {
        matches!(self, Self::Post | Self::Put | Self::Patch)
    }

    /// Short action word used in failure messages.
    pub fn label(&self, locale: Locale) -> Option<&'static str> {
        match (locale, self) {
            (Locale::En, Self::Get) => Some("Get"),
            (Locale::En, Self::Post) => Some("Create"),
            (Locale::En, Self::Put) => Some("Update"),
            (Locale::En, Self::Delete) => Some("Delete"),
            (Locale::Zh, Self::Get) => Some("获取"),
            (Locale::Zh, Self::Post) => Some("新增"),
            (Locale::Zh, Self::Put) => Some("修改"),
            (Locale::Zh, Self::Delete) => Some("删除"),
            _ => None,
        }
    }
}

impl fmt::Display for HttpVerb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_method().to_ascii_uppercase())
    }
}

/// Infer the verb of an action from its name prefix. Defaults to POST.
pub fn infer_verb(action_name: &str) -> HttpVerb {
    let lower = action_name.to_ascii_lowercase();
    VERB_PREFIXES
        .iter()
        .find(|(prefix, _)| lower.starts_with(prefix))
        .map(|(_, verb)| *verb)
        .unwrap_or(HttpVerb::Post)
}

/// Verb of an action: the explicit one if it parses, otherwise inferred.
pub fn action_verb(action: &ActionDescriptor) -> HttpVerb {
    match action.http_method.as_deref().map(str::trim) {
        None | Some("") => infer_verb(&action.name),
        Some(method) => HttpVerb::parse(method).unwrap_or_else(|| {
            let inferred = infer_verb(&action.name);
            tracing::warn!(
                action = %action.name,
                method,
                %inferred,
                "unknown HTTP method, using the inferred verb"
            );
            inferred
        }),
    }
}

/// Data sent with the request.
#[derive(Debug, Clone, PartialEq)]
pub enum Payload {
    /// The single body-bound parameter.
    Body(String),
    /// Form-bound parameters keyed by wire name.
    Form(JsObject),
}

impl Payload {
    pub fn expression(&self) -> String {
        match self {
            Payload::Body(expr) => expr.clone(),
            Payload::Form(object) => object.build_inline(),
        }
    }
}

/// Request payload of an action.
///
/// A body-bound parameter wins over form parameters. More than one
/// body-bound parameter is an error.
pub fn request_payload(action: &ActionDescriptor) -> Result<Option<Payload>, GenerateError> {
    let body: Vec<&ParameterDescriptor> = action.parameters_from(BindingSource::Body).collect();
    match body.as_slice() {
        [] => {}
        [parameter] => return Ok(Some(Payload::Body(to_param_expression(parameter)))),
        _ => {
            return Err(GenerateError::InvalidBinding {
                action: action.name.clone(),
                url: action.url.clone(),
            });
        }
    }

    let form = keyed_object(action.parameters_from(BindingSource::Form));
    Ok((!form.is_empty()).then_some(Payload::Form(form)))
}

fn keyed_object<'a>(parameters: impl Iterator<Item = &'a ParameterDescriptor>) -> JsObject {
    parameters.fold(JsObject::new(), |object, p| {
        object.raw(&p.name, to_param_expression(p))
    })
}

/// A declared method parameter before its type is rendered.
enum Declared {
    Plain(String),
    /// Members of a flattened argument: `(field, type)`.
    Members(Vec<(String, String)>),
    /// A plain parameter and a flattened argument share the name.
    Conflicting,
}

impl Declared {
    fn type_name(&self) -> String {
        match self {
            Declared::Plain(ty) => ty.clone(),
            Declared::Conflicting => "any".to_string(),
            Declared::Members(fields) if fields.iter().any(|(f, _)| f.contains('.')) => {
                "any".to_string()
            }
            Declared::Members(fields) => {
                let fields: Vec<String> = fields.iter().map(|(f, t)| format!("{f}: {t}")).collect();
                format!("{{ {} }}", fields.join("; "))
            }
        }
    }
}

fn warn_conflict(action: &ActionDescriptor, name: &str) {
    tracing::warn!(
        action = %action.name,
        parameter = name,
        "parameter name is used both plain and flattened, typed as any"
    );
}

/// Emits one controller method per action.
#[derive(Debug, Clone, Copy)]
pub struct CallEmitter<'a> {
    resolver: TypeNameResolver<'a>,
    urls: &'a UrlBuilder,
    promise_style: PromiseStyle,
    locale: Locale,
}

impl<'a> CallEmitter<'a> {
    pub fn new(resolver: TypeNameResolver<'a>, urls: &'a UrlBuilder) -> Self {
        Self {
            resolver,
            urls,
            promise_style: PromiseStyle::default(),
            locale: Locale::default(),
        }
    }

    pub fn with_promise_style(mut self, style: PromiseStyle) -> Self {
        self.promise_style = style;
        self
    }

    pub fn with_locale(mut self, locale: Locale) -> Self {
        self.locale = locale;
        self
    }

    /// Build the method for `action` of `controller`.
    pub fn emit_action(
        &self,
        controller: &ControllerDescriptor,
        action: &ActionDescriptor,
        state: &mut GenerationState,
    ) -> Result<MethodDecl, GenerateError> {
        let verb = action_verb(action);
        let payload = request_payload(action)?;
        let return_type = match &action.return_type {
            Some(ty) => self.resolver.resolve(ty, state),
            None => "void".to_string(),
        };

        let mut method = MethodDecl::new(&action.name, member_name(&action.name));
        for param in self.declared_params(action, state) {
            method = method.param(param);
        }

        let request = self.request(action, verb, &return_type, payload);
        let chain = self.settle(request, verb, &controller.name);
        Ok(method.body(&chain))
    }

    /// Declared parameters, deduplicated by name in first-seen order.
    pub fn declared_params(&self, action: &ActionDescriptor, state: &mut GenerationState) -> Vec<ParamDecl> {
        let mut declared: IndexMap<String, Declared> = IndexMap::new();

        for parameter in &action.parameters {
            let ty = self.resolver.resolve(&parameter.ty, state);
            if parameter.is_member() {
                let owner = local_identifier(&member_name(parameter.name_on_method()));
                let field = normalize(&to_camel_case(&parameter.name), ".");
                let entry = declared
                    .entry(owner)
                    .or_insert_with(|| Declared::Members(Vec::new()));
                match entry {
                    Declared::Members(fields) => {
                        if !fields.iter().any(|(f, _)| *f == field) {
                            fields.push((field, ty));
                        }
                    }
                    Declared::Plain(_) => {
                        warn_conflict(action, parameter.name_on_method());
                        *entry = Declared::Conflicting;
                    }
                    Declared::Conflicting => {}
                }
            } else {
                let name = local_identifier(&member_name(&parameter.name));
                let entry = declared.entry(name).or_insert_with(|| Declared::Plain(ty));
                if matches!(entry, Declared::Members(_)) {
                    warn_conflict(action, &parameter.name);
                    *entry = Declared::Conflicting;
                }
            }
        }

        declared
            .iter()
            .map(|(name, d)| ParamDecl::new(name, d.type_name()))
            .collect()
    }

    fn request(
        &self,
        action: &ActionDescriptor,
        verb: HttpVerb,
        return_type: &str,
        payload: Option<Payload>,
    ) -> MethodChain {
        let url = self.urls.build(action);
        let headers = keyed_object(action.parameters_from(BindingSource::Header));
        let mut options = JsObject::new();
        if !headers.is_empty() {
            options = options.object("headers", headers);
        }

        match (verb.has_body(), payload) {
            (true, payload) => {
                let chain = MethodChain::new(format!("this.http.{}<{return_type}>", verb.as_method())).arg(url);
                match (payload, options.is_empty()) {
                    (Some(payload), true) => chain.arg(payload.expression()),
                    (Some(payload), false) => chain.arg(payload.expression()).arg(options.build_inline()),
                    (None, true) => chain,
                    (None, false) => chain.arg("null").arg(options.build_inline()),
                }
            }
            // HttpClient.get and friends take no body argument
            (false, Some(payload)) => MethodChain::new(format!("this.http.request<{return_type}>"))
                .arg(format!("'{verb}'"))
                .arg(url)
                .arg(options.field("body", payload.expression()).build_inline()),
            (false, None) => {
                let chain = MethodChain::new(format!("this.http.{}<{return_type}>", verb.as_method())).arg(url);
                if options.is_empty() {
                    chain
                } else {
                    chain.arg(options.build_inline())
                }
            }
        }
    }

    /// Turn the request into a promise that logs and rejects on failure.
    fn settle(&self, request: MethodChain, verb: HttpVerb, controller: &str) -> MethodChain {
        let on_success = vec!["res => { return res }".to_string()];
        let chain = match self.promise_style {
            PromiseStyle::ToPromise => request
                .call("toPromise", Vec::new())
                .then_call("then", on_success),
            PromiseStyle::FirstValueFrom => MethodChain::new("firstValueFrom")
                .arg(request.build_inline())
                .call("then", on_success),
        };

        chain
            .callback(
                "catch",
                "err",
                [
                    format!("console.error('{}', err);", self.failure_message(verb, controller)),
                    "return Promise.reject(err.message || err);".to_string(),
                ],
            )
            .returned()
    }

    /// Logged text for a failed call, e.g. `Get Orders failed:`.
    pub fn failure_message(&self, verb: HttpVerb, controller: &str) -> String {
        let controller = controller.replace('\\', "\\\\").replace('\'', "\\'");
        let label = verb.label(self.locale);
        match (self.locale, label) {
            (Locale::En, Some(label)) => format!("{label} {controller} failed:"),
            (Locale::En, None) => format!("{controller} failed:"),
            (Locale::Zh, Some(label)) => format!("{label} {controller} 出现错误："),
            (Locale::Zh, None) => format!("{controller} 出现错误："),
        }
    }
}

#[cfg(test)]
mod tests {
    use tsproxy_codegen::builder::CodeBuilder;
    use tsproxy_model::{ApiDescriptionModel, ComplexType, TypeDescriptor};

    use super::*;

    fn model() -> ApiDescriptionModel {
        ApiDescriptionModel::new()
            .complex_type("OrderDto", ComplexType::new("OrderDto"))
            .complex_type("CreateOrderInput", ComplexType::new("CreateOrderInput"))
    }

    fn param(name: &str, ty: TypeDescriptor, source: BindingSource) -> ParameterDescriptor {
        ParameterDescriptor::new(name, ty, source)
    }

    fn render(emitter: CallEmitter<'_>, action: &ActionDescriptor) -> String {
        let controller = ControllerDescriptor::new("Orders");
        let method = emitter
            .emit_action(&controller, action, &mut GenerationState::new())
            .unwrap();
        let mut builder = CodeBuilder::typescript();
        builder.emit(&method);
        builder.build()
    }

    #[test]
    fn test_infer_verb() {
        assert_eq!(infer_verb("GetUser"), HttpVerb::Get);
        assert_eq!(infer_verb("UpdateUser"), HttpVerb::Put);
        assert_eq!(infer_verb("PutUser"), HttpVerb::Put);
        assert_eq!(infer_verb("DeleteUser"), HttpVerb::Delete);
        assert_eq!(infer_verb("RemoveUser"), HttpVerb::Delete);
        assert_eq!(infer_verb("PatchUser"), HttpVerb::Patch);
        assert_eq!(infer_verb("CreateUser"), HttpVerb::Post);
        assert_eq!(infer_verb("InsertUser"), HttpVerb::Post);
        assert_eq!(infer_verb("ArchiveUser"), HttpVerb::Post);
        assert_eq!(infer_verb("getAll"), HttpVerb::Get);
    }

    #[test]
    fn test_parse_verb() {
        assert_eq!(HttpVerb::parse("GET"), Some(HttpVerb::Get));
        assert_eq!(HttpVerb::parse("patch"), Some(HttpVerb::Patch));
        assert_eq!(HttpVerb::parse("TRACE"), None);
        assert_eq!(HttpVerb::Delete.to_string(), "DELETE");
    }

    #[test]
    fn test_explicit_verb_wins() {
        let action = ActionDescriptor::new("GetReport", "reports").method("POST");
        assert_eq!(action_verb(&action), HttpVerb::Post);

        let action = ActionDescriptor::new("GetReport", "reports").method("BREW");
        assert_eq!(action_verb(&action), HttpVerb::Get);

        let action = ActionDescriptor::new("GetReport", "reports").method(" ");
        assert_eq!(action_verb(&action), HttpVerb::Get);
    }

    #[test]
    fn test_two_body_parameters_is_error() {
        let action = ActionDescriptor::new("Create", "orders")
            .param(param("a", TypeDescriptor::complex("OrderDto"), BindingSource::Body))
            .param(param("b", TypeDescriptor::complex("OrderDto"), BindingSource::Body));

        let err = request_payload(&action).unwrap_err();
        assert!(matches!(err, GenerateError::InvalidBinding { ref action, ref url } if action == "Create" && url == "orders"));

        let model = model();
        let urls = UrlBuilder::default();
        let emitter = CallEmitter::new(TypeNameResolver::new(&model), &urls);
        let result = emitter.emit_action(&ControllerDescriptor::new("Orders"), &action, &mut GenerationState::new());
        assert!(result.is_err());
    }

    #[test]
    fn test_payload_kinds() {
        let body = ActionDescriptor::new("Create", "orders")
            .param(param("Input", TypeDescriptor::complex("CreateOrderInput"), BindingSource::Body))
            .param(param("Note", TypeDescriptor::primitive("String"), BindingSource::Form));
        assert_eq!(request_payload(&body).unwrap(), Some(Payload::Body("input".into())));

        let form = ActionDescriptor::new("Upload", "files")
            .param(param("FileName", TypeDescriptor::primitive("String"), BindingSource::Form))
            .param(param("Size", TypeDescriptor::primitive("Int64"), BindingSource::Form));
        assert_eq!(
            request_payload(&form).unwrap().unwrap().expression(),
            "{ 'FileName': fileName, 'Size': size }"
        );

        let none = ActionDescriptor::new("Ping", "ping");
        assert_eq!(request_payload(&none).unwrap(), None);
    }

    #[test]
    fn test_get_method() {
        let model = model();
        let urls = UrlBuilder::default();
        let action = ActionDescriptor::new("GetOrder", "orders/{id}")
            .returns(TypeDescriptor::task(TypeDescriptor::complex("OrderDto")))
            .param(param("id", TypeDescriptor::primitive("Guid"), BindingSource::Path));

        assert_eq!(
            render(CallEmitter::new(TypeNameResolver::new(&model), &urls), &action),
            "\
/* Action 'GetOrder' */
getOrder(id: string) {
  return this.http.get<OrderDto>('/orders/' + id + '')
    .toPromise().then(res => { return res })
    .catch(err => {
      console.error('Get Orders failed:', err);
      return Promise.reject(err.message || err);
    });
}
"
        );
    }

    #[test]
    fn test_post_without_payload_has_no_payload_argument() {
        let model = model();
        let urls = UrlBuilder::default();
        let action = ActionDescriptor::new("Recalculate", "orders/recalculate");

        let code = render(CallEmitter::new(TypeNameResolver::new(&model), &urls), &action);
        assert!(code.contains("return this.http.post<void>('/orders/recalculate')\n"));
        assert!(code.contains("console.error('Create Orders failed:', err);"));
    }

    #[test]
    fn test_post_with_body() {
        let model = model();
        let urls = UrlBuilder::default();
        let action = ActionDescriptor::new("CreateOrder", "orders")
            .returns(TypeDescriptor::task(TypeDescriptor::primitive("Guid")))
            .param(param("input", TypeDescriptor::complex("CreateOrderInput"), BindingSource::Body));

        let code = render(CallEmitter::new(TypeNameResolver::new(&model), &urls), &action);
        assert!(code.contains("createOrder(input: CreateOrderInput) {"));
        assert!(code.contains("return this.http.post<string>('/orders', input)\n"));
    }

    #[test]
    fn test_headers_are_sent_as_options() {
        let model = model();
        let urls = UrlBuilder::default();
        let emitter = CallEmitter::new(TypeNameResolver::new(&model), &urls);

        let get = ActionDescriptor::new("GetOrders", "orders")
            .param(param("Tenant", TypeDescriptor::primitive("String"), BindingSource::Header));
        assert!(render(emitter, &get).contains("this.http.get<void>('/orders', { headers: { 'Tenant': tenant } })"));

        let post = ActionDescriptor::new("Touch", "orders")
            .param(param("Tenant", TypeDescriptor::primitive("String"), BindingSource::Header));
        assert!(render(emitter, &post).contains("this.http.post<void>('/orders', null, { headers: { 'Tenant': tenant } })"));
    }

    #[test]
    fn test_bodyless_verb_with_payload_uses_request() {
        let model = model();
        let urls = UrlBuilder::default();
        let action = ActionDescriptor::new("DeleteMany", "orders")
            .param(param("ids", TypeDescriptor::list(TypeDescriptor::primitive("Guid")), BindingSource::Body));

        let code = render(CallEmitter::new(TypeNameResolver::new(&model), &urls), &action);
        assert!(code.contains("deleteMany(ids: string[]) {"));
        assert!(code.contains("return this.http.request<void>('DELETE', '/orders', { body: ids })\n"));
        assert!(code.contains("console.error('Delete Orders failed:', err);"));
    }

    #[test]
    fn test_declared_params_dedup_and_members() {
        let model = model();
        let urls = UrlBuilder::default();
        let emitter = CallEmitter::new(TypeNameResolver::new(&model), &urls);
        let action = ActionDescriptor::new("GetAll", "orders")
            .param(param("id", TypeDescriptor::primitive("Guid"), BindingSource::Path))
            .param(param("id", TypeDescriptor::primitive("Guid"), BindingSource::Query))
            .param(param("SkipCount", TypeDescriptor::primitive("Int32"), BindingSource::Query).on_method("input"))
            .param(param("Sorting", TypeDescriptor::primitive("String"), BindingSource::Query).on_method("input"))
            .param(param("Default", TypeDescriptor::primitive("Boolean"), BindingSource::Query));

        let params: Vec<String> = emitter
            .declared_params(&action, &mut GenerationState::new())
            .iter()
            .map(ParamDecl::build)
            .collect();
        assert_eq!(
            params,
            [
                "id: string",
                "input: { skipCount: number; sorting: string }",
                "_default: boolean"
            ]
        );
    }

    #[test]
    fn test_plain_and_flattened_name_clash_is_any() {
        let model = model();
        let urls = UrlBuilder::default();
        let emitter = CallEmitter::new(TypeNameResolver::new(&model), &urls);
        let action = ActionDescriptor::new("GetAll", "orders")
            .param(param("input", TypeDescriptor::primitive("String"), BindingSource::Query))
            .param(param("SkipCount", TypeDescriptor::primitive("Int32"), BindingSource::Query).on_method("input"))
            .param(param("Sorting", TypeDescriptor::primitive("String"), BindingSource::Query).on_method("input"));

        let params = emitter.declared_params(&action, &mut GenerationState::new());
        assert_eq!(params, [ParamDecl::new("input", "any")]);

        let reversed = ActionDescriptor::new("GetAll", "orders")
            .param(param("SkipCount", TypeDescriptor::primitive("Int32"), BindingSource::Query).on_method("input"))
            .param(param("input", TypeDescriptor::primitive("String"), BindingSource::Query));
        let code = render(emitter, &reversed);
        assert!(code.contains("getAll(input: any) {"));
    }

    #[test]
    fn test_nested_members_are_any() {
        let model = model();
        let urls = UrlBuilder::default();
        let emitter = CallEmitter::new(TypeNameResolver::new(&model), &urls);
        let action = ActionDescriptor::new("Search", "search").param(
            param("Address.City", TypeDescriptor::primitive("String"), BindingSource::Query).on_method("filter"),
        );

        let params = emitter.declared_params(&action, &mut GenerationState::new());
        assert_eq!(params, [ParamDecl::new("filter", "any")]);
    }

    #[test]
    fn test_first_value_from() {
        let model = model();
        let urls = UrlBuilder::default();
        let emitter = CallEmitter::new(TypeNameResolver::new(&model), &urls)
            .with_promise_style(PromiseStyle::FirstValueFrom);
        let action = ActionDescriptor::new("GetCount", "orders/count")
            .returns(TypeDescriptor::task(TypeDescriptor::primitive("Int32")));

        let code = render(emitter, &action);
        assert!(code.contains(
            "return firstValueFrom(this.http.get<number>('/orders/count'))\n    .then(res => { return res })\n"
        ));
    }

    #[test]
    fn test_failure_messages() {
        let model = model();
        let urls = UrlBuilder::default();
        let en = CallEmitter::new(TypeNameResolver::new(&model), &urls);
        let zh = en.with_locale(Locale::Zh);

        assert_eq!(en.failure_message(HttpVerb::Put, "Orders"), "Update Orders failed:");
        assert_eq!(en.failure_message(HttpVerb::Patch, "Orders"), "Orders failed:");
        assert_eq!(zh.failure_message(HttpVerb::Get, "Orders"), "获取 Orders 出现错误：");
        assert_eq!(zh.failure_message(HttpVerb::Post, "Orders"), "新增 Orders 出现错误：");
        assert_eq!(zh.failure_message(HttpVerb::Put, "Orders"), "修改 Orders 出现错误：");
        assert_eq!(zh.failure_message(HttpVerb::Delete, "Orders"), "删除 Orders 出现错误：");
        assert_eq!(zh.failure_message(HttpVerb::Head, "Orders"), "Orders 出现错误：");
    }

    #[test]
    fn test_missing_return_type_is_void() {
        let model = model();
        let urls = UrlBuilder::default();
        let action = ActionDescriptor::new("DeleteOrder", "orders/{id}")
            .param(param("id", TypeDescriptor::primitive("Guid"), BindingSource::Path));

        let code = render(CallEmitter::new(TypeNameResolver::new(&model), &urls), &action);
        assert!(code.contains("this.http.delete<void>('/orders/' + id + '')"));
    }
}
