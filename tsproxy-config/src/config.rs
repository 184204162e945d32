//! `tsproxy.toml` generator configuration.

use std::{path::PathBuf, str::FromStr};

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::{Result, SourceContext};

/// Default configuration file name.
pub const DEFAULT_CONFIG_FILE: &str = "tsproxy.toml";

/// Display-name overrides applied to class fields unless disabled.
///
/// `{self}` stands for the name of the class declaring the field.
const DEFAULT_TYPE_OVERRIDES: &[(&str, &str)] = &[
    ("TreeNodeDto[]", "{self}[]"),
    ("Dictionary", "Array<{key:string,value:boolean}>"),
];

/// Root of `tsproxy.toml`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ProxyConfig {
    pub generator: GeneratorConfig,
    pub angular: AngularConfig,
    /// Resolved field type name -> replacement. An empty replacement
    /// disables a built-in override.
    pub type_overrides: IndexMap<String, String>,
}

impl ProxyConfig {
    /// Parse a configuration with a filename for error reporting.
    pub fn from_str_with_filename(content: &str, filename: &str) -> Result<Self> {
        let ctx = SourceContext::new(content, filename);
        let config: ProxyConfig = toml::from_str(content).map_err(|e| ctx.config_error(e))?;
        config.validate(&ctx)?;
        Ok(config)
    }

    /// Effective type overrides: built-ins first, then user entries.
    pub fn type_overrides(&self) -> IndexMap<String, String> {
        let mut overrides: IndexMap<String, String> = DEFAULT_TYPE_OVERRIDES
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        for (name, replacement) in &self.type_overrides {
            if replacement.is_empty() {
                overrides.shift_remove(name);
            } else {
                overrides.insert(name.clone(), replacement.clone());
            }
        }
        overrides
    }

    fn validate(&self, ctx: &SourceContext) -> Result<()> {
        let name = self.generator.name.trim();
        if name.is_empty() || name.contains(char::is_whitespace) {
            return Err(ctx.validation_error_near(
                format!("invalid generator name '{}'", self.generator.name),
                "name",
            ));
        }
        if self.type_overrides.keys().any(|k| k.trim().is_empty()) {
            return Err(ctx.validation_error_near(
                "type override names must not be empty",
                "[type_overrides]",
            ));
        }
        Ok(())
    }
}

impl FromStr for ProxyConfig {
    type Err = Box<crate::Error>;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_str_with_filename(s, DEFAULT_CONFIG_FILE)
    }
}

/// `[generator]` section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GeneratorConfig {
    /// Registry key of the generator to run.
    pub name: String,
    /// Output file, relative to the working directory.
    pub output: PathBuf,
    /// Prepend `// @ts-nocheck` to the written file.
    pub ts_nocheck: bool,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            name: "angular".to_string(),
            output: PathBuf::from("service-proxies.ts"),
            ts_nocheck: false,
        }
    }
}

/// `[angular]` section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AngularConfig {
    /// Text of the leading block comment.
    pub header: String,
    /// Module the `HttpClient` is imported from.
    pub http_client_import: String,
    /// Prefix prepended to every action URL that does not start with `/`.
    pub url_prefix: String,
    /// Wrap query-string values in `encodeURIComponent`.
    pub encode_query_values: bool,
    pub promise_style: PromiseStyle,
    /// Language of the failure log messages.
    pub locale: Locale,
}

impl Default for AngularConfig {
    fn default() -> Self {
        Self {
            header: "This file is generated from the backend API description. Do not edit it by hand."
                .to_string(),
            http_client_import: "@angular/common/http".to_string(),
            url_prefix: "/".to_string(),
            encode_query_values: false,
            promise_style: PromiseStyle::default(),
            locale: Locale::default(),
        }
    }
}

/// How an observable request is turned into a promise.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PromiseStyle {
    /// `this.http.get(...).toPromise()`
    #[default]
    ToPromise,
    /// `firstValueFrom(this.http.get(...))` from rxjs 7+
    FirstValueFrom,
}

/// Language of generated log messages.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Locale {
    #[default]
    En,
    Zh,
}
