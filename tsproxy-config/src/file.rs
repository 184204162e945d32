use std::path::{Path, PathBuf};

use tsproxy_model::ApiDescriptionModel;

use crate::{Error, ProxyConfig, Result, SourceContext};

fn read(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).map_err(|e| {
        Box::new(Error::Io {
            path: path.to_path_buf(),
            source: e,
        })
    })
}

/// A `tsproxy.toml` file with both raw content and parsed configuration.
pub struct ConfigFile {
    path: PathBuf,
    content: String,
    config: ProxyConfig,
}

impl ConfigFile {
    /// Open and parse a configuration file.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let content = read(&path)?;
        let filename = path.display().to_string();
        let config = ProxyConfig::from_str_with_filename(&content, &filename)?;

        Ok(Self {
            path,
            content,
            config,
        })
    }

    /// Open `path` if it exists, otherwise fall back to defaults.
    pub fn open_or_default(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if path.exists() {
            Self::open(path)
        } else {
            Ok(Self {
                path: path.to_path_buf(),
                content: String::new(),
                config: ProxyConfig::default(),
            })
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    /// Get the parsed configuration.
    pub fn config(&self) -> &ProxyConfig {
        &self.config
    }
}

/// A JSON API description file.
pub struct ModelFile {
    path: PathBuf,
    model: ApiDescriptionModel,
}

impl ModelFile {
    /// Open and parse an API description.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let content = read(&path)?;
        let model = Self::parse(&content, &path.display().to_string())?;
        Ok(Self { path, model })
    }

    /// Parse an API description from JSON text.
    pub fn parse(content: &str, filename: &str) -> Result<ApiDescriptionModel> {
        serde_json::from_str(content)
            .map_err(|e| SourceContext::new(content, filename).model_error(e))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn model(&self) -> &ApiDescriptionModel {
        &self.model
    }

    pub fn into_model(self) -> ApiDescriptionModel {
        self.model
    }
}
