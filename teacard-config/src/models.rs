use std::collections::BTreeMap;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use teacard_core::CarouselOptions;
use teacard_model::{FieldGroup, FieldMap};

use crate::loader::error::ConfigLoadError;
use crate::util;

pub const DEFAULT_SITE_NAME: &str = "teacard";
pub const DEFAULT_LANG: &str = "en";
pub const DEFAULT_VIEWPORT_WIDTH: u32 = 1920;

/// Where the loaded configuration came from.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ConfigSource {
    #[default]
    Default,
    /// Path given explicitly by the caller.
    File(PathBuf),
    /// `$TEACARD_CONFIG_PATH`.
    EnvPath(PathBuf),
    /// `$TEACARD_CONFIG_JSON`.
    EnvInline,
}

/// Site settings: naming, form fields, labels and the carousel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    #[serde(alias = "siteName")]
    pub site_name: String,
    pub lang: String,
    /// Key the records are stored under; defaults to the site name.
    #[serde(alias = "storageKey", skip_serializing_if = "Option::is_none")]
    pub storage_key: Option<String>,
    pub carousel: CarouselOptions,
    /// Viewport width assumed when rendering outside a browser.
    #[serde(alias = "viewportWidth")]
    pub viewport_width: u32,
    pub fields: Vec<FieldGroup>,
    /// Labels per language, then per label key.
    #[serde(alias = "uiLabels", alias = "UILabels")]
    pub ui_labels: BTreeMap<String, BTreeMap<String, String>>,
    #[serde(alias = "storePath", skip_serializing_if = "Option::is_none")]
    pub store_path: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            site_name: DEFAULT_SITE_NAME.to_string(),
            lang: DEFAULT_LANG.to_string(),
            storage_key: None,
            carousel: CarouselOptions::default(),
            viewport_width: DEFAULT_VIEWPORT_WIDTH,
            fields: Vec::new(),
            ui_labels: BTreeMap::new(),
            store_path: None,
        }
    }
}

impl AppConfig {
    pub fn storage_key(&self) -> &str {
        self.storage_key.as_deref().unwrap_or(&self.site_name)
    }

    pub fn site_title(&self) -> String {
        util::snake_to_title_case(&self.site_name)
    }

    pub fn field_map(&self) -> FieldMap {
        FieldMap::from_groups(&self.fields)
    }

    /// Label for `key` in the configured language.
    pub fn label(&self, key: &str) -> Option<&str> {
        self.ui_labels
            .get(&self.lang)
            .and_then(|labels| labels.get(key))
            .map(String::as_str)
    }

    pub fn validate(&self) -> Result<(), ConfigLoadError> {
        self.carousel.validate()?;
        for field in self.fields.iter().flat_map(|g| g.fields.iter()) {
            field.validate()?;
        }
        if self.viewport_width == 0 {
            return Err(ConfigLoadError::Invalid {
                name: "viewport_width",
                reason: "must be greater than zero".to_string(),
            });
        }
        if self.storage_key().trim().is_empty() {
            return Err(ConfigLoadError::Invalid {
                name: "storage_key",
                reason: "must not be empty".to_string(),
            });
        }
        Ok(())
    }
}
