pub mod error;

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use crate::models::{AppConfig, ConfigSource};
use crate::util::parse_bool;
use error::ConfigLoadError;

pub const CONFIG_PATH_VAR: &str = "TEACARD_CONFIG_PATH";
pub const CONFIG_JSON_VAR: &str = "TEACARD_CONFIG_JSON";

#[derive(Debug, Default, Clone)]
pub struct ConfigLoaderOptions {
    /// Explicit config file; wins over `$TEACARD_CONFIG_PATH`.
    pub config_path: Option<PathBuf>,
    /// `.env` file to read. Defaults to `.env` in the working directory.
    pub env_file: Option<PathBuf>,
    /// Replaces the process environment when set.
    pub vars: Option<HashMap<String, String>>,
}

#[derive(Debug, Clone)]
pub struct ConfigLoad {
    pub config: AppConfig,
    pub source: ConfigSource,
    pub env_file_loaded: bool,
}

#[derive(Debug, Default)]
pub struct ConfigLoader {
    options: ConfigLoaderOptions,
}

impl ConfigLoader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: ConfigLoaderOptions) -> Self {
        Self { options }
    }

    pub fn with_config_path<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.options.config_path = Some(path.into());
        self
    }

    pub fn with_env_file<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.options.env_file = Some(path.into());
        self
    }

    pub fn with_vars<I, K, V>(mut self, vars: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.options.vars = Some(
            vars.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        );
        self
    }

    /// Resolves the configuration.
    ///
    /// Evaluation order:
    /// 1) explicit path, then `$TEACARD_CONFIG_PATH` (TOML or JSON file),
    /// 2) `$TEACARD_CONFIG_JSON` (inline JSON),
    /// 3) defaults.
    ///
    /// `TEACARD_*` overrides from the environment and the `.env` file are
    /// applied on top, then the result is validated.
    pub fn load(&self) -> Result<ConfigLoad, ConfigLoadError> {
        let (env, env_file_loaded) = self.gather_env()?;

        let (mut config, source) = self.load_base(&env)?;
        apply_overrides(&mut config, &env)?;
        config.validate()?;

        tracing::debug!(?source, env_file_loaded, "Configuration loaded");
        Ok(ConfigLoad {
            config,
            source,
            env_file_loaded,
        })
    }

    /// Process (or injected) variables, completed by the `.env` file.
    /// Variables already set win over the file.
    fn gather_env(&self) -> Result<(HashMap<String, String>, bool), ConfigLoadError> {
        let mut env: HashMap<String, String> = match &self.options.vars {
            Some(vars) => vars.clone(),
            None => std::env::vars().collect(),
        };

        let env_path = self
            .options
            .env_file
            .clone()
            .unwrap_or_else(|| PathBuf::from(".env"));
        let entries = match dotenvy::from_path_iter(&env_path) {
            Ok(entries) => entries,
            Err(dotenvy::Error::Io(_)) => return Ok((env, false)),
            Err(err) => return Err(err.into()),
        };
        for entry in entries {
            let (key, value) = entry?;
            env.entry(key).or_insert(value);
        }
        Ok((env, true))
    }

    fn load_base(
        &self,
        env: &HashMap<String, String>,
    ) -> Result<(AppConfig, ConfigSource), ConfigLoadError> {
        if let Some(path) = &self.options.config_path {
            let config = load_from_file(path)?;
            return Ok((config, ConfigSource::File(path.clone())));
        }

        if let Some(raw) = non_empty(env, CONFIG_PATH_VAR) {
            let path = PathBuf::from(raw);
            let config = load_from_file(&path)?;
            return Ok((config, ConfigSource::EnvPath(path)));
        }

        if let Some(raw) = non_empty(env, CONFIG_JSON_VAR) {
            let config = parse_json(raw, CONFIG_JSON_VAR)?;
            return Ok((config, ConfigSource::EnvInline));
        }

        Ok((AppConfig::default(), ConfigSource::Default))
    }
}

pub fn load_from_file(path: &Path) -> Result<AppConfig, ConfigLoadError> {
    if !path.exists() {
        return Err(ConfigLoadError::MissingConfig {
            path: path.to_path_buf(),
        });
    }
    let contents = fs::read_to_string(path).map_err(|source| ConfigLoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    match path.extension().and_then(|ext| ext.to_str()) {
        Some("json") => parse_json(&contents, &path.display().to_string()),
        _ => toml::from_str(&contents).map_err(|source| ConfigLoadError::ParseToml {
            path: path.to_path_buf(),
            source,
        }),
    }
}

fn parse_json(raw: &str, origin: &str) -> Result<AppConfig, ConfigLoadError> {
    serde_json::from_str(raw).map_err(|source| ConfigLoadError::ParseJson {
        origin: origin.to_string(),
        source,
    })
}

fn non_empty<'a>(env: &'a HashMap<String, String>, name: &str) -> Option<&'a str> {
    env.get(name)
        .map(|raw| raw.trim())
        .filter(|raw| !raw.is_empty())
}

fn apply_overrides(
    config: &mut AppConfig,
    env: &HashMap<String, String>,
) -> Result<(), ConfigLoadError> {
    let carousel = &mut config.carousel;
    if let Some(n) = parsed(env, "TEACARD_SLIDES_VISIBLE")? {
        carousel.slides_visible = n;
    }
    if let Some(n) = parsed(env, "TEACARD_SLIDES_TO_SCROLL")? {
        carousel.slides_to_scroll = n;
    }
    if let Some(on) = flag(env, "TEACARD_LOOP")? {
        carousel.loop_mode = on;
    }
    if let Some(on) = flag(env, "TEACARD_INFINITE")? {
        carousel.infinite = on;
    }
    if let Some(on) = flag(env, "TEACARD_SLIDE_INDICATOR")? {
        carousel.slide_indicator = on;
    }
    if let Some(px) = parsed(env, "TEACARD_BREAKPOINT")? {
        carousel.breakpoint = px;
    }
    if let Some(path) = non_empty(env, "TEACARD_STORE_PATH") {
        config.store_path = Some(PathBuf::from(path));
    }
    Ok(())
}

fn parsed<T: std::str::FromStr>(
    env: &HashMap<String, String>,
    name: &'static str,
) -> Result<Option<T>, ConfigLoadError> {
    let Some(raw) = non_empty(env, name) else {
        return Ok(None);
    };
    raw.parse().map(Some).map_err(|_| ConfigLoadError::InvalidEnv {
        name,
        value: raw.to_string(),
    })
}

fn flag(env: &HashMap<String, String>, name: &'static str) -> Result<Option<bool>, ConfigLoadError> {
    let Some(raw) = non_empty(env, name) else {
        return Ok(None);
    };
    parse_bool(raw)
        .map(Some)
        .ok_or_else(|| ConfigLoadError::InvalidEnv {
            name,
            value: raw.to_string(),
        })
}
