//! Configuration loading for teacard.
//!
//! A site is described by one [`AppConfig`]: its name and language, the
//! form field groups that shape each card, UI labels, and the carousel
//! options. [`ConfigLoader`] resolves it from a file, inline JSON or
//! defaults, then applies `TEACARD_*` environment overrides.

#![allow(missing_docs)]

pub mod loader;
pub mod models;
pub mod util;

pub use loader::{ConfigLoad, ConfigLoader, ConfigLoaderOptions, error::ConfigLoadError};
pub use models::{AppConfig, ConfigSource};
