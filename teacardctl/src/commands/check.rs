use anyhow::{Context, Result};
use teacard_config::ConfigSource;

use super::Session;

pub(super) fn run(session: &Session) -> Result<()> {
    let config = session.config();
    let source = match &session.load.source {
        ConfigSource::Default => "defaults".to_string(),
        ConfigSource::File(path) => format!("file {}", path.display()),
        ConfigSource::EnvPath(path) => format!("$TEACARD_CONFIG_PATH {}", path.display()),
        ConfigSource::EnvInline => "$TEACARD_CONFIG_JSON".to_string(),
    };

    let records = session.records()?;
    let effective = config
        .carousel
        .clone()
        .resolve(records.len())
        .context("invalid carousel options")?;

    println!("site: {}", config.site_title());
    println!("source: {source}");
    println!("storage key: {}", config.storage_key());
    println!("store: {}", session.store_path.display());
    println!("records: {}", records.len());
    println!("fields: {}", config.field_map().len());
    println!("carousel options:");
    println!("{}", serde_json::to_string_pretty(&effective)?);
    if effective != config.carousel {
        println!("note: wrapping modes downgraded for {} records", records.len());
    }
    Ok(())
}
