mod check;
mod navigate;
mod records;
mod render;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use teacard_config::{ConfigLoad, ConfigLoader};
use teacard_core::cards::{ActionLabels, CardBuilder};
use teacard_core::storage::{self, JsonFileStore};
use teacard_core::{Carousel, Element};
use teacard_model::Record;

use crate::cli::{Cli, Command};

const DEFAULT_STORE_FILE: &str = "teacard-store.json";

pub fn run(cli: Cli) -> Result<()> {
    let session = Session::open(cli.config.as_deref(), cli.store)?;

    match cli.command {
        Command::Render { width } => render::run(&session, width),
        Command::Navigate { steps, width } => navigate::run(&session, &steps, width),
        Command::Add { fields } => records::add(&session, &fields),
        Command::Delete { index } => records::delete(&session, index),
        Command::Check => check::run(&session),
    }
}

/// Resolved configuration plus the store location every command works on.
pub(crate) struct Session {
    load: ConfigLoad,
    store_path: PathBuf,
}

impl Session {
    fn open(config_path: Option<&Path>, store_override: Option<PathBuf>) -> Result<Self> {
        let mut loader = ConfigLoader::new();
        if let Some(path) = config_path {
            loader = loader.with_config_path(path);
        }
        let load = loader.load().context("failed to load teacard configuration")?;

        let store_path = store_override
            .or_else(|| load.config.store_path.clone())
            .unwrap_or_else(|| PathBuf::from(DEFAULT_STORE_FILE));

        tracing::debug!(
            source = ?load.source,
            store = %store_path.display(),
            "Session opened"
        );
        Ok(Self { load, store_path })
    }

    pub(crate) fn config(&self) -> &teacard_config::AppConfig {
        &self.load.config
    }

    pub(crate) fn open_store(&self) -> Result<JsonFileStore> {
        JsonFileStore::open(&self.store_path)
            .with_context(|| format!("failed to open store {}", self.store_path.display()))
    }

    pub(crate) fn records(&self) -> Result<Vec<Record>> {
        let store = self.open_store()?;
        storage::load_records(&store, self.config().storage_key())
            .context("failed to read stored records")
    }

    pub(crate) fn slides(&self, records: &[Record]) -> Vec<Element> {
        let config = self.config();
        let defaults = ActionLabels::default();
        let labels = ActionLabels {
            edit: config.label("edit").map_or(defaults.edit, str::to_string),
            delete: config.label("delete").map_or(defaults.delete, str::to_string),
        };
        let fields = config.field_map();
        CardBuilder::new(&fields)
            .with_action_labels(labels)
            .build_all(records)
    }

    /// Carousel over the stored records, already told about the viewport.
    pub(crate) fn carousel(&self, width: Option<u32>) -> Result<Carousel> {
        let records = self.records()?;
        let slides = self.slides(&records);
        let mut carousel = Carousel::new(slides, self.config().carousel.clone())
            .context("invalid carousel options")?;
        carousel.resize(width.unwrap_or(self.config().viewport_width));
        Ok(carousel)
    }
}

/// Height estimate for slides rendered outside a browser: a fixed card
/// chrome plus one line per text node.
pub(crate) struct EstimatedHeight;

impl EstimatedHeight {
    const CHROME_PX: f32 = 32.0;
    const LINE_PX: f32 = 24.0;

    fn lines(element: &Element) -> usize {
        usize::from(element.text().is_some())
            + element.children().iter().map(Self::lines).sum::<usize>()
    }
}

impl teacard_core::carousel::HeightProbe for EstimatedHeight {
    fn natural_height(&self, _index: usize, slide: &Element) -> f32 {
        Self::CHROME_PX + Self::LINE_PX * Self::lines(slide) as f32
    }
}
