//! Card actions delegated through the carousel track listener.

use teacard_model::Record;

use crate::cards::{ACTION_DELETE, ACTION_EDIT};
use crate::carousel::ClickTarget;
use crate::error::StoreError;
use crate::storage::{self, RecordStore};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardAction {
    Edit { index: usize },
    Delete { index: usize },
}

impl CardAction {
    /// Reads `data-action` / `data-index` from a clicked element. Clicks on
    /// anything else yield `None`.
    pub fn from_target(target: &ClickTarget) -> Option<Self> {
        let index = target.attr("data-index")?.trim().parse().ok()?;
        match target.attr("data-action")? {
            ACTION_EDIT => Some(CardAction::Edit { index }),
            ACTION_DELETE => Some(CardAction::Delete { index }),
            other => {
                tracing::debug!(action = other, "Unknown card action");
                None
            }
        }
    }

    pub fn index(&self) -> usize {
        match *self {
            CardAction::Edit { index } | CardAction::Delete { index } => index,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActionOutcome {
    /// The record to pre-fill the entry form with.
    Edit(Record),
    Deleted(Record),
    /// The index no longer points at a stored record.
    Missing,
}

/// Applies card actions against the records stored under one key.
#[derive(Debug)]
pub struct StoreActionHandler<S> {
    store: S,
    key: String,
}

impl<S: RecordStore> StoreActionHandler<S> {
    pub fn new(store: S, key: impl Into<String>) -> Self {
        Self {
            store,
            key: key.into(),
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_store(self) -> S {
        self.store
    }

    pub fn handle(&mut self, action: CardAction) -> Result<ActionOutcome, StoreError> {
        let outcome = match action {
            CardAction::Edit { index } => storage::load_records(&self.store, &self.key)?
                .into_iter()
                .nth(index)
                .map(ActionOutcome::Edit),
            CardAction::Delete { index } => {
                storage::delete_by_index(&mut self.store, &self.key, index)?
                    .map(ActionOutcome::Deleted)
            }
        };
        tracing::debug!(?action, found = outcome.is_some(), "Handled card action");
        Ok(outcome.unwrap_or(ActionOutcome::Missing))
    }
}
