//! Record persistence.
//!
//! Stores hold raw string values under string keys, the same contract as a
//! browser's local storage. Everything typed lives in the helpers on top:
//! a key holds either a JSON array of records or a JSON array of strings
//! (the distinct values ever entered for a field).

pub mod json_file;
pub mod memory;

use teacard_model::{FieldMap, FieldValue, Record};

use crate::error::StoreError;

pub use json_file::JsonFileStore;
pub use memory::MemoryStore;

/// Raw key/value persistence backend.
pub trait RecordStore {
    fn get_raw(&self, key: &str) -> Result<Option<String>, StoreError>;

    fn set_raw(&mut self, key: &str, value: String) -> Result<(), StoreError>;

    fn remove(&mut self, key: &str) -> Result<(), StoreError>;
}

/// Reads the JSON array under `key`. A missing key and unparseable content
/// both yield an empty list; the latter is logged.
fn read_array<S, T>(store: &S, key: &str) -> Result<Vec<T>, StoreError>
where
    S: RecordStore + ?Sized,
    T: serde::de::DeserializeOwned,
{
    let Some(raw) = store.get_raw(key)? else {
        return Ok(Vec::new());
    };
    match serde_json::from_str(&raw) {
        Ok(items) => Ok(items),
        Err(err) => {
            tracing::warn!(key, error = %err, "Ignoring corrupt stored value");
            Ok(Vec::new())
        }
    }
}

fn write_array<S, T>(store: &mut S, key: &str, items: &[T]) -> Result<(), StoreError>
where
    S: RecordStore + ?Sized,
    T: serde::Serialize,
{
    let raw = serde_json::to_string(items)?;
    store.set_raw(key, raw)
}

pub fn load_records<S: RecordStore + ?Sized>(
    store: &S,
    key: &str,
) -> Result<Vec<Record>, StoreError> {
    read_array(store, key)
}

/// Appends `record` unless an equal record is already stored. Returns
/// whether it was added.
pub fn store_if_new<S: RecordStore + ?Sized>(
    store: &mut S,
    key: &str,
    record: Record,
) -> Result<bool, StoreError> {
    let mut records = load_records(store, key)?;
    if records.contains(&record) {
        tracing::debug!(key, "Record already stored");
        return Ok(false);
    }
    records.push(record);
    write_array(store, key, &records)?;
    Ok(true)
}

pub fn load_values<S: RecordStore + ?Sized>(
    store: &S,
    key: &str,
) -> Result<Vec<String>, StoreError> {
    read_array(store, key)
}

/// Unions `values` into the string list under `key`, keeping first-seen
/// order. Returns the merged list.
pub fn merge_values<S, I>(store: &mut S, key: &str, values: I) -> Result<Vec<String>, StoreError>
where
    S: RecordStore + ?Sized,
    I: IntoIterator,
    I::Item: Into<String>,
{
    let mut merged = load_values(store, key)?;
    for value in values {
        let value = value.into();
        if !merged.contains(&value) {
            merged.push(value);
        }
    }
    write_array(store, key, &merged)?;
    Ok(merged)
}

/// Removes the record at `index`. Out-of-range indices leave the store
/// untouched and return `None`.
pub fn delete_by_index<S: RecordStore + ?Sized>(
    store: &mut S,
    key: &str,
    index: usize,
) -> Result<Option<Record>, StoreError> {
    let mut records = load_records(store, key)?;
    if index >= records.len() {
        tracing::debug!(key, index, len = records.len(), "Delete index out of range");
        return Ok(None);
    }
    let removed = records.remove(index);
    write_array(store, key, &records)?;
    Ok(Some(removed))
}

/// Builds a record from `(field, value)` pairs; a repeated field keeps the
/// last value.
pub fn structure_record<I, K, V>(values: I) -> Record
where
    I: IntoIterator<Item = (K, V)>,
    K: Into<String>,
    V: Into<FieldValue>,
{
    values.into_iter().collect()
}

/// Persists a submitted record and folds its values into every per-field
/// value list declared through `storage_key`.
///
/// Fails with [`StoreError::MissingRequired`] before writing anything when a
/// required field is absent or blank.
pub fn store_submission<S: RecordStore + ?Sized>(
    store: &mut S,
    key: &str,
    fields: &FieldMap,
    record: Record,
) -> Result<bool, StoreError> {
    let missing = fields.missing_required(&record);
    if !missing.is_empty() {
        let fields = missing.into_iter().map(|f| f.key.clone()).collect();
        return Err(StoreError::MissingRequired { fields });
    }

    for field in fields.iter() {
        let (Some(storage_key), Some(value)) = (&field.storage_key, record.get(&field.key)) else {
            continue;
        };
        if value.is_empty() {
            continue;
        }
        merge_values(store, storage_key, value.values())?;
    }
    store_if_new(store, key, record)
}
