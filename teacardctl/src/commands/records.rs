use anyhow::{Context, Result, bail};
use teacard_core::storage;
use teacard_model::{FieldValue, Record};

use super::Session;

pub(super) fn add(session: &Session, raw_fields: &[String]) -> Result<()> {
    let record = parse_fields(raw_fields)?;
    let config = session.config();
    let mut store = session.open_store()?;

    let added = storage::store_submission(
        &mut store,
        config.storage_key(),
        &config.field_map(),
        record,
    )
    .context("failed to store record")?;

    if added {
        let count = storage::load_records(&store, config.storage_key())?.len();
        println!("stored record #{}", count - 1);
    } else {
        println!("record already stored");
    }
    Ok(())
}

pub(super) fn delete(session: &Session, index: usize) -> Result<()> {
    let mut store = session.open_store()?;
    match storage::delete_by_index(&mut store, session.config().storage_key(), index)
        .context("failed to delete record")?
    {
        Some(_) => println!("deleted record #{index}"),
        None => println!("no record at index {index}"),
    }
    Ok(())
}

fn parse_fields(raw_fields: &[String]) -> Result<Record> {
    let mut pairs = Vec::with_capacity(raw_fields.len());
    for raw in raw_fields {
        let Some((key, value)) = raw.split_once('=') else {
            bail!("expected KEY=VALUE, got {raw:?}");
        };
        let key = key.trim();
        if key.is_empty() {
            bail!("empty field name in {raw:?}");
        }
        let value = if value.contains('|') {
            FieldValue::List(
                value
                    .split('|')
                    .map(str::trim)
                    .filter(|v| !v.is_empty())
                    .map(str::to_string)
                    .collect(),
            )
        } else {
            FieldValue::Text(value.trim().to_string())
        };
        pairs.push((key.to_string(), value));
    }
    Ok(storage::structure_record(pairs))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pipe_separated_values_become_lists() {
        let record = parse_fields(&[
            "name=Sencha".to_string(),
            "notes=grassy| bright |".to_string(),
        ])
        .expect("fields");
        assert_eq!(record.get("name"), Some(&FieldValue::from("Sencha")));
        assert_eq!(
            record.get("notes"),
            Some(&FieldValue::List(vec!["grassy".into(), "bright".into()]))
        );
    }

    #[test]
    fn rejects_fields_without_a_value() {
        assert!(parse_fields(&["name".to_string()]).is_err());
        assert!(parse_fields(&["=x".to_string()]).is_err());
    }
}
