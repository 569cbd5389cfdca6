use std::collections::{BTreeMap, HashMap};
use std::fmt::{self, Display};
use std::str::FromStr;

use crate::error::ModelError;
use crate::record::{FieldValue, Record};

/// Card section a field is rendered into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum CardPosition {
    Header,
    Body,
    Footer,
}

impl CardPosition {
    pub const ALL: [Self; 3] = [Self::Header, Self::Body, Self::Footer];

    /// Suffix used for the `card-{section}` class.
    pub fn as_str(self) -> &'static str {
        match self {
            CardPosition::Header => "header",
            CardPosition::Body => "body",
            CardPosition::Footer => "footer",
        }
    }
}

impl Display for CardPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CardPosition {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "header" => Ok(CardPosition::Header),
            "body" => Ok(CardPosition::Body),
            "footer" => Ok(CardPosition::Footer),
            _ => Err(ModelError::UnknownCardPosition(s.to_string())),
        }
    }
}

/// Visual role of a field inside its card section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum CardRole {
    Title,
    Subtitle,
    #[default]
    Text,
}

impl FromStr for CardRole {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "title" => Ok(CardRole::Title),
            "subtitle" => Ok(CardRole::Subtitle),
            "text" => Ok(CardRole::Text),
            _ => Err(ModelError::UnknownCardRole(s.to_string())),
        }
    }
}

/// Definition of one form field and how it shows up on a card.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct FieldDef {
    /// Record key the field's value is stored under.
    pub key: String,
    /// Localized labels keyed by language code.
    #[cfg_attr(feature = "serde", serde(default))]
    pub label: BTreeMap<String, String>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub card_position: Option<CardPosition>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub card_role: Option<CardRole>,
    /// Store key that collects the distinct values entered for this field.
    #[cfg_attr(feature = "serde", serde(default))]
    pub storage_key: Option<String>,
    /// A submission without a non-blank value for this field is rejected.
    #[cfg_attr(feature = "serde", serde(default))]
    pub required: bool,
}

impl FieldDef {
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            label: BTreeMap::new(),
            card_position: None,
            card_role: None,
            storage_key: None,
            required: false,
        }
    }

    pub fn with_position(mut self, position: CardPosition) -> Self {
        self.card_position = Some(position);
        self
    }

    pub fn with_role(mut self, role: CardRole) -> Self {
        self.card_role = Some(role);
        self
    }

    pub fn with_required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }

    pub fn with_label(
        mut self,
        lang: impl Into<String>,
        label: impl Into<String>,
    ) -> Self {
        self.label.insert(lang.into(), label.into());
        self
    }

    /// Label for `lang`, falling back to the record key.
    pub fn label_for(&self, lang: &str) -> &str {
        self.label.get(lang).map(String::as_str).unwrap_or(&self.key)
    }

    pub fn validate(&self) -> Result<(), ModelError> {
        if self.key.trim().is_empty() {
            return Err(ModelError::InvalidField(
                "field key must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}

/// A row of fields as laid out on the entry form.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FieldGroup {
    #[cfg_attr(feature = "serde", serde(default))]
    pub fields: Vec<FieldDef>,
}

impl FieldGroup {
    pub fn new(fields: Vec<FieldDef>) -> Self {
        Self { fields }
    }
}

/// Flattened, case-insensitive lookup over every field of every group.
///
/// Iteration follows group order then field order. A key defined twice keeps
/// its first position but takes the later definition.
#[derive(Debug, Clone, Default)]
pub struct FieldMap {
    fields: Vec<FieldDef>,
    index: HashMap<String, usize>,
}

impl FieldMap {
    pub fn from_groups(groups: &[FieldGroup]) -> Self {
        let mut map = FieldMap::default();
        for field in groups.iter().flat_map(|g| g.fields.iter()) {
            map.insert(field.clone());
        }
        map
    }

    pub fn insert(&mut self, field: FieldDef) {
        let key = field.key.to_lowercase();
        match self.index.get(&key) {
            Some(&slot) => self.fields[slot] = field,
            None => {
                self.index.insert(key, self.fields.len());
                self.fields.push(field);
            }
        }
    }

    pub fn get(&self, key: &str) -> Option<&FieldDef> {
        self.index
            .get(&key.to_lowercase())
            .map(|&slot| &self.fields[slot])
    }

    pub fn iter(&self) -> impl Iterator<Item = &FieldDef> {
        self.fields.iter()
    }

    /// Fields placed in `position`, in map order.
    pub fn in_section(
        &self,
        position: CardPosition,
    ) -> impl Iterator<Item = &FieldDef> {
        self.fields
            .iter()
            .filter(move |f| f.card_position == Some(position))
    }

    /// Required fields that `record` leaves missing or blank, in map order.
    pub fn missing_required(&self, record: &Record) -> Vec<&FieldDef> {
        self.fields
            .iter()
            .filter(|f| f.required)
            .filter(|f| record.get(&f.key).is_none_or(FieldValue::is_blank))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn field_map_lookup_is_case_insensitive() {
        let groups = vec![FieldGroup::new(vec![
            FieldDef::new("Name").with_position(CardPosition::Header),
            FieldDef::new("Origin").with_position(CardPosition::Body),
        ])];
        let map = FieldMap::from_groups(&groups);

        assert_eq!(map.len(), 2);
        assert_eq!(map.get("name").map(|f| f.key.as_str()), Some("Name"));
        assert_eq!(map.get("ORIGIN").map(|f| f.key.as_str()), Some("Origin"));
        assert!(map.get("missing").is_none());
    }

    #[test]
    fn later_definition_wins_but_keeps_position() {
        let groups = vec![
            FieldGroup::new(vec![FieldDef::new("a"), FieldDef::new("b")]),
            FieldGroup::new(vec![
                FieldDef::new("A").with_role(CardRole::Title),
            ]),
        ];
        let map = FieldMap::from_groups(&groups);

        let keys: Vec<_> = map.iter().map(|f| f.key.as_str()).collect();
        assert_eq!(keys, vec!["A", "b"]);
        assert_eq!(map.get("a").and_then(|f| f.card_role), Some(CardRole::Title));
    }

    #[test]
    fn card_position_parses_loosely() {
        assert_eq!(" Footer ".parse::<CardPosition>(), Ok(CardPosition::Footer));
        assert!("sidebar".parse::<CardPosition>().is_err());
        assert_eq!("subtitle".parse::<CardRole>(), Ok(CardRole::Subtitle));
    }

    #[test]
    fn blank_or_absent_required_fields_are_reported() {
        let groups = vec![FieldGroup::new(vec![
            FieldDef::new("name").with_required(true),
            FieldDef::new("origin"),
            FieldDef::new("notes").with_required(true),
        ])];
        let map = FieldMap::from_groups(&groups);

        let record = Record::new()
            .with("Name", "  ")
            .with("origin", "Japan")
            .with("notes", vec!["grassy".to_string()]);
        let missing: Vec<_> = map
            .missing_required(&record)
            .into_iter()
            .map(|f| f.key.as_str())
            .collect();
        assert_eq!(missing, vec!["name"]);

        let empty_list = Record::new()
            .with("name", "Sencha")
            .with("notes", Vec::<String>::new());
        let missing: Vec<_> = map
            .missing_required(&empty_list)
            .into_iter()
            .map(|f| f.key.as_str())
            .collect();
        assert_eq!(missing, vec!["notes"]);

        let complete = Record::new().with("name", "Sencha").with("notes", "grassy");
        assert!(map.missing_required(&complete).is_empty());
    }

    #[test]
    fn label_falls_back_to_key() {
        let field = FieldDef::new("brand").with_label("fr", "Marque");
        assert_eq!(field.label_for("fr"), "Marque");
        assert_eq!(field.label_for("en"), "brand");
    }
}
