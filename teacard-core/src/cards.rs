//! Card builder: turns stored records into slide elements.
//!
//! Each record becomes a bare slide `div` holding a `card m-2` element. The
//! card gets a `card-header`, `card-body` and `card-footer` section, each
//! only when at least one field lands in it. Field placement and styling
//! come from the [`FieldMap`].

use teacard_model::{CardPosition, CardRole, FieldDef, FieldMap, Record};

use crate::dom::Element;

pub const ACTION_EDIT: &str = "edit";
pub const ACTION_DELETE: &str = "delete";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionLabels {
    pub edit: String,
    pub delete: String,
}

impl Default for ActionLabels {
    fn default() -> Self {
        Self {
            edit: "Edit".to_string(),
            delete: "Delete".to_string(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct CardBuilder<'a> {
    fields: &'a FieldMap,
    labels: ActionLabels,
}

impl<'a> CardBuilder<'a> {
    pub fn new(fields: &'a FieldMap) -> Self {
        Self {
            fields,
            labels: ActionLabels::default(),
        }
    }

    pub fn with_action_labels(mut self, labels: ActionLabels) -> Self {
        self.labels = labels;
        self
    }

    /// One slide per record. The slide's position in the output is the
    /// record's storage index.
    pub fn build_all(&self, records: &[Record]) -> Vec<Element> {
        records
            .iter()
            .enumerate()
            .map(|(index, record)| self.build(index, record))
            .collect()
    }

    pub fn build(&self, storage_index: usize, record: &Record) -> Element {
        let mut card = Element::div(["card", "m-2"]);
        for position in CardPosition::ALL {
            if let Some(section) = self.section(position, record) {
                card.append(section);
            }
        }
        card.append(self.actions(storage_index));

        Element::div(Vec::<String>::new()).with_child(card)
    }

    fn section(&self, position: CardPosition, record: &Record) -> Option<Element> {
        let entries: Vec<Element> = self
            .fields
            .in_section(position)
            .filter_map(|field| {
                let value = record.get(&field.key)?;
                (!value.is_empty()).then(|| entry(field, &value.to_string()))
            })
            .collect();

        if entries.is_empty() {
            return None;
        }
        Some(Element::div([format!("card-{}", position.as_str())]).with_children(entries))
    }

    fn actions(&self, storage_index: usize) -> Element {
        let index = storage_index.to_string();
        let button = |action: &str, label: &str| {
            Element::new("button")
                .with_classes(["btn", "btn-sm", "btn-outline-secondary"])
                .with_attr("type", "button")
                .with_attr("data-action", action)
                .with_attr("data-index", index.clone())
                .with_text(label)
        };

        Element::div(["card-actions"])
            .with_child(button(ACTION_EDIT, &self.labels.edit))
            .with_child(button(ACTION_DELETE, &self.labels.delete))
    }
}

fn entry(field: &FieldDef, text: &str) -> Element {
    let element = match field.card_role.unwrap_or_default() {
        CardRole::Title => Element::new("h5").with_class("card-title"),
        CardRole::Subtitle => Element::new("h6").with_classes(["card-subtitle", "text-muted"]),
        CardRole::Text => Element::new("p").with_class("card-text"),
    };
    element.with_text(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use teacard_model::FieldGroup;

    fn fields() -> FieldMap {
        FieldMap::from_groups(&[FieldGroup::new(vec![
            FieldDef::new("name")
                .with_position(CardPosition::Header)
                .with_role(CardRole::Title),
            FieldDef::new("origin")
                .with_position(CardPosition::Header)
                .with_role(CardRole::Subtitle),
            FieldDef::new("notes").with_position(CardPosition::Body),
            FieldDef::new("internal"),
        ])])
    }

    #[test]
    fn places_fields_by_position_and_role() {
        let fields = fields();
        let record = Record::new()
            .with("Name", "Sencha")
            .with("origin", "Shizuoka")
            .with("notes", vec!["grassy".to_string(), "bright".to_string()])
            .with("internal", "hidden");

        let slide = CardBuilder::new(&fields).build(4, &record);
        let card = &slide.children()[0];
        assert!(card.has_class("card") && card.has_class("m-2"));

        let header = card.find_by_class("card-header").expect("header");
        assert_eq!(header.children()[0].tag(), "h5");
        assert_eq!(header.children()[0].text(), Some("Sencha"));
        assert!(header.children()[1].has_class("text-muted"));

        let body = card.find_by_class("card-body").expect("body");
        assert_eq!(body.children()[0].text(), Some("grassy, bright"));

        assert!(card.find_by_class("card-footer").is_none());
        assert!(!slide.to_html().contains("hidden"));
    }

    #[test]
    fn action_buttons_carry_the_storage_index() {
        let fields = fields();
        let slide = CardBuilder::new(&fields).build(7, &Record::new().with("name", "Bancha"));
        let buttons = slide.find_by_class("card-actions").expect("actions").children();
        assert_eq!(buttons[0].attr("data-action"), Some("edit"));
        assert_eq!(buttons[1].attr("data-action"), Some("delete"));
        assert!(buttons.iter().all(|b| b.attr("data-index") == Some("7")));
    }

    #[test]
    fn empty_values_leave_no_section() {
        let fields = fields();
        let slide = CardBuilder::new(&fields).build(0, &Record::new().with("notes", ""));
        assert!(slide.find_by_class("card-body").is_none());
    }
}
