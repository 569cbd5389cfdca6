//! Minimal element tree used for slides and rendered carousel output.
//!
//! Elements are plain owned values: cloning a slide deep-copies its subtree,
//! which is what the infinite wrapper relies on when it fabricates boundary
//! clones. Attribute and style order is preserved so serialized output is
//! stable.

use std::fmt::{self, Display, Write as _};

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Element {
    tag: String,
    classes: Vec<String>,
    attributes: Vec<(String, String)>,
    style: Vec<(String, String)>,
    text: Option<String>,
    children: Vec<Element>,
}

impl Element {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            ..Self::default()
        }
    }

    /// Shorthand for a `div` with the given classes.
    pub fn div<I, S>(classes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new("div").with_classes(classes)
    }

    pub fn with_class(mut self, class: impl Into<String>) -> Self {
        self.add_class(class);
        self
    }

    pub fn with_classes<I, S>(mut self, classes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for class in classes {
            self.add_class(class);
        }
        self
    }

    pub fn with_attr(
        mut self,
        name: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        self.set_attr(name, value);
        self
    }

    pub fn with_style(
        mut self,
        property: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        self.set_style(property, value);
        self
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    pub fn with_child(mut self, child: Element) -> Self {
        self.children.push(child);
        self
    }

    pub fn with_children(mut self, children: impl IntoIterator<Item = Element>) -> Self {
        self.children.extend(children);
        self
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }

    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    pub fn classes(&self) -> &[String] {
        &self.classes
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    pub fn add_class(&mut self, class: impl Into<String>) {
        let class = class.into();
        if !self.has_class(&class) {
            self.classes.push(class);
        }
    }

    pub fn remove_class(&mut self, class: &str) {
        self.classes.retain(|c| c != class);
    }

    /// Adds `class` when `on` is true and removes it otherwise.
    pub fn toggle_class(&mut self, class: &str, on: bool) {
        if on {
            self.add_class(class);
        } else {
            self.remove_class(class);
        }
    }

    pub fn attributes(&self) -> &[(String, String)] {
        &self.attributes
    }

    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn set_attr(&mut self, name: impl Into<String>, value: impl Into<String>) {
        set_pair(&mut self.attributes, name.into(), value.into());
    }

    pub fn style(&self, property: &str) -> Option<&str> {
        self.style
            .iter()
            .find(|(k, _)| k == property)
            .map(|(_, v)| v.as_str())
    }

    pub fn set_style(
        &mut self,
        property: impl Into<String>,
        value: impl Into<String>,
    ) {
        set_pair(&mut self.style, property.into(), value.into());
    }

    pub fn remove_style(&mut self, property: &str) {
        self.style.retain(|(k, _)| k != property);
    }

    pub fn children(&self) -> &[Element] {
        &self.children
    }

    pub fn children_mut(&mut self) -> &mut Vec<Element> {
        &mut self.children
    }

    pub fn first_child_mut(&mut self) -> Option<&mut Element> {
        self.children.first_mut()
    }

    pub fn append(&mut self, child: Element) {
        self.children.push(child);
    }

    /// Depth-first search for the first element carrying `class`.
    pub fn find_by_class(&self, class: &str) -> Option<&Element> {
        if self.has_class(class) {
            return Some(self);
        }
        self.children.iter().find_map(|c| c.find_by_class(class))
    }

    /// Every element in the subtree carrying `class`, in document order.
    pub fn find_all_by_class<'a>(&'a self, class: &str) -> Vec<&'a Element> {
        let mut out = Vec::new();
        self.collect_by_class(class, &mut out);
        out
    }

    fn collect_by_class<'a>(&'a self, class: &str, out: &mut Vec<&'a Element>) {
        if self.has_class(class) {
            out.push(self);
        }
        for child in &self.children {
            child.collect_by_class(class, out);
        }
    }

    pub fn to_html(&self) -> String {
        let mut out = String::new();
        self.write_html(&mut out);
        out
    }

    fn write_html(&self, out: &mut String) {
        out.push('<');
        out.push_str(&self.tag);
        if !self.classes.is_empty() {
            out.push_str(" class=\"");
            push_escaped(out, &self.classes.join(" "));
            out.push('"');
        }
        for (name, value) in &self.attributes {
            let _ = write!(out, " {name}=\"");
            push_escaped(out, value);
            out.push('"');
        }
        if !self.style.is_empty() {
            let css = self
                .style
                .iter()
                .map(|(k, v)| format!("{k}: {v}"))
                .collect::<Vec<_>>()
                .join("; ");
            out.push_str(" style=\"");
            push_escaped(out, &css);
            out.push('"');
        }
        out.push('>');
        if let Some(text) = &self.text {
            push_escaped(out, text);
        }
        for child in &self.children {
            child.write_html(out);
        }
        let _ = write!(out, "</{}>", self.tag);
    }
}

impl Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_html())
    }
}

fn set_pair(pairs: &mut Vec<(String, String)>, key: String, value: String) {
    match pairs.iter_mut().find(|(k, _)| *k == key) {
        Some(slot) => slot.1 = value,
        None => pairs.push((key, value)),
    }
}

fn push_escaped(out: &mut String, raw: &str) {
    for ch in raw.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
}
