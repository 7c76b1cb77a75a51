// SPDX-FileCopyrightText: 2025 Caspar Water Company
//
// SPDX-License-Identifier: Apache-2.0

//! In-memory page document: the id-addressed containers that page routines
//! write into, and that layouts later serialize.
//!
//! Writers never fail. Writing to an id the page does not have is a no-op,
//! so a routine can run against any shell without knowing its exact shape.

use std::collections::{BTreeMap, BTreeSet};

/// What an element currently holds.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Content {
    #[default]
    Empty,
    /// Plain text, escaped on output
    Text(String),
    /// Trusted markup, emitted verbatim
    Markup(String),
}

/// One `<option>` of a select element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormOption {
    pub value: String,
    pub label: String,
    pub selected: bool,
}

#[derive(Debug, Clone, Default)]
pub struct Element {
    pub id: String,
    pub tag: String,
    pub content: Content,
    pub classes: BTreeSet<String>,
    pub attrs: BTreeMap<String, String>,
    pub options: Vec<FormOption>,
}

impl Element {
    pub fn new(tag: &str, id: &str) -> Self {
        Self {
            id: id.to_string(),
            tag: tag.to_string(),
            ..Default::default()
        }
    }

    pub fn with_class(mut self, class: &str) -> Self {
        let _ = self.classes.insert(class.to_string());
        self
    }

    pub fn with_attr(mut self, name: &str, value: &str) -> Self {
        let _ = self.attrs.insert(name.to_string(), value.to_string());
        self
    }

    /// Space-separated class list, as it appears in a `class` attribute
    pub fn class_list(&self) -> String {
        self.classes
            .iter()
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join(" ")
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.contains(class)
    }

    /// Currently selected option value, if any
    pub fn selected_value(&self) -> Option<&str> {
        self.options
            .iter()
            .find(|o| o.selected)
            .map(|o| o.value.as_str())
    }
}

/// The set of elements on one page, keyed by id.
#[derive(Debug, Clone, Default)]
pub struct Document {
    elements: BTreeMap<String, Element>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add (or replace) an element, builder style.
    pub fn with(mut self, element: Element) -> Self {
        self.insert(element);
        self
    }

    pub fn insert(&mut self, element: Element) {
        let _ = self.elements.insert(element.id.clone(), element);
    }

    pub fn get(&self, id: &str) -> Option<&Element> {
        self.elements.get(id)
    }

    pub fn get_mut(&mut self, id: &str) -> Option<&mut Element> {
        self.elements.get_mut(id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.elements.contains_key(id)
    }

    /// Find the first element whose `name` attribute matches
    pub fn find_by_name(&self, name: &str) -> Option<&Element> {
        self.elements
            .values()
            .find(|e| e.attrs.get("name").is_some_and(|n| n == name))
    }

    fn find_by_name_mut(&mut self, name: &str) -> Option<&mut Element> {
        self.elements
            .values_mut()
            .find(|e| e.attrs.get("name").is_some_and(|n| n == name))
    }

    /// Replace an element's content with plain text.
    pub fn set_text(&mut self, id: &str, text: &str) {
        match self.elements.get_mut(id) {
            Some(el) => el.content = Content::Text(text.to_string()),
            None => diagnostics::log_debug!("set_text: no element {id}", id: id),
        }
    }

    /// Replace an element's content with markup. The markup is trusted as-is.
    pub fn set_html(&mut self, id: &str, html: impl Into<String>) {
        match self.elements.get_mut(id) {
            Some(el) => el.content = Content::Markup(html.into()),
            None => diagnostics::log_debug!("set_html: no element {id}", id: id),
        }
    }

    pub fn content(&self, id: &str) -> Option<&Content> {
        self.elements.get(id).map(|e| &e.content)
    }

    /// Text content, or `None` if the element is absent or holds no text.
    pub fn text(&self, id: &str) -> Option<&str> {
        match self.content(id) {
            Some(Content::Text(t)) => Some(t.as_str()),
            _ => None,
        }
    }

    /// Markup content, or `None` if the element is absent or holds no markup.
    pub fn html(&self, id: &str) -> Option<&str> {
        match self.content(id) {
            Some(Content::Markup(h)) => Some(h.as_str()),
            _ => None,
        }
    }

    pub fn add_class(&mut self, id: &str, class: &str) {
        if let Some(el) = self.elements.get_mut(id) {
            let _ = el.classes.insert(class.to_string());
        }
    }

    pub fn remove_class(&mut self, id: &str, class: &str) {
        if let Some(el) = self.elements.get_mut(id) {
            let _ = el.classes.remove(class);
        }
    }

    /// Add the class when `on`, remove it otherwise.
    pub fn toggle_class(&mut self, id: &str, class: &str, on: bool) {
        if on {
            self.add_class(id, class);
        } else {
            self.remove_class(id, class);
        }
    }

    pub fn has_class(&self, id: &str, class: &str) -> bool {
        self.elements.get(id).is_some_and(|e| e.has_class(class))
    }

    pub fn set_attr(&mut self, id: &str, name: &str, value: &str) {
        if let Some(el) = self.elements.get_mut(id) {
            let _ = el.attrs.insert(name.to_string(), value.to_string());
        }
    }

    pub fn attr(&self, id: &str, name: &str) -> Option<&str> {
        self.elements
            .get(id)
            .and_then(|e| e.attrs.get(name))
            .map(String::as_str)
    }

    /// Replace the options of the select named `name`. Returns false when
    /// the page has no such field.
    pub fn set_options(&mut self, name: &str, options: Vec<FormOption>) -> bool {
        match self.find_by_name_mut(name) {
            Some(el) => {
                el.options = options;
                true
            }
            None => false,
        }
    }

    /// Mark exactly the options whose value equals `value` as selected.
    /// Returns false when the page has no such field.
    pub fn select_option(&mut self, name: &str, value: &str) -> bool {
        match self.find_by_name_mut(name) {
            Some(el) => {
                for opt in &mut el.options {
                    opt.selected = opt.value == value;
                }
                true
            }
            None => false,
        }
    }
}
