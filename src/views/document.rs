use std::collections::HashMap;
use crate::core::shelf::{ShelfError, ShelfResult};
use crate::views::template::{Template, TemplatePart};

pub const APP_HOST: &str = "app";
pub const INPUT_TEMPLATE: &str = "book-input";
pub const LIST_TEMPLATE: &str = "book-list";

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Element {
    pub id: String,
    pub tag: String,
    pub text: String,
    pub value: String,
    pub children: Vec<String>,
}

impl Element {
    pub fn new(id: &str, tag: &str) -> Self {
        Self {
            id: id.to_string(),
            tag: tag.to_string(),
            ..Default::default()
        }
    }

    pub fn with_text(mut self, text: &str) -> Self {
        self.text = text.to_string();
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InsertPosition {
    AfterBegin,
    BeforeEnd,
}

/// Document is the render target: an element tree addressed by id plus the
/// templates views are instantiated from. Every mutation bumps `writes`.
#[derive(Debug, Default)]
pub struct Document {
    elements: HashMap<String, Element>,
    roots: Vec<String>,
    templates: HashMap<String, Template>,
    writes: usize,
    next_child: usize,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    /// The page every bookshelf renders into: an `app` host plus the form
    /// and list templates.
    pub fn bookshelf() -> Self {
        let mut doc = Document::new();
        doc.add_root(Element::new(APP_HOST, "div"));
        doc.register_template(Template::new(INPUT_TEMPLATE, "form", vec![
            TemplatePart::new("title", "input"),
            TemplatePart::new("title-error", "p"),
            TemplatePart::new("author", "input"),
            TemplatePart::new("author-error", "p"),
            TemplatePart::new("priority", "input"),
            TemplatePart::new("priority-error", "p"),
            TemplatePart::new("submit", "button").with_text("ADD BOOK"),
        ]));
        doc.register_template(Template::new(LIST_TEMPLATE, "section", vec![
            TemplatePart::new("header", "h2"),
            TemplatePart::new("list", "ul"),
        ]));
        doc
    }

    pub fn add_root(&mut self, element: Element) {
        self.roots.push(element.id.to_string());
        self.elements.insert(element.id.to_string(), element);
    }

    pub fn register_template(&mut self, template: Template) {
        self.templates.insert(template.id.to_string(), template);
    }

    pub fn template(&self, id: &str) -> ShelfResult<&Template> {
        self.templates.get(id).ok_or_else(|| ShelfError::not_found(
            format!("no template with id {:?}", id).as_str()))
    }

    pub fn element(&self, id: &str) -> ShelfResult<&Element> {
        self.elements.get(id).ok_or_else(|| ShelfError::missing_element(id))
    }

    fn element_mut(&mut self, id: &str) -> ShelfResult<&mut Element> {
        self.elements.get_mut(id).ok_or_else(|| ShelfError::missing_element(id))
    }

    pub fn contains(&self, id: &str) -> bool {
        self.elements.contains_key(id)
    }

    pub fn insert(&mut self, host_id: &str, position: InsertPosition, element: Element) -> ShelfResult<()> {
        if self.contains(element.id.as_str()) {
            return Err(ShelfError::runtime(
                format!("duplicate element id {:?}", element.id).as_str(), None));
        }
        let id = element.id.to_string();
        let host = self.element_mut(host_id)?;
        match position {
            InsertPosition::AfterBegin => host.children.insert(0, id.to_string()),
            InsertPosition::BeforeEnd => host.children.push(id.to_string()),
        }
        self.elements.insert(id, element);
        self.writes += 1;
        Ok(())
    }

    // registers an element whose parent already lists it as a child
    pub(crate) fn attach_detached(&mut self, element: Element) {
        self.elements.insert(element.id.to_string(), element);
        self.writes += 1;
    }

    /// Appends a generated child with the given tag and text, returning its id.
    pub fn append_child(&mut self, parent_id: &str, tag: &str, text: &str) -> ShelfResult<String> {
        self.next_child += 1;
        let id = format!("{}-{}", parent_id, self.next_child);
        self.insert(parent_id, InsertPosition::BeforeEnd, Element::new(id.as_str(), tag).with_text(text))?;
        Ok(id)
    }

    pub fn clear_children(&mut self, id: &str) -> ShelfResult<()> {
        let children = std::mem::take(&mut self.element_mut(id)?.children);
        let mut pending = children;
        while let Some(child) = pending.pop() {
            if let Some(removed) = self.elements.remove(child.as_str()) {
                pending.extend(removed.children);
            }
        }
        self.writes += 1;
        Ok(())
    }

    pub fn text(&self, id: &str) -> ShelfResult<&str> {
        self.element(id).map(|e| e.text.as_str())
    }

    pub fn set_text(&mut self, id: &str, text: &str) -> ShelfResult<()> {
        self.element_mut(id)?.text = text.to_string();
        self.writes += 1;
        Ok(())
    }

    pub fn value(&self, id: &str) -> ShelfResult<&str> {
        self.element(id).map(|e| e.value.as_str())
    }

    pub fn set_value(&mut self, id: &str, value: &str) -> ShelfResult<()> {
        self.element_mut(id)?.value = value.to_string();
        self.writes += 1;
        Ok(())
    }

    pub fn children_text(&self, id: &str) -> ShelfResult<Vec<String>> {
        self.element(id)?.children.iter()
            .map(|child| self.text(child.as_str()).map(str::to_string))
            .collect()
    }

    pub fn writes(&self) -> usize {
        self.writes
    }

    /// Plain-text rendering of every root: one line per element that shows
    /// something, indented by depth. Inputs show `id: [value]`.
    pub fn render_text(&self) -> String {
        let mut out = String::new();
        for root in &self.roots {
            self.render_into(root.as_str(), 0, &mut out);
        }
        out
    }

    fn render_into(&self, id: &str, depth: usize, out: &mut String) {
        let Some(element) = self.elements.get(id) else {
            return;
        };
        let indent = "  ".repeat(depth);
        if element.tag == "input" {
            out.push_str(format!("{}{}: [{}]\n", indent, element.id, element.value).as_str());
        } else if element.tag == "li" {
            out.push_str(format!("{}- {}\n", indent, element.text).as_str());
        } else if !element.text.is_empty() {
            out.push_str(format!("{}{}\n", indent, element.text).as_str());
        }
        for child in &element.children {
            self.render_into(child.as_str(), depth + 1, out);
        }
    }
}
