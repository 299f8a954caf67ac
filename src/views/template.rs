use tracing::debug;
use crate::core::shelf::{ShelfError, ShelfResult};
use crate::views::document::{Document, Element, InsertPosition};

#[derive(Debug, Clone, PartialEq)]
pub struct TemplatePart {
    pub key: String,
    pub tag: String,
    pub text: String,
}

impl TemplatePart {
    pub fn new(key: &str, tag: &str) -> Self {
        Self {
            key: key.to_string(),
            tag: tag.to_string(),
            text: "".to_string(),
        }
    }

    pub fn with_text(mut self, text: &str) -> Self {
        self.text = text.to_string();
        self
    }
}

// Template is a blueprint for a root element and its keyed children.
#[derive(Debug, Clone, PartialEq)]
pub struct Template {
    pub id: String,
    pub root_tag: String,
    pub parts: Vec<TemplatePart>,
}

impl Template {
    pub fn new(id: &str, root_tag: &str, parts: Vec<TemplatePart>) -> Self {
        Self {
            id: id.to_string(),
            root_tag: root_tag.to_string(),
            parts,
        }
    }
}

/// Id given to a template part once instantiated under `root_id`.
pub fn part_id(root_id: &str, key: &str) -> String {
    format!("{}-{}", root_id, key)
}

/// Clones template `template_id` into the document under `host_id`.
///
/// The new root gets `new_id` and each part gets `part_id(new_id, key)`.
/// Fails when the template or host is missing or an id is already taken,
/// in which case nothing is attached.
pub fn instantiate(doc: &mut Document, template_id: &str, host_id: &str,
                   position: InsertPosition, new_id: &str) -> ShelfResult<String> {
    let template = doc.template(template_id)?.clone();
    doc.element(host_id)?;

    let mut root = Element::new(new_id, template.root_tag.as_str());
    let mut parts = vec![];
    for part in &template.parts {
        let id = part_id(new_id, part.key.as_str());
        root.children.push(id.to_string());
        parts.push(Element::new(id.as_str(), part.tag.as_str()).with_text(part.text.as_str()));
    }
    for part in &parts {
        if doc.contains(part.id.as_str()) {
            return Err(ShelfError::runtime(
                format!("duplicate element id {:?}", part.id).as_str(), None));
        }
    }
    doc.insert(host_id, position, root)?;
    for part in parts {
        doc.attach_detached(part);
    }
    debug!(template = template_id, host = host_id, id = new_id, "instantiated template");
    Ok(new_id.to_string())
}
