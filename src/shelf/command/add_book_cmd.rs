use std::rc::Rc;
use serde::{Deserialize, Serialize};
use tracing::warn;
use crate::core::command::{Command, CommandError};
use crate::core::domain::Configuration;
use crate::shelf::domain::BookStore;
use crate::validation::{validate, FieldValue, Validatable};

pub(crate) fn title_rule(config: &Configuration, title: &str) -> Validatable {
    Validatable::new(title).required().length(1, config.title_max_len)
}

pub(crate) fn author_rule(config: &Configuration, author: &str) -> Validatable {
    Validatable::new(author).required().length(1, config.author_max_len)
}

pub(crate) fn priority_rule(config: &Configuration, priority: FieldValue) -> Validatable {
    Validatable::new(priority)
        .required()
        .range(f64::from(config.min_priority), f64::from(config.max_priority))
        .integral()
}

pub struct AddBookCommand {
    store: Rc<dyn BookStore>,
    config: Configuration,
}

impl AddBookCommand {
    pub fn new(config: &Configuration, store: Rc<dyn BookStore>) -> Self {
        Self {
            store,
            config: config.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AddBookCommandRequest {
    pub title: String,
    pub author: String,
    pub priority: u8,
}

impl AddBookCommandRequest {
    pub fn new(title: &str, author: &str, priority: u8) -> Self {
        Self {
            title: title.to_string(),
            author: author.to_string(),
            priority,
        }
    }

    // returns the name of the first field that breaks its rule
    fn invalid_field(&self, config: &Configuration) -> Option<&'static str> {
        if !validate(&title_rule(config, self.title.as_str())) {
            Some("title")
        } else if !validate(&author_rule(config, self.author.as_str())) {
            Some("author")
        } else if !validate(&priority_rule(config, FieldValue::Number(f64::from(self.priority)))) {
            Some("priority")
        } else {
            None
        }
    }
}

#[derive(Debug, Serialize)]
pub struct AddBookCommandResponse {
    pub shelf_size: usize,
}

impl AddBookCommandResponse {
    pub fn new(shelf_size: usize) -> Self {
        Self {
            shelf_size,
        }
    }
}

impl Command<AddBookCommandRequest, AddBookCommandResponse> for AddBookCommand {
    fn execute(&self, req: AddBookCommandRequest) -> Result<AddBookCommandResponse, CommandError> {
        if let Some(field) = req.invalid_field(&self.config) {
            warn!(field, "rejected add book request");
            return Err(CommandError::Validation {
                message: format!("invalid {} for book {:?}", field, req.title),
                reason_code: Some(field.to_string()),
            });
        }
        self.store.add_book(req.title.as_str(), req.author.as_str(), req.priority);
        Ok(AddBookCommandResponse::new(self.store.len()))
    }
}
