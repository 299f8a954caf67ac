use std::cell::RefCell;
use std::fmt;
use std::fmt::{Display, Formatter};
use std::rc::Rc;
use tracing::{debug, info, warn};
use crate::core::command::Command;
use crate::core::domain::Configuration;
use crate::core::shelf::ShelfResult;
use crate::shelf::command::add_book_cmd::{author_rule, priority_rule, title_rule, AddBookCommand, AddBookCommandRequest};
use crate::shelf::domain::BookStore;
use crate::validation::{validate, FieldValue, Validatable};
use crate::views::document::{Document, InsertPosition, INPUT_TEMPLATE};
use crate::views::template::{instantiate, part_id};

pub const FORM_ID: &str = "user-input";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Title,
    Author,
    Priority,
}

impl FormField {
    pub const ALL: [FormField; 3] = [FormField::Title, FormField::Author, FormField::Priority];

    pub fn key(&self) -> &'static str {
        match self {
            FormField::Title => "title",
            FormField::Author => "author",
            FormField::Priority => "priority",
        }
    }

    pub fn error_message(&self, config: &Configuration) -> String {
        match self {
            FormField::Title => "Please enter a title".to_string(),
            FormField::Author => "Please enter an author".to_string(),
            FormField::Priority => format!("Please enter a priority between {} and {}",
                                           config.min_priority, config.max_priority),
        }
    }

    fn rule(&self, config: &Configuration, raw: &str) -> Validatable {
        match self {
            FormField::Title => title_rule(config, raw),
            FormField::Author => author_rule(config, raw),
            FormField::Priority => priority_rule(config, FieldValue::numeric(raw)),
        }
    }
}

impl Display for FormField {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum FormEvent {
    Submit,
    Input(FormField, String),
    KeyPress(FormField, String),
    Blur(FormField),
}

// FormController owns the add-book form: three inputs, each with an error slot.
pub struct FormController {
    config: Configuration,
    doc: Rc<RefCell<Document>>,
    command: AddBookCommand,
}

impl FormController {
    /// Instantiates the input form at the top of `host_id`.
    pub fn attach(config: &Configuration, store: Rc<dyn BookStore>,
                  doc: Rc<RefCell<Document>>, host_id: &str) -> ShelfResult<FormController> {
        instantiate(&mut doc.borrow_mut(), INPUT_TEMPLATE, host_id, InsertPosition::AfterBegin, FORM_ID)?;
        Ok(FormController {
            config: config.clone(),
            doc,
            command: AddBookCommand::new(config, store),
        })
    }

    pub fn input_id(field: FormField) -> String {
        part_id(FORM_ID, field.key())
    }

    pub fn error_id(field: FormField) -> String {
        part_id(FORM_ID, format!("{}-error", field.key()).as_str())
    }

    /// Dispatches a form event. Returns true when the event added a book.
    pub fn handle(&self, event: FormEvent) -> ShelfResult<bool> {
        match event {
            FormEvent::Submit => self.submit(),
            FormEvent::Input(field, text) => {
                self.doc.borrow_mut().set_value(Self::input_id(field).as_str(), text.as_str())?;
                Ok(false)
            }
            FormEvent::KeyPress(_, key) if key == "Enter" => self.submit(),
            FormEvent::KeyPress(..) => Ok(false),
            FormEvent::Blur(field) => {
                self.blur(field)?;
                Ok(false)
            }
        }
    }

    /// Validates all three fields, updates their error slots and, when every
    /// field is valid, adds the book and clears the inputs.
    pub fn submit(&self) -> ShelfResult<bool> {
        let mut values = vec![];
        let mut all_valid = true;
        for field in FormField::ALL {
            let raw = self.read(field)?;
            let valid = validate(&field.rule(&self.config, raw.as_str()));
            self.show_error(field, valid)?;
            all_valid = all_valid && valid;
            values.push(raw);
        }
        if !all_valid {
            debug!("form submission failed validation");
            return Ok(false);
        }

        // coercion happens only once the raw priority passed validation
        let Some(priority) = FieldValue::numeric(values[2].as_str()).as_number() else {
            return Ok(false);
        };
        let req = AddBookCommandRequest::new(values[0].as_str(), values[1].as_str(), priority as u8);
        match self.command.execute(req) {
            Ok(res) => {
                info!(shelf_size = res.shelf_size, "submitted book");
            }
            Err(err) => {
                warn!("add book rejected: {}", err);
                return Ok(false);
            }
        }
        self.clear_inputs()?;
        Ok(true)
    }

    /// Clears the field's error once its current value passes validation.
    pub fn blur(&self, field: FormField) -> ShelfResult<()> {
        let raw = self.read(field)?;
        if validate(&field.rule(&self.config, raw.as_str())) {
            self.show_error(field, true)?;
        }
        Ok(())
    }

    pub fn error_text(&self, field: FormField) -> ShelfResult<String> {
        self.doc.borrow().text(Self::error_id(field).as_str()).map(str::to_string)
    }

    pub fn input_value(&self, field: FormField) -> ShelfResult<String> {
        self.doc.borrow().value(Self::input_id(field).as_str()).map(str::to_string)
    }

    fn read(&self, field: FormField) -> ShelfResult<String> {
        Ok(self.input_value(field)?.trim().to_string())
    }

    // writes the slot only when its text would change
    fn show_error(&self, field: FormField, valid: bool) -> ShelfResult<()> {
        let id = Self::error_id(field);
        let message = if valid { "".to_string() } else { field.error_message(&self.config) };
        let mut doc = self.doc.borrow_mut();
        if doc.text(id.as_str())? != message.as_str() {
            doc.set_text(id.as_str(), message.as_str())?;
        }
        Ok(())
    }

    fn clear_inputs(&self) -> ShelfResult<()> {
        let mut doc = self.doc.borrow_mut();
        for field in FormField::ALL {
            doc.set_value(Self::input_id(field).as_str(), "")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::core::domain::Configuration;
    use crate::core::shelf::BookStatus;
    use crate::shelf::controller::{FormController, FormEvent, FormField};
    use crate::shelf::factory::{create_bookshelf, Bookshelf};

    fn fill(shelf: &Bookshelf, title: &str, author: &str, priority: &str) {
        for (field, text) in [(FormField::Title, title), (FormField::Author, author), (FormField::Priority, priority)] {
            shelf.form.handle(FormEvent::Input(field, text.to_string())).expect("should type");
        }
    }

    fn items(shelf: &Bookshelf, status: BookStatus) -> Vec<String> {
        shelf.view(status).expect("view").items().expect("items")
    }

    #[tokio::test]
    async fn test_should_submit_valid_book() {
        let shelf = create_bookshelf(&Configuration::new("test")).expect("should wire");
        fill(&shelf, "Dune", "Herbert", "7");

        assert!(shelf.form.handle(FormEvent::Submit).expect("should submit"));
        for field in FormField::ALL {
            assert_eq!("", shelf.form.error_text(field).expect("error slot"));
            assert_eq!("", shelf.form.input_value(field).expect("input"));
        }
        assert_eq!(vec!["Dune"], items(&shelf, BookStatus::ToRead));
        assert!(items(&shelf, BookStatus::Reading).is_empty());
        assert!(items(&shelf, BookStatus::Finished).is_empty());
        assert_eq!(1, shelf.store.len());
    }

    #[tokio::test]
    async fn test_should_block_missing_title() {
        let shelf = create_bookshelf(&Configuration::new("test")).expect("should wire");
        fill(&shelf, "", "X", "5");

        assert!(!shelf.form.handle(FormEvent::Submit).expect("should submit"));
        assert_eq!("Please enter a title", shelf.form.error_text(FormField::Title).expect("error slot"));
        assert_eq!("", shelf.form.error_text(FormField::Author).expect("error slot"));
        assert_eq!("X", shelf.form.input_value(FormField::Author).expect("input"));
        assert_eq!("5", shelf.form.input_value(FormField::Priority).expect("input"));
        for status in BookStatus::ALL {
            assert!(items(&shelf, status).is_empty());
        }
        assert!(shelf.store.is_empty());
    }

    #[tokio::test]
    async fn test_should_not_duplicate_error_messages() {
        let shelf = create_bookshelf(&Configuration::new("test")).expect("should wire");
        fill(&shelf, "", "X", "5");
        shelf.form.submit().expect("should submit");
        let writes = shelf.doc.borrow().writes();

        shelf.form.submit().expect("should submit");
        assert_eq!("Please enter a title", shelf.form.error_text(FormField::Title).expect("error slot"));
        assert_eq!(writes, shelf.doc.borrow().writes());
    }

    #[tokio::test]
    async fn test_should_validate_priority() {
        let shelf = create_bookshelf(&Configuration::new("test")).expect("should wire");
        let expected = "Please enter a priority between 1 and 10";
        for priority in ["", "0", "11", "7.5", "seven", "-3"] {
            fill(&shelf, "Dune", "Herbert", priority);
            assert!(!shelf.form.submit().expect("should submit"), "{:?} should be rejected", priority);
            assert_eq!(expected, shelf.form.error_text(FormField::Priority).expect("error slot"));
        }
        fill(&shelf, "Dune", "Herbert", " 10 ");
        assert!(shelf.form.submit().expect("should submit"));
        assert_eq!(10, shelf.store.books()[0].priority);
    }

    #[tokio::test]
    async fn test_should_trim_inputs() {
        let shelf = create_bookshelf(&Configuration::new("test")).expect("should wire");
        fill(&shelf, "  Emma ", " Austen  ", "3");
        assert!(shelf.form.submit().expect("should submit"));
        let books = shelf.store.books();
        let book = &books[0];
        assert_eq!("Emma", book.title.as_str());
        assert_eq!("Austen", book.author.as_str());

        fill(&shelf, "   ", "Austen", "3");
        assert!(!shelf.form.submit().expect("should submit"));
    }

    #[tokio::test]
    async fn test_should_reject_long_author() {
        let shelf = create_bookshelf(&Configuration::new("test")).expect("should wire");
        fill(&shelf, "Dune", "a".repeat(101).as_str(), "7");
        assert!(!shelf.form.submit().expect("should submit"));
        assert_eq!("Please enter an author", shelf.form.error_text(FormField::Author).expect("error slot"));
    }

    #[tokio::test]
    async fn test_should_clear_error_on_blur_once_valid() {
        let shelf = create_bookshelf(&Configuration::new("test")).expect("should wire");
        fill(&shelf, "", "X", "5");
        shelf.form.submit().expect("should submit");

        shelf.form.handle(FormEvent::Blur(FormField::Title)).expect("should blur");
        assert_eq!("Please enter a title", shelf.form.error_text(FormField::Title).expect("error slot"));

        shelf.form.handle(FormEvent::Input(FormField::Title, "Dune".to_string())).expect("should type");
        shelf.form.handle(FormEvent::Blur(FormField::Title)).expect("should blur");
        assert_eq!("", shelf.form.error_text(FormField::Title).expect("error slot"));
        assert!(shelf.store.is_empty());
    }

    #[tokio::test]
    async fn test_should_submit_on_enter() {
        let shelf = create_bookshelf(&Configuration::new("test")).expect("should wire");
        fill(&shelf, "Dune", "Herbert", "7");
        assert!(!shelf.form.handle(FormEvent::KeyPress(FormField::Priority, "a".to_string())).expect("should press"));
        assert!(shelf.form.handle(FormEvent::KeyPress(FormField::Priority, "Enter".to_string())).expect("should press"));
        assert_eq!(1, shelf.store.len());
    }

    #[tokio::test]
    async fn test_should_keep_insertion_order_across_submits() {
        let shelf = create_bookshelf(&Configuration::new("test")).expect("should wire");
        for title in ["Dune", "Emma", "Ulysses"] {
            fill(&shelf, title, "someone", "4");
            assert!(shelf.form.submit().expect("should submit"));
        }
        assert_eq!(vec!["Dune", "Emma", "Ulysses"], items(&shelf, BookStatus::ToRead));
    }

    #[tokio::test]
    async fn test_should_name_form_elements() {
        assert_eq!("user-input-title", FormController::input_id(FormField::Title));
        assert_eq!("user-input-priority-error", FormController::error_id(FormField::Priority));
        assert_eq!("author", FormField::Author.to_string());
    }
}
