use std::cell::RefCell;
use tracing::{debug, info};
use crate::books::dto::BookDto;
use crate::core::domain::Configuration;
use crate::core::events::{Listener, Listeners};
use crate::shelf::domain::{BookSnapshot, BookStore};

// InMemoryBookStore keeps books for the lifetime of the session only.
//
// No internal borrow is held while listeners run, so a listener that adds a
// book re-enters `add_book` and recurses through every subscriber again.
// Nothing guards against that recursion.
#[derive(Debug)]
pub struct InMemoryBookStore {
    shelf_id: String,
    books: RefCell<Vec<BookDto>>,
    listeners: Listeners<BookSnapshot>,
}

impl InMemoryBookStore {
    pub fn new(config: &Configuration) -> Self {
        Self {
            shelf_id: config.shelf_id.to_string(),
            books: RefCell::new(vec![]),
            listeners: Listeners::new(),
        }
    }
}

impl BookStore for InMemoryBookStore {
    fn subscribe(&self, listener: Listener<BookSnapshot>) {
        self.listeners.add(listener);
        debug!(shelf = self.shelf_id.as_str(), subscribers = self.listeners.len(), "subscribed to shelf");
    }

    fn add_book(&self, title: &str, author: &str, priority: u8) {
        let book = BookDto::new(title, author, priority);
        info!(shelf = self.shelf_id.as_str(), book_id = book.book_id.as_str(),
            title, priority, "added book");
        self.books.borrow_mut().push(book);

        let notified = self.listeners.notify(|| self.books());
        debug!(shelf = self.shelf_id.as_str(), notified, "notified subscribers");
    }

    fn books(&self) -> BookSnapshot {
        self.books.borrow().clone()
    }

    fn len(&self) -> usize {
        self.books.borrow().len()
    }
}
