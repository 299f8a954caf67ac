pub mod service;

use crate::books::dto::BookDto;
use crate::core::events::Listener;

/// Snapshot handed to subscribers: an owned copy of every book, in insertion order.
pub type BookSnapshot = Vec<BookDto>;

// BookStore holds the books on the shelf and notifies subscribers on every change.
pub trait BookStore {
    // registers a listener; it is called with a fresh snapshot after every add
    fn subscribe(&self, listener: Listener<BookSnapshot>);

    // appends a new to-read book and synchronously notifies all subscribers.
    // Callers validate inputs first; adding never fails.
    fn add_book(&self, title: &str, author: &str, priority: u8);

    fn books(&self) -> BookSnapshot;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
