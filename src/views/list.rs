use std::cell::RefCell;
use std::rc::Rc;
use tracing::{debug, error};
use crate::books::domain::Book;
use crate::books::dto::BookDto;
use crate::core::shelf::{BookStatus, ShelfResult};
use crate::shelf::domain::{BookSnapshot, BookStore};
use crate::views::document::{Document, InsertPosition, LIST_TEMPLATE};
use crate::views::template::{instantiate, part_id};

// ListView renders one status bucket. Each render clears the list and
// rebuilds one item per matching book, in shelf order.
#[derive(Debug)]
pub struct ListView {
    status: BookStatus,
    doc: Rc<RefCell<Document>>,
    list_id: String,
}

impl ListView {
    /// Instantiates the list template under `host_id` and subscribes the
    /// view to `store`.
    pub fn attach(store: &dyn BookStore, doc: Rc<RefCell<Document>>,
                  host_id: &str, status: BookStatus) -> ShelfResult<Rc<ListView>> {
        let root_id = format!("{}-books", status.slug());
        {
            let mut page = doc.borrow_mut();
            instantiate(&mut page, LIST_TEMPLATE, host_id, InsertPosition::BeforeEnd, root_id.as_str())?;
            page.set_text(part_id(root_id.as_str(), "header").as_str(), status.heading().as_str())?;
        }

        let view = Rc::new(ListView {
            status,
            doc,
            list_id: part_id(root_id.as_str(), "list"),
        });
        let listener = view.clone();
        store.subscribe(Rc::new(move |books: BookSnapshot| {
            if let Err(err) = listener.render(&books) {
                error!(status = %listener.status, "failed to render books: {}", err);
            }
        }));
        Ok(view)
    }

    pub fn status(&self) -> BookStatus {
        self.status
    }

    pub fn list_id(&self) -> &str {
        self.list_id.as_str()
    }

    pub fn render(&self, books: &[BookDto]) -> ShelfResult<()> {
        let mut page = self.doc.borrow_mut();
        page.clear_children(self.list_id.as_str())?;
        let mut rendered = 0;
        for book in books.iter().filter(|b| b.has_status(self.status)) {
            page.append_child(self.list_id.as_str(), "li", book.title.as_str())?;
            rendered += 1;
        }
        debug!(status = %self.status, rendered, "rendered books");
        Ok(())
    }

    pub fn items(&self) -> ShelfResult<Vec<String>> {
        self.doc.borrow().children_text(self.list_id.as_str())
    }
}
