use std::cell::RefCell;
use std::rc::Rc;
use tracing::info;
use crate::core::domain::Configuration;
use crate::core::shelf::{BookStatus, ShelfResult};
use crate::shelf::controller::FormController;
use crate::shelf::domain::BookStore;
use crate::shelf::domain::service::InMemoryBookStore;
use crate::views::document::{Document, APP_HOST};
use crate::views::list::ListView;

pub fn create_book_store(config: &Configuration) -> Rc<dyn BookStore> {
    Rc::new(InMemoryBookStore::new(config))
}

// Bookshelf is the wired page: one store shared by the form and the three
// status views, all rendering into the same document.
pub struct Bookshelf {
    pub store: Rc<dyn BookStore>,
    pub doc: Rc<RefCell<Document>>,
    pub form: FormController,
    pub views: Vec<Rc<ListView>>,
}

impl Bookshelf {
    pub fn view(&self, status: BookStatus) -> Option<&Rc<ListView>> {
        self.views.iter().find(|v| v.status() == status)
    }

    pub fn render_text(&self) -> String {
        self.doc.borrow().render_text()
    }
}

pub fn create_bookshelf(config: &Configuration) -> ShelfResult<Bookshelf> {
    let store = create_book_store(config);
    let doc = Rc::new(RefCell::new(Document::bookshelf()));
    let form = FormController::attach(config, store.clone(), doc.clone(), APP_HOST)?;
    let views = BookStatus::ALL.iter()
        .map(|status| ListView::attach(store.as_ref(), doc.clone(), APP_HOST, *status))
        .collect::<ShelfResult<Vec<_>>>()?;
    info!(shelf = config.shelf_id.as_str(), views = views.len(), "bookshelf ready");
    Ok(Bookshelf {
        store,
        doc,
        form,
        views,
    })
}

#[cfg(test)]
mod tests {
    use crate::core::domain::Configuration;
    use crate::core::shelf::BookStatus;
    use crate::shelf::factory::create_bookshelf;
    use crate::views::document::APP_HOST;

    #[tokio::test]
    async fn test_should_wire_bookshelf() {
        let shelf = create_bookshelf(&Configuration::new("test")).expect("should wire");
        assert_eq!(3, shelf.views.len());
        for status in BookStatus::ALL {
            assert_eq!(status, shelf.view(status).expect("view").status());
        }
        let doc = shelf.doc.borrow();
        assert_eq!(vec!["user-input", "to-read-books", "reading-books", "finished-books"],
                   doc.element(APP_HOST).expect("app").children);
    }

    #[tokio::test]
    async fn test_should_render_page_text() {
        let shelf = create_bookshelf(&Configuration::new("test")).expect("should wire");
        shelf.store.add_book("Dune", "Herbert", 7);
        let page = shelf.render_text();
        assert!(page.contains("ADD BOOK"));
        assert!(page.contains("TO READ BOOKS\n      - Dune"));
        assert!(page.contains("READING BOOKS"));
        assert!(page.contains("FINISHED BOOKS"));
    }
}
