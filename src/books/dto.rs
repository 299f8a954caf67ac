use chrono::{NaiveDateTime, Utc};
use uuid::Uuid;
use serde::{Deserialize, Serialize};
use crate::books::domain::Book;
use crate::core::domain::Identifiable;
use crate::core::shelf::BookStatus;
use crate::utils::date::serializer;

// BookDto is a single entry on the shelf. Entries are only created by the
// book store and never change once added.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookDto {
    pub book_id: String,
    pub title: String,
    pub author: String,
    pub priority: u8,
    pub book_status: BookStatus,
    #[serde(with = "serializer")]
    pub created_at: NaiveDateTime,
}

impl BookDto {
    pub(crate) fn new(title: &str, author: &str, priority: u8) -> BookDto {
        BookDto {
            book_id: Uuid::new_v4().to_string(),
            title: title.to_string(),
            author: author.to_string(),
            priority,
            book_status: BookStatus::ToRead,
            created_at: Utc::now().naive_utc(),
        }
    }
}

impl Identifiable for BookDto {
    fn id(&self) -> String {
        self.book_id.to_string()
    }
}

impl Book for BookDto {
    fn status(&self) -> BookStatus {
        self.book_status
    }
}
