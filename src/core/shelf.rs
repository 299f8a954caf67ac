use std::fmt;
use std::fmt::{Display, Formatter};
use serde::{Deserialize, Serialize};

#[derive(Debug, PartialEq)]
pub enum ShelfError {
    Validation {
        message: String,
        reason_code: Option<String>,
    },
    // Raised while wiring views and forms when the render target has no element
    // with the requested id. These are setup errors, never user errors.
    NotFound {
        message: String,
    },
    Serialization {
        message: String,
    },
    Runtime {
        message: String,
        reason_code: Option<String>,
    },
}

impl ShelfError {
    pub fn validation(message: &str, reason_code: Option<String>) -> ShelfError {
        ShelfError::Validation { message: message.to_string(), reason_code }
    }

    pub fn not_found(message: &str) -> ShelfError {
        ShelfError::NotFound { message: message.to_string() }
    }

    pub fn serialization(message: &str) -> ShelfError {
        ShelfError::Serialization { message: message.to_string() }
    }

    pub fn runtime(message: &str, reason_code: Option<String>) -> ShelfError {
        ShelfError::Runtime { message: message.to_string(), reason_code }
    }

    pub fn missing_element(id: &str) -> ShelfError {
        ShelfError::not_found(format!("no element with id {:?}", id).as_str())
    }
}

impl From<std::io::Error> for ShelfError {
    fn from(err: std::io::Error) -> Self {
        ShelfError::runtime(
            format!("io {:?}", err).as_str(), None)
    }
}

impl From<serde_json::Error> for ShelfError {
    fn from(err: serde_json::Error) -> Self {
        ShelfError::serialization(
            format!("serde json {:?}", err).as_str())
    }
}

impl Display for ShelfError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            ShelfError::Validation { message, reason_code } => {
                write!(f, "{} {:?}", message, reason_code)
            }
            ShelfError::NotFound { message } => {
                write!(f, "{}", message)
            }
            ShelfError::Serialization { message } => {
                write!(f, "{}", message)
            }
            ShelfError::Runtime { message, reason_code } => {
                write!(f, "{} {:?}", message, reason_code)
            }
        }
    }
}

impl std::error::Error for ShelfError {}

/// A specialized Result type for the shelf.
pub type ShelfResult<T> = Result<T, ShelfError>;

/// Reading status of a book; each status is rendered as its own bucket.
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy, Default, Serialize, Deserialize)]
pub enum BookStatus {
    #[default]
    ToRead,
    Reading,
    Finished,
}

impl BookStatus {
    /// Buckets in display order.
    pub const ALL: [BookStatus; 3] = [BookStatus::ToRead, BookStatus::Reading, BookStatus::Finished];

    // id fragment used by the views, e.g. "to-read-books-list"
    pub fn slug(&self) -> &'static str {
        match self {
            BookStatus::ToRead => "to-read",
            BookStatus::Reading => "reading",
            BookStatus::Finished => "finished",
        }
    }

    pub fn heading(&self) -> String {
        format!("{} BOOKS", self.slug().replace('-', " ").to_uppercase())
    }
}

impl From<String> for BookStatus {
    fn from(s: String) -> Self {
        match s.as_str() {
            "ToRead" => BookStatus::ToRead,
            "Reading" => BookStatus::Reading,
            "Finished" => BookStatus::Finished,
            _ => BookStatus::ToRead,
        }
    }
}

impl Display for BookStatus {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            BookStatus::ToRead => write!(f, "ToRead"),
            BookStatus::Reading => write!(f, "Reading"),
            BookStatus::Finished => write!(f, "Finished"),
        }
    }
}
