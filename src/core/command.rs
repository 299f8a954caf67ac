use std::fmt;
use std::fmt::{Display, Formatter};
use crate::core::shelf::ShelfError;

#[derive(Debug, PartialEq)]
pub enum CommandError {
    NotFound {
        message: String,
    },
    Runtime {
        message: String,
        reason_code: Option<String>,
    },
    Serialization {
        message: String,
    },
    Validation {
        message: String,
        reason_code: Option<String>,
    },
}

/// Commands run synchronously on the caller's thread; the whole
/// validate, mutate and notify cycle completes before `execute` returns.
pub trait Command<Request, Response> {
    fn execute(&self, req: Request) -> Result<Response, CommandError>;
}

impl From<ShelfError> for CommandError {
    fn from(other: ShelfError) -> Self {
        match other {
            ShelfError::Validation { message, reason_code } => {
                CommandError::Validation { message, reason_code }
            }
            ShelfError::NotFound { message } => {
                CommandError::NotFound { message }
            }
            ShelfError::Serialization { message } => {
                CommandError::Serialization { message }
            }
            ShelfError::Runtime { message, reason_code } => {
                CommandError::Runtime { message, reason_code }
            }
        }
    }
}

impl Display for CommandError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            CommandError::NotFound { message } | CommandError::Serialization { message } => {
                write!(f, "{}", message)
            }
            CommandError::Runtime { message, reason_code } | CommandError::Validation { message, reason_code } => {
                write!(f, "{} {:?}", message, reason_code)
            }
        }
    }
}
