pub mod document;
pub mod list;
pub mod template;
