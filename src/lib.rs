pub mod books;
pub mod core;
pub mod shelf;
pub mod utils;
pub mod validation;
pub mod views;
