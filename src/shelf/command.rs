pub mod add_book_cmd;
