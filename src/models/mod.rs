pub mod admin;
pub mod author;
pub mod book;
pub mod category;
pub mod loan;
pub mod penalty;
pub mod publisher;
pub mod shelf;
pub mod shelf_book;
pub mod shelf_layout;
pub mod user;
