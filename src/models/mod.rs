//! Data models for the address book.
//!
//! A [`Record`] holds one contact; an [`AddressBook`] owns all records of a
//! session, keyed by name.

pub mod address_book;
pub mod record;

pub use address_book::{AddressBook, UPCOMING_BIRTHDAY_DAYS};
pub use record::Record;
