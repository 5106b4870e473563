//! Domain types and validation for save-the-date announcements.
//!
//! Everything in this crate is pure logic with no I/O, so both the storage
//! layer and the HTTP layer can depend on it.

pub mod error;
pub mod save_date;
pub mod types;
