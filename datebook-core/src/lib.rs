//! Core types for datebook.
//!
//! This crate holds everything the command dispatcher calls into:
//! - `Date`, a range-checked (year, month, day) value with a total order
//! - `parse_date` for `Y-M-D` tokens
//! - `EventStore`, the ordered date → event-name map
//!
//! Nothing here performs I/O. Failures come back as `DateError`.

pub mod date;
pub mod error;
pub mod parse;
pub mod store;

pub use date::Date;
pub use error::{DateError, DateField, DateResult};
pub use parse::parse_date;
pub use store::EventStore;
