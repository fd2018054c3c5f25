//! Core utilities shared across features.

mod datetime;

pub use datetime::{local_today, parse_date, resolve_today};
