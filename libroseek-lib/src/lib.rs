#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::perf,
    clippy::style,
    clippy::missing_safety_doc,
    clippy::missing_const_for_fn
)]
#![warn(missing_docs, rust_2018_idioms)]
#![allow(clippy::module_name_repetitions)]
#![doc = include_str!("../README.md")]

mod api;
pub mod book;
pub mod card;
mod error;
pub mod favorites;
pub mod file;

pub use error::{Error, ErrorKind};

use book::Volume;
use log::trace;

type Client = reqwest::blocking::Client;

/// Search the book catalog for volumes matching `query`.
///
/// The query is free text and may carry qualifier tokens such as
/// `subject:`, `inauthor:` or `isbn:`. Results are ordered by relevance,
/// restricted to books and the returned sequence never exceeds
/// `max_results` entries. A response without matches is an empty sequence,
/// not an error.
///
/// Callers are responsible for rejecting queries that are empty after
/// trimming - an empty query should be a no-op, not a request.
///
/// # Errors
///
/// An `Err` is returned on a transport failure or a non-success status from
/// the endpoint - no partial result can be assumed.
/// An `Err` is returned when the response body cannot be deserialized.
#[inline]
pub fn search_books(query: &str, max_results: u8) -> Result<Vec<Volume>, Error> {
    trace!("Search volumes matching '{query}'");
    api::volumes::search::<Client>(query, max_results)
}
