//! eximtw-feeds: log line sources for eximtw.
//!
//! Each [`Input`] opens to a [`LineReader`], which yields lines one at a time
//! from a reused buffer, lossily decoded as UTF-8 and stripped of their line
//! ending.

pub mod input;
pub mod reader;

pub use input::{FeedError, Input};
pub use reader::{Line, LineReader};
