//! eximtw: exim mail logs to timed-word event records.
//!
//! Reads exim-style MTA log lines and writes one record per arrival,
//! delivery or completion, ready to feed a timed-word monitor. The
//! per-line steps live in [`eximtw_core`]; line sources in [`eximtw_feeds`].
//!
//! # Architecture
//!
//! ```text
//! Input ──► LineReader ──► Converter ──► stdout
//!                             │
//!                 classify ─► extract ─► render
//! ```
//!
//! Everything runs on one thread, one line at a time.

pub mod pipeline;

pub use pipeline::{ConvertError, Converter, Stats};
