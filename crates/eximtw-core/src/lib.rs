//! eximtw-core: exim log lines to timed-word event records.
//!
//! This crate holds every step of the per-line transformation, plus the
//! shared types and configuration.
//!
//! # Pipeline
//!
//! ```text
//! line ──► classify ──► extract ──► render
//!                          │
//!                          └──► timestamp (day offset)
//! ```
//!
//! Each step works on one line at a time and keeps no state between lines.

pub mod classify;
pub mod config;
pub mod extract;
pub mod render;
pub mod signature;
pub mod timestamp;
pub mod types;

pub use classify::classify;
pub use config::{Config, MalformedPolicy};
pub use extract::{extract, ExtractError};
pub use render::{Format, Mode, Renderer};
pub use timestamp::{day_offset, Zone};
pub use types::{Arrival, Completion, Delivery, EventKind, EventRecord, LineKind};
