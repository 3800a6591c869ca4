//! Core types for eximtw-core.
//!
//! This module defines the data structures shared across the pipeline: the
//! [`LineKind`] produced by classification, the [`EventKind`] discriminant,
//! and the borrowed [`EventRecord`] built from a single log line.

use serde::Serialize;
use std::borrow::Cow;

/// Classification of a raw log line by its marker substring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LineKind {
    /// Inbound message receipt (`<=`).
    Arrival,
    /// Outbound delivery (`=>`).
    Delivery,
    /// End of processing for a message (`Completed`).
    Completion,
    /// No marker found; the line is dropped.
    Unrecognized,
}

impl LineKind {
    /// The event this line would produce, if any.
    pub fn event(self) -> Option<EventKind> {
        match self {
            LineKind::Arrival => Some(EventKind::Arrival),
            LineKind::Delivery => Some(EventKind::Delivery),
            LineKind::Completion => Some(EventKind::Completion),
            LineKind::Unrecognized => None,
        }
    }
}

/// Which kind of event a record describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    Arrival,
    Delivery,
    Completion,
}

impl EventKind {
    /// Action name used in both output formats and the monitor signature.
    pub fn action(self) -> &'static str {
        match self {
            EventKind::Arrival => "arrival",
            EventKind::Delivery => "delivery",
            EventKind::Completion => "complete",
        }
    }
}

impl std::fmt::Display for EventKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.action())
    }
}

/// A normalised event built from exactly one log line.
///
/// Strings borrow from the line; the record is serialised immediately and
/// never outlives it. Absent values are `None` here and only become the
/// `none`/`unknown` sentinels when rendered as TSV.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "event")]
pub enum EventRecord<'a> {
    #[serde(rename = "arrival")]
    Arrival(Arrival<'a>),
    #[serde(rename = "delivery")]
    Delivery(Delivery<'a>),
    #[serde(rename = "complete")]
    Completion(Completion<'a>),
}

impl EventRecord<'_> {
    pub fn kind(&self) -> EventKind {
        match self {
            EventRecord::Arrival(_) => EventKind::Arrival,
            EventRecord::Delivery(_) => EventKind::Delivery,
            EventRecord::Completion(_) => EventKind::Completion,
        }
    }

    /// Seconds since local midnight of the logged date, if computable.
    pub fn offset(&self) -> Option<i64> {
        match self {
            EventRecord::Arrival(a) => a.offset,
            EventRecord::Delivery(d) => d.offset,
            EventRecord::Completion(c) => c.offset,
        }
    }
}

/// Payload of an arrival (`<=`) line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Arrival<'a> {
    pub session_id: &'a str,
    pub sender: &'a str,
    pub sender_domain: Option<&'a str>,
    /// Sending host with parentheses removed, hence possibly owned.
    pub host: Option<Cow<'a, str>>,
    pub user: Option<&'a str>,
    pub auth: Option<&'a str>,
    pub offset: Option<i64>,
}

/// Payload of a delivery (`=>`) line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Delivery<'a> {
    pub session_id: &'a str,
    pub destination: &'a str,
    pub destination_domain: Option<&'a str>,
    pub offset: Option<i64>,
}

/// Payload of a `Completed` line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Completion<'a> {
    pub session_id: &'a str,
    pub offset: Option<i64>,
}
