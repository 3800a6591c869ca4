//! Record rendering: TSV timed words or JSON Lines.
//!
//! The output mode decides which events are emitted and which fields each
//! carries; the format decides how they are written.

use std::fmt;
use std::io::{self, Write};

use serde::{Deserialize, Serialize};

use crate::types::{EventKind, EventRecord};

/// Printed for a missing domain, host, user or auth value.
pub const NONE: &str = "none";
/// Printed for an offset that could not be computed.
pub const UNKNOWN: &str = "unknown";

/// Which events are emitted, and with which fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// Arrivals only, as `sender` plus offset.
    Frequent,
    /// Arrivals, deliveries and completions with every extracted field.
    #[default]
    Relay,
}

impl Mode {
    pub fn accepts(self, kind: EventKind) -> bool {
        match self {
            Mode::Frequent => kind == EventKind::Arrival,
            Mode::Relay => true,
        }
    }

    /// Event kinds this mode emits, in signature order.
    pub fn kinds(self) -> &'static [EventKind] {
        match self {
            Mode::Frequent => &[EventKind::Arrival],
            Mode::Relay => &[EventKind::Arrival, EventKind::Delivery, EventKind::Completion],
        }
    }
}

/// Output encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Format {
    /// Tab-separated timed words.
    #[default]
    Tsv,
    /// One JSON object per line.
    Json,
}

/// Renders records for one mode and format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Renderer {
    pub mode: Mode,
    pub format: Format,
}

impl Renderer {
    pub fn new(mode: Mode, format: Format) -> Self {
        Self { mode, format }
    }

    /// Write `record` followed by a newline.
    pub fn write<W: Write>(&self, out: &mut W, record: &EventRecord<'_>) -> io::Result<()> {
        match self.format {
            Format::Tsv => self.write_tsv(out, record),
            Format::Json => self.write_json(out, record),
        }
    }

    /// Render `record` into a new string, without the trailing newline.
    pub fn render(&self, record: &EventRecord<'_>) -> io::Result<String> {
        let mut buf = Vec::new();
        self.write(&mut buf, record)?;
        buf.pop();
        String::from_utf8(buf).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
    }

    fn write_tsv<W: Write>(&self, out: &mut W, record: &EventRecord<'_>) -> io::Result<()> {
        let offset = Sentinel(record.offset(), UNKNOWN);
        match (self.mode, record) {
            (Mode::Frequent, EventRecord::Arrival(a)) => {
                writeln!(out, "arrival\t{}\t{offset}", a.sender)
            }
            (Mode::Frequent, other) => Err(unsupported(other.kind())),
            (Mode::Relay, EventRecord::Arrival(a)) => writeln!(
                out,
                "arrival\t{}\t{}\t{}\t{}\t{}\t{}\t{offset}",
                a.session_id,
                a.sender,
                Sentinel(a.sender_domain, NONE),
                Sentinel(a.host.as_deref(), NONE),
                Sentinel(a.user, NONE),
                Sentinel(a.auth, NONE),
            ),
            (Mode::Relay, EventRecord::Delivery(d)) => writeln!(
                out,
                "delivery\t{}\t{}\t{}\t{offset}",
                d.session_id,
                d.destination,
                Sentinel(d.destination_domain, NONE),
            ),
            (Mode::Relay, EventRecord::Completion(c)) => {
                writeln!(out, "complete\t{}\t{offset}", c.session_id)
            }
        }
    }

    fn write_json<W: Write>(&self, out: &mut W, record: &EventRecord<'_>) -> io::Result<()> {
        match (self.mode, record) {
            (Mode::Frequent, EventRecord::Arrival(a)) => {
                let view = FrequentArrival {
                    event: EventKind::Arrival.action(),
                    sender: a.sender,
                    offset: a.offset,
                };
                serde_json::to_writer(&mut *out, &view)?;
            }
            (Mode::Frequent, other) => return Err(unsupported(other.kind())),
            (Mode::Relay, record) => serde_json::to_writer(&mut *out, record)?,
        }
        out.write_all(b"\n")
    }
}

/// The reduced arrival shape emitted in frequent mode.
#[derive(Serialize)]
struct FrequentArrival<'a> {
    event: &'static str,
    sender: &'a str,
    offset: Option<i64>,
}

/// Displays the value, or the sentinel when absent.
struct Sentinel<T>(Option<T>, &'static str);

impl<T: fmt::Display> fmt::Display for Sentinel<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.0 {
            Some(value) => value.fmt(f),
            None => f.write_str(self.1),
        }
    }
}

fn unsupported(kind: EventKind) -> io::Error {
    io::Error::new(
        io::ErrorKind::InvalidInput,
        format!("{kind} records are not emitted in frequent mode"),
    )
}
