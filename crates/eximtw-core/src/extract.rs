//! Field extraction: turns a classified line into an [`EventRecord`].
//!
//! Positional fields come from whitespace tokens:
//!
//! ```text
//! 2024-01-15 08:30:00 1a2b3c <= alice@example.com H=mail.example.com (mx1) U=alice A=plain
//! └─ [0] ──┘ └─ [1] ┘ └[2] ┘ [3] └──── [4] ────┘
//! ```
//!
//! Tagged fields (`H=`, `U=`, `A=`) are searched for anywhere in the line,
//! each by its own named-capture rule.

use std::borrow::Cow;
use std::sync::LazyLock;

use regex::Regex;

use crate::timestamp::{day_offset, Zone};
use crate::types::{Arrival, Completion, Delivery, EventKind, EventRecord};

const DATE: usize = 0;
const TIME: usize = 1;
const SESSION: usize = 2;
const ADDRESS: usize = 4;

const PARENS: &[char] = &['(', ')'];

static HOST_RULE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r" H=(?P<host>[^ ]*)").expect("constant regex pattern is valid"));
static USER_RULE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r" U=(?P<user>[^ ]*)").expect("constant regex pattern is valid"));
static AUTH_RULE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r" A=(?P<auth>[^ ]*)").expect("constant regex pattern is valid"));

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ExtractError {
    #[error("{kind} line has {found} fields, needs at least {needed}")]
    TooFewFields {
        kind: EventKind,
        found: usize,
        needed: usize,
    },
}

/// Smallest token count a line of `kind` must have.
pub fn min_fields(kind: EventKind) -> usize {
    match kind {
        EventKind::Arrival | EventKind::Delivery => ADDRESS + 1,
        EventKind::Completion => SESSION + 1,
    }
}

/// Build the record for `line`, already classified as `kind`.
pub fn extract(line: &str, kind: EventKind, zone: Zone) -> Result<EventRecord<'_>, ExtractError> {
    let needed = min_fields(kind);
    let tokens: Vec<&str> = line.split_whitespace().take(needed).collect();
    if tokens.len() < needed {
        return Err(ExtractError::TooFewFields {
            kind,
            found: tokens.len(),
            needed,
        });
    }

    let session_id = tokens[SESSION];
    let offset = day_offset(tokens[DATE], tokens[TIME], zone);

    let record = match kind {
        EventKind::Arrival => {
            let sender = tokens[ADDRESS];
            EventRecord::Arrival(Arrival {
                session_id,
                sender,
                sender_domain: domain(sender),
                host: host(line),
                user: user(line),
                auth: auth(line),
                offset,
            })
        }
        EventKind::Delivery => {
            let destination = tokens[ADDRESS];
            EventRecord::Delivery(Delivery {
                session_id,
                destination,
                destination_domain: domain(destination),
                offset,
            })
        }
        EventKind::Completion => EventRecord::Completion(Completion { session_id, offset }),
    };
    Ok(record)
}

/// Everything after the first `@` of an address.
pub fn domain(address: &str) -> Option<&str> {
    address.split_once('@').map(|(_, domain)| domain)
}

/// First ` H=` value in the line, with every `(` and `)` removed.
pub fn host(line: &str) -> Option<Cow<'_, str>> {
    let raw = HOST_RULE.captures(line)?.name("host")?.as_str();
    if raw.contains(PARENS) {
        Some(Cow::Owned(raw.replace(PARENS, "")))
    } else {
        Some(Cow::Borrowed(raw))
    }
}

/// First ` U=` value in the line.
pub fn user(line: &str) -> Option<&str> {
    Some(USER_RULE.captures(line)?.name("user")?.as_str())
}

/// First ` A=` value in the line.
pub fn auth(line: &str) -> Option<&str> {
    Some(AUTH_RULE.captures(line)?.name("auth")?.as_str())
}
