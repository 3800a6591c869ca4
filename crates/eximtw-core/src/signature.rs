//! Monitor signature for the emitted timed words.
//!
//! A data-parametric monitor needs to know, per action, how many string and
//! numeric parameters precede the timestamp. Each line of the signature is
//! `<action> <strings> <numbers>`.

use std::io::{self, Write};

use crate::render::Mode;
use crate::types::EventKind;

/// String parameters carried by `kind` in `mode`, excluding the timestamp.
pub fn string_params(mode: Mode, kind: EventKind) -> usize {
    match (mode, kind) {
        // sender
        (Mode::Frequent, _) => 1,
        // session, sender, domain, host, user, auth
        (Mode::Relay, EventKind::Arrival) => 6,
        // session, destination, domain
        (Mode::Relay, EventKind::Delivery) => 3,
        // session
        (Mode::Relay, EventKind::Completion) => 1,
    }
}

/// Write the signature for every event `mode` emits.
pub fn write_signature<W: Write>(out: &mut W, mode: Mode) -> io::Result<()> {
    for &kind in mode.kinds() {
        writeln!(out, "{} {} 0", kind.action(), string_params(mode, kind))?;
    }
    Ok(())
}
