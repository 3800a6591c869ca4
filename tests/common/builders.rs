//! Test builders: ergonomic constructors for exim log lines and runs.
//!
//! These builders are designed for readability in test assertions, not for
//! production use. They panic on invalid input rather than returning `Result`.

use eximtw::{Converter, Stats};

// ---------------------------------------------------------------------------
// LogLineBuilder
// ---------------------------------------------------------------------------

/// Fluent builder for exim mainlog lines.
///
/// # Example
///
/// ```rust
/// let line = LogLineBuilder::arrival("alice@example.com")
///     .at("2024-01-15", "08:30:00")
///     .host("mail.example.com (mx1)")
///     .user("alice")
///     .build();
/// ```
pub struct LogLineBuilder {
    date: String,
    time: String,
    id: String,
    marker: &'static str,
    address: Option<String>,
    tags: Vec<String>,
}

impl LogLineBuilder {
    fn new(marker: &'static str, address: Option<String>) -> Self {
        Self {
            date: "2024-01-15".to_string(),
            time: "08:30:00".to_string(),
            id: "1a2b3c".to_string(),
            marker,
            address,
            tags: Vec::new(),
        }
    }

    pub fn arrival(sender: impl Into<String>) -> Self {
        Self::new("<=", Some(sender.into()))
    }

    pub fn delivery(destination: impl Into<String>) -> Self {
        Self::new("=>", Some(destination.into()))
    }

    pub fn completion() -> Self {
        Self::new("Completed", None)
    }

    pub fn at(mut self, date: impl Into<String>, time: impl Into<String>) -> Self {
        self.date = date.into();
        self.time = time.into();
        self
    }

    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    pub fn host(self, host: &str) -> Self {
        self.tag("H", host)
    }

    pub fn user(self, user: &str) -> Self {
        self.tag("U", user)
    }

    pub fn auth(self, auth: &str) -> Self {
        self.tag("A", auth)
    }

    pub fn tag(mut self, key: &str, value: &str) -> Self {
        self.tags.push(format!("{key}={value}"));
        self
    }

    pub fn build(self) -> String {
        let mut parts = vec![self.date, self.time, self.id, self.marker.to_string()];
        parts.extend(self.address);
        parts.extend(self.tags);
        parts.join(" ")
    }
}

// ---------------------------------------------------------------------------
// Run helpers
// ---------------------------------------------------------------------------

/// Run `converter` over `lines` and return the output lines and stats.
pub fn run_lines<S: AsRef<str>>(converter: &Converter, lines: &[S]) -> (Vec<String>, Stats) {
    let input: String = lines.iter().map(|l| format!("{}\n", l.as_ref())).collect();
    let mut out = Vec::new();
    let stats = converter
        .run("test-input", input.as_bytes(), &mut out)
        .expect("conversion should succeed");
    let text = String::from_utf8(out).expect("output is UTF-8");
    (text.lines().map(str::to_string).collect(), stats)
}

/// Run `converter` over a single line and return its record, if any.
pub fn convert_one(converter: &Converter, line: &str) -> Option<String> {
    let (mut out, _) = run_lines(converter, &[line]);
    assert!(out.len() <= 1, "one line produced {} records", out.len());
    out.pop()
}
