//! Conversion pipeline: streams lines from a source into rendered records.
//!
//! Each line maps to zero or one output record, in input order. Nothing is
//! carried between lines except the running [`Stats`].

use std::io::{self, BufRead, Write};

use eximtw_core::{classify, extract, ExtractError, MalformedPolicy, Renderer, Zone};
use eximtw_core::{Config, EventRecord, Format, Mode};
use eximtw_feeds::{FeedError, Input, LineReader};

#[derive(Debug, thiserror::Error)]
pub enum ConvertError {
    #[error(transparent)]
    Feed(#[from] FeedError),
    #[error("{source_name}:{line}: {error}")]
    Malformed {
        source_name: String,
        line: u64,
        #[source]
        error: ExtractError,
    },
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

impl ConvertError {
    /// The downstream reader went away; treated as a normal end of run.
    pub fn is_broken_pipe(&self) -> bool {
        matches!(self, ConvertError::Io(e) if e.kind() == io::ErrorKind::BrokenPipe)
    }
}

/// Counters for one or more runs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Stats {
    /// Lines read from all sources.
    pub lines: u64,
    /// Records written.
    pub emitted: u64,
    /// Lines with no marker.
    pub unrecognized: u64,
    /// Marker lines the output mode does not emit.
    pub filtered: u64,
    /// Marker lines with too few fields.
    pub malformed: u64,
}

impl std::ops::AddAssign for Stats {
    fn add_assign(&mut self, other: Stats) {
        self.lines += other.lines;
        self.emitted += other.emitted;
        self.unrecognized += other.unrecognized;
        self.filtered += other.filtered;
        self.malformed += other.malformed;
    }
}

/// What happens to one line before rendering.
enum Dispatch<'a> {
    /// No marker.
    Unrecognized,
    /// A marker the output mode does not emit.
    Filtered,
    Extracted(Result<EventRecord<'a>, ExtractError>),
}

/// Converts MTA log lines into event records for one mode, format and zone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Converter {
    pub renderer: Renderer,
    pub zone: Zone,
    pub on_malformed: MalformedPolicy,
    pub line_buffered: bool,
}

impl Default for Converter {
    fn default() -> Self {
        Self::from_config(&Config::defaults())
    }
}

impl Converter {
    pub fn new(mode: Mode, format: Format) -> Self {
        Self {
            renderer: Renderer::new(mode, format),
            ..Self::default()
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self {
            renderer: Renderer::new(config.output.mode, config.output.format),
            zone: config.input.timezone,
            on_malformed: config.input.on_malformed,
            line_buffered: config.output.line_buffered,
        }
    }

    pub fn zone(mut self, zone: Zone) -> Self {
        self.zone = zone;
        self
    }

    pub fn on_malformed(mut self, policy: MalformedPolicy) -> Self {
        self.on_malformed = policy;
        self
    }

    pub fn mode(&self) -> Mode {
        self.renderer.mode
    }

    /// Classify and extract a single line.
    ///
    /// `Ok(None)` means the line is dropped: no marker, or an event the mode
    /// does not emit.
    pub fn convert_line<'a>(&self, line: &'a str) -> Result<Option<EventRecord<'a>>, ExtractError> {
        match self.dispatch(line) {
            Dispatch::Extracted(result) => result.map(Some),
            Dispatch::Unrecognized | Dispatch::Filtered => Ok(None),
        }
    }

    fn dispatch<'a>(&self, line: &'a str) -> Dispatch<'a> {
        match classify(line).event() {
            None => Dispatch::Unrecognized,
            Some(kind) if !self.mode().accepts(kind) => Dispatch::Filtered,
            Some(kind) => Dispatch::Extracted(extract(line, kind, self.zone)),
        }
    }

    /// Convert every line of `input` into `out`.
    pub fn run_input<W: Write>(&self, input: &Input, out: &mut W) -> Result<Stats, ConvertError> {
        let mut reader = input.open()?;
        self.run_reader(&input.to_string(), &mut reader, out)
    }

    /// Convert an already-open stream; `source_name` labels log messages.
    pub fn run<R: BufRead, W: Write>(
        &self,
        source_name: &str,
        input: R,
        out: &mut W,
    ) -> Result<Stats, ConvertError> {
        self.run_reader(source_name, &mut LineReader::new(input), out)
    }

    fn run_reader<R: BufRead, W: Write>(
        &self,
        source_name: &str,
        reader: &mut LineReader<R>,
        out: &mut W,
    ) -> Result<Stats, ConvertError> {
        let mut stats = Stats::default();

        while let Some(line) = reader.next_line()? {
            stats.lines += 1;
            let text: &str = &line.text;

            let extracted = match self.dispatch(text) {
                Dispatch::Unrecognized => {
                    stats.unrecognized += 1;
                    continue;
                }
                Dispatch::Filtered => {
                    stats.filtered += 1;
                    continue;
                }
                Dispatch::Extracted(result) => result,
            };

            match extracted {
                Ok(record) => {
                    self.renderer.write(out, &record)?;
                    if self.line_buffered {
                        out.flush()?;
                    }
                    stats.emitted += 1;
                }
                Err(error) => {
                    stats.malformed += 1;
                    match self.on_malformed {
                        MalformedPolicy::Skip => {
                            tracing::debug!(source = source_name, line = line.number, %error, "skipping malformed line");
                        }
                        MalformedPolicy::Warn => {
                            tracing::warn!(source = source_name, line = line.number, %error, "skipping malformed line");
                        }
                        MalformedPolicy::Abort => {
                            return Err(ConvertError::Malformed {
                                source_name: source_name.to_string(),
                                line: line.number,
                                error,
                            });
                        }
                    }
                }
            }
        }

        out.flush()?;
        tracing::debug!(source = source_name, ?stats, "input finished");
        Ok(stats)
    }
}
