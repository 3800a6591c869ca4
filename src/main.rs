use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use clap::Parser;
use eximtw::{ConvertError, Converter, Stats};
use eximtw_core::config::Config;
use eximtw_core::signature::write_signature;
use eximtw_core::{Format, MalformedPolicy, Mode, Zone};
use eximtw_feeds::Input;

#[derive(Parser)]
#[command(name = "eximtw", about = "Convert exim logs into timed-word event records")]
struct Cli {
    /// Log files to read in order; `-` or nothing reads stdin.
    inputs: Vec<String>,

    /// Which events to emit and with which fields.
    #[arg(short, long, value_enum)]
    mode: Option<Mode>,

    /// Output encoding.
    #[arg(short, long, value_enum)]
    format: Option<Format>,

    /// Compute day offsets in UTC instead of local time.
    #[arg(long)]
    utc: bool,

    /// What to do with marker lines that have too few fields.
    #[arg(long, value_enum)]
    on_malformed: Option<MalformedPolicy>,

    /// Flush after every record.
    #[arg(long)]
    line_buffered: bool,

    /// Print the monitor signature for the selected mode and exit.
    #[arg(long)]
    signature: bool,

    /// Extra config file layered over ~/.config/eximtw/config.toml.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Log at debug level to stderr.
    #[arg(long)]
    debug: bool,
}

impl Cli {
    fn apply(&self, config: &mut Config) {
        if let Some(mode) = self.mode {
            config.output.mode = mode;
        }
        if let Some(format) = self.format {
            config.output.format = format;
        }
        if self.utc {
            config.input.timezone = Zone::Utc;
        }
        if let Some(policy) = self.on_malformed {
            config.input.on_malformed = policy;
        }
        if self.line_buffered {
            config.output.line_buffered = true;
        }
    }

    fn inputs(&self) -> Vec<Input> {
        if self.inputs.is_empty() {
            vec![Input::Stdin]
        } else {
            self.inputs.iter().map(|arg| Input::from_arg(arg)).collect()
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // stdout carries records, so logs always go to stderr.
    let default_level = if cli.debug { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_ansi(false)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_env("RUST_LOG")
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level)),
        )
        .init();

    let mut config = Config::load(cli.config.as_deref())?;
    cli.apply(&mut config);
    tracing::debug!(?config, "configuration loaded");

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());

    if cli.signature {
        let written = write_signature(&mut out, config.output.mode).and_then(|()| out.flush());
        return finish(written.map_err(ConvertError::from));
    }

    let converter = Converter::from_config(&config);
    let mut total = Stats::default();
    let result = cli.inputs().iter().try_for_each(|input| {
        total += converter.run_input(input, &mut out)?;
        Ok::<(), ConvertError>(())
    });
    tracing::info!(
        lines = total.lines,
        emitted = total.emitted,
        unrecognized = total.unrecognized,
        filtered = total.filtered,
        malformed = total.malformed,
        "conversion finished"
    );
    finish(result.and_then(|()| out.flush().map_err(ConvertError::from)))
}

/// Map the run result to the process result; a closed downstream pipe is
/// a clean exit.
fn finish(result: Result<(), ConvertError>) -> anyhow::Result<()> {
    match result {
        Err(e) if e.is_broken_pipe() => {
            tracing::debug!("output closed by reader");
            Ok(())
        }
        other => other.map_err(Into::into),
    }
}
