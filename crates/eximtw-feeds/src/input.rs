//! Input sources: stdin and files.

use std::fmt;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};

use crate::reader::LineReader;

#[derive(Debug, thiserror::Error)]
pub enum FeedError {
    #[error("cannot open {path}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Where log lines come from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    Stdin,
    File(PathBuf),
}

impl Input {
    /// `-` names stdin; anything else is a path.
    pub fn from_arg(arg: &str) -> Self {
        if arg == "-" {
            Input::Stdin
        } else {
            Input::File(PathBuf::from(arg))
        }
    }

    /// Open the source for line-by-line reading.
    pub fn open(&self) -> Result<LineReader<Box<dyn BufRead>>, FeedError> {
        let inner: Box<dyn BufRead> = match self {
            Input::Stdin => Box::new(io::stdin().lock()),
            Input::File(path) => Box::new(BufReader::new(open_file(path)?)),
        };
        tracing::debug!(source = %self, "opened input");
        Ok(LineReader::new(inner))
    }
}

impl fmt::Display for Input {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Input::Stdin => write!(f, "<stdin>"),
            Input::File(path) => write!(f, "{}", path.display()),
        }
    }
}

fn open_file(path: &Path) -> Result<File, FeedError> {
    File::open(path).map_err(|source| FeedError::Open {
        path: path.to_path_buf(),
        source,
    })
}
