//! Input sources and the run loop
//!
//! Sources are processed one after another, each to completion. A source
//! that cannot be opened or read is recorded and skipped; the rest still
//! run. Only output failures stop the whole run.

use std::fmt;
use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::PathBuf;

use tracing::debug;

use crate::center::center_stream;
use crate::config::CenterConfig;
use crate::error::{Error, Result};

/// Where lines come from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    Stdin,
    File(PathBuf),
}

impl InputSource {
    /// Interpret a command-line operand; `-` means standard input
    pub fn from_arg(arg: impl Into<PathBuf>) -> Self {
        let path = arg.into();
        if path.as_os_str() == "-" {
            InputSource::Stdin
        } else {
            InputSource::File(path)
        }
    }

    /// Open the source for buffered reading
    pub fn open(&self) -> Result<Box<dyn BufRead>> {
        match self {
            InputSource::Stdin => Ok(Box::new(io::stdin().lock())),
            InputSource::File(path) => {
                let file = File::open(path).map_err(|source| Error::OpenFailed {
                    path: path.clone(),
                    source,
                })?;
                Ok(Box::new(BufReader::new(file)))
            }
        }
    }

    /// Sources for a list of operands, standard input when there are none
    pub fn from_args<I, S>(args: I) -> Vec<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<PathBuf>,
    {
        let sources: Vec<_> = args.into_iter().map(Self::from_arg).collect();
        if sources.is_empty() {
            vec![InputSource::Stdin]
        } else {
            sources
        }
    }
}

impl fmt::Display for InputSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputSource::Stdin => write!(f, "<stdin>"),
            InputSource::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// A source that was skipped or cut short
#[derive(Debug)]
pub struct SourceFailure {
    pub source: InputSource,
    pub error: Error,
}

/// Outcome of a whole run
#[derive(Debug, Default)]
pub struct RunSummary {
    /// Sources that were read to the end
    pub completed: usize,
    /// Lines written across all sources
    pub lines: usize,
    /// Sources that failed, in the order they were attempted
    pub failures: Vec<SourceFailure>,
}

impl RunSummary {
    /// Whether every source was processed without error
    pub fn is_success(&self) -> bool {
        self.failures.is_empty()
    }

    /// Process exit status for this run
    pub fn exit_code(&self) -> i32 {
        if self.is_success() {
            0
        } else {
            1
        }
    }

    fn record<F>(&mut self, source: &InputSource, error: Error, report: &mut F)
    where
        F: FnMut(&SourceFailure),
    {
        debug!(%source, %error, "Source failed");
        let failure = SourceFailure {
            source: source.clone(),
            error,
        };
        report(&failure);
        self.failures.push(failure);
    }
}

/// Center every source onto `out`, in order.
///
/// Each per-source failure is passed to `report` as soon as it happens,
/// before the next source is opened, and also kept in the returned
/// summary. An `Err` means output could no longer be written and the run
/// was abandoned.
pub fn run<W, R>(
    sources: &[InputSource],
    config: &CenterConfig,
    out: &mut W,
    report: R,
) -> Result<RunSummary>
where
    W: Write + ?Sized,
    R: FnMut(&SourceFailure),
{
    run_with(sources, config, out, InputSource::open, report)
}

/// Like [`run`], but with a custom way of opening each source
pub fn run_with<W, F, R>(
    sources: &[InputSource],
    config: &CenterConfig,
    out: &mut W,
    mut open: F,
    mut report: R,
) -> Result<RunSummary>
where
    W: Write + ?Sized,
    F: FnMut(&InputSource) -> Result<Box<dyn BufRead>>,
    R: FnMut(&SourceFailure),
{
    let mut summary = RunSummary::default();

    for source in sources {
        debug!(%source, "Processing source");

        let name = source.to_string();
        let result = open(source)
            .and_then(|mut reader| center_stream(&mut reader, &mut *out, config, &name));

        let result = match result {
            Err(e) if e.is_fatal() => return Err(e),
            result => result,
        };

        // Whatever the source produced goes out before its failure is reported.
        out.flush().map_err(Error::WriteFailed)?;

        match result {
            Ok(stats) => {
                summary.completed += 1;
                summary.lines += stats.lines;
            }
            Err(e) => summary.record(source, e, &mut report),
        }
    }

    Ok(summary)
}
