//! Line-oriented point input
//!
//! Reading is split in two steps. [`LineSource`] only acquires lines and
//! decides where the stream ends; [`parse_point`] turns one line into a typed
//! point or a [`ParseError`]. [`read_points`] joins them and applies the
//! configured [`MalformedPolicy`].

use crate::types::{Point, PointSequence};
use hplot_common::{HPlotError, Result};
use hplot_config::{InputConfig, MalformedPolicy};
use std::io::{self, BufRead, Write};
use std::iter::FusedIterator;
use std::num::ParseIntError;
use thiserror::Error;
use tracing::{debug, error, info, warn};

/// One raw input line with its 1-based position
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputLine {
    pub number: usize,
    pub text: String,
}

/// Lazy, finite, non-restartable sequence of input lines
///
/// Ends at end-of-stream or at the first blank line, whichever comes first.
/// After the end or an I/O error it yields nothing more.
pub struct LineSource<R> {
    reader: R,
    line_number: usize,
    finished: bool,
}

impl<R: BufRead> LineSource<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            line_number: 0,
            finished: false,
        }
    }
}

impl<R: BufRead> Iterator for LineSource<R> {
    type Item = io::Result<InputLine>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }

        let mut buf = String::new();
        match self.reader.read_line(&mut buf) {
            Ok(0) => {
                self.finished = true;
                None
            }
            Ok(_) => {
                self.line_number += 1;
                let text = buf.trim_end_matches(&['\n', '\r'][..]);
                if text.trim().is_empty() {
                    debug!(line = self.line_number, "blank line ends the input");
                    self.finished = true;
                    return None;
                }
                Some(Ok(InputLine {
                    number: self.line_number,
                    text: text.to_string(),
                }))
            }
            Err(err) => {
                self.finished = true;
                Some(Err(err))
            }
        }
    }
}

impl<R: BufRead> FusedIterator for LineSource<R> {}

/// Why a line is not a point
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseErrorKind {
    #[error("expected {expected} coordinates, found {found}")]
    WrongArity { expected: usize, found: usize },

    #[error("invalid integer token '{token}'")]
    InvalidToken {
        token: String,
        #[source]
        source: ParseIntError,
    },
}

/// A malformed input line
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("line {line}: {kind}")]
pub struct ParseError {
    pub line: usize,
    #[source]
    pub kind: ParseErrorKind,
}

impl From<ParseError> for HPlotError {
    fn from(err: ParseError) -> Self {
        let message = err.kind.to_string();
        match err.kind {
            ParseErrorKind::InvalidToken { source, .. } => {
                HPlotError::parse(err.line, message).caused_by(source)
            }
            ParseErrorKind::WrongArity { .. } => HPlotError::parse(err.line, message),
        }
    }
}

/// Parse one whitespace-separated line into an `N`-coordinate point
///
/// Every token is converted first, so a non-integer token is reported even
/// when the token count is also wrong.
pub fn parse_point<const N: usize>(text: &str, line: usize) -> std::result::Result<Point<N>, ParseError> {
    let values = text
        .split_whitespace()
        .map(|token| {
            token.parse::<i64>().map_err(|source| ParseError {
                line,
                kind: ParseErrorKind::InvalidToken {
                    token: token.to_string(),
                    source,
                },
            })
        })
        .collect::<std::result::Result<Vec<_>, _>>()?;

    let coords: [i64; N] = values.try_into().map_err(|values: Vec<i64>| ParseError {
        line,
        kind: ParseErrorKind::WrongArity {
            expected: N,
            found: values.len(),
        },
    })?;

    Ok(Point::new(coords))
}

/// Reader behaviour
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReadOptions {
    pub policy: MalformedPolicy,
    /// Write every accepted line back out
    pub echo: bool,
}

impl From<&InputConfig> for ReadOptions {
    fn from(config: &InputConfig) -> Self {
        Self {
            policy: config.malformed_policy,
            echo: config.echo,
        }
    }
}

/// Read points from `reader`, echoing accepted lines to stdout when asked
pub fn read_points<const N: usize, R: BufRead>(
    reader: R,
    options: &ReadOptions,
) -> Result<PointSequence<N>> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    read_points_into(reader, options, &mut out)
}

/// Read points from `reader`, sending echoed lines to `echo`
pub fn read_points_into<const N: usize, R: BufRead, W: Write>(
    reader: R,
    options: &ReadOptions,
    echo: &mut W,
) -> Result<PointSequence<N>> {
    let mut points = PointSequence::new();
    let mut skipped = 0usize;

    for line in LineSource::new(reader) {
        let line = line?;
        match parse_point::<N>(&line.text, line.number) {
            Ok(point) => {
                if options.echo {
                    writeln!(echo, "{}", line.text)?;
                }
                points.push(point);
            }
            Err(err) => match options.policy {
                MalformedPolicy::FailFast => {
                    error!(line = err.line, "malformed input: {}", err.kind);
                    return Err(err.into());
                }
                MalformedPolicy::SkipAndWarn => {
                    warn!(line = err.line, "skipping malformed input: {}", err.kind);
                    skipped += 1;
                }
            },
        }
    }

    if options.echo {
        echo.flush()?;
    }

    info!(points = points.len(), skipped, dims = N, "finished reading points");
    Ok(points)
}
