//! # Driver
//!
//! Line-oriented text front end for [`MaxSubarrayTree`]:
//!
//! ```text
//! n
//! a_1 a_2 ... a_n
//! m
//! t x y      (m lines)
//! ```
//!
//! `t = 0` replaces the value at position `x` with `y`.
//! Any other `t` prints the maximum subarray sum of `[x, y]` on its own line.
//!
//! The driver owns no global state. It reads from and writes to the handles passed to [`run`].

use std::io::{BufRead, Write};

use thiserror::Error;

use crate::{MaxSubarrayTree, TreeError};

/// Failures that stop a [`run`]. Line numbers are 1-based physical lines of the input.
#[derive(Debug, Error)]
pub enum DriverError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("line {line}: unexpected end of input")]
    UnexpectedEof { line: usize },
    /// A token that isn't an integer of the expected type, `usize` for counts and `i64` otherwise.
    #[error("line {line}: invalid integer {token:?}")]
    InvalidInteger { line: usize, token: String },
    #[error("line {line}: expected {expected} integers, found {found}")]
    LengthMismatch {
        line: usize,
        expected: usize,
        found: usize,
    },
    #[error("line {line}: the array must hold at least one element")]
    EmptyArray { line: usize },
    /// The tree rejected a position or a range.
    #[error("line {line}: {source}")]
    Tree {
        line: usize,
        #[source]
        source: TreeError,
    },
}

/// Counts of the operations a [`run`] has processed.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct DriverStats {
    pub updates: usize,
    pub queries: usize,
}

/// Reads a whole session from `input` and writes every query result to `output`.
///
/// The output is flushed before returning `Ok`. On error, results of earlier queries
/// have already been written, and nothing is written for the failing line.
///
/// # Examples
///
/// ```
/// use max_subarray_segment_tree::driver;
///
/// let input = "5\n1 -2 3 -4 5\n3\n1 1 5\n0 2 10\n1 1 3\n";
/// let mut output = Vec::new();
///
/// let stats = driver::run(input.as_bytes(), &mut output).unwrap();
/// assert_eq!(String::from_utf8(output).unwrap(), "5\n14\n");
/// assert_eq!((stats.updates, stats.queries), (1, 2));
/// ```
pub fn run<R: BufRead, W: Write>(input: R, output: W) -> Result<DriverStats, DriverError> {
    run_session(input, output).inspect_err(|error| log::warn!("session aborted: {}", error))
}

fn run_session<R: BufRead, W: Write>(input: R, mut output: W) -> Result<DriverStats, DriverError> {
    let mut lines = LineReader::new(input);

    let n = lines.read_count()?;
    if n == 0 {
        return Err(DriverError::EmptyArray { line: lines.line() });
    }
    let values = lines.read_integers(n)?;
    let mut tree = MaxSubarrayTree::build(&values).map_err(|source| DriverError::Tree {
        line: lines.line(),
        source,
    })?;

    let m = lines.read_count()?;
    let mut stats = DriverStats::default();
    for _ in 0..m {
        let operation = lines.read_integers(3)?;
        let line = lines.line();
        let (t, x, y) = (operation[0], operation[1], operation[2]);

        if t == 0 {
            tree.update(to_position(x), y)
                .map_err(|source| DriverError::Tree { line, source })?;
            stats.updates += 1;
        } else {
            let best = tree
                .query(to_position(x), to_position(y))
                .map_err(|source| DriverError::Tree { line, source })?;
            writeln!(output, "{}", best)?;
            stats.queries += 1;
        }
    }

    output.flush()?;
    log::debug!(
        "processed {} updates and {} queries over {} elements",
        stats.updates,
        stats.queries,
        tree.len()
    );
    Ok(stats)
}

/// Negative positions are never valid, so they are mapped to `0`, which is out of range too.
fn to_position(value: i64) -> usize {
    usize::try_from(value).unwrap_or(0)
}

/// Reads non-blank lines and keeps track of the current physical line number.
struct LineReader<R> {
    input: R,
    buf: String,
    line: usize,
}

impl<R: BufRead> LineReader<R> {
    fn new(input: R) -> Self {
        LineReader {
            input,
            buf: String::new(),
            line: 0,
        }
    }

    /// Line number of the last line returned by `next_line`.
    fn line(&self) -> usize {
        self.line
    }

    /// Advances to the next non-blank line, which is then available in `buf`.
    fn next_line(&mut self) -> Result<(), DriverError> {
        loop {
            self.buf.clear();
            if self.input.read_line(&mut self.buf)? == 0 {
                return Err(DriverError::UnexpectedEof {
                    line: self.line + 1,
                });
            }
            self.line += 1;

            if !self.buf.trim().is_empty() {
                return Ok(());
            }
        }
    }

    fn read_count(&mut self) -> Result<usize, DriverError> {
        self.next_line()?;
        let token = self.buf.trim();
        token.parse().map_err(|_| DriverError::InvalidInteger {
            line: self.line,
            token: token.to_owned(),
        })
    }

    /// Reads exactly `expected` integers from the next non-blank line.
    fn read_integers(&mut self, expected: usize) -> Result<Vec<i64>, DriverError> {
        self.next_line()?;
        let line = self.line;
        let values = self
            .buf
            .split_whitespace()
            .map(|token| {
                token.parse::<i64>().map_err(|_| DriverError::InvalidInteger {
                    line,
                    token: token.to_owned(),
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        if values.len() != expected {
            return Err(DriverError::LengthMismatch {
                line,
                expected,
                found: values.len(),
            });
        }

        Ok(values)
    }
}
