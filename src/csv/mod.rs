// src/csv/mod.rs
pub mod line;
pub mod record;

pub use line::parse_line;
pub use record::{Dataset, Header, Record};

use std::sync::Arc;

use clap::ValueEnum;
use tracing::{debug, instrument, trace};

use crate::error::{MergeError, Result};

/// What to do with a data row whose field count differs from the header.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum RowShapePolicy {
    /// Reject short and long rows.
    #[default]
    Strict,
    /// Fill missing trailing fields with empty strings; reject long rows.
    Pad,
    /// Drop extra trailing fields; reject short rows.
    Truncate,
    /// Pad short rows and truncate long ones.
    Lenient,
}

impl RowShapePolicy {
    fn pads(self) -> bool {
        matches!(self, Self::Pad | Self::Lenient)
    }

    fn truncates(self) -> bool {
        matches!(self, Self::Truncate | Self::Lenient)
    }
}

/// What to do with whitespace-only lines after the header.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum BlankLinePolicy {
    #[default]
    Skip,
    Reject,
}

#[derive(Clone, Copy, Debug, Default)]
pub struct ParseOptions {
    pub row_shape: RowShapePolicy,
    pub blank_lines: BlankLinePolicy,
}

/// Parse CSV text into a [`Dataset`].
///
/// The first line is the header; every following line becomes one
/// [`Record`]. Lines end at `\n`, `\r\n` or a lone `\r`.
#[instrument(level = "debug", skip(text, opts), fields(bytes = text.len()))]
pub fn parse(text: &str, opts: ParseOptions) -> Result<Dataset> {
    let mut lines = physical_lines(text).enumerate();

    // A trailing newline leaves one empty piece at the end; it is not a row.
    let header_line = match lines.next() {
        Some((_, l)) if !l.trim().is_empty() => l,
        _ => return Err(MergeError::EmptyInput),
    };
    let header = Arc::new(Header::new(parse_line(header_line))?);
    debug!(columns = ?header.names(), "parsed header");

    let body: Vec<(usize, &str)> = lines.collect();
    let body = match body.split_last() {
        Some(((_, last), rest)) if last.is_empty() => rest,
        _ => &body[..],
    };

    let mut records = Vec::with_capacity(body.len());
    for &(idx, line) in body {
        let line_no = idx + 1;
        if line.trim().is_empty() {
            match opts.blank_lines {
                BlankLinePolicy::Skip => {
                    trace!(line = line_no, "skipping blank line");
                    continue;
                }
                BlankLinePolicy::Reject => {
                    return Err(MergeError::RowShape {
                        line: line_no,
                        expected: header.len(),
                        found: 0,
                    })
                }
            }
        }

        let values = fit_row(parse_line(line), header.len(), line_no, opts.row_shape)?;
        records.push(Record::new(Arc::clone(&header), values));
    }

    debug!(rows = records.len(), "parsed CSV body");
    Ok(Dataset { header, records })
}

/// Split on `\n`, `\r\n` and lone `\r`. A final terminator leaves one empty
/// piece at the end.
fn physical_lines(text: &str) -> impl Iterator<Item = &str> {
    text.split('\n')
        .flat_map(|l| l.strip_suffix('\r').unwrap_or(l).split('\r'))
}

/// Apply the row-shape policy to one row's fields.
fn fit_row(
    mut values: Vec<String>,
    expected: usize,
    line: usize,
    policy: RowShapePolicy,
) -> Result<Vec<String>> {
    let found = values.len();
    if found < expected && policy.pads() {
        values.resize(expected, String::new());
    } else if found > expected && policy.truncates() {
        values.truncate(expected);
    }

    if values.len() != expected {
        return Err(MergeError::RowShape {
            line,
            expected,
            found,
        });
    }
    Ok(values)
}
