/*!
 * Workload Import
 * Parses the whitespace-delimited `pid arrival burst priority` record stream
 */

use crate::core::errors::WorkloadError;
use crate::core::limits::{INPUT_RECORD_FIELDS, MAX_RECORD_TICKS};
use crate::core::types::{Pid, Priority, Ticks};
use crate::process::ProcessRecord;
use std::fs::File;
use std::io::Read;
use std::num::NonZeroUsize;
use std::path::Path;
use std::str::FromStr;
use tracing::{debug, instrument, warn};

/// Why import stopped before the end of the stream
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Truncation {
    /// A token was not an integer, or a field was out of range
    Malformed { record: usize, token: String },
    /// The stream ended partway through a record
    Incomplete { record: usize, fields: usize },
}

/// Records imported from a stream
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Import {
    pub records: Vec<ProcessRecord>,
    /// Set when a malformed record cut the import short
    pub truncated: Option<Truncation>,
}

/// Parse records from `text`
pub fn parse(text: &str, limit: Option<NonZeroUsize>) -> Import {
    parse_bytes(text.as_bytes(), limit)
}

/// Parse records from a raw byte stream
///
/// Tokens are separated by ASCII whitespace; line structure is not
/// significant. Import reads up to `limit` records (all records when
/// `None`) and stops at the first record that is not four well-formed
/// integers: a `u32` pid, an arrival in `0..=i32::MAX`, a burst in
/// `1..=i32::MAX` and an `i32` priority. A token that is not valid UTF-8
/// is malformed like any other.
pub fn parse_bytes(input: &[u8], limit: Option<NonZeroUsize>) -> Import {
    let max = limit.map_or(usize::MAX, NonZeroUsize::get);
    let mut tokens = input
        .split(|byte| byte.is_ascii_whitespace())
        .filter(|token| !token.is_empty());
    let mut records = Vec::new();

    while records.len() < max {
        let index = records.len();
        let fields: Vec<&[u8]> = tokens.by_ref().take(INPUT_RECORD_FIELDS).collect();

        if fields.is_empty() {
            break;
        }
        if fields.len() < INPUT_RECORD_FIELDS {
            return truncated(
                records,
                Truncation::Incomplete {
                    record: index,
                    fields: fields.len(),
                },
            );
        }

        match parse_record(&fields) {
            Ok(record) => records.push(record),
            Err(token) => {
                return truncated(
                    records,
                    Truncation::Malformed {
                        record: index,
                        token: String::from_utf8_lossy(token).into_owned(),
                    },
                )
            }
        }
    }

    Import {
        records,
        truncated: None,
    }
}

/// Read and parse the record file at `path`
#[instrument(skip_all, fields(path = %path.display()))]
pub fn read_file(path: &Path, limit: Option<NonZeroUsize>) -> Result<Import, WorkloadError> {
    let mut file = File::open(path).map_err(|source| WorkloadError::OpenInput {
        path: path.to_path_buf(),
        source,
    })?;

    let mut input = Vec::new();
    file.read_to_end(&mut input)
        .map_err(|source| WorkloadError::ReadInput {
            path: path.to_path_buf(),
            source,
        })?;

    let import = parse_bytes(&input, limit);
    debug!(records = import.records.len(), "Imported process records");
    Ok(import)
}

fn truncated(records: Vec<ProcessRecord>, reason: Truncation) -> Import {
    warn!(
        imported = records.len(),
        reason = ?reason,
        "Input record stream ended early, remaining input ignored"
    );
    Import {
        records,
        truncated: Some(reason),
    }
}

/// Parse one record; the error is the offending token
fn parse_record<'a>(fields: &[&'a [u8]]) -> Result<ProcessRecord, &'a [u8]> {
    let pid: Pid = field(fields[0])?;
    let arrival: Ticks = field(fields[1]).and_then(|arrival| ticks(fields[1], arrival, 0))?;
    let burst: Ticks = field(fields[2]).and_then(|burst| ticks(fields[2], burst, 1))?;
    let priority: Priority = field(fields[3])?;

    Ok(ProcessRecord::new(pid, arrival, burst, priority))
}

fn field<T: FromStr>(token: &[u8]) -> Result<T, &[u8]> {
    std::str::from_utf8(token)
        .ok()
        .and_then(|text| text.parse().ok())
        .ok_or(token)
}

fn ticks(token: &[u8], value: Ticks, min: Ticks) -> Result<Ticks, &[u8]> {
    if (min..=MAX_RECORD_TICKS).contains(&value) {
        Ok(value)
    } else {
        Err(token)
    }
}
