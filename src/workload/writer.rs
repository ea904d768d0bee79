/*!
 * Workload Export
 * Writes `pid arrival finish waiting` lines in completion order
 */

use crate::core::errors::WorkloadError;
use crate::process::{ProcessQueue, ProcessRecord};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;
use tracing::{debug, instrument};

/// Write one line per completed record
///
/// Records that never completed are skipped; the scheduler only hands back
/// completed ones.
pub fn write_records<'a, W, I>(out: &mut W, records: I) -> io::Result<usize>
where
    W: Write,
    I: IntoIterator<Item = &'a ProcessRecord>,
{
    let mut written = 0;
    for record in records {
        let (Some(finish), Some(waiting)) = (record.finish, record.waiting) else {
            continue;
        };
        writeln!(
            out,
            "{} {} {} {}",
            record.pid, record.arrival, finish, waiting
        )?;
        written += 1;
    }
    Ok(written)
}

/// Create (or truncate) `path` and write the completed queue to it
#[instrument(skip_all, fields(path = %path.display(), records = completed.len()))]
pub fn write_file(path: &Path, completed: &ProcessQueue) -> Result<usize, WorkloadError> {
    let file = File::create(path).map_err(|source| WorkloadError::CreateOutput {
        path: path.to_path_buf(),
        source,
    })?;

    let write_error = |source| WorkloadError::WriteOutput {
        path: path.to_path_buf(),
        source,
    };

    let mut out = BufWriter::new(file);
    let written = write_records(&mut out, completed).map_err(write_error)?;
    out.flush().map_err(write_error)?;

    debug!(written, "Wrote completed process records");
    Ok(written)
}
