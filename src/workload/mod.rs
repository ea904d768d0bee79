/*!
 * Workload Module
 * Record stream import, export and the console summary
 */

pub mod reader;
pub mod summary;
pub mod writer;

pub use reader::{parse, parse_bytes, read_file, Import, Truncation};
pub use summary::Summary;
pub use writer::{write_file, write_records};
