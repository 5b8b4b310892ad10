//! Extraction of timed build steps from a gzip-compressed activity log.

pub mod parse;
pub mod record;

pub use parse::read_activity_log;
pub use record::{Profile, Record};
