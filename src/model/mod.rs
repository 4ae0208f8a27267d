mod object;
mod report;

pub use object::{NO_NAME, ObjectRecord, SizeEntry};
pub use report::{DEFAULT_THRESHOLD, ReportRow, SizeReport};
