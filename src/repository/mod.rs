mod git_cli;
mod reporter;

pub use reporter::{ObjectReporter, join_and_filter, parse_object_listing, parse_size_entries};
