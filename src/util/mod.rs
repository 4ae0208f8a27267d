mod format;

pub use format::format_mb;
