/// Format a byte count as mebibytes with two decimal places (e.g. "100.00 MB")
pub fn format_mb(bytes: u64) -> String {
    format!("{:.2} MB", bytes as f64 / 1024.0 / 1024.0)
}
