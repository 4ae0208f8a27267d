use crate::util::format_mb;

/// Objects larger than this are reported (50 MiB)
pub const DEFAULT_THRESHOLD: u64 = 50 * 1024 * 1024;

/// A single over-threshold object in the final report
#[derive(Debug, Clone)]
pub struct ReportRow {
    pub size: u64,
    pub id: String,
    pub path: String,
}

/// Completed scan result: object count from the listing plus the
/// size-descending rows that survived the threshold filter
#[derive(Debug)]
pub struct SizeReport {
    pub objects_found: usize,
    pub threshold: u64,
    pub rows: Vec<ReportRow>,
}

impl SizeReport {
    /// Render the report in its printable form
    pub fn render(&self) -> String {
        let mut out = String::new();
        out.push_str(&format!(
            "Found {} objects. Checking sizes...\n",
            self.objects_found
        ));
        out.push_str(&format!(
            "\nLarge files found (>{}MB):\n",
            self.threshold / 1024 / 1024
        ));
        for row in &self.rows {
            out.push_str(&format!(
                "{} - {} - {}\n",
                format_mb(row.size),
                row.id,
                row.path
            ));
        }
        out
    }
}
