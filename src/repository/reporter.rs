use anyhow::{Context, Result};
use indicatif::{ProgressBar, ProgressStyle};
use rustc_hash::FxHashMap;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::model::{DEFAULT_THRESHOLD, NO_NAME, ObjectRecord, ReportRow, SizeEntry, SizeReport};
use super::git_cli;

/// Scans a repository's full history for objects over a size threshold.
///
/// Object enumeration and size lookup are delegated to the git binary;
/// this type only joins, filters, and sorts the two result sets.
pub struct ObjectReporter {
    git_dir: PathBuf,
    threshold: u64,
    verbose: bool,
}

impl ObjectReporter {
    pub fn new(git_dir: &Path) -> Self {
        Self {
            git_dir: git_dir.to_path_buf(),
            threshold: DEFAULT_THRESHOLD,
            verbose: true,
        }
    }

    /// Create a quiet reporter (no progress output, used by tests and benchmarks)
    #[allow(dead_code)]
    pub fn quiet(git_dir: &Path) -> Self {
        Self {
            git_dir: git_dir.to_path_buf(),
            threshold: DEFAULT_THRESHOLD,
            verbose: false,
        }
    }

    /// Override the reporting threshold in bytes
    pub fn with_threshold(mut self, threshold: u64) -> Self {
        self.threshold = threshold;
        self
    }

    /// Run the full pipeline: list objects, batch-query sizes, join,
    /// filter by threshold, sort descending.
    ///
    /// Fails on either git invocation failing; never returns a partial
    /// report.
    pub fn collect(&self) -> Result<SizeReport> {
        let pb = self.spinner("Listing reachable objects...");
        let listing = git_cli::list_objects(&self.git_dir)
            .context("failed to enumerate repository objects")?;
        pb.finish_and_clear();

        let records = parse_object_listing(&listing);
        if self.verbose {
            eprintln!("Found {} objects, querying sizes...", records.len());
        }

        let ids: Vec<&str> = records.iter().map(|r| r.id.as_str()).collect();
        let ids = ids.join("\n");

        let pb = self.spinner("Querying object sizes...");
        let batch = git_cli::batch_check_sizes(&self.git_dir, &ids)
            .context("failed to query object sizes")?;
        pb.finish_and_clear();

        let sizes = parse_size_entries(&batch);
        let mut rows = join_and_filter(&records, &sizes, self.threshold);
        // Stable sort: equal sizes keep listing order
        rows.sort_by(|a, b| b.size.cmp(&a.size));

        Ok(SizeReport {
            objects_found: records.len(),
            threshold: self.threshold,
            rows,
        })
    }

    fn spinner(&self, msg: &'static str) -> ProgressBar {
        let pb = ProgressBar::new_spinner();
        if self.verbose {
            pb.set_style(
                ProgressStyle::default_spinner()
                    .template("{spinner:.green} {msg}")
                    .unwrap(),
            );
            pb.set_message(msg);
            pb.enable_steady_tick(Duration::from_millis(80));
        } else {
            pb.set_draw_target(indicatif::ProgressDrawTarget::hidden());
        }
        pb
    }
}

/// Parse `git rev-list --objects` output into records, listing order
/// preserved. Lines with no name get the "no-name" sentinel; empty lines
/// yield nothing.
pub fn parse_object_listing(raw: &str) -> Vec<ObjectRecord> {
    let mut records = Vec::new();
    for line in raw.lines() {
        match line.split_once(char::is_whitespace) {
            Some((id, path)) => {
                let path = path.trim_start();
                records.push(ObjectRecord {
                    id: id.to_string(),
                    path: if path.is_empty() { NO_NAME } else { path }.to_string(),
                });
            }
            None if !line.is_empty() => {
                records.push(ObjectRecord {
                    id: line.to_string(),
                    path: NO_NAME.to_string(),
                });
            }
            None => {}
        }
    }
    records
}

/// Parse `git cat-file --batch-check` output into an id-keyed size map.
/// Lines with fewer than three fields (e.g. "<id> missing") or a
/// non-numeric size are skipped; duplicate ids keep the last entry.
pub fn parse_size_entries(raw: &str) -> FxHashMap<String, SizeEntry> {
    let mut entries = FxHashMap::default();
    for line in raw.lines() {
        let mut fields = line.split_whitespace();
        let (Some(id), Some(kind), Some(size)) = (fields.next(), fields.next(), fields.next())
        else {
            continue;
        };
        let Ok(size) = size.parse::<u64>() else {
            continue;
        };
        entries.insert(
            id.to_string(),
            SizeEntry {
                kind: kind.to_string(),
                size,
            },
        );
    }
    entries
}

/// Join listing records with their size entries and keep those strictly
/// over the threshold. Records with no size entry are dropped; duplicate
/// ids in the listing each produce their own row.
pub fn join_and_filter(
    records: &[ObjectRecord],
    sizes: &FxHashMap<String, SizeEntry>,
    threshold: u64,
) -> Vec<ReportRow> {
    records
        .iter()
        .filter_map(|record| {
            sizes
                .get(&record.id)
                .filter(|entry| entry.size > threshold)
                .map(|entry| ReportRow {
                    size: entry.size,
                    id: record.id.clone(),
                    path: record.path.clone(),
                })
        })
        .collect()
}
