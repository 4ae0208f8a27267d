use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "repobloat", about = "Find oversized objects in git repository history")]
pub struct Cli {
    /// Path to the git repository (searched upward for the actual repo)
    #[arg(default_value = ".")]
    pub repo_path: PathBuf,

    /// Report objects larger than this many MiB
    #[arg(long, default_value_t = 50)]
    pub threshold_mb: u64,
}
