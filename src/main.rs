mod cli;
mod model;
mod repository;
mod util;

use anyhow::{Context, Result};
use clap::Parser;
use git2::Repository;

use cli::Cli;
use repository::ObjectReporter;

fn main() -> Result<()> {
    let cli = Cli::parse();

    let repo = Repository::discover(&cli.repo_path).with_context(|| {
        format!(
            "no git repository found at {} or any parent",
            cli.repo_path.display()
        )
    })?;

    eprintln!("Scanning repository at: {}", repo.path().display());

    let report = ObjectReporter::new(repo.path())
        .with_threshold(cli.threshold_mb * 1024 * 1024)
        .collect()?;

    print!("{}", report.render());

    Ok(())
}
