use anyhow::{Context, Result, anyhow, bail};
use std::io::Write;
use std::path::Path;
use std::process::{Command, Stdio};
use std::thread;

/// Batch-check format selecting the three fields the size parser expects
const BATCH_CHECK_FORMAT: &str = "--batch-check=%(objectname) %(objecttype) %(objectsize)";

/// List every object reachable from every ref, one per line:
/// `<id> [<path>]`. Returns the raw stdout.
pub fn list_objects(git_dir: &Path) -> Result<String> {
    let output = Command::new("git")
        .arg("-C")
        .arg(git_dir)
        .args(["rev-list", "--objects", "--all"])
        .output()
        .context("failed to run git rev-list")?;

    if !output.status.success() {
        bail!(
            "git rev-list exited with {}: {}",
            output.status,
            String::from_utf8_lossy(&output.stderr).trim()
        );
    }

    Ok(String::from_utf8_lossy(&output.stdout).into_owned())
}

/// Bulk-query object sizes: feeds the newline-joined identifier list to
/// `git cat-file --batch-check` and returns the raw stdout, one
/// `<id> <kind> <size>` line per resolvable identifier.
pub fn batch_check_sizes(git_dir: &Path, ids: &str) -> Result<String> {
    let mut child = Command::new("git")
        .arg("-C")
        .arg(git_dir)
        .arg("cat-file")
        .arg(BATCH_CHECK_FORMAT)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .context("failed to run git cat-file")?;

    let mut stdin = child
        .stdin
        .take()
        .ok_or_else(|| anyhow!("git cat-file stdin unavailable"))?;

    // Feed ids from a separate thread: with both pipes on the parent,
    // a filled stdout buffer would block git and deadlock the write.
    let ids = ids.to_owned();
    let feeder = thread::spawn(move || stdin.write_all(ids.as_bytes()));

    let output = child
        .wait_with_output()
        .context("failed to read git cat-file output")?;

    if !output.status.success() {
        bail!(
            "git cat-file exited with {}: {}",
            output.status,
            String::from_utf8_lossy(&output.stderr).trim()
        );
    }

    feeder
        .join()
        .map_err(|_| anyhow!("git cat-file stdin writer panicked"))?
        .context("failed to write object ids to git cat-file")?;

    Ok(String::from_utf8_lossy(&output.stdout).into_owned())
}
