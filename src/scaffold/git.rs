// ABOUTME: Git repository initialisation for new projects
// ABOUTME: Runs `git init` on the project folder before any template is written

use std::path::Path;
use std::process::Stdio;
use tokio::process::Command;
use tracing::debug;

use super::error::{Result, ScaffoldError};

/// Run `git init <folder>`, creating the folder if needed
pub async fn init_repository(folder: &Path) -> Result<()> {
    debug!("Running git init in {}", folder.display());

    let output = Command::new("git")
        .arg("init")
        .arg(folder)
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .output()
        .await
        .map_err(|e| ScaffoldError::Git(e.to_string()))?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(ScaffoldError::Git(stderr.trim().to_string()));
    }

    debug!("{}", String::from_utf8_lossy(&output.stdout).trim());
    Ok(())
}
