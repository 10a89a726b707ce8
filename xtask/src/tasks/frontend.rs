use std::process::{Command, ExitStatus};

use crate::{check_trunk_exists, project_root};

pub fn frontend() -> Result<(), anyhow::Error> {
    tracing::info!("Building frontend...");
    let status = build_frontend()?;
    if !status.success() {
        anyhow::bail!("trunk build failed with {status}");
    }
    Ok(())
}

pub fn build_frontend() -> Result<ExitStatus, anyhow::Error> {
    if check_trunk_exists().is_err() {
        anyhow::bail!("Unable to run trunk build. trunk is not available.");
    }
    let build = Command::new("trunk")
        .current_dir(
            project_root()
                .join("services")
                .join("registration-frontend")
                .join("crate"),
        )
        .args(["build", "--release"])
        .status()?;
    Ok(build)
}
