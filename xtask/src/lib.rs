use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

pub mod tasks;

/// The root of the workspace, one level above the xtask crate.
pub fn project_root() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .ancestors()
        .nth(1)
        .unwrap_or_else(|| Path::new("."))
        .to_path_buf()
}

fn check_exists(program: &str, arg: &str) -> Result<(), anyhow::Error> {
    let status = Command::new(program)
        .arg(arg)
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()?;
    if status.success() {
        Ok(())
    } else {
        anyhow::bail!("{program} is not available")
    }
}

pub fn check_trunk_exists() -> Result<(), anyhow::Error> {
    check_exists("trunk", "--version")
}

pub fn check_nextest_exists() -> Result<(), anyhow::Error> {
    check_exists("cargo-nextest", "--version")
}
