//! Forwarding entry points that run an installed executable sitting next to
//! the shim binary.

use std::env;
use std::path::PathBuf;
use std::process::{Command, ExitCode};

use anyhow::{Context, Result};

/// Path of `name` next to the running executable
pub fn locate(name: &str) -> Result<PathBuf> {
    let exe = env::current_exe().context("Failed to determine the shim location")?;
    let dir = exe
        .parent()
        .with_context(|| format!("{} has no parent directory", exe.display()))?;
    Ok(dir.join(format!("{name}{}", env::consts::EXE_SUFFIX)))
}

/// Run `name` with this process's arguments and inherited stdio
pub fn run(name: &str) -> Result<ExitCode> {
    let target = locate(name)?;
    let status = Command::new(&target)
        .args(env::args_os().skip(1))
        .status()
        .with_context(|| format!("Failed to start {}", target.display()))?;

    Ok(ExitCode::from(exit_code(status.code())))
}

/// Child exit status as a process exit code. Signals and out-of-range codes become 1.
pub fn exit_code(code: Option<i32>) -> u8 {
    code.and_then(|c| u8::try_from(c).ok()).unwrap_or(1)
}

/// `main` body shared by the shim binaries
pub fn main(name: &str) -> ExitCode {
    match run(name) {
        Ok(code) => code,
        Err(e) => {
            tracing::error!("{:#}", e);
            ExitCode::FAILURE
        }
    }
}
