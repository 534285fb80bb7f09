use crate::services::command::GrantCommand;
use std::path::Path;
use std::process::Stdio;

/// Runs the grant command in `cwd` and waits for it. The tool's output is
/// passed through unchanged; with `to_stderr` it goes to our stderr so stdout
/// stays free for `--json`.
///
/// The exit code is returned for reporting only.
pub fn run_grant(
    cmd: &GrantCommand,
    cwd: &Path,
    env: &[(&'static str, String)],
    to_stderr: bool,
) -> anyhow::Result<Option<i32>> {
    tracing::info!(command = %cmd.redacted(), cwd = %cwd.display(), "running grant");

    let stdout = if to_stderr {
        Stdio::from(std::io::stderr())
    } else {
        Stdio::inherit()
    };
    let status = std::process::Command::new(&cmd.program)
        .args(&cmd.args)
        .current_dir(cwd)
        .envs(env.iter().map(|(k, v)| (*k, v.as_str())))
        .stdout(stdout)
        .status()
        .map_err(|e| anyhow::anyhow!("failed to start {}: {}", cmd.program, e))?;

    if status.success() {
        tracing::info!(code = ?status.code(), "grant command finished");
    } else {
        tracing::warn!(code = ?status.code(), "grant command exited unsuccessfully");
    }
    Ok(status.code())
}
