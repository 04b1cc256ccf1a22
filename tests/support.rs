use std::ffi::OsStr;
use std::process::{Command, Output};

/// Run the `zonebench` binary and capture output.
///
/// # Errors
///
/// Returns an error if the binary cannot be executed.
pub fn run_zonebench<I, S>(args: I) -> Result<Output, String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<OsStr>,
{
    let bin = zonebench_bin()?;
    Command::new(bin)
        .args(args)
        .env("RUST_LOG", "error")
        .env_remove("ZONEBENCH_LOG")
        .output()
        .map_err(|err| format!("run zonebench failed: {}", err))
}

fn zonebench_bin() -> Result<String, String> {
    option_env!("CARGO_BIN_EXE_zonebench").map_or_else(
        || Err("CARGO_BIN_EXE_zonebench missing at compile time.".to_owned()),
        |path| Ok(path.to_owned()),
    )
}

/// Formats captured output for a failure message.
#[must_use]
pub fn describe(output: &Output) -> String {
    format!(
        "status: {}\nstdout: {}\nstderr: {}",
        output.status,
        String::from_utf8_lossy(&output.stdout),
        String::from_utf8_lossy(&output.stderr)
    )
}
