mod support;

use std::fs;

use tempfile::tempdir;

use support::{describe, run_zonebench};
use zonebench::workload::{read_workload, workload_file_name, write_workloads};

#[test]
fn e2e_generate_library_round_trip() -> Result<(), String> {
    let dir = tempdir().map_err(|err| format!("tempdir failed: {}", err))?;
    let report = write_workloads(dir.path(), 3, 40, Some(11))
        .map_err(|err| format!("generate failed: {}", err))?;
    if !report.is_complete() || report.written.len() != 3 {
        return Err(format!("Unexpected report: {:?}", report));
    }

    for client in 1..=3 {
        let path = dir.path().join(workload_file_name(client));
        let lines = read_workload(&path).map_err(|err| format!("read failed: {}", err))?;
        if lines.len() != 40 {
            return Err(format!("client {} has {} lines", client, lines.len()));
        }
    }
    Ok(())
}

#[test]
fn e2e_generate_cli_writes_files() -> Result<(), String> {
    let dir = tempdir().map_err(|err| format!("tempdir failed: {}", err))?;
    let out_dir = dir.path().join("request_files");
    let out = out_dir.to_string_lossy().into_owned();

    let output = run_zonebench([
        "generate", "--clients", "2", "--lines", "25", "--output-dir", &out, "--seed", "5",
    ])?;
    if !output.status.success() {
        return Err(describe(&output));
    }

    for client in 1..=2 {
        let path = out_dir.join(workload_file_name(client));
        let lines = read_workload(&path).map_err(|err| format!("read failed: {}", err))?;
        if lines.len() != 25 {
            return Err(format!("client {} has {} lines", client, lines.len()));
        }
    }
    if out_dir.join(workload_file_name(3)).exists() {
        return Err("Unexpected third workload file".to_owned());
    }
    Ok(())
}

#[test]
fn e2e_generate_cli_seed_is_reproducible() -> Result<(), String> {
    let dir = tempdir().map_err(|err| format!("tempdir failed: {}", err))?;
    let first = dir.path().join("first");
    let second = dir.path().join("second");

    for target in [&first, &second] {
        let out = target.to_string_lossy().into_owned();
        let output = run_zonebench([
            "generate", "-k", "1", "-n", "50", "-o", &out, "--seed", "42",
        ])?;
        if !output.status.success() {
            return Err(describe(&output));
        }
    }

    let read = |path: &std::path::Path| {
        fs::read_to_string(path.join(workload_file_name(1)))
            .map_err(|err| format!("read failed: {}", err))
    };
    if read(&first)? != read(&second)? {
        return Err("Seeded runs differ".to_owned());
    }
    Ok(())
}

#[test]
fn e2e_generate_cli_rejects_zero_clients() -> Result<(), String> {
    let output = run_zonebench(["generate", "--clients", "0"])?;
    if output.status.success() {
        return Err("Expected failure for zero clients".to_owned());
    }
    Ok(())
}

#[test]
fn e2e_generate_cli_config_file() -> Result<(), String> {
    let dir = tempdir().map_err(|err| format!("tempdir failed: {}", err))?;
    let out_dir = dir.path().join("from_config");
    let config_path = dir.path().join("zonebench.toml");
    let config = format!(
        "[generate]\nclients = 2\nlines = 7\noutput_dir = {:?}\n",
        out_dir.to_string_lossy()
    );
    fs::write(&config_path, config).map_err(|err| format!("write config failed: {}", err))?;

    let config_arg = config_path.to_string_lossy().into_owned();
    let output = run_zonebench(["--config", &config_arg, "generate", "--lines", "3"])?;
    if !output.status.success() {
        return Err(describe(&output));
    }

    let lines = read_workload(&out_dir.join(workload_file_name(2)))
        .map_err(|err| format!("read failed: {}", err))?;
    if lines.len() != 3 {
        return Err(format!("Expected CLI line count to win, got {}", lines.len()));
    }
    Ok(())
}
