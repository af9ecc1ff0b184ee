use std::{fs, path::Path, process::Command, str};

use anyhow::{anyhow, Context};
use colored::Colorize;

use crate::snapshot::SNAPSHOT_TESTS_PACKAGE;

pub fn load_expected_output(name: &str) -> anyhow::Result<String> {
    let file = expected_output_path(name);
    let path = Path::new(&file);

    fs::read_to_string(path).with_context(|| {
        format!(
            "Failed to load expected output data from {}",
            path.to_str().unwrap_or("(non-Unicode path)")
        )
    })
}

pub fn overwrite_expected_output(name: &str, contents: &[u8]) -> anyhow::Result<()> {
    let file = expected_output_path(name);
    let path = Path::new(&file);

    fs::write(path, contents).with_context(|| {
        format!(
            "Failed to overwrite expected output data to {}",
            path.to_str().unwrap_or("(non-Unicode path)")
        )
    })
}

fn expected_output_path(name: &str) -> String {
    format!("{}/src/bin/{}.out", SNAPSHOT_TESTS_PACKAGE, name)
}

/// Execute the [`Command`]. If success return `stdout`, if failure print to `stderr`
///
/// Exit code `1` means that the test program ran but some of its tests failed; its output is
/// returned like a successful one.
pub fn run_capturing_stdout(cmd: &mut Command) -> anyhow::Result<String> {
    let output = cmd.output()?;
    match output.status.code() {
        Some(0) | Some(1) => Ok(str::from_utf8(&output.stdout)?.to_string()),
        _ => {
            eprintln!("{}", str::from_utf8(&output.stderr)?.dimmed());
            Err(anyhow!("exited with {}", output.status))
        }
    }
}

pub fn run_command(
    program: &str,
    args: &[&str],
    cwd: Option<&str>,
    envs: &[(&str, &str)],
) -> anyhow::Result<()> {
    let mut cmd = Command::new(program);
    cmd.args(args).envs(envs.iter().copied());

    let cwd = if let Some(path) = cwd {
        cmd.current_dir(path);
        format!("{}$ ", path)
    } else {
        "".to_string()
    };

    let cmdline = format!("{}{} {}", cwd, program, args.join(" "));
    println!("🏃 {}", cmdline);

    cmd.status()
        .map_err(|e| anyhow!("could not run '{}': {}", cmdline, e))
        .and_then(|exit_status| match exit_status.success() {
            true => Ok(()),
            false => Err(anyhow!(
                "'{}' did not finish successfully: {}",
                cmdline,
                exit_status
            )),
        })
}
