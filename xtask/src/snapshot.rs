use std::{process::Command, str::FromStr};

use anyhow::{anyhow, Context};
use colored::Colorize;
use similar::{ChangeTag, TextDiff};

use crate::{
    do_test,
    utils::{load_expected_output, overwrite_expected_output, run_capturing_stdout},
};

/// Workspace member whose binaries are the snapshot tests.
pub const SNAPSHOT_TESTS_PACKAGE: &str = "demos";

const ALL_SNAPSHOT_TESTS: [&str; 4] = ["attribute", "fixture", "logging", "manual"];

#[derive(Debug)]
pub struct Snapshot(String);

impl Snapshot {
    pub fn name(&self) -> &str {
        &self.0
    }
}

impl FromStr for Snapshot {
    type Err = String;

    fn from_str(test: &str) -> Result<Self, Self::Err> {
        if ALL_SNAPSHOT_TESTS.contains(&test) {
            Ok(Self(String::from(test)))
        } else {
            Err(format!(
                "Specified test '{}' does not exist, available tests are: {:?}",
                test, ALL_SNAPSHOT_TESTS
            ))
        }
    }
}

pub fn test_snapshot(overwrite: bool, snapshot: Option<Snapshot>) {
    println!("🧪 host/snapshot");

    match snapshot {
        None => {
            for test in ALL_SNAPSHOT_TESTS {
                do_test(
                    || test_single_snapshot(test, false, overwrite),
                    "host/snapshot",
                );
                // the release run shares the expected output of the dev run
                if !overwrite {
                    do_test(|| test_single_snapshot(test, true, false), "host/snapshot");
                }
            }
        }
        Some(snapshot) => {
            do_test(
                || test_single_snapshot(snapshot.name(), false, overwrite),
                "host/snapshot",
            );
        }
    }
}

fn test_single_snapshot(name: &str, release_mode: bool, overwrite: bool) -> anyhow::Result<()> {
    let display_name = format!("{} ({})", name, if release_mode { "release" } else { "dev" });
    println!("{}", display_name.bold());

    let mut args = vec!["run", "-q", "-p", SNAPSHOT_TESTS_PACKAGE, "--bin", name];
    if release_mode {
        args.push("--release");
    }

    let actual = run_capturing_stdout(Command::new("cargo").args(&args))
        .with_context(|| display_name.clone())?;

    if overwrite {
        overwrite_expected_output(name, actual.as_bytes())?;
        return Ok(());
    }

    let expected = load_expected_output(name)?;
    let diff = TextDiff::from_lines(&expected, &actual);

    // if anything isn't ChangeTag::Equal, print it and turn on error flag
    let mut actual_matches_expected = true;
    for op in diff.ops() {
        for change in diff.iter_changes(op) {
            let styled_change = match change.tag() {
                ChangeTag::Delete => Some(("-".bold().red(), change.to_string().red())),
                ChangeTag::Insert => Some(("+".bold().green(), change.to_string().green())),
                ChangeTag::Equal => None,
            };
            if let Some((sign, change)) = styled_change {
                actual_matches_expected = false;
                eprint!("{}{}", sign, change);
            }
        }
    }

    if actual_matches_expected {
        Ok(())
    } else {
        Err(anyhow!("{}", display_name))
    }
}
