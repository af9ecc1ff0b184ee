use std::sync::Mutex;

use anyhow::anyhow;
use once_cell::sync::Lazy;
use structopt::StructOpt;

mod snapshot;
mod targets;
mod utils;

use crate::{
    snapshot::{test_snapshot, Snapshot},
    utils::run_command,
};

static ALL_ERRORS: Lazy<Mutex<Vec<String>>> = Lazy::new(|| Mutex::new(vec![]));

#[derive(Debug, StructOpt)]
struct Options {
    #[structopt(subcommand)]
    cmd: TestCommand,
    /// Treat compiler warnings as errors (`RUSTFLAGS="--deny warnings"`)
    #[structopt(long, short)]
    deny_warnings: bool,
    /// Keep target toolchains that were installed as dependency
    #[structopt(long, short)]
    keep_targets: bool,
}

#[derive(Debug, StructOpt)]
#[allow(clippy::enum_variant_names)]
enum TestCommand {
    TestAll,
    TestCross,
    TestHost,
    TestLint,
    /// Run snapshot tests or optionally overwrite the expected output
    TestSnapshot {
        /// Overwrite the expected output instead of comparing it.
        #[structopt(long)]
        overwrite: bool,
        /// Runs a single snapshot test in Debug mode
        #[structopt()]
        single: Option<Snapshot>,
    },
}

fn main() -> anyhow::Result<()> {
    let opt: Options = Options::from_args();
    let mut added_targets = None;

    match opt.cmd {
        TestCommand::TestHost => test_host(opt.deny_warnings),
        TestCommand::TestLint => test_lint(),
        TestCommand::TestSnapshot { overwrite, single } => test_snapshot(overwrite, single),

        // following tests need to install additional targets
        cmd => {
            added_targets = Some(targets::install()?);
            match cmd {
                TestCommand::TestCross => test_cross(),
                TestCommand::TestAll => {
                    test_host(opt.deny_warnings);
                    test_cross();
                    test_snapshot(false, None);
                    test_lint();
                }
                _ => unreachable!("get handled in outer `match`"),
            }
        }
    }

    if let Some(added_targets) = added_targets {
        if !opt.keep_targets && !added_targets.is_empty() {
            targets::uninstall(added_targets)
        }
    }

    let all_errors = ALL_ERRORS.lock().unwrap();
    if !all_errors.is_empty() {
        eprintln!();
        Err(anyhow!("😔 some tests failed: {:#?}", all_errors))
    } else {
        Ok(())
    }
}

pub(crate) fn do_test(test: impl FnOnce() -> anyhow::Result<()>, context: &str) {
    test().unwrap_or_else(|e| ALL_ERRORS.lock().unwrap().push(format!("{}: {}", context, e)));
}

fn test_host(deny_warnings: bool) {
    println!("🧪 host");

    let env = if deny_warnings {
        vec![("RUSTFLAGS", "--deny warnings")]
    } else {
        vec![]
    };

    do_test(
        || run_command("cargo", &["check", "--workspace"], None, &env),
        "host",
    );

    for features in ["alloc", "defmt"] {
        do_test(
            || {
                run_command(
                    "cargo",
                    &["check", "-p", "unit-test", "--features", features],
                    None,
                    &env,
                )
            },
            "host",
        );
    }

    do_test(
        || run_command("cargo", &["test", "--workspace"], None, &[]),
        "host",
    );

    do_test(
        || {
            run_command(
                "cargo",
                &["test", "-p", "unit-test", "--features", "alloc"],
                None,
                &[],
            )
        },
        "host",
    );
}

fn test_cross() {
    println!("🧪 cross");

    for target in targets::CROSS_TARGETS {
        do_test(
            || run_command("cargo", &["check", "--target", target, "-p", "unit-test"], None, &[]),
            "cross",
        );
        do_test(
            || {
                run_command(
                    "cargo",
                    &[
                        "check",
                        "--target",
                        target,
                        "-p",
                        "unit-test",
                        "--features",
                        "alloc,defmt",
                    ],
                    None,
                    &[],
                )
            },
            "cross",
        );
    }
}

fn test_lint() {
    println!("🧪 lint");
    do_test(
        || run_command("cargo", &["fmt", "--all", "--", "--check"], None, &[]),
        "lint",
    );

    do_test(
        || run_command("cargo", &["clippy", "--workspace"], None, &[]),
        "lint",
    );
}
