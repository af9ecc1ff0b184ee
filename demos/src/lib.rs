//! Host programs whose output `cargo xtask test-snapshot` compares against `src/bin/*.out`.

use core::fmt;
use std::process;

use unit_test::{handlers::PrintingEventHandler, EventHandler};

/// Prints failed expectations only.
pub static PRINTER: PrintingEventHandler = PrintingEventHandler::new(print_line, false);

/// Prints every expectation.
pub static VERBOSE_PRINTER: PrintingEventHandler = PrintingEventHandler::new(print_line, true);

fn print_line(line: fmt::Arguments<'_>) {
    println!("{}", line);
}

/// Runs the statically declared tests and exits with the result of the run.
pub fn run(handler: &'static dyn EventHandler) -> ! {
    unit_test::register_event_handler(Some(handler));
    process::exit(unit_test::run_all_tests())
}
