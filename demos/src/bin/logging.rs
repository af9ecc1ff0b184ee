use log::{Level, LevelFilter, Log, Metadata, Record};
use unit_test::{expect_gt, expect_near, handlers::LoggingEventHandler};

struct StdoutLogger;

impl Log for StdoutLogger {
    fn enabled(&self, metadata: &Metadata<'_>) -> bool {
        metadata.level() <= Level::Info
    }

    fn log(&self, record: &Record<'_>) {
        if self.enabled(record.metadata()) {
            println!("{:<5} {}", record.level(), record.args());
        }
    }

    fn flush(&self) {}
}

static LOGGER: StdoutLogger = StdoutLogger;
static HANDLER: LoggingEventHandler = LoggingEventHandler;

#[unit_test::test(Thermometer)]
fn reads_room_temperature() {
    let celsius = 21.5_f32;
    expect_near!(celsius, 21.0, 1.0);
    expect_gt!(celsius, 30.0);
}

fn main() {
    if log::set_logger(&LOGGER).is_ok() {
        log::set_max_level(LevelFilter::Info);
    }
    demos::run(&HANDLER)
}
