//! Console logger for the command-line tool.
//!
//! Library code only talks to the `log` facade; this is the sink the binary
//! installs. Output goes to stderr so JSON on stdout stays clean.

use std::sync::Once;

struct ConsoleLogger;

impl log::Log for ConsoleLogger {
    fn enabled(&self, metadata: &log::Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &log::Record) {
        if self.enabled(record.metadata()) {
            eprintln!("[{}] {}", record.level(), record.args());
        }
    }

    fn flush(&self) {}
}

static LOGGER: ConsoleLogger = ConsoleLogger;
static INIT: Once = Once::new();

/// Install the console logger. Only the first call sets the level.
pub fn init_logger(level: log::LevelFilter) {
    INIT.call_once(|| {
        let _ = log::set_logger(&LOGGER);
        log::set_max_level(level);
    });
}
