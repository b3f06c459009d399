//! Log sink for firmware without a logger of its own.
//!
//! The pool logs through the `log` facade. [`init`] installs a logger that
//! formats every enabled record and hands it to a firmware-supplied writer,
//! typically a UART or RTT channel.

use core::fmt;

use log_crate::{Level, LevelFilter, Log, Metadata, Record};

use crate::consts::{NAME, VERSION};
use crate::util::sync::OnceCell;

/// Receives one formatted, newline-terminated record at a time.
pub type Sink = fn(fmt::Arguments);

/// Per-module log level overrides.
const LOG_LEVELS: [(&str, LevelFilter); 0] = [];

/// The global logger.
struct Logger {
    /// The current global level filter.
    level: LevelFilter,
    sink: Sink,
}

static LOGGER: OnceCell<Logger> = OnceCell::new();

impl Log for Logger {
    #[inline]
    fn enabled(&self, metadata: &Metadata) -> bool {
        let level = metadata.level();
        if level <= self.level {
            true
        } else {
            for (target, filter) in LOG_LEVELS.iter() {
                if metadata.target().starts_with(target) {
                    return level <= *filter;
                }
            }

            false
        }
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }

        let prefix = match record.level() {
            Level::Error => 'e',
            Level::Warn => 'w',
            Level::Info => 'i',
            Level::Debug => 'd',
            Level::Trace => 't',
        };

        (self.sink)(format_args!(
            "{} ({}) --> {}\n",
            prefix,
            short_target(record.target()),
            record.args()
        ));
    }

    fn flush(&self) {
        // no-op
    }
}

/// Strip the crate name off a module path.
fn short_target(target: &str) -> &str {
    target
        .strip_prefix(concat!(env!("CARGO_CRATE_NAME"), "::"))
        .unwrap_or(target)
}

/// Install the logger. Returns `false` if a logger was already installed,
/// by this function or anyone else.
pub fn init(sink: Sink, level: LevelFilter) -> bool {
    if LOGGER.try_init(Logger { level, sink }).is_err() {
        return false;
    }

    let installed = log_crate::set_logger(&*LOGGER).is_ok();
    if installed {
        log_crate::set_max_level(level);
        log_crate::info!("This is {} v{}", NAME, VERSION);
    }
    installed
}
