//! Console Logger
//!
//! `log` backend writing to the browser's developer console.

use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError};
use wasm_bindgen::JsValue;

static LOGGER: ConsoleLogger = ConsoleLogger;

/// Routes each record to the console method matching its level
pub struct ConsoleLogger;

impl Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let line = JsValue::from_str(&format_record(record));
        match record.level() {
            Level::Error => web_sys::console::error_1(&line),
            Level::Warn => web_sys::console::warn_1(&line),
            Level::Info => web_sys::console::info_1(&line),
            Level::Debug | Level::Trace => web_sys::console::debug_1(&line),
        }
    }

    fn flush(&self) {}
}

/// Install the console logger. Fails if a logger is already set.
pub fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
    log::set_logger(&LOGGER)?;
    log::set_max_level(level);
    Ok(())
}

fn format_record(record: &Record) -> String {
    match record.level() {
        Level::Debug | Level::Trace => {
            format!("{} {}: {}", record.level(), record.target(), record.args())
        }
        _ => format!("{} {}", record.level(), record.args()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_error_record() {
        let line = format_record(
            &Record::builder()
                .args(format_args!("[TODOS] Failed to delete 3"))
                .level(Level::Error)
                .target("todo_list_ui::controller")
                .build(),
        );
        assert_eq!(line, "ERROR [TODOS] Failed to delete 3");
    }

    #[test]
    fn test_format_debug_record_carries_target() {
        let line = format_record(
            &Record::builder()
                .args(format_args!("[API] done"))
                .level(Level::Debug)
                .target("todo_list_ui::api")
                .build(),
        );
        assert_eq!(line, "DEBUG todo_list_ui::api: [API] done");
    }
}
