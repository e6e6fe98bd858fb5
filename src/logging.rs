//! Browser Console Logger
//!
//! `log` facade backend that writes to the devtools console.

use log::{Level, LevelFilter, Log, Metadata, Record};

struct ConsoleLogger;

static LOGGER: ConsoleLogger = ConsoleLogger;

impl Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let line = format_line(record.target(), &record.args().to_string());
        let msg = wasm_bindgen::JsValue::from(line);
        match record.level() {
            Level::Error => web_sys::console::error_1(&msg),
            Level::Warn => web_sys::console::warn_1(&msg),
            Level::Info => web_sys::console::info_1(&msg),
            Level::Debug => web_sys::console::debug_1(&msg),
            Level::Trace => web_sys::console::log_1(&msg),
        }
    }

    fn flush(&self) {}
}

/// `[TARGET] message`, with the crate prefix dropped from the target
fn format_line(target: &str, message: &str) -> String {
    let short = target.rsplit("::").next().unwrap_or(target);
    format!("[{}] {}", short.to_uppercase(), message)
}

/// Install the console logger. Later calls only adjust the level.
pub fn init(level: LevelFilter) {
    let _ = log::set_logger(&LOGGER);
    log::set_max_level(level);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_line_uses_last_path_segment() {
        assert_eq!(
            format_line("arms_liu_dashboard::components::dashboard", "loaded 3"),
            "[DASHBOARD] loaded 3"
        );
        assert_eq!(format_line("api", "ok"), "[API] ok");
    }
}
