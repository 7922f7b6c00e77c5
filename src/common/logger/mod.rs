use std::sync::OnceLock;

use tracing_subscriber::{EnvFilter, fmt, prelude::*};

pub mod formatter;
pub mod writer;

pub use formatter::*;
pub use writer::*;

use crate::configs::LoggingConfig;

pub(crate) static GLOBAL_LOG_FILE: OnceLock<RollingLogFile> = OnceLock::new();

/// Prints to stdout and mirrors the line into the log file, if one is open.
/// Used before the subscriber exists (config loading, banner).
#[macro_export]
macro_rules! log_println {
    () => {{
        std::println!();
        $crate::common::logger::append_to_file_raw("\n");
    }};
    ($($arg:tt)*) => {{
        let msg = format!($($arg)*);
        std::println!("{}", msg);
        $crate::common::logger::append_to_file_raw(&format!("{}\n", msg));
    }};
}

pub fn append_to_file_raw(msg: &str) {
    if let Some(mut file) = GLOBAL_LOG_FILE.get().cloned() {
        use std::io::Write;
        let _ = file.write_all(strip_ansi_escapes(msg).as_bytes());
    }
}

/// Builds the filter directive from config: `<level>[,<filters>]`.
/// Noisy transport crates are capped at `warn` unless the filters say otherwise.
pub fn filter_directive(config: Option<&LoggingConfig>) -> String {
    let level = config
        .and_then(|l| l.level.as_deref())
        .unwrap_or("info");
    let filters = config
        .and_then(|l| l.filters.as_deref())
        .unwrap_or("");

    let mut directive = format!("{level},hyper=warn,reqwest=warn");
    if !filters.is_empty() {
        directive.push(',');
        directive.push_str(filters);
    }
    directive
}

pub fn init(config: Option<&LoggingConfig>) {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(filter_directive(config)));

    let stdout_layer = fmt::layer()
        .event_format(LineFormatter::new(true))
        .with_ansi(true);

    let file_layer = config.and_then(|l| l.file.as_ref()).map(|file_config| {
        let file = RollingLogFile::new(&file_config.path, file_config.max_lines);
        let _ = GLOBAL_LOG_FILE.set(file.clone());
        fmt::layer()
            .with_writer(file)
            .event_format(LineFormatter::new(false))
            .with_ansi(false)
    });

    tracing_subscriber::registry()
        .with(env_filter)
        .with(stdout_layer)
        .with(file_layer)
        .init();
}
