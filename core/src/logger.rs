use std::sync::OnceLock;

use chrono::Local;

static LOGGER: OnceLock<Logger> = OnceLock::new();

pub struct Logger {
    prefix: Option<String>,
}

impl Logger {
    fn new(prefix: Option<String>) -> Self {
        Self { prefix }
    }

    fn format(&self, message: &str) -> String {
        let timestamp = Local::now().format("%Y-%m-%d %H:%M:%S%.3f");
        match &self.prefix {
            Some(prefix) => format!("[{}][{}] {}", timestamp, prefix, message),
            None => format!("[{}] {}", timestamp, message),
        }
    }

    pub fn log(&self, message: &str) {
        println!("{}", self.format(message));
    }
}

pub fn init_logger(prefix: Option<String>) {
    LOGGER.get_or_init(|| Logger::new(prefix));
}

/// Falls back to bare stdout when the logger was never initialized, so
/// library-side log calls stay harmless in tests.
pub fn log(message: &str) {
    match LOGGER.get() {
        Some(logger) => logger.log(message),
        None => println!("{}", message),
    }
}

#[macro_export]
macro_rules! log {
    ($($arg:tt)*) => {
        $crate::logger::log(&format!($($arg)*))
    };
}
