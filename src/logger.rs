use lazy_static::lazy_static;
use std::sync::Mutex;
use std::{fs::File, io::prelude::*};

pub const SPLITTER_WIDTH: usize = 60;

lazy_static! {
    pub static ref LOGGER: Mutex<Logger> = Mutex::new(Logger::new());
}

/// Enable or disable writing to the log file.
///
/// # Arguments
///
/// * `enabled` - Should messages be written to the log file?
/// * `path` - The path to the log file. The file is truncated when opened.
#[cfg_attr(not(feature = "logging"), allow(unused_variables))]
pub fn set_enabled(enabled: bool, path: &str) {
    if let Ok(mut logger) = LOGGER.lock() {
        logger.enabled = enabled;

        #[cfg(feature = "logging")]
        {
            if enabled && logger.file.is_none() {
                logger.open(path);
            }
        }
    }
}

pub fn log<S: AsRef<str>>(message: S, console: bool) {
    if let Ok(mut logger) = LOGGER.lock() {
        logger.log(message.as_ref(), console);
    }
}

pub fn log_inline<S: AsRef<str>>(message: S, console: bool) {
    if let Ok(mut logger) = LOGGER.lock() {
        logger.log_inline(message.as_ref(), console);
    }
}

pub fn section(title: &str, console: bool) {
    log(format!("{:-^1$}", title, SPLITTER_WIDTH), console);
}

/// Log a line of `=` characters, used to separate the summary of a run.
pub fn rule(console: bool) {
    log("=".repeat(SPLITTER_WIDTH), console);
}

pub struct Logger {
    pub enabled: bool,
    file: Option<File>,
}

impl Logger {
    pub fn new() -> Logger {
        Self {
            enabled: false,
            file: None,
        }
    }

    fn open(&mut self, path: &str) {
        self.file = match File::create(path) {
            Err(e) => {
                eprintln!("failed to open log file {}: {}", path, e);
                None
            }
            Ok(f) => Some(f),
        };
    }

    pub fn log(&mut self, message: &str, console: bool) {
        self.log_inline(&format!("{}\n", message), console);
    }

    pub fn log_inline(&mut self, message: &str, console: bool) {
        if console {
            print!("{}", message);
        }

        #[cfg(feature = "logging")]
        {
            if !self.enabled {
                return;
            }

            if let Some(file) = &mut self.file {
                _ = write!(file, "{}", message);
            }
        }
    }
}
