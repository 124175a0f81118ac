//! Run Logger
//!
//! Timestamped logging teed to stdout and an append-only log file.
//! Constructed once per binary and passed by reference to each component
//! instead of living in process-global state.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;
use std::sync::Mutex;

pub struct Logger {
    file: Option<Mutex<std::fs::File>>,
}

impl Logger {
    /// Open a logger that appends to `path` in addition to stdout.
    /// If the file cannot be opened, logging continues on stdout only.
    pub fn new(path: &Path) -> Self {
        let file = match OpenOptions::new().create(true).append(true).open(path) {
            Ok(f) => Some(Mutex::new(f)),
            Err(e) => {
                eprintln!("Could not open log file {:?}: {} (stdout only)", path, e);
                None
            }
        };
        Self { file }
    }

    /// A logger that writes to stdout only. Used by the demo binary and tests.
    pub fn stdout_only() -> Self {
        Self { file: None }
    }

    pub fn info(&self, msg: &str) {
        self.write("INFO", msg);
    }

    pub fn warn(&self, msg: &str) {
        self.write("WARNING", msg);
    }

    pub fn error(&self, msg: &str) {
        self.write("ERROR", msg);
    }

    fn write(&self, level: &str, msg: &str) {
        let line = format!(
            "{} - {} - {}",
            chrono::Local::now().format("%Y-%m-%d %H:%M:%S"),
            level,
            msg
        );
        println!("{}", line);

        if let Some(file) = &self.file {
            if let Ok(mut f) = file.lock() {
                // Log-file write failures are not worth failing a run over.
                let _ = writeln!(f, "{}", line);
            }
        }
    }
}
