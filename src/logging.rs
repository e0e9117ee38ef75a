use std::{
    fs::{self, File, OpenOptions},
    io::{self, Write},
    path::PathBuf,
    time::{SystemTime, UNIX_EPOCH},
};

use serde::Serialize;

/// When set, every log line is also appended to this file as JSON.
pub const LOG_JSON_ENV: &str = "INR_LOG_JSON_PATH";

#[derive(Serialize)]
struct LogEvent<'a> {
    ts_ms: u64,
    level: &'a str,
    tool: &'a str,
    msg: &'a str,
}

/// Console logger with an optional JSON-lines sink.
///
/// `info` goes to stdout, `warn`/`error` to stderr.
pub struct Logger {
    tool: &'static str,
    json_file: Option<File>,
}

impl Logger {
    pub fn from_env(tool: &'static str) -> io::Result<Self> {
        let path = std::env::var_os(LOG_JSON_ENV).filter(|raw| !raw.is_empty());
        Self::new(tool, path.map(PathBuf::from))
    }

    pub fn new(tool: &'static str, path: Option<PathBuf>) -> io::Result<Self> {
        let json_file = match path {
            Some(path) => {
                if let Some(parent) = path.parent() {
                    fs::create_dir_all(parent)?;
                }
                Some(OpenOptions::new().create(true).append(true).open(path)?)
            }
            None => None,
        };
        Ok(Self { tool, json_file })
    }

    /// Console-only logger.
    pub fn console(tool: &'static str) -> Self {
        Self {
            tool,
            json_file: None,
        }
    }

    pub fn info(&mut self, message: impl AsRef<str>) {
        println!("{}", message.as_ref());
        self.event("info", message.as_ref());
    }

    pub fn warn(&mut self, message: impl AsRef<str>) {
        eprintln!("{}", message.as_ref());
        self.event("warn", message.as_ref());
    }

    pub fn error(&mut self, message: impl AsRef<str>) {
        eprintln!("{}", message.as_ref());
        self.event("error", message.as_ref());
    }

    fn event(&mut self, level: &str, message: &str) {
        let Some(file) = &mut self.json_file else {
            return;
        };

        let ts_ms = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis() as u64)
            .unwrap_or(0);

        let entry = LogEvent {
            ts_ms,
            level,
            tool: self.tool,
            msg: message,
        };

        // logging never fails the conversion
        if serde_json::to_writer(&mut *file, &entry).is_ok() {
            let _ = file.write_all(b"\n");
        }
        let _ = file.flush();
    }
}

#[cfg(test)]
mod tests {
    use serde_json::Value;

    use super::*;

    #[test]
    fn json_sink_appends_one_line_per_event() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("logs/run.jsonl");

        let mut logger = Logger::new("txt2png", Some(path.clone())).expect("open log");
        logger.info("wrote res.png");
        logger.warn("could not delete res.txt");
        drop(logger);

        let raw = fs::read_to_string(&path).expect("read log");
        let lines: Vec<Value> = raw
            .lines()
            .map(|line| serde_json::from_str(line).expect("json line"))
            .collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0]["level"], "info");
        assert_eq!(lines[0]["tool"], "txt2png");
        assert_eq!(lines[0]["msg"], "wrote res.png");
        assert_eq!(lines[1]["level"], "warn");
        assert!(lines[1]["ts_ms"].as_u64().is_some());
    }

    #[test]
    fn console_logger_has_no_sink() {
        let mut logger = Logger::console("img2hpp");
        logger.error("nothing to see");
        assert!(logger.json_file.is_none());
    }
}
