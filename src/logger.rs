// In-app logger: keeps a bounded buffer of records for the logs window,
// optionally mirrors to stderr, and appends warn+ lines to log.txt.
// Also installs a panic hook so crashes land in the file too.

use lazy_static::lazy_static;
use log::{Level, LevelFilter, Log, Metadata, Record};
use std::backtrace::Backtrace;
use std::collections::VecDeque;
use std::fs::OpenOptions;
use std::io::Write;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;
use std::time::{SystemTime, UNIX_EPOCH};

const MAX_LOG_LINES: usize = 2000;

#[derive(Clone)]
pub struct LogEntry {
    pub level: Level,
    pub target: String,
    pub msg: String,
}

impl LogEntry {
    /// The line shown in the logs window and copied to the clipboard.
    pub fn text(&self) -> String {
        format!("[{:>5}] {}: {}", self.level, self.target, self.msg)
    }
}

/// Ring of recent records. Oldest entries fall off once the cap is hit.
struct LogBuffer {
    entries: VecDeque<LogEntry>,
}

impl LogBuffer {
    fn push(&mut self, entry: LogEntry) {
        self.entries.push_back(entry);
        while self.entries.len() > MAX_LOG_LINES {
            self.entries.pop_front();
        }
    }
}

lazy_static! {
    static ref LOGS: Mutex<LogBuffer> = Mutex::new(LogBuffer {
        entries: VecDeque::with_capacity(256),
    });
    static ref LOG_FILE: Mutex<Option<std::fs::File>> = Mutex::new(None);
    static ref MIRROR_STDERR: bool = {
        let v = std::env::var("GUI_LOG_STDERR").unwrap_or_default();
        matches!(v.to_ascii_lowercase().as_str(), "1" | "true" | "yes" | "on")
    };
}

static NEW_LOGS: AtomicBool = AtomicBool::new(false);

struct GuiLogger;

impl Log for GuiLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        log::max_level()
            .to_level()
            .is_some_and(|max| metadata.level() <= max)
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }

        let entry = LogEntry {
            level: record.level(),
            target: record.target().to_string(),
            msg: record.args().to_string(),
        };

        if *MIRROR_STDERR {
            eprintln!("[{}] {}", timestamp_millis(), entry.text());
        }

        // Only warn and above reach the file.
        if entry.level <= Level::Warn {
            file_line(&format!("[{}] {}", timestamp_millis(), entry.text()));
        }

        push_entry(entry);
    }

    fn flush(&self) {
        if let Ok(mut lf) = LOG_FILE.lock() {
            if let Some(f) = lf.as_mut() {
                let _ = f.flush();
            }
        }
    }
}

fn push_entry(entry: LogEntry) {
    if let Ok(mut buf) = LOGS.lock() {
        buf.push(entry);
    }
    NEW_LOGS.store(true, Ordering::Relaxed);
}

fn level_from_env() -> Option<LevelFilter> {
    let val = std::env::var("RUST_LOG").ok()?;
    match val.trim().to_lowercase().as_str() {
        "trace" => Some(LevelFilter::Trace),
        "debug" => Some(LevelFilter::Debug),
        "info" => Some(LevelFilter::Info),
        "warn" => Some(LevelFilter::Warn),
        "error" => Some(LevelFilter::Error),
        "off" => Some(LevelFilter::Off),
        _ => None,
    }
}

// Install the logger, open log.txt and set the panic hook.
pub fn init() {
    let _ = log::set_boxed_logger(Box::new(GuiLogger));

    // Debug by default; RUST_LOG overrides.
    let level = level_from_env().unwrap_or(LevelFilter::Debug);
    log::set_max_level(level);

    if let Ok(mut lf) = LOG_FILE.lock() {
        *lf = OpenOptions::new()
            .create(true)
            .append(true)
            .open("log.txt")
            .ok();
    }

    install_panic_hook();

    log::info!(
        "logger initialized at level {} (warn+ persisted to log.txt)",
        level.as_str().to_lowercase()
    );
}

/// Visit entries [start, end) without copying the buffer. Used by the
/// logs window together with ScrollArea::show_rows.
pub fn visit_range<F: FnMut(&LogEntry)>(start: usize, end: usize, mut f: F) {
    let Ok(buf) = LOGS.lock() else { return };
    for entry in buf.entries.iter().skip(start).take(end.saturating_sub(start)) {
        f(entry);
    }
}

/// All entries as one preformatted block, for the copy-to-clipboard button.
pub fn all_text() -> String {
    let Ok(buf) = LOGS.lock() else {
        return String::new();
    };
    buf.entries
        .iter()
        .map(|e| e.text() + "\n")
        .collect()
}

pub fn len() -> usize {
    LOGS.lock().map(|buf| buf.entries.len()).unwrap_or(0)
}

pub fn clear() {
    if let Ok(mut buf) = LOGS.lock() {
        buf.entries.clear();
    }
    NEW_LOGS.store(true, Ordering::Relaxed);
}

/// Returns true if new logs arrived since the last call.
pub fn take_new_flag() -> bool {
    NEW_LOGS.swap(false, Ordering::Relaxed)
}

fn timestamp_millis() -> String {
    let now = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default();
    format!("{}.{:03}", now.as_secs(), now.subsec_millis())
}

fn file_line(line: &str) {
    if let Ok(mut lf) = LOG_FILE.lock() {
        if let Some(f) = lf.as_mut() {
            let _ = writeln!(f, "{}", line);
            let _ = f.flush();
        }
    }
}

fn install_panic_hook() {
    std::panic::set_hook(Box::new(|panic_info| {
        let msg = if let Some(s) = panic_info.payload().downcast_ref::<&str>() {
            *s
        } else if let Some(s) = panic_info.payload().downcast_ref::<String>() {
            s.as_str()
        } else {
            "Box<Any>"
        };
        let loc = panic_info
            .location()
            .map(|l| format!("{}:{}:{}", l.file(), l.line(), l.column()))
            .unwrap_or_else(|| "unknown".to_string());

        let header = format!("[{}] [ERROR] panic at {loc}: {msg}", timestamp_millis());
        file_line(&header);
        for line in format!("{}", Backtrace::force_capture()).lines() {
            file_line(line);
        }
        if *MIRROR_STDERR {
            eprintln!("{header}");
        }

        // Straight into the buffer: going through log::error would write
        // the file a second time.
        push_entry(LogEntry {
            level: Level::Error,
            target: "panic".to_string(),
            msg: format!("panic at {loc}: {msg}"),
        });
    }));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn buffer_drops_oldest_past_the_cap() {
        let mut buf = LogBuffer {
            entries: VecDeque::new(),
        };
        for i in 0..MAX_LOG_LINES + 5 {
            buf.push(LogEntry {
                level: Level::Info,
                target: "test".to_string(),
                msg: i.to_string(),
            });
        }
        assert_eq!(buf.entries.len(), MAX_LOG_LINES);
        assert_eq!(buf.entries.front().map(|e| e.msg.as_str()), Some("5"));
    }

    #[test]
    fn entry_line_includes_level_and_target() {
        let e = LogEntry {
            level: Level::Warn,
            target: "deck".to_string(),
            msg: "dropped outside".to_string(),
        };
        assert_eq!(e.text(), "[ WARN] deck: dropped outside");
    }
}
