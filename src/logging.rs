//! Tracing setup.
//!
//! The terminal is owned by the desktop while it runs, so log output goes to
//! an in-memory ring buffer (shown by the `log` app) and, optionally, to a
//! file.

use std::collections::VecDeque;
use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::Path;
use std::sync::{Arc, Mutex, OnceLock};

use tracing::Level;

const DEFAULT_MAX_LINES: usize = 2000;
static GLOBAL_LOG: OnceLock<LogBuffer> = OnceLock::new();

/// Shared, bounded buffer of formatted log lines.
#[derive(Debug, Clone)]
pub struct LogBuffer {
    inner: Arc<Mutex<VecDeque<String>>>,
    max_lines: usize,
}

impl LogBuffer {
    pub fn new(max_lines: usize) -> Self {
        Self {
            inner: Arc::new(Mutex::new(VecDeque::new())),
            max_lines: max_lines.max(1),
        }
    }

    pub fn push(&self, line: impl Into<String>) {
        if let Ok(mut lines) = self.inner.lock() {
            lines.push_back(line.into());
            while lines.len() > self.max_lines {
                lines.pop_front();
            }
        }
    }

    pub fn len(&self) -> usize {
        self.inner.lock().map(|lines| lines.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Copy of the last `count` lines, oldest first.
    pub fn tail(&self, count: usize) -> Vec<String> {
        let Ok(lines) = self.inner.lock() else {
            return Vec::new();
        };
        let skip = lines.len().saturating_sub(count);
        lines.iter().skip(skip).cloned().collect()
    }
}

/// The process-wide buffer, created on first use.
pub fn global_log() -> LogBuffer {
    GLOBAL_LOG
        .get_or_init(|| LogBuffer::new(DEFAULT_MAX_LINES))
        .clone()
}

/// Line-buffering writer handed to the subscriber for each event.
pub struct LogWriter {
    buffer: LogBuffer,
    file: Option<Arc<Mutex<File>>>,
    pending: Vec<u8>,
}

impl LogWriter {
    fn drain_lines(&mut self, force: bool) {
        let end = if force {
            self.pending.len()
        } else {
            match self.pending.iter().rposition(|b| *b == b'\n') {
                Some(pos) => pos + 1,
                None => return,
            }
        };
        let drained: Vec<u8> = self.pending.drain(..end).collect();
        let text = String::from_utf8_lossy(&drained);
        for line in text.split('\n').filter(|line| !line.is_empty()) {
            self.buffer.push(line);
        }
    }
}

impl Write for LogWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        if let Some(file) = &self.file
            && let Ok(mut file) = file.lock()
        {
            file.write_all(buf)?;
        }
        self.pending.extend_from_slice(buf);
        self.drain_lines(false);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        self.drain_lines(true);
        if let Some(file) = &self.file
            && let Ok(mut file) = file.lock()
        {
            file.flush()?;
        }
        Ok(())
    }
}

impl Drop for LogWriter {
    fn drop(&mut self) {
        self.drain_lines(true);
    }
}

#[derive(Clone, Debug)]
pub struct LogMakeWriter {
    buffer: LogBuffer,
    file: Option<Arc<Mutex<File>>>,
}

impl LogMakeWriter {
    pub fn new(buffer: LogBuffer, file: Option<File>) -> Self {
        Self {
            buffer,
            file: file.map(|f| Arc::new(Mutex::new(f))),
        }
    }
}

impl<'a> tracing_subscriber::fmt::MakeWriter<'a> for LogMakeWriter {
    type Writer = LogWriter;

    fn make_writer(&'a self) -> Self::Writer {
        LogWriter {
            buffer: self.buffer.clone(),
            file: self.file.clone(),
            pending: Vec::new(),
        }
    }
}

/// Install the global subscriber. Later calls are no-ops for the subscriber
/// but still fail if the log file cannot be opened.
pub fn init(level: Level, log_file: Option<&Path>) -> io::Result<()> {
    let file = match log_file {
        Some(path) => Some(OpenOptions::new().create(true).append(true).open(path)?),
        None => None,
    };
    let _ = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(LogMakeWriter::new(global_log(), file))
        .with_ansi(false)
        .with_target(false)
        .with_thread_names(false)
        .try_init();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn buffer_drops_oldest_past_capacity() {
        let buffer = LogBuffer::new(2);
        buffer.push("a");
        buffer.push("b");
        buffer.push("c");
        assert_eq!(buffer.tail(10), vec!["b".to_string(), "c".to_string()]);
        assert_eq!(buffer.tail(1), vec!["c".to_string()]);
    }

    #[test]
    fn writer_splits_lines_and_flushes_partial() {
        let buffer = LogBuffer::new(10);
        let make = LogMakeWriter::new(buffer.clone(), None);
        let mut writer = tracing_subscriber::fmt::MakeWriter::make_writer(&make);
        writer.write_all(b"one\ntwo\nthr").expect("write");
        assert_eq!(buffer.len(), 2);
        writer.flush().expect("flush");
        assert_eq!(buffer.tail(1), vec!["thr".to_string()]);
    }

    #[test]
    fn writer_mirrors_to_file() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("desk.log");
        let file = File::create(&path).expect("create");
        let make = LogMakeWriter::new(LogBuffer::new(4), Some(file));
        {
            let mut writer = tracing_subscriber::fmt::MakeWriter::make_writer(&make);
            writer.write_all(b"hello\n").expect("write");
            writer.flush().expect("flush");
        }
        let text = std::fs::read_to_string(&path).expect("read");
        assert_eq!(text, "hello\n");
    }
}
