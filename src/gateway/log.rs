//! Log sinks.

use std::cell::RefCell;

use crate::gateway::LogSink;

/// Forwards gateway log lines to `tracing`, tagged with the emitting component.
#[derive(Debug, Clone, Copy)]
pub struct TracingLogSink {
    component: &'static str,
    prefix: &'static str,
}

impl TracingLogSink {
    /// Sink for the request-side processor.
    pub fn inbound() -> Self {
        Self {
            component: "inbound",
            prefix: "[Trace Context]",
        }
    }

    /// Sink for the response-side processor.
    pub fn outbound() -> Self {
        Self {
            component: "outbound",
            prefix: "[Trace Context Response]",
        }
    }
}

impl LogSink for TracingLogSink {
    fn info(&self, msg: &str) {
        tracing::info!(component = self.component, "{} {}", self.prefix, msg);
    }

    fn warn(&self, msg: &str) {
        tracing::warn!(component = self.component, "{} {}", self.prefix, msg);
    }

    fn debug(&self, msg: &str) {
        tracing::debug!(component = self.component, "{} {}", self.prefix, msg);
    }

    fn error(&self, msg: &str) {
        tracing::error!(component = self.component, "{} {}", self.prefix, msg);
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    Debug,
    Info,
    Warn,
    Error,
}

/// Records log lines in memory for assertions.
#[derive(Debug, Default)]
pub struct MemoryLogSink {
    lines: RefCell<Vec<(LogLevel, String)>>,
}

impl MemoryLogSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// All recorded lines in emission order.
    pub fn lines(&self) -> Vec<(LogLevel, String)> {
        self.lines.borrow().clone()
    }

    /// Messages recorded at the given level.
    pub fn at(&self, level: LogLevel) -> Vec<String> {
        self.lines
            .borrow()
            .iter()
            .filter(|(l, _)| *l == level)
            .map(|(_, msg)| msg.clone())
            .collect()
    }

    fn push(&self, level: LogLevel, msg: &str) {
        self.lines.borrow_mut().push((level, msg.to_string()));
    }
}

impl LogSink for MemoryLogSink {
    fn info(&self, msg: &str) {
        self.push(LogLevel::Info, msg);
    }

    fn warn(&self, msg: &str) {
        self.push(LogLevel::Warn, msg);
    }

    fn debug(&self, msg: &str) {
        self.push(LogLevel::Debug, msg);
    }

    fn error(&self, msg: &str) {
        self.push(LogLevel::Error, msg);
    }
}
