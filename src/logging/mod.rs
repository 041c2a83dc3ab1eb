// Logging module - in-memory log capture for the TUI
//
// While the alternate screen is active, anything written to stdout/stderr would
// garble the display. `CaptureLayer` records tracing events into a bounded
// `LogRing` instead; the log panel reads the ring every frame.

use chrono::{DateTime, Local};
use std::collections::VecDeque;
use std::fmt::Write as _;
use std::sync::{Arc, Mutex};
use tracing::{Level, Subscriber};
use tracing_subscriber::layer::Context;
use tracing_subscriber::Layer;

/// Maximum number of log entries to keep in memory
const MAX_LOG_ENTRIES: usize = 1000;

/// A single log entry captured from tracing
#[derive(Debug, Clone)]
pub struct LogEntry {
    pub timestamp: DateTime<Local>,
    pub level: Level,
    /// Module path of the event
    pub target: String,
    /// Message followed by any structured fields as `key=value`
    pub message: String,
}

impl LogEntry {
    /// One-line rendering for the log panel
    pub fn display_line(&self) -> String {
        let module = self.target.rsplit("::").next().unwrap_or(self.target.as_str());
        format!(
            "{} {:<5} {}: {}",
            self.timestamp.format("%H:%M:%S"),
            self.level.as_str(),
            module,
            self.message
        )
    }
}

/// Bounded ring of log entries (oldest dropped first)
#[derive(Clone)]
pub struct LogRing {
    entries: Arc<Mutex<VecDeque<LogEntry>>>,
    capacity: usize,
}

impl LogRing {
    pub fn new() -> Self {
        Self::with_capacity(MAX_LOG_ENTRIES)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Arc::new(Mutex::new(VecDeque::with_capacity(capacity))),
            capacity: capacity.max(1),
        }
    }

    pub fn push(&self, entry: LogEntry) {
        // A poisoned lock only means another thread panicked mid-push; keep logging
        let mut entries = self.entries.lock().unwrap_or_else(|e| e.into_inner());
        if entries.len() >= self.capacity {
            entries.pop_front();
        }
        entries.push_back(entry);
    }

    /// The newest `count` entries, oldest of them first
    pub fn tail(&self, count: usize) -> Vec<LogEntry> {
        let entries = self.entries.lock().unwrap_or_else(|e| e.into_inner());
        let skip = entries.len().saturating_sub(count);
        entries.iter().skip(skip).cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.entries.lock().map(|e| e.len()).unwrap_or(0)
    }
}

impl Default for LogRing {
    fn default() -> Self {
        Self::new()
    }
}

/// Tracing layer that captures events into a [`LogRing`]
pub struct CaptureLayer {
    ring: LogRing,
}

impl CaptureLayer {
    pub fn new(ring: LogRing) -> Self {
        Self { ring }
    }
}

impl<S> Layer<S> for CaptureLayer
where
    S: Subscriber,
{
    fn on_event(&self, event: &tracing::Event<'_>, _ctx: Context<'_, S>) {
        let metadata = event.metadata();

        let mut visitor = FieldCollector::default();
        event.record(&mut visitor);

        self.ring.push(LogEntry {
            timestamp: Local::now(),
            level: *metadata.level(),
            target: metadata.target().to_string(),
            message: visitor.finish(),
        });
    }
}

/// Collects the `message` field plus any other fields of an event
#[derive(Default)]
struct FieldCollector {
    message: String,
    fields: String,
}

impl FieldCollector {
    fn finish(self) -> String {
        if self.fields.is_empty() {
            self.message
        } else if self.message.is_empty() {
            self.fields
        } else {
            format!("{} {}", self.message, self.fields)
        }
    }
}

impl tracing::field::Visit for FieldCollector {
    fn record_str(&mut self, field: &tracing::field::Field, value: &str) {
        if field.name() == "message" {
            self.message = value.to_string();
        } else {
            self.record_debug(field, &value);
        }
    }

    fn record_debug(&mut self, field: &tracing::field::Field, value: &dyn std::fmt::Debug) {
        if field.name() == "message" {
            // format_args! messages arrive here, already without quotes
            self.message = format!("{:?}", value);
            return;
        }
        if !self.fields.is_empty() {
            self.fields.push(' ');
        }
        let _ = write!(self.fields, "{}={:?}", field.name(), value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracing_subscriber::layer::SubscriberExt;

    fn entry(message: &str) -> LogEntry {
        LogEntry {
            timestamp: Local::now(),
            level: Level::INFO,
            target: "askme".to_string(),
            message: message.to_string(),
        }
    }

    #[test]
    fn ring_drops_oldest_when_full() {
        let ring = LogRing::with_capacity(3);
        for i in 0..5 {
            ring.push(entry(&format!("line {}", i)));
        }

        assert_eq!(ring.len(), 3);
        let messages: Vec<_> = ring.tail(10).into_iter().map(|e| e.message).collect();
        assert_eq!(messages, vec!["line 2", "line 3", "line 4"]);
    }

    #[test]
    fn tail_returns_newest() {
        let ring = LogRing::new();
        for i in 0..4 {
            ring.push(entry(&format!("line {}", i)));
        }
        let messages: Vec<_> = ring.tail(2).into_iter().map(|e| e.message).collect();
        assert_eq!(messages, vec!["line 2", "line 3"]);
    }

    #[test]
    fn layer_captures_message_and_fields() {
        let ring = LogRing::new();
        let subscriber = tracing_subscriber::registry().with(CaptureLayer::new(ring.clone()));

        tracing::subscriber::with_default(subscriber, || {
            tracing::warn!(status = 500, "Fetch failed: {}", "boom");
            tracing::info!("plain");
        });

        let entries = ring.tail(10);
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].level, Level::WARN);
        assert_eq!(entries[0].message, "Fetch failed: boom status=500");
        assert_eq!(entries[1].message, "plain");
        assert!(entries[1].display_line().contains("INFO"));
    }
}
