use std::collections::VecDeque;
use std::fmt;
use std::sync::{Arc, Mutex};

use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::layer::{Context, Layer};

/// Entries kept by the in-app console unless configured otherwise
pub const DEFAULT_MAX_ENTRIES: usize = 500;

#[derive(Clone, Debug)]
pub struct DiagnosticEntry {
    pub timestamp: String,
    pub level: Level,
    pub target: String,
    pub message: String,
}

impl fmt::Display for DiagnosticEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} [{}] {} {}",
            self.timestamp, self.level, self.target, self.message
        )
    }
}

/// Bounded, shared log of recent events; clones see the same entries
#[derive(Clone)]
pub struct DiagnosticsLog {
    entries: Arc<Mutex<VecDeque<DiagnosticEntry>>>,
    max_entries: usize,
}

impl Default for DiagnosticsLog {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_ENTRIES)
    }
}

impl DiagnosticsLog {
    pub fn new(max_entries: usize) -> Self {
        Self {
            entries: Arc::new(Mutex::new(VecDeque::with_capacity(max_entries.min(1024)))),
            max_entries,
        }
    }

    pub fn push(&self, entry: DiagnosticEntry) {
        if let Ok(mut entries) = self.entries.lock() {
            entries.push_back(entry);
            while entries.len() > self.max_entries {
                entries.pop_front();
            }
        }
    }

    pub fn get_entries(&self) -> Vec<DiagnosticEntry> {
        self.entries
            .lock()
            .map(|e| e.iter().cloned().collect())
            .unwrap_or_default()
    }

    /// Entries at `level` or more severe
    pub fn get_entries_at_least(&self, level: Level) -> Vec<DiagnosticEntry> {
        self.entries
            .lock()
            .map(|e| e.iter().filter(|entry| entry.level <= level).cloned().collect())
            .unwrap_or_default()
    }

    pub fn count_level(&self, level: Level) -> usize {
        self.entries
            .lock()
            .map(|e| e.iter().filter(|entry| entry.level == level).count())
            .unwrap_or_default()
    }

    pub fn clear(&self) {
        if let Ok(mut entries) = self.entries.lock() {
            entries.clear();
        }
    }

    pub fn count(&self) -> usize {
        self.entries.lock().map(|e| e.len()).unwrap_or_default()
    }

    /// A `tracing` layer that records every event into this log
    pub fn layer(&self) -> DiagnosticsLayer {
        DiagnosticsLayer { log: self.clone() }
    }
}

/// Feeds `tracing` events into a `DiagnosticsLog`
pub struct DiagnosticsLayer {
    log: DiagnosticsLog,
}

impl<S: Subscriber> Layer<S> for DiagnosticsLayer {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let mut visitor = MessageVisitor::default();
        event.record(&mut visitor);

        let metadata = event.metadata();
        self.log.push(DiagnosticEntry {
            timestamp: chrono::Local::now().format("%H:%M:%S%.3f").to_string(),
            level: *metadata.level(),
            target: metadata.target().to_string(),
            message: visitor.finish(),
        });
    }
}

#[derive(Default)]
struct MessageVisitor {
    message: String,
    fields: Vec<String>,
}

impl MessageVisitor {
    fn finish(self) -> String {
        if self.fields.is_empty() {
            self.message
        } else {
            format!("{} {}", self.message, self.fields.join(" "))
        }
    }
}

impl Visit for MessageVisitor {
    fn record_str(&mut self, field: &Field, value: &str) {
        if field.name() == "message" {
            self.message = value.to_string();
        } else {
            self.fields.push(format!("{}={}", field.name(), value));
        }
    }

    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        if field.name() == "message" {
            self.message = format!("{:?}", value);
        } else {
            self.fields.push(format!("{}={:?}", field.name(), value));
        }
    }
}
