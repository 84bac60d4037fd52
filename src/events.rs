//! Progress reporting for the pipeline
//!
//! Stages never print directly. They hand [`Event`]s to an [`EventSink`], so
//! the binary can show them on the console while tests and embedders can
//! drop or collect them.

use crate::types::Event;
use std::sync::Mutex;

/// Receiver of pipeline progress events
///
/// # Examples
///
/// ```
/// use portable_report::events::{EventSink, MemorySink};
/// use portable_report::Event;
///
/// let sink = MemorySink::default();
/// sink.emit(&Event::FetchCompleted { count: 2 });
/// assert_eq!(sink.events().len(), 1);
/// ```
pub trait EventSink: Send + Sync {
    /// Handle one event
    fn emit(&self, event: &Event);
}

/// Prints every event as one line on standard output
pub struct ConsoleSink;

impl EventSink for ConsoleSink {
    fn emit(&self, event: &Event) {
        println!("{event}");
    }
}

/// Discards every event
pub struct NoOpSink;

impl EventSink for NoOpSink {
    fn emit(&self, _event: &Event) {}
}

/// Keeps every event in memory, in emission order
#[derive(Default)]
pub struct MemorySink {
    events: Mutex<Vec<Event>>,
}

impl MemorySink {
    /// Snapshot of the events received so far
    pub fn events(&self) -> Vec<Event> {
        match self.events.lock() {
            Ok(events) => events.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }
}

impl EventSink for MemorySink {
    fn emit(&self, event: &Event) {
        match self.events.lock() {
            Ok(mut events) => events.push(event.clone()),
            Err(poisoned) => poisoned.into_inner().push(event.clone()),
        }
    }
}
