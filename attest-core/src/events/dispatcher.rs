//! EventDispatcher — synchronous event dispatch with zero overhead when empty.

use std::sync::Arc;

use super::handler::AttestEventHandler;
use super::types::*;

/// Synchronous event dispatcher wrapping a list of handlers.
///
/// When no handlers are registered, `emit` iterates over an empty Vec —
/// effectively zero cost.
pub struct EventDispatcher {
    handlers: Vec<Arc<dyn AttestEventHandler>>,
}

impl EventDispatcher {
    /// Create a new empty dispatcher.
    pub fn new() -> Self {
        Self {
            handlers: Vec::new(),
        }
    }

    /// Register an event handler.
    pub fn register(&mut self, handler: Arc<dyn AttestEventHandler>) {
        self.handlers.push(handler);
    }

    /// Returns the number of registered handlers.
    pub fn handler_count(&self) -> usize {
        self.handlers.len()
    }

    /// Emit an event to all registered handlers.
    /// Handlers that panic are caught and do not prevent subsequent handlers
    /// from receiving the event.
    fn emit<F: Fn(&dyn AttestEventHandler)>(&self, f: F) {
        for handler in &self.handlers {
            let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
                f(handler.as_ref());
            }));
            if result.is_err() {
                tracing::warn!("event handler panicked; continuing with remaining handlers");
            }
        }
    }

    // ---- Scan lifecycle ----
    pub fn emit_scan_started(&self, event: &ScanStartedEvent) {
        self.emit(|h| h.on_scan_started(event));
    }

    pub fn emit_scan_progress(&self, event: &ScanProgressEvent) {
        self.emit(|h| h.on_scan_progress(event));
    }

    pub fn emit_scan_complete(&self, event: &ScanCompleteEvent) {
        self.emit(|h| h.on_scan_complete(event));
    }

    pub fn emit_scan_error(&self, event: &ScanErrorEvent) {
        self.emit(|h| h.on_scan_error(event));
    }

    // ---- Findings ----
    pub fn emit_finding_detected(&self, event: &FindingDetectedEvent) {
        self.emit(|h| h.on_finding_detected(event));
    }

    // ---- Evidence records ----
    pub fn emit_record_created(&self, event: &RecordCreatedEvent) {
        self.emit(|h| h.on_record_created(event));
    }

    pub fn emit_record_deleted(&self, event: &RecordDeletedEvent) {
        self.emit(|h| h.on_record_deleted(event));
    }

    // ---- Assessments ----
    pub fn emit_assessment_completed(&self, event: &AssessmentCompletedEvent) {
        self.emit(|h| h.on_assessment_completed(event));
    }
}

impl Default for EventDispatcher {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    use super::*;

    struct Counter(AtomicUsize);

    impl AttestEventHandler for Counter {
        fn on_scan_started(&self, _event: &ScanStartedEvent) {
            self.0.fetch_add(1, Ordering::SeqCst);
        }
    }

    struct Panicker;

    impl AttestEventHandler for Panicker {
        fn on_scan_started(&self, _event: &ScanStartedEvent) {
            panic!("handler panic");
        }
    }

    #[test]
    fn test_emit_reaches_all_handlers() {
        let counter = Arc::new(Counter(AtomicUsize::new(0)));
        let mut dispatcher = EventDispatcher::new();
        dispatcher.register(counter.clone());
        dispatcher.register(counter.clone());

        dispatcher.emit_scan_started(&ScanStartedEvent {
            root: ".".to_string(),
            timestamp_ms: 0,
        });
        assert_eq!(counter.0.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_panicking_handler_does_not_block_others() {
        let counter = Arc::new(Counter(AtomicUsize::new(0)));
        let mut dispatcher = EventDispatcher::new();
        dispatcher.register(Arc::new(Panicker));
        dispatcher.register(counter.clone());

        dispatcher.emit_scan_started(&ScanStartedEvent {
            root: ".".to_string(),
            timestamp_ms: 0,
        });
        assert_eq!(counter.0.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_empty_dispatcher_is_noop() {
        let dispatcher = EventDispatcher::new();
        assert_eq!(dispatcher.handler_count(), 0);
        dispatcher.emit_scan_progress(&ScanProgressEvent {
            files_seen: 0,
            files_analyzed: 0,
        });
    }
}
