//! Fire-and-forget notifications from the interpreter to collaborators.
//!
//! Handlers never talk to trackers/audio/analytics directly; they return
//! events alongside their output and the bus fans those out after dispatch.
//! Nothing in the core depends on a sink's reaction.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TerminalEvent {
    /// Emitted once per dispatched line, after the handler returns.
    /// `verb` is the case-folded first token as typed (not alias-resolved).
    CommandExecuted { verb: String, is_error: bool },
    ThemeChanged { theme: String },
    TabCompletion { completed: String },
    WidgetToggled { widget: String, visible: bool },
    EasterEggFound { name: String },
}

pub trait EventSink {
    fn on_event(&mut self, event: &TerminalEvent);
}

/// Ordered fan-out to registered sinks. Delivery order follows registration
/// order; sinks cannot veto or reorder events.
#[derive(Default)]
pub struct EventBus {
    sinks: Vec<Box<dyn EventSink>>,
}

impl EventBus {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, sink: Box<dyn EventSink>) {
        self.sinks.push(sink);
    }

    pub fn emit(&mut self, event: TerminalEvent) {
        for sink in &mut self.sinks {
            sink.on_event(&event);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    struct Recorder(Arc<Mutex<Vec<TerminalEvent>>>);

    impl EventSink for Recorder {
        fn on_event(&mut self, event: &TerminalEvent) {
            self.0.lock().unwrap().push(event.clone());
        }
    }

    #[test]
    fn bus_delivers_to_all_sinks_in_order() {
        let seen_a = Arc::new(Mutex::new(Vec::new()));
        let seen_b = Arc::new(Mutex::new(Vec::new()));
        let mut bus = EventBus::new();
        bus.register(Box::new(Recorder(seen_a.clone())));
        bus.register(Box::new(Recorder(seen_b.clone())));

        bus.emit(TerminalEvent::TabCompletion { completed: "projects".into() });
        bus.emit(TerminalEvent::ThemeChanged { theme: "amber".into() });

        assert_eq!(seen_a.lock().unwrap().len(), 2);
        assert_eq!(*seen_a.lock().unwrap(), *seen_b.lock().unwrap());
    }
}
