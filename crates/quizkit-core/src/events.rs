//! Recording of quiz UI events for tests.
//!
//! An [`EventRecorder`] is owned by the test that uses it. Listeners are
//! registered by event name; dispatching an event with a listener appends a
//! timestamped entry to that name's record list.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Every event the quiz front-end emits.
pub const QUIZ_EVENTS: [&str; 5] = [
    "quiz:question-loaded",
    "quiz:answer-checked",
    "quiz:completed",
    "quiz:data-loaded",
    "quiz:data-error",
];

/// One observed event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecordedEvent {
    pub timestamp: DateTime<Utc>,
    pub detail: serde_json::Value,
}

#[derive(Debug, Default)]
pub struct EventRecorder {
    events: BTreeMap<String, Vec<RecordedEvent>>,
    /// Active listeners and whether each one survives its first event.
    listeners: BTreeMap<String, bool>,
}

impl EventRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start recording `name`. A non-persistent listener stops after the
    /// first event it records.
    pub fn listen(&mut self, name: &str, persistent: bool) -> &mut Self {
        self.events.entry(name.to_string()).or_default();
        self.listeners.insert(name.to_string(), persistent);
        debug!("Now listening for \"{name}\" events");
        self
    }

    pub fn listen_multiple<'a>(
        &mut self,
        names: impl IntoIterator<Item = &'a str>,
        persistent: bool,
    ) -> &mut Self {
        for name in names {
            self.listen(name, persistent);
        }
        self
    }

    /// Listen persistently for all of [`QUIZ_EVENTS`].
    pub fn listen_all(&mut self) -> &mut Self {
        self.listen_multiple(QUIZ_EVENTS, true)
    }

    /// Deliver an event. Returns `true` if a listener recorded it.
    pub fn dispatch(&mut self, name: &str, detail: serde_json::Value) -> bool {
        let Some(&persistent) = self.listeners.get(name) else {
            return false;
        };

        debug!(%detail, "Event \"{name}\" fired");
        self.events
            .entry(name.to_string())
            .or_default()
            .push(RecordedEvent {
                timestamp: Utc::now(),
                detail,
            });

        if !persistent {
            self.listeners.remove(name);
        }
        true
    }

    /// Drop every recorded entry. Listeners stay registered.
    pub fn clear(&mut self) -> &mut Self {
        for entries in self.events.values_mut() {
            entries.clear();
        }
        debug!("Cleared all recorded events");
        self
    }

    /// Recorded entries for `name`, oldest first.
    pub fn events(&self, name: &str) -> &[RecordedEvent] {
        self.events.get(name).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn is_listening(&self, name: &str) -> bool {
        self.listeners.contains_key(name)
    }
}
