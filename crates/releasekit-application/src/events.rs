// SPDX-License-Identifier: GPL-3.0-or-later
use std::sync::{Arc, Mutex};

use releasekit_domain::DomainEvent;
use serde::Serialize;
use serde_json::json;
use tracing::trace;

pub const RELEASE_SUBMITTED: &str = "release.submitted";
pub const RELEASE_SUBMISSION_FAILED: &str = "release.submission_failed";

/// Sink for domain events raised by the submission flow.
pub trait EventPublisher: Send + Sync {
    fn publish<T>(&self, event: &DomainEvent<T>)
    where
        T: Serialize + Send + Sync + 'static;
}

/// Keeps published events as JSON values until drained.
#[derive(Clone, Default)]
pub struct InMemoryEventBus {
    inner: Arc<Mutex<Vec<serde_json::Value>>>,
}

impl InMemoryEventBus {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.inner.lock().expect("event bus lock poisoned").len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Names of the captured events, oldest first.
    pub fn names(&self) -> Vec<String> {
        self.inner
            .lock()
            .expect("event bus lock poisoned")
            .iter()
            .filter_map(|event| event["name"].as_str().map(str::to_string))
            .collect()
    }

    pub fn drain(&self) -> Vec<serde_json::Value> {
        let mut guard = self.inner.lock().expect("event bus lock poisoned");
        std::mem::take(&mut *guard)
    }
}

impl EventPublisher for InMemoryEventBus {
    fn publish<T>(&self, event: &DomainEvent<T>)
    where
        T: Serialize + Send + Sync + 'static,
    {
        trace!(target: "submission", event = event.name, "event published");
        let value = json!({
            "name": event.name,
            "occurred_at": event.occurred_at,
            "payload": event.payload,
        });
        self.inner
            .lock()
            .expect("event bus lock poisoned")
            .push(value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use releasekit_domain::{ReleaseId, ReleaseSubmissionFailed, ReleaseSubmissionFailedPayload};

    #[test]
    fn publish_and_drain_events() {
        let bus = InMemoryEventBus::new();
        assert!(bus.is_empty());

        let release_id = ReleaseId::new();
        let event: ReleaseSubmissionFailed = DomainEvent::new(
            RELEASE_SUBMISSION_FAILED,
            ReleaseSubmissionFailedPayload {
                release_id,
                reason: "service unavailable".to_string(),
            },
        );

        bus.publish(&event);
        assert_eq!(bus.len(), 1);
        assert_eq!(bus.names(), vec![RELEASE_SUBMISSION_FAILED.to_string()]);

        let drained = bus.drain();
        assert!(bus.is_empty());
        assert_eq!(drained[0]["payload"]["reason"], "service unavailable");
        assert_eq!(drained[0]["payload"]["release_id"], release_id.0.to_string());
    }
}
