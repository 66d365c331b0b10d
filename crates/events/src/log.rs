//! In-memory append-only event log.

use uuid::Uuid;

use storefront_core::SessionId;

use crate::{Event, EventEnvelope};

/// Ordered, append-only record of accepted events.
///
/// - No IO, no locking (a log has exactly one writer)
/// - Sequence numbers start at 1 and increase by one per append
/// - Entries are never removed or rewritten
#[derive(Debug, Clone)]
pub struct EventLog<E> {
    entries: Vec<EventEnvelope<E>>,
}

impl<E: Event> EventLog<E> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap `payload` in an envelope and append it to the end of the log.
    pub fn append(&mut self, session_id: SessionId, payload: E) -> &EventEnvelope<E> {
        let sequence_number = self.last_sequence() + 1;
        let index = self.entries.len();
        self.entries.push(EventEnvelope::new(
            Uuid::now_v7(),
            session_id,
            sequence_number,
            payload,
        ));
        &self.entries[index]
    }

    /// Sequence number of the newest entry (0 when empty).
    pub fn last_sequence(&self) -> u64 {
        self.entries
            .last()
            .map(EventEnvelope::sequence_number)
            .unwrap_or(0)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &EventEnvelope<E>> {
        self.entries.iter()
    }

    /// Payloads in append order.
    pub fn payloads(&self) -> impl Iterator<Item = &E> {
        self.entries.iter().map(EventEnvelope::payload)
    }
}

impl<E> Default for EventLog<E> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
        }
    }
}
