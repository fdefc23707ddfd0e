// Copyright 2025-Present the telemetry-pipeline authors
// SPDX-License-Identifier: Apache-2.0

use std::collections::VecDeque;

use tracing::warn;

use crate::event::TraceEvent;

/// Maximum number of events queued before the oldest are evicted.
pub const DEFAULT_MAX_QUEUE_ITEMS: usize = 10_000;

/// Maximum number of events handed to the exporter per batch.
pub const DEFAULT_BATCH_ITEMS: usize = 512;

/// Takes in individual surviving events and aggregates them into batches to be
/// flushed to the exporter.
///
/// The queue is FIFO with oldest-first eviction once `max_queue_items` is
/// reached, so memory stays bounded when the exporter falls behind.
pub struct TelemetryAggregator {
    queue: VecDeque<TraceEvent>,
    max_queue_items: usize,
    batch_items: usize,
}

impl Default for TelemetryAggregator {
    fn default() -> Self {
        TelemetryAggregator::new(DEFAULT_MAX_QUEUE_ITEMS, DEFAULT_BATCH_ITEMS)
    }
}

impl TelemetryAggregator {
    pub fn new(max_queue_items: usize, batch_items: usize) -> Self {
        TelemetryAggregator {
            queue: VecDeque::new(),
            max_queue_items,
            batch_items,
        }
    }

    /// Takes in an individual event, evicting the oldest queued event when the
    /// queue is full.
    pub fn add(&mut self, event: TraceEvent) {
        if self.queue.len() >= self.max_queue_items {
            warn!("Telemetry queue full, dropping oldest event");
            self.queue.pop_front();
        }
        self.queue.push_back(event);
    }

    /// Returns the next batch of events, up to the configured batch size.
    pub fn get_batch(&mut self) -> Vec<TraceEvent> {
        let count = self.batch_items.min(self.queue.len());
        self.queue.drain(..count).collect()
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::EventKind;

    fn event(name: &str) -> TraceEvent {
        TraceEvent::new(EventKind::Internal, name)
    }

    #[test]
    fn test_add_and_get_batch() {
        let mut aggregator = TelemetryAggregator::default();
        aggregator.add(event("a"));
        aggregator.add(event("b"));

        let batch = aggregator.get_batch();
        assert_eq!(batch.len(), 2);
        assert_eq!(batch[0].name, "a");
        assert!(aggregator.is_empty());
    }

    #[test]
    fn test_batch_respects_batch_size() {
        let mut aggregator = TelemetryAggregator::new(100, 2);
        for i in 0..5 {
            aggregator.add(event(&format!("event-{i}")));
        }

        assert_eq!(aggregator.get_batch().len(), 2);
        assert_eq!(aggregator.get_batch().len(), 2);
        assert_eq!(aggregator.get_batch().len(), 1);
        assert!(aggregator.get_batch().is_empty());
    }

    #[test]
    fn test_full_queue_evicts_oldest() {
        let mut aggregator = TelemetryAggregator::new(2, 10);
        aggregator.add(event("a"));
        aggregator.add(event("b"));
        aggregator.add(event("c"));

        let batch = aggregator.get_batch();
        assert_eq!(batch.len(), 2);
        assert_eq!(batch[0].name, "b");
        assert_eq!(batch[1].name, "c");
    }
}
