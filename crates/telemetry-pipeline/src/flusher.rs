// Copyright 2025-Present the telemetry-pipeline authors
// SPDX-License-Identifier: Apache-2.0

use std::sync::Arc;
use std::time;

use tokio::sync::{mpsc::Receiver, Mutex};
use tracing::{debug, error};

use crate::aggregator::TelemetryAggregator;
use crate::event::TraceEvent;
use crate::exporter::Exporter;

/// Drains surviving events from the pipeline channel into the aggregator and
/// flushes batches to the exporter on a fixed interval.
#[derive(Clone)]
pub struct TelemetryFlusher {
    aggregator: Arc<Mutex<TelemetryAggregator>>,
    exporter: Arc<dyn Exporter>,
    flush_interval_secs: u64,
}

impl TelemetryFlusher {
    pub fn new(
        aggregator: Arc<Mutex<TelemetryAggregator>>,
        exporter: Arc<dyn Exporter>,
        flush_interval_secs: u64,
    ) -> Self {
        TelemetryFlusher {
            aggregator,
            exporter,
            flush_interval_secs,
        }
    }

    /// Starts the flusher: spawns a task that moves events from the channel
    /// into the aggregator, then flushes on the configured interval forever.
    /// A batch that fails to export is retried on the next tick.
    pub async fn start_flusher(&self, mut rx: Receiver<TraceEvent>) {
        let aggregator = Arc::clone(&self.aggregator);
        tokio::spawn(async move {
            while let Some(event) = rx.recv().await {
                let mut guard = aggregator.lock().await;
                guard.add(event);
            }
        });

        let mut failed_events: Option<Vec<TraceEvent>> = None;
        loop {
            tokio::time::sleep(time::Duration::from_secs(self.flush_interval_secs)).await;
            failed_events = self.flush(failed_events.take()).await;
        }
    }

    /// Flushes every available batch on the aggregator. If `failed_events` is
    /// provided, attempts to send those first. Returns any events that failed
    /// to send and should be retried.
    pub async fn flush(&self, failed_events: Option<Vec<TraceEvent>>) -> Option<Vec<TraceEvent>> {
        if let Some(events) = failed_events {
            if !events.is_empty() {
                debug!("Retrying {} previously failed telemetry events", events.len());
                let retry_result = self.send(events).await;
                if retry_result.is_some() {
                    // Still failing, return to retry later.
                    return retry_result;
                }
            }
        }

        let mut guard = self.aggregator.lock().await;
        let mut events = guard.get_batch();

        while !events.is_empty() {
            if let Some(failed) = self.send(events).await {
                // Stop processing more batches on failure.
                return Some(failed);
            }
            events = guard.get_batch();
        }

        None
    }

    /// Sends one batch to the exporter. Returns the events back if the export
    /// failed.
    pub async fn send(&self, events: Vec<TraceEvent>) -> Option<Vec<TraceEvent>> {
        if events.is_empty() {
            return None;
        }
        debug!("Flushing {} telemetry events", events.len());

        // Returned for retry on failure, so clone before handing off.
        let events_clone = events.clone();

        match self.exporter.export(events).await {
            Ok(()) => {
                debug!("Successfully flushed telemetry events");
                None
            }
            Err(e) => {
                error!("Error exporting telemetry: {e}");
                Some(events_clone)
            }
        }
    }
}
