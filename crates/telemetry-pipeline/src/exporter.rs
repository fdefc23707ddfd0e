// Copyright 2025-Present the telemetry-pipeline authors
// SPDX-License-Identifier: Apache-2.0

use async_trait::async_trait;
use tracing::info;

use crate::error::PipelineError;
use crate::event::TraceEvent;

/// Outbound transport for events that survive the chain.
///
/// This is the only interface to the export backend; batching cadence and
/// retry live in the flusher, implementations only move one batch.
#[async_trait]
pub trait Exporter: Send + Sync {
    async fn export(&self, events: Vec<TraceEvent>) -> Result<(), PipelineError>;
}

/// Exporter that writes each event as a JSON line through the logging layer.
///
/// Used by the demo binary and anywhere a real backend is not wired up.
#[derive(Clone, Copy, Debug, Default)]
pub struct LogExporter;

#[async_trait]
impl Exporter for LogExporter {
    async fn export(&self, events: Vec<TraceEvent>) -> Result<(), PipelineError> {
        for event in events {
            let line = serde_json::to_string(&event)
                .map_err(|e| PipelineError::Export(e.to_string()))?;
            info!(telemetry = %line, "Exported telemetry event");
        }
        Ok(())
    }
}
