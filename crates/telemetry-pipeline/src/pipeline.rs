// Copyright 2025-Present the telemetry-pipeline authors
// SPDX-License-Identifier: Apache-2.0

use tokio::sync::mpsc::Sender;
use tracing::debug;

use crate::error::PipelineError;
use crate::event::TraceEvent;
use crate::processor::{ProcessorChain, Verdict};

/// Inbound surface of the pipeline.
///
/// The tracing runtime calls [`TelemetryPipeline::process_event`] exactly once
/// per finalized unit of work. Surviving events are sent to the flusher
/// channel; dropped events go nowhere.
pub struct TelemetryPipeline {
    chain: ProcessorChain,
    tx: Sender<TraceEvent>,
}

impl TelemetryPipeline {
    pub fn new(chain: ProcessorChain, tx: Sender<TraceEvent>) -> Self {
        TelemetryPipeline { chain, tx }
    }

    /// Runs a finalized event through the chain and forwards it for export
    /// when it survives.
    pub async fn process_event(&self, mut event: TraceEvent) -> Result<(), PipelineError> {
        debug!(name = %event.name, "Received telemetry event to process");
        match self.chain.process(&mut event) {
            Verdict::Drop => Ok(()),
            Verdict::Forward => self
                .tx
                .send(event)
                .await
                .map_err(|_| PipelineError::ChannelClosed),
        }
    }
}
