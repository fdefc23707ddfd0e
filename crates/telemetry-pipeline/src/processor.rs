// Copyright 2025-Present the telemetry-pipeline authors
// SPDX-License-Identifier: Apache-2.0

use tracing::debug;

use crate::event::TraceEvent;

/// Outcome of one stage for one event.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Verdict {
    /// Hand the event to the next stage, or to the exporter after the last one.
    Forward,
    /// Stop processing; the event is never exported.
    Drop,
}

/// One unit of the post-processing chain.
///
/// A stage inspects and may mutate the event, then decides whether it
/// continues down the chain. A stage that cannot act on an event must forward
/// it unchanged; stages never fail.
pub trait TelemetryProcessor: Send + Sync {
    /// Stage name for logging.
    fn name(&self) -> &'static str;

    /// Inspect or mutate the event and decide whether it moves on.
    fn process(&self, event: &mut TraceEvent) -> Verdict;
}

/// Ordered straight-line pipeline over finalized events.
///
/// The chain is pure sequencing: each stage runs at most once, in configured
/// order, and the first [`Verdict::Drop`] ends processing. All filtering
/// policy lives in the stages themselves.
pub struct ProcessorChain {
    stages: Vec<Box<dyn TelemetryProcessor>>,
}

impl ProcessorChain {
    pub fn new(stages: Vec<Box<dyn TelemetryProcessor>>) -> Self {
        ProcessorChain { stages }
    }

    /// Runs the event through every stage in order, stopping at the first
    /// [`Verdict::Drop`].
    pub fn process(&self, event: &mut TraceEvent) -> Verdict {
        for stage in &self.stages {
            if stage.process(event) == Verdict::Drop {
                debug!(stage = stage.name(), name = %event.name, "Dropping telemetry event");
                return Verdict::Drop;
            }
        }
        Verdict::Forward
    }

    pub fn len(&self) -> usize {
        self.stages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stages.is_empty()
    }
}
