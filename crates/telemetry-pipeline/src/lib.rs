// Copyright 2025-Present the telemetry-pipeline authors
// SPDX-License-Identifier: Apache-2.0

//! In-process post-processing for captured telemetry events.
//!
//! Finalized trace events flow through an ordered chain of stages that may
//! inspect, mutate, or drop them before export:
//!
//! ```text
//! tracing runtime ──► TelemetryPipeline ──► mpsc ──► TelemetryFlusher ──► Exporter
//!                          │
//!                          └─► ProcessorChain (stage 1 → stage 2 → ...)
//! ```
//!
//! The built-in stages suppress successful outbound calls and reclassify 4xx
//! inbound requests so client mistakes do not count against availability.

pub mod adapter;
pub mod aggregator;
pub mod config;
pub mod error;
pub mod event;
pub mod exporter;
pub mod flusher;
pub mod pipeline;
pub mod processor;
pub mod stages;

pub use config::PipelineConfig;
pub use error::PipelineError;
pub use event::{DependencyTelemetry, EventKind, RequestTelemetry, TraceEvent};
pub use exporter::{Exporter, LogExporter};
pub use pipeline::TelemetryPipeline;
pub use processor::{ProcessorChain, TelemetryProcessor, Verdict};
