// Copyright 2025-Present the telemetry-pipeline authors
// SPDX-License-Identifier: Apache-2.0

#![cfg_attr(not(test), deny(clippy::panic))]
#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]
#![cfg_attr(not(test), deny(clippy::todo))]
#![cfg_attr(not(test), deny(clippy::unimplemented))]

use std::sync::Arc;

use tokio::{
    sync::{mpsc, Mutex as TokioMutex},
    time::{sleep, Duration},
};
use tracing::{debug, error, info};
use tracing_subscriber::EnvFilter;

use telemetry_pipeline::{
    aggregator::{TelemetryAggregator, DEFAULT_BATCH_ITEMS},
    flusher::TelemetryFlusher,
    EventKind, LogExporter, PipelineConfig, TelemetryPipeline, TraceEvent,
};

const CHANNEL_CAPACITY: usize = 100;

#[tokio::main]
pub async fn main() {
    let config = match PipelineConfig::from_env() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error creating config on telemetry demo startup: {e}");
            return;
        }
    };

    #[allow(clippy::expect_used)]
    let subscriber = tracing_subscriber::fmt::Subscriber::builder()
        .with_env_filter(
            EnvFilter::try_new(&config.log_level)
                .expect("could not parse log level in configuration"),
        )
        .with_level(true)
        .with_thread_names(false)
        .with_thread_ids(false)
        .with_line_number(false)
        .with_file(false)
        .with_target(true)
        .without_time()
        .finish();

    #[allow(clippy::expect_used)]
    tracing::subscriber::set_global_default(subscriber).expect("setting default subscriber failed");

    debug!("Starting telemetry pipeline demo");

    let (tx, rx) = mpsc::channel(CHANNEL_CAPACITY);
    let pipeline = TelemetryPipeline::new(config.build_chain(), tx);

    let aggregator = Arc::new(TokioMutex::new(TelemetryAggregator::new(
        config.max_queue_items,
        DEFAULT_BATCH_ITEMS,
    )));
    let flusher = Arc::new(TelemetryFlusher::new(
        aggregator,
        Arc::new(LogExporter),
        config.flush_interval_secs,
    ));

    let flusher_handle = Arc::clone(&flusher);
    tokio::spawn(async move {
        flusher_handle.start_flusher(rx).await;
    });

    for event in sample_workload() {
        if let Err(e) = pipeline.process_event(event).await {
            error!("Error processing telemetry event: {e}");
        }
    }

    // Let the interval flusher pick up whatever survived the chain.
    sleep(Duration::from_secs(config.flush_interval_secs + 1)).await;
    info!("Demo workload complete");
}

/// Events a small web application would finalize during a burst of traffic:
/// outbound calls in every outcome state and inbound requests across the
/// status ranges the chain cares about.
fn sample_workload() -> Vec<TraceEvent> {
    let mut healthy_call = TraceEvent::new(EventKind::Client, "GET https://backend/users");
    if let Some(dependency) = telemetry_pipeline::adapter::resolve_dependency(&mut healthy_call) {
        dependency.success = Some(true);
    }

    let mut failed_call = TraceEvent::new(EventKind::Client, "GET https://backend/orders");
    if let Some(dependency) = telemetry_pipeline::adapter::resolve_dependency(&mut failed_call) {
        dependency.success = Some(false);
    }

    vec![
        healthy_call,
        failed_call,
        TraceEvent::new(EventKind::Client, "GET https://backend/health"),
        TraceEvent::new(EventKind::Server, "GET /").with_status_code("200"),
        TraceEvent::new(EventKind::Server, "GET /missing").with_status_code("404"),
        TraceEvent::new(EventKind::Server, "POST /orders").with_status_code("500"),
        TraceEvent::new(EventKind::Server, "GET /aborted").with_status_code("abc"),
        TraceEvent::new(EventKind::Internal, "startup"),
    ]
}
