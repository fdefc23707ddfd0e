// Copyright 2025-Present the telemetry-pipeline authors
// SPDX-License-Identifier: Apache-2.0

/// Errors that can occur at the edges of the pipeline.
///
/// Stage logic itself is infallible; a stage that cannot act forwards the
/// event unchanged. Failures exist only at the configuration and export
/// seams.
#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Telemetry channel closed")]
    ChannelClosed,

    #[error("Failed to export telemetry: {0}")]
    Export(String),
}
