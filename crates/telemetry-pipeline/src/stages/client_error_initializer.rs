// Copyright 2025-Present the telemetry-pipeline authors
// SPDX-License-Identifier: Apache-2.0

use crate::adapter;
use crate::event::TraceEvent;
use crate::processor::{TelemetryProcessor, Verdict};

/// Property set on request records reclassified by [`ClientErrorInitializer`].
///
/// Downstream dashboards key on the literal string value `"true"`; the value
/// must stay a string, not a boolean.
pub const OVERRIDDEN_400S_PROPERTY: &str = "Overridden400s";

/// Reclassifies 4xx inbound requests as successful.
///
/// A 4xx response means the caller misbehaved, not the service, and counting
/// it as a failure skews availability numbers. Requests with a numeric
/// response code in `[400, 500)` get their success flag forced to `true` and
/// a marker property attached. Non-numeric codes cannot be classified and
/// pass through unchanged. This stage never drops an event.
#[derive(Clone, Copy, Debug, Default)]
pub struct ClientErrorInitializer;

impl TelemetryProcessor for ClientErrorInitializer {
    fn name(&self) -> &'static str {
        "client-error-initializer"
    }

    fn process(&self, event: &mut TraceEvent) -> Verdict {
        if let Some(request) = adapter::resolve_request(event) {
            if let Ok(code) = request.response_code.parse::<i64>() {
                if (400..500).contains(&code) {
                    request.success = Some(true);
                    request
                        .properties
                        .insert(OVERRIDDEN_400S_PROPERTY.to_string(), "true".to_string());
                }
            }
        }
        Verdict::Forward
    }
}
