// Copyright 2025-Present the telemetry-pipeline authors
// SPDX-License-Identifier: Apache-2.0

use std::collections::HashMap;

use serde::Serialize;

/// Role of the unit of work an event was captured for.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum EventKind {
    /// An outbound call made by this process.
    Client,
    /// An inbound request handled by this process.
    Server,
    /// Any other span; never normalized into a structured record.
    Internal,
}

/// Normalized record of an outbound call.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct DependencyTelemetry {
    /// Tri-state outcome. `None` means the runtime never classified the call.
    pub success: Option<bool>,
    /// Free-form properties forwarded to the export backend.
    pub properties: HashMap<String, String>,
}

/// Normalized record of an inbound request.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct RequestTelemetry {
    /// Response code as captured. Kept string-typed since runtimes report
    /// non-numeric codes for aborted or unclassifiable work.
    pub response_code: String,
    /// Tri-state outcome. `None` means the runtime never classified the request.
    pub success: Option<bool>,
    /// Free-form properties forwarded to the export backend.
    pub properties: HashMap<String, String>,
}

/// One finalized unit of work as captured by the tracing runtime.
///
/// The runtime owns the event: it is created when the work starts, accumulates
/// attributes while the work runs, and is handed to the processor chain exactly
/// once when the work ends. The two record slots memoize normalization into
/// [`DependencyTelemetry`] and [`RequestTelemetry`]; see [`crate::adapter`].
#[derive(Clone, Debug, Serialize)]
pub struct TraceEvent {
    /// Role of the unit of work.
    pub kind: EventKind,
    /// Operation name reported by the runtime.
    pub name: String,
    /// Status code of the call or response, when one applies.
    pub status_code: Option<String>,
    /// Raw attributes accumulated while the work ran.
    pub attributes: HashMap<String, String>,
    pub(crate) dependency: Option<DependencyTelemetry>,
    pub(crate) request: Option<RequestTelemetry>,
}

impl TraceEvent {
    pub fn new(kind: EventKind, name: impl Into<String>) -> Self {
        TraceEvent {
            kind,
            name: name.into(),
            status_code: None,
            attributes: HashMap::new(),
            dependency: None,
            request: None,
        }
    }

    /// Sets the status code recorded for the unit of work.
    pub fn with_status_code(mut self, code: impl Into<String>) -> Self {
        self.status_code = Some(code.into());
        self
    }

    /// Read-only view of the cached dependency record, if one was resolved.
    pub fn dependency(&self) -> Option<&DependencyTelemetry> {
        self.dependency.as_ref()
    }

    /// Read-only view of the cached request record, if one was resolved.
    pub fn request(&self) -> Option<&RequestTelemetry> {
        self.request.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_event_has_no_cached_records() {
        let event = TraceEvent::new(EventKind::Client, "GET /upstream");
        assert!(event.dependency().is_none());
        assert!(event.request().is_none());
    }

    #[test]
    fn test_with_status_code() {
        let event = TraceEvent::new(EventKind::Server, "GET /").with_status_code("404");
        assert_eq!(event.status_code.as_deref(), Some("404"));
    }

    #[test]
    fn test_event_serializes() {
        let event = TraceEvent::new(EventKind::Server, "GET /").with_status_code("200");
        let json = serde_json::to_string(&event).unwrap();
        assert!(json.contains("\"Server\""));
        assert!(json.contains("\"200\""));
    }
}
