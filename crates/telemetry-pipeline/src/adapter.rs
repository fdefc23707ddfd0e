// Copyright 2025-Present the telemetry-pipeline authors
// SPDX-License-Identifier: Apache-2.0

//! Memoized normalization from raw trace events to structured records.
//!
//! Resolution is check-or-create: if the event already carries a record of the
//! requested kind it is returned as-is; otherwise a record is built only when
//! the event's role matches, and cached on the event for its lifetime. An
//! absent record is a normal outcome meaning "not applicable", never a
//! failure. The exclusive borrow of the event makes check-or-create atomic
//! per event.

use crate::event::{DependencyTelemetry, EventKind, RequestTelemetry, TraceEvent};

/// Returns the event's dependency record, creating and caching an empty one
/// when the event represents an outbound call. Returns `None` for any other
/// event role.
pub fn resolve_dependency(event: &mut TraceEvent) -> Option<&mut DependencyTelemetry> {
    if event.dependency.is_none() && event.kind == EventKind::Client {
        event.dependency = Some(DependencyTelemetry::default());
    }
    event.dependency.as_mut()
}

/// Returns the event's request record, creating and caching one when the event
/// represents inbound request handling. The new record is seeded with the
/// event's captured status code. Returns `None` for any other event role.
pub fn resolve_request(event: &mut TraceEvent) -> Option<&mut RequestTelemetry> {
    if event.request.is_none() && event.kind == EventKind::Server {
        event.request = Some(RequestTelemetry {
            response_code: event.status_code.clone().unwrap_or_default(),
            ..RequestTelemetry::default()
        });
    }
    event.request.as_mut()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_dependency_for_client_event() {
        let mut event = TraceEvent::new(EventKind::Client, "GET /upstream");
        let dependency = resolve_dependency(&mut event);
        assert!(dependency.is_some());
    }

    #[test]
    fn test_resolve_dependency_is_memoized() {
        let mut event = TraceEvent::new(EventKind::Client, "GET /upstream");
        resolve_dependency(&mut event)
            .unwrap()
            .properties
            .insert("attempt".to_string(), "1".to_string());

        // Resolving again must return the cached record, not a fresh one.
        let again = resolve_dependency(&mut event).unwrap();
        assert_eq!(again.properties.get("attempt").map(String::as_str), Some("1"));
    }

    #[test]
    fn test_resolve_dependency_absent_for_other_kinds() {
        let mut server = TraceEvent::new(EventKind::Server, "GET /");
        assert!(resolve_dependency(&mut server).is_none());

        let mut internal = TraceEvent::new(EventKind::Internal, "startup");
        assert!(resolve_dependency(&mut internal).is_none());
    }

    #[test]
    fn test_resolve_request_for_server_event() {
        let mut event = TraceEvent::new(EventKind::Server, "GET /").with_status_code("404");
        let request = resolve_request(&mut event).unwrap();
        assert_eq!(request.response_code, "404");
        assert_eq!(request.success, None);
    }

    #[test]
    fn test_resolve_request_is_memoized() {
        let mut event = TraceEvent::new(EventKind::Server, "GET /").with_status_code("200");
        resolve_request(&mut event).unwrap().success = Some(false);

        let again = resolve_request(&mut event).unwrap();
        assert_eq!(again.success, Some(false));
    }

    #[test]
    fn test_resolve_request_absent_for_other_kinds() {
        let mut client = TraceEvent::new(EventKind::Client, "GET /upstream");
        assert!(resolve_request(&mut client).is_none());

        let mut internal = TraceEvent::new(EventKind::Internal, "startup");
        assert!(resolve_request(&mut internal).is_none());
    }

    #[test]
    fn test_resolve_request_without_status_code() {
        let mut event = TraceEvent::new(EventKind::Server, "GET /");
        let request = resolve_request(&mut event).unwrap();
        assert_eq!(request.response_code, "");
    }
}
