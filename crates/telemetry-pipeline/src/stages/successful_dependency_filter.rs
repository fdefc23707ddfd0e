// Copyright 2025-Present the telemetry-pipeline authors
// SPDX-License-Identifier: Apache-2.0

use crate::adapter;
use crate::event::TraceEvent;
use crate::processor::{TelemetryProcessor, Verdict};

/// Drops dependency records already marked successful.
///
/// Successful outbound calls are high volume and carry no failure signal, so
/// suppressing them cuts export cost without losing anything a failure
/// investigation needs. Events without a dependency record are forwarded
/// untouched, as are dependencies whose outcome is failed or unclassified.
#[derive(Clone, Copy, Debug, Default)]
pub struct SuccessfulDependencyFilter;

impl TelemetryProcessor for SuccessfulDependencyFilter {
    fn name(&self) -> &'static str {
        "successful-dependency-filter"
    }

    fn process(&self, event: &mut TraceEvent) -> Verdict {
        match adapter::resolve_dependency(event) {
            Some(dependency) if dependency.success == Some(true) => Verdict::Drop,
            _ => Verdict::Forward,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::EventKind;

    fn dependency_event(success: Option<bool>) -> TraceEvent {
        let mut event = TraceEvent::new(EventKind::Client, "GET /upstream");
        adapter::resolve_dependency(&mut event).unwrap().success = success;
        event
    }

    #[test]
    fn test_drops_successful_dependency() {
        let mut event = dependency_event(Some(true));
        assert_eq!(
            SuccessfulDependencyFilter.process(&mut event),
            Verdict::Drop
        );
    }

    #[test]
    fn test_forwards_failed_dependency() {
        let mut event = dependency_event(Some(false));
        assert_eq!(
            SuccessfulDependencyFilter.process(&mut event),
            Verdict::Forward
        );
    }

    #[test]
    fn test_forwards_unclassified_dependency() {
        let mut event = dependency_event(None);
        assert_eq!(
            SuccessfulDependencyFilter.process(&mut event),
            Verdict::Forward
        );
    }

    #[test]
    fn test_forwards_non_dependency_events() {
        let mut server = TraceEvent::new(EventKind::Server, "GET /").with_status_code("200");
        assert_eq!(
            SuccessfulDependencyFilter.process(&mut server),
            Verdict::Forward
        );

        let mut internal = TraceEvent::new(EventKind::Internal, "startup");
        assert_eq!(
            SuccessfulDependencyFilter.process(&mut internal),
            Verdict::Forward
        );
    }

    #[test]
    fn test_does_not_mutate_the_record() {
        let mut event = dependency_event(Some(false));
        SuccessfulDependencyFilter.process(&mut event);
        let dependency = event.dependency().unwrap();
        assert_eq!(dependency.success, Some(false));
        assert!(dependency.properties.is_empty());
    }
}
