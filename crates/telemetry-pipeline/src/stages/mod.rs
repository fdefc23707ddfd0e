// Copyright 2025-Present the telemetry-pipeline authors
// SPDX-License-Identifier: Apache-2.0

//! Built-in processing stages.

mod client_error_initializer;
mod successful_dependency_filter;

pub use client_error_initializer::{ClientErrorInitializer, OVERRIDDEN_400S_PROPERTY};
pub use successful_dependency_filter::SuccessfulDependencyFilter;
