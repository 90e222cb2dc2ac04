//! Common test utilities for nexum integration tests
//!
//! This module provides shared helpers for building graphs and
//! cross-checking results against naive reference implementations.

pub mod builders;
pub mod reference;

pub use builders::{random_graph, vertex_ids};
pub use reference::naive_dijkstra;

/// Install a test-friendly tracing subscriber; repeat calls are no-ops
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();
}
