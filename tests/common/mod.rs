//! Shared helpers for circuit-trace integration tests.
//!
//! Builders for representative entities and editors, plus the identity
//! transform every render test draws through.

#![allow(dead_code)]

pub mod builders;

use circuit_trace::{DevicePoint, Entity, Point};

/// Default tolerance for floating-point comparisons.
pub const TOL: f64 = 1e-9;

/// Map normalized coordinates straight to device units
pub fn identity(p: Point) -> DevicePoint {
    DevicePoint::new(p.x as f32, p.y as f32)
}

/// Assert two points are equal within `TOL`.
pub fn assert_point_eq(a: Point, b: Point) {
    assert!(
        (a.x - b.x).abs() < TOL && (a.y - b.y).abs() < TOL,
        "point mismatch: {a} vs {b}"
    );
}

/// Export then import one entity
pub fn round_trip(entity: &Entity) -> Entity {
    let line = entity.export();
    circuit_trace::import_line(&line)
        .unwrap_or_else(|e| panic!("failed to import {line:?}: {e}"))
        .unwrap_or_else(|| panic!("line skipped: {line:?}"))
}

/// Initialize logging once for tests that want to see codec traces.
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}
