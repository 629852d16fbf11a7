// Per-worker geometry contexts
//
// The external matching routine performs geometric neighbour queries that
// need preallocated scratch storage. Each worker thread owns one context;
// contexts are never shared, so no locking is involved. Ownership replaces
// the original's raw handle pairing: releasing twice, or releasing another
// worker's handle, is unrepresentable.

use log::debug;
use nalgebra::Vector3;

use crate::config::MAX_INPUT_POINTS;
use crate::initialization::controller::is_initialized;

/// Opaque per-worker scratch arena for geometric queries during matching.
///
/// Not `Clone`: exactly one owner exists for the lifetime of the buffers.
/// Dropping the context releases them; [`release_worker_context`] makes the
/// release explicit at call sites that want the pairing visible.
#[derive(Debug)]
pub struct WorkerContext {
    positions: Vec<Vector3<f64>>,
    distances: Vec<f64>,
}

impl WorkerContext {
    fn new() -> Self {
        Self {
            positions: Vec::with_capacity(MAX_INPUT_POINTS),
            distances: Vec::with_capacity(MAX_INPUT_POINTS),
        }
    }

    /// Scratch buffer for candidate neighbour positions.
    pub fn positions_mut(&mut self) -> &mut Vec<Vector3<f64>> {
        &mut self.positions
    }

    /// Scratch buffer for neighbour distances.
    pub fn distances_mut(&mut self) -> &mut Vec<f64> {
        &mut self.distances
    }

    /// Reset the buffers for the next query, keeping their allocations.
    pub fn clear(&mut self) {
        self.positions.clear();
        self.distances.clear();
    }

    /// Guaranteed minimum capacity of each scratch buffer.
    pub fn capacity(&self) -> usize {
        MAX_INPUT_POINTS
    }
}

/// Create a geometry context for the calling worker.
///
/// # Panics
/// Panics when global initialization has not completed; requesting a context
/// before [`super::initialize_global`] succeeds is a sequencing bug in the
/// caller.
pub fn create_worker_context() -> WorkerContext {
    assert!(
        is_initialized(),
        "initialize_global() must complete before worker contexts are created"
    );
    debug!("worker geometry context created");
    WorkerContext::new()
}

/// Release a worker's geometry context.
pub fn release_worker_context(context: WorkerContext) {
    drop(context);
    debug!("worker geometry context released");
}
