// Constants

// Capacity bounds for reference template data. These are named invariants:
// every facet list, degree array, and canonical code is validated against them
// at module boundaries rather than silently assumed.

/// Largest neighbour count over all reference templates (diamond shells: 4 + 12)
pub const MAX_NBRS: usize = 16;

/// Template point sets carry the centre atom at index 0 ahead of the neighbours
pub const MAX_POINTS: usize = MAX_NBRS + 1;

/// Largest facet count over all reference templates (closed triangulation over 16 vertices)
pub const MAX_FACETS: usize = 28;

/// Undirected edge count of a closed triangulation with `MAX_FACETS` facets
pub const MAX_EDGES: usize = 3 * MAX_FACETS / 2;

/// Upper bound on input neighbourhood size accepted by worker geometry buffers
pub const MAX_INPUT_POINTS: usize = 35;

// Tolerances
pub const FACET_AREA_TOLERANCE: f64 = 1e-10; // Below this a facet counts as degenerate
