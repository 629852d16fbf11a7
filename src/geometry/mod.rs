// Geometry module: facet winding normalization for reference templates

// ======================== MODULE DECLARATIONS ========================
pub mod facet_orientation;

// Test modules
mod _tests_facet_orientation;

// ======================== FACET ORIENTATION ========================
pub use facet_orientation::{
    facet_normal_alignment, // fn(points, facet, origin) -> f64 - signed alignment of facet normal with origin->facet direction
    orient_facet,           // fn(points, &mut facet, origin) -> Result<()> - flips winding so the normal faces outward
    orient_facets,          // fn(points, &mut [facet], origin) -> Result<()> - normalizes every facet of a graph
};
