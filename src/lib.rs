//! Polyhedral template canonicalization library
//!
//! This library prepares the fixed library of reference polyhedral templates
//! (simple cubic, face-centered cubic, hexagonal close-packed, icosahedral,
//! body-centered cubic, diamond-cubic, diamond-hexagonal) used for local
//! structure identification in 3D point clouds. For every template it computes,
//! once per process:
//! - a consistent outward-facing winding for each triangular facet,
//! - per-vertex degrees in the facet-adjacency graph,
//! - a canonical vertex labelling and a fingerprint that is identical for any
//!   two colored facet graphs that are isomorphic as colored graphs.
//!
//! The resulting registry is immutable and shared read-only; a matching routine
//! can then compare candidate neighborhoods against templates with O(1)
//! fingerprint equality tests.

pub mod canonical;
pub mod config;
pub mod error;
pub mod geometry;
pub mod initialization;
pub mod interfaces;
pub mod templates;

pub use canonical::{canonical_form_coloured, graph_degree, Fingerprint};
pub use error::TemplateError;
pub use geometry::{orient_facet, orient_facets};
pub use initialization::{
    create_worker_context, initialize_global, is_initialized, registry, release_worker_context,
    WorkerContext,
};
pub use interfaces::{Facet, VertexColour};
pub use templates::{FacetGraph, ReferenceStructure, Registry, StructureKind};

/// Common result type used throughout the library
pub type Result<T> = std::result::Result<T, TemplateError>;

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }
}
