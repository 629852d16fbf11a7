// Canonical module: colored canonical forms for polyhedral facet graphs
//
// This is the algorithmic core of the library. Given a template's facet list
// (consistently wound), per-vertex degrees, and a vertex colouring, it
// produces a canonical vertex relabelling together with a fingerprint that is
// identical for any two colored-graph-isomorphic facet graphs.

// ======================== MODULE DECLARATIONS ========================
pub mod canonical_form;
pub mod fingerprint;
pub mod graph_degree;


// ======================== CANONICAL FORM ENGINE ========================
pub use canonical_form::{
    canonical_form_coloured, // fn(facets, num_nbrs, degrees, colours) -> Result<(labelling, fingerprint)>
    CanonicalLabelling,      // Vec<u8> - original vertex index -> canonical index
};

// ======================== DEGREE COMPUTATION ========================
pub use graph_degree::graph_degree; // fn(facets, num_nbrs, bound) -> Result<(degrees, max_degree)>

// ======================== FINGERPRINTS ========================
pub use fingerprint::Fingerprint; // struct - 256-bit hash of a canonical graph encoding
