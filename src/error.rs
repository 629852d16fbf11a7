// Error types for template canonicalization
//
// All variants describe configuration errors: the reference template data is
// compiled in, so any failure here is deterministic and fatal to
// initialization. There is no retry policy. Precondition violations (e.g.
// requesting a worker context before initialization) are caller-side
// sequencing bugs and panic instead of returning one of these values.

use thiserror::Error;

/// Unified error type for template preparation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TemplateError {
    /// A reference facet has zero area or its plane passes through the
    /// template origin, so no outward winding exists.
    #[error("degenerate facet [{0}, {1}, {2}] in reference template")]
    DegenerateFacet(u8, u8, u8),

    /// A facet references a vertex outside the template's neighbour range.
    #[error("facet vertex {vertex} out of range for {num_nbrs} neighbours")]
    VertexOutOfRange { vertex: u8, num_nbrs: usize },

    /// A vertex participates in more facets than the structure declares.
    #[error("vertex {vertex} has degree {degree}, exceeding declared bound {bound}")]
    DegreeBoundExceeded { vertex: usize, degree: u8, bound: u8 },

    /// Computed maximum degree disagrees with the structure's declared bound.
    #[error("computed max degree {computed} does not match declared bound {declared}")]
    DegreeBoundMismatch { computed: u8, declared: u8 },

    /// The facet list is not a closed orientable triangulation: a directed
    /// edge is claimed by two facets, or lacks its reverse.
    #[error("facet list is not a closed triangulation at edge ({0}, {1})")]
    InconsistentFacets(u8, u8),

    /// Vertex degrees disagree with the facet-adjacency structure.
    #[error("vertex {vertex} has {incident} incident facets but declared degree {degree}")]
    DegreeMismatch { vertex: usize, incident: u8, degree: u8 },

    /// A fixed capacity bound was exceeded by the input.
    #[error("{what} {value} exceeds capacity {max}")]
    CapacityExceeded {
        what: &'static str,
        value: usize,
        max: usize,
    },

    /// A per-vertex input array does not cover every vertex.
    #[error("{what} length {len} shorter than neighbour count {num_nbrs}")]
    InputLengthMismatch {
        what: &'static str,
        len: usize,
        num_nbrs: usize,
    },

    /// The colouring cannot be folded into the one-byte canonical code
    /// alphabet for this vertex count.
    #[error("colouring with max colour {max_colour} unrepresentable over {num_nbrs} vertices")]
    UnrepresentableColouring { max_colour: u8, num_nbrs: usize },

    /// No canonical labelling could be constructed (empty facet list).
    #[error("no canonical labelling exists for the facet graph")]
    NoCanonicalLabelling,
}
