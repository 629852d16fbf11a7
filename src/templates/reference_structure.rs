// Reference structure records
//
// `ReferenceStructure` is the post-initialization form of one template: its
// point set, colouring, declared bounds, and one or more facet-graph variants
// each carrying a canonical labelling and fingerprint. Once built by the
// initialization controller the records are immutable for the remainder of
// the process and may be read concurrently without synchronization.

use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

use crate::canonical::{CanonicalLabelling, Fingerprint};
use crate::interfaces::{Facet, VertexColour};

/// The seven reference structure families.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StructureKind {
    SimpleCubic,
    FaceCenteredCubic,
    HexagonalClosePacked,
    Icosahedral,
    BodyCenteredCubic,
    DiamondCubic,
    DiamondHexagonal,
}

impl StructureKind {
    /// All kinds, in registry order.
    pub const ALL: [StructureKind; 7] = [
        StructureKind::SimpleCubic,
        StructureKind::FaceCenteredCubic,
        StructureKind::HexagonalClosePacked,
        StructureKind::Icosahedral,
        StructureKind::BodyCenteredCubic,
        StructureKind::DiamondCubic,
        StructureKind::DiamondHexagonal,
    ];

    /// Conventional short name (sc, fcc, hcp, ico, bcc, dcub, dhex).
    pub fn name(&self) -> &'static str {
        match self {
            StructureKind::SimpleCubic => "sc",
            StructureKind::FaceCenteredCubic => "fcc",
            StructureKind::HexagonalClosePacked => "hcp",
            StructureKind::Icosahedral => "ico",
            StructureKind::BodyCenteredCubic => "bcc",
            StructureKind::DiamondCubic => "dcub",
            StructureKind::DiamondHexagonal => "dhex",
        }
    }
}

impl std::fmt::Display for StructureKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// One canonicalized facet-graph variant of a reference structure.
///
/// Exposed read-only to the external matcher: the normalized (outward-wound)
/// facet list, the per-vertex degree array, the canonical labelling, and the
/// fingerprint used for O(1) topology comparison.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FacetGraph {
    facets: Vec<Facet>,
    degrees: Vec<u8>,
    canonical_labelling: CanonicalLabelling,
    fingerprint: Fingerprint,
}

impl FacetGraph {
    pub fn new(
        facets: Vec<Facet>,
        degrees: Vec<u8>,
        canonical_labelling: CanonicalLabelling,
        fingerprint: Fingerprint,
    ) -> Self {
        Self {
            facets,
            degrees,
            canonical_labelling,
            fingerprint,
        }
    }

    /// Normalized facet list: every winding faces outward.
    pub fn facets(&self) -> &[Facet] {
        &self.facets
    }

    /// Facet-incidence degree of each vertex.
    pub fn degrees(&self) -> &[u8] {
        &self.degrees
    }

    /// Canonical relabelling: entry `v` is the canonical index of vertex `v`.
    pub fn canonical_labelling(&self) -> &[u8] {
        &self.canonical_labelling
    }

    pub fn fingerprint(&self) -> Fingerprint {
        self.fingerprint
    }
}

/// A reference structure: template geometry plus its canonicalized facet
/// graph variants.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReferenceStructure {
    kind: StructureKind,
    points: Vec<Vector3<f64>>,
    colouring: Vec<VertexColour>,
    max_degree: u8,
    graphs: Vec<FacetGraph>,
}

impl ReferenceStructure {
    pub fn new(
        kind: StructureKind,
        points: Vec<Vector3<f64>>,
        colouring: Vec<VertexColour>,
        max_degree: u8,
        graphs: Vec<FacetGraph>,
    ) -> Self {
        Self {
            kind,
            points,
            colouring,
            max_degree,
            graphs,
        }
    }

    pub fn kind(&self) -> StructureKind {
        self.kind
    }

    /// Full template point set; index 0 is the centre atom.
    pub fn points(&self) -> &[Vector3<f64>] {
        &self.points
    }

    /// Neighbour points only, the vertex set of the facet graphs.
    pub fn neighbour_points(&self) -> &[Vector3<f64>] {
        &self.points[1..]
    }

    pub fn num_nbrs(&self) -> usize {
        self.points.len() - 1
    }

    pub fn num_facets(&self) -> usize {
        self.graphs.first().map_or(0, |g| g.facets().len())
    }

    /// Vertex colouring shared by all graph variants.
    pub fn colouring(&self) -> &[VertexColour] {
        &self.colouring
    }

    /// Declared maximum vertex degree; initialization verifies the computed
    /// maximum equals this value.
    pub fn max_degree(&self) -> u8 {
        self.max_degree
    }

    /// Symmetry-equivalent facet-graph variants, each with its own canonical
    /// labelling and fingerprint.
    pub fn graphs(&self) -> &[FacetGraph] {
        &self.graphs
    }
}
