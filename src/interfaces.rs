// Definitions that are used throughout all modules

/// A triangular facet, given as three vertex indices into a template's
/// neighbour list (the centre atom at point index 0 never appears in a facet).
/// Winding order is significant once normalized: traversing the vertices in
/// order yields an outward-facing plane normal.
pub type Facet = [u8; 3];

/// Vertex class label preserved by canonical relabelling. All-zero for the
/// single-role templates; the diamond templates distinguish the four nearest
/// neighbours (colour 1) from the twelve second-shell neighbours (colour 0).
pub type VertexColour = u8;
