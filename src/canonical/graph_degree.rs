// Per-vertex degree computation
//
// The degree of a vertex is the number of facets incident to it, which for a
// closed triangulation equals its neighbour count in the facet-adjacency
// graph. Degrees are computed once per facet graph and validated against the
// structure's declared bound; exceeding the bound means the compiled-in
// reference data is corrupt and initialization must abort.

use crate::error::TemplateError;
use crate::interfaces::Facet;
use crate::Result;

/// Compute per-vertex facet-incidence degrees for a facet list over
/// `num_nbrs` vertices, returning the degree array and the maximum observed
/// degree.
///
/// Fails with a configuration error if a facet references a vertex outside
/// `0..num_nbrs` or if any degree exceeds `bound`.
pub fn graph_degree(facets: &[Facet], num_nbrs: usize, bound: u8) -> Result<(Vec<u8>, u8)> {
    let mut degrees = vec![0u8; num_nbrs];

    for facet in facets {
        for &vertex in facet {
            let index = vertex as usize;
            if index >= num_nbrs {
                return Err(TemplateError::VertexOutOfRange {
                    vertex,
                    num_nbrs,
                });
            }
            degrees[index] += 1;
            if degrees[index] > bound {
                return Err(TemplateError::DegreeBoundExceeded {
                    vertex: index,
                    degree: degrees[index],
                    bound,
                });
            }
        }
    }

    let max_degree = degrees.iter().copied().max().unwrap_or(0);
    Ok((degrees, max_degree))
}
