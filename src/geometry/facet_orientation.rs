// Facet winding normalization
//
// Reference facet lists are stored with unspecified winding. Before a facet
// graph is canonicalized, every facet is reoriented so that traversing its
// three vertices in order yields a plane normal pointing away from the
// template origin (the centre atom). The canonical traversal relies on this:
// a consistent outward winding makes the directed facet map well defined.

use nalgebra::Vector3;

use crate::config::FACET_AREA_TOLERANCE;
use crate::error::TemplateError;
use crate::interfaces::Facet;
use crate::Result;

/// Signed alignment of the facet's plane normal with the direction from
/// `origin` to the facet. Positive means the winding already faces outward.
///
/// For `origin` at the template centre this equals `det[p0, p1, p2]`, six
/// times the signed volume of the tetrahedron spanned with the origin, so the
/// sign is invariant under any radial rescaling of the vertices.
///
/// Facet indices must be in range for `points`; [`orient_facet`] validates
/// them before evaluating the alignment.
pub fn facet_normal_alignment(
    points: &[Vector3<f64>],
    facet: &Facet,
    origin: &Vector3<f64>,
) -> f64 {
    let p0 = points[facet[0] as usize] - origin;
    let p1 = points[facet[1] as usize] - origin;
    let p2 = points[facet[2] as usize] - origin;

    let normal = (p1 - p0).cross(&(p2 - p0));
    let centroid = (p0 + p1 + p2) / 3.0;
    normal.dot(&centroid)
}

/// Reorient a single facet in place so its outward normal points away from
/// `origin`, swapping two vertex indices when the winding is anti-parallel.
///
/// `points` is the template's neighbour list; facet indices refer into it
/// and are range-checked. A zero-area facet, or one whose plane contains the
/// origin, admits no outward winding and is a fatal configuration error:
/// reference templates are fixed data and must never degenerate.
pub fn orient_facet(
    points: &[Vector3<f64>],
    facet: &mut Facet,
    origin: &Vector3<f64>,
) -> Result<()> {
    for &vertex in facet.iter() {
        if vertex as usize >= points.len() {
            return Err(TemplateError::VertexOutOfRange {
                vertex,
                num_nbrs: points.len(),
            });
        }
    }
    let p0 = points[facet[0] as usize];
    let p1 = points[facet[1] as usize];
    let p2 = points[facet[2] as usize];
    let normal = (p1 - p0).cross(&(p2 - p0));
    if normal.norm() < FACET_AREA_TOLERANCE {
        return Err(TemplateError::DegenerateFacet(facet[0], facet[1], facet[2]));
    }

    let alignment = facet_normal_alignment(points, facet, origin);
    if alignment.abs() < FACET_AREA_TOLERANCE {
        // Plane through the origin: outward is undefined.
        return Err(TemplateError::DegenerateFacet(facet[0], facet[1], facet[2]));
    }
    if alignment < 0.0 {
        facet.swap(1, 2);
    }
    Ok(())
}

/// Normalize the winding of every facet of a graph. Facets are independent,
/// so the result does not depend on their order in the list.
pub fn orient_facets(
    points: &[Vector3<f64>],
    facets: &mut [Facet],
    origin: &Vector3<f64>,
) -> Result<()> {
    for facet in facets.iter_mut() {
        orient_facet(points, facet, origin)?;
    }
    Ok(())
}
