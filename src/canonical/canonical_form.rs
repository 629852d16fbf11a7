// Colored canonical form of a polyhedral facet graph
//
// The facet list of a template, consistently wound, is a closed oriented
// triangulation of the sphere. Its canonical form is computed by Weinberg's
// algorithm for planar triangulations: from every admissible directed start
// edge, walk all 2E directed edges by a fixed turning rule, emitting each
// visited vertex as `colour * n + discovery_label`. The lexicographically
// smallest emitted code over all walks is the canonical encoding; the walk
// that produced it defines the canonical vertex labelling, and the code's
// hash is the graph's fingerprint.
//
// Tie-break rule: lexicographic minimum over codes, first-encountered walk
// winning exact ties. In the presence of true automorphisms several walks
// produce the identical minimal code; any of their labellings is equally
// valid and the rule picks one reproducibly. No randomness, no
// iteration-order dependence: start edges are tried in ascending (a, b)
// order and the turning rule is fixed by the facet windings.
//
// Walk rules, for an arrival at vertex `b` along directed edge (a, b):
// - `b` not seen before: leave along the edge immediately clockwise of the
//   reversed entry edge, i.e. towards `common[b][a]`.
// - `b` seen, reverse edge (b, a) untraversed: leave along (b, a).
// - otherwise: scan clockwise from `common[b][a]` for the first untraversed
//   exit edge.

use std::cmp::Ordering;

use log::trace;

use crate::canonical::fingerprint::Fingerprint;
use crate::config::{MAX_FACETS, MAX_NBRS};
use crate::error::TemplateError;
use crate::interfaces::Facet;
use crate::Result;

/// Canonical relabelling: entry `v` holds the canonical index assigned to
/// original vertex `v`.
pub type CanonicalLabelling = Vec<u8>;

/// Sentinel for "no vertex" in the facet map and label arrays.
const NO_VERTEX: u8 = u8::MAX;

/// Directed facet map of a consistently wound triangulation.
///
/// `common[a][b]` is the third vertex of the facet whose boundary traverses
/// the directed edge (a, b); equivalently, the vertex reached by turning
/// clockwise around `b` from the edge (b, a).
type FacetMap = [[u8; MAX_NBRS]; MAX_NBRS];

/// Compute the canonical vertex labelling and fingerprint of a colored facet
/// graph.
///
/// Inputs:
/// - `facets`: consistently wound facet list (see [`crate::orient_facets`]),
/// - `num_nbrs`: vertex count of the graph,
/// - `degrees`: per-vertex facet-incidence degrees (see
///   [`crate::graph_degree`]), cross-checked against the facet map,
/// - `colours`: per-vertex class labels; only same-coloured vertices may be
///   exchanged by the canonical relabelling.
///
/// Repeated invocations on the same inputs produce the identical labelling
/// and fingerprint, across processes. Two colored-graph-isomorphic inputs
/// produce equal fingerprints; non-isomorphic inputs produce distinct ones,
/// up to the 256-bit hash width.
pub fn canonical_form_coloured(
    facets: &[Facet],
    num_nbrs: usize,
    degrees: &[u8],
    colours: &[u8],
) -> Result<(CanonicalLabelling, Fingerprint)> {
    if facets.is_empty() || num_nbrs == 0 {
        return Err(TemplateError::NoCanonicalLabelling);
    }
    if num_nbrs > MAX_NBRS {
        return Err(TemplateError::CapacityExceeded {
            what: "neighbour count",
            value: num_nbrs,
            max: MAX_NBRS,
        });
    }
    if facets.len() > MAX_FACETS {
        return Err(TemplateError::CapacityExceeded {
            what: "facet count",
            value: facets.len(),
            max: MAX_FACETS,
        });
    }
    if degrees.len() < num_nbrs {
        return Err(TemplateError::InputLengthMismatch {
            what: "degree array",
            len: degrees.len(),
            num_nbrs,
        });
    }
    if colours.len() < num_nbrs {
        return Err(TemplateError::InputLengthMismatch {
            what: "colour array",
            len: colours.len(),
            num_nbrs,
        });
    }

    // Code entries are colour * num_nbrs + label; everything must stay below
    // the NO_VERTEX sentinel.
    let max_colour = colours[..num_nbrs].iter().copied().max().unwrap_or(0);
    if (max_colour as usize + 1) * num_nbrs > NO_VERTEX as usize {
        return Err(TemplateError::UnrepresentableColouring {
            max_colour,
            num_nbrs,
        });
    }

    let common = build_facet_map(facets, num_nbrs)?;
    check_degrees(&common, degrees, num_nbrs)?;

    let num_edges = facets.len() * 3 / 2;
    let code_len = 2 * num_edges + 1;

    let mut best_code = vec![u8::MAX; code_len];
    let mut best_labelling: CanonicalLabelling = vec![NO_VERTEX; num_nbrs];
    let mut found = false;

    // Every walk's first entry is colour[start] * num_nbrs, so only vertices
    // of minimal colour can begin a minimal code.
    let min_colour = colours[..num_nbrs].iter().copied().min().unwrap_or(0);

    for a in 0..num_nbrs {
        if colours[a] != min_colour {
            continue;
        }
        for b in 0..num_nbrs {
            if common[a][b] == NO_VERTEX {
                continue;
            }
            if weinberg_walk(
                &common,
                colours,
                num_nbrs,
                num_edges,
                a,
                b,
                &mut best_code,
                &mut best_labelling,
            )? {
                found = true;
            }
        }
    }

    if !found {
        return Err(TemplateError::NoCanonicalLabelling);
    }

    let fingerprint = Fingerprint::of_code(&best_code);
    trace!(
        "canonical form over {} vertices / {} facets: fingerprint {}",
        num_nbrs,
        facets.len(),
        fingerprint
    );
    Ok((best_labelling, fingerprint))
}

/// Build the directed facet map, validating that the facet list is a closed
/// orientable triangulation: each directed edge belongs to exactly one facet
/// and carries its reverse in an adjacent facet.
fn build_facet_map(facets: &[Facet], num_nbrs: usize) -> Result<FacetMap> {
    let mut common = [[NO_VERTEX; MAX_NBRS]; MAX_NBRS];

    for facet in facets {
        let [a, b, c] = *facet;
        for (x, y, z) in [(a, b, c), (b, c, a), (c, a, b)] {
            if x as usize >= num_nbrs || y as usize >= num_nbrs || z as usize >= num_nbrs {
                return Err(TemplateError::VertexOutOfRange {
                    vertex: x.max(y).max(z),
                    num_nbrs,
                });
            }
            if x == y || y == z || z == x {
                return Err(TemplateError::InconsistentFacets(x, y));
            }
            if common[x as usize][y as usize] != NO_VERTEX {
                return Err(TemplateError::InconsistentFacets(x, y));
            }
            common[x as usize][y as usize] = z;
        }
    }

    for a in 0..num_nbrs {
        for b in 0..num_nbrs {
            if common[a][b] != NO_VERTEX && common[b][a] == NO_VERTEX {
                return Err(TemplateError::InconsistentFacets(b as u8, a as u8));
            }
        }
    }

    Ok(common)
}

/// Cross-check the supplied degree array against the facet map: each vertex's
/// out-edge count must equal its facet-incidence degree.
fn check_degrees(common: &FacetMap, degrees: &[u8], num_nbrs: usize) -> Result<()> {
    for vertex in 0..num_nbrs {
        let incident = common[vertex][..num_nbrs]
            .iter()
            .filter(|&&c| c != NO_VERTEX)
            .count() as u8;
        if incident != degrees[vertex] {
            return Err(TemplateError::DegreeMismatch {
                vertex,
                incident,
                degree: degrees[vertex],
            });
        }
    }
    Ok(())
}

fn exit_edge(common: &FacetMap, from: u8, towards: u8) -> Result<u8> {
    let next = common[from as usize][towards as usize];
    if next == NO_VERTEX {
        return Err(TemplateError::InconsistentFacets(from, towards));
    }
    Ok(next)
}

/// Run one Weinberg walk from the directed edge (start_a, start_b). Returns
/// `true` when the walk produced a strictly smaller code than `best_code`
/// and both outputs were updated; the walk is abandoned as soon as its code
/// is lexicographically beaten.
#[allow(clippy::too_many_arguments)]
fn weinberg_walk(
    common: &FacetMap,
    colours: &[u8],
    num_nbrs: usize,
    num_edges: usize,
    start_a: usize,
    start_b: usize,
    best_code: &mut [u8],
    best_labelling: &mut [u8],
) -> Result<bool> {
    let encode = |colour: u8, label: u8| colour * num_nbrs as u8 + label;

    let mut labels = [NO_VERTEX; MAX_NBRS];
    let mut used = [[false; MAX_NBRS]; MAX_NBRS];
    let mut code: Vec<u8> = Vec::with_capacity(2 * num_edges + 1);
    let mut next_label: u8 = 0;
    let mut winning = false;

    labels[start_a] = next_label;
    next_label += 1;
    let first = encode(colours[start_a], labels[start_a]);
    match first.cmp(&best_code[0]) {
        Ordering::Greater => return Ok(false),
        Ordering::Less => winning = true,
        Ordering::Equal => {}
    }
    code.push(first);

    let (mut a, mut b) = (start_a, start_b);
    for step in 0..2 * num_edges {
        let is_new = labels[b] == NO_VERTEX;
        if is_new {
            labels[b] = next_label;
            next_label += 1;
        }
        let entry = encode(colours[b], labels[b]);
        if !winning {
            match entry.cmp(&best_code[step + 1]) {
                Ordering::Greater => return Ok(false),
                Ordering::Less => winning = true,
                Ordering::Equal => {}
            }
        }
        code.push(entry);
        used[a][b] = true;
        if step + 1 == 2 * num_edges {
            break;
        }

        let next = if is_new {
            exit_edge(common, b as u8, a as u8)?
        } else if !used[b][a] {
            a as u8
        } else {
            let mut candidate = exit_edge(common, b as u8, a as u8)?;
            let mut hops = 0;
            while used[b][candidate as usize] {
                candidate = exit_edge(common, b as u8, candidate)?;
                hops += 1;
                if hops > num_nbrs {
                    return Err(TemplateError::InconsistentFacets(b as u8, candidate));
                }
            }
            candidate
        };
        a = b;
        b = next as usize;
    }

    if !winning {
        return Ok(false);
    }
    // A closed triangulation is connected, so a full walk labels every vertex.
    if next_label as usize != num_nbrs {
        return Err(TemplateError::NoCanonicalLabelling);
    }
    best_code.copy_from_slice(&code);
    best_labelling.copy_from_slice(&labels[..num_nbrs]);
    Ok(true)
}
