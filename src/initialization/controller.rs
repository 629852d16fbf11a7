// Global initialization controller
//
// Canonicalizes every facet graph of every registered reference structure
// exactly once per process. The registry lives in a `OnceCell`, which gives
// the Uninitialized -> Ready transition its happens-before guarantee: any
// thread observing the cell as filled also observes the fully built,
// immutable registry. A failed build leaves the cell empty; the process
// stays Uninitialized and a retry deterministically fails the same way,
// since all inputs are compiled-in reference data.

use log::{debug, info};
use nalgebra::Vector3;
use once_cell::sync::OnceCell;

use crate::canonical::{canonical_form_coloured, graph_degree};
use crate::config::MAX_POINTS;
use crate::error::TemplateError;
use crate::geometry::orient_facets;
use crate::interfaces::Facet;
use crate::templates::{blueprints, FacetGraph, ReferenceStructure, Registry, TemplateBlueprint};
use crate::Result;

static REGISTRY: OnceCell<Registry> = OnceCell::new();

/// Run global initialization: for every structure and every one of its facet
/// lists, compute vertex degrees, normalize facet windings, and compute the
/// canonical labelling and fingerprint.
///
/// Idempotent: once the registry is ready, further calls return `Ok(())`
/// immediately without recomputation. Must complete successfully before
/// [`registry`] or [`super::create_worker_context`] may be called. Safe to
/// call from multiple threads; exactly one performs the build.
pub fn initialize_global() -> Result<()> {
    REGISTRY.get_or_try_init(build_registry).map(|_| ())
}

/// Whether global initialization has completed successfully.
pub fn is_initialized() -> bool {
    REGISTRY.get().is_some()
}

/// The ready registry.
///
/// # Panics
/// Panics when called before [`initialize_global`] has succeeded; that is a
/// caller-side sequencing bug, not a recoverable condition.
pub fn registry() -> &'static Registry {
    REGISTRY
        .get()
        .expect("initialize_global() must complete successfully before the registry is accessed")
}

fn build_registry() -> Result<Registry> {
    let all = blueprints();
    let mut structures = Vec::with_capacity(all.len());
    for blueprint in &all {
        structures.push(build_structure(blueprint)?);
    }
    info!("template registry ready: {} structures", structures.len());
    Ok(Registry::new(structures))
}

fn build_structure(blueprint: &TemplateBlueprint) -> Result<ReferenceStructure> {
    let points = blueprint.points_vec();
    if points.len() > MAX_POINTS {
        return Err(TemplateError::CapacityExceeded {
            what: "template point count",
            value: points.len(),
            max: MAX_POINTS,
        });
    }
    let num_nbrs = blueprint.num_nbrs();
    let origin = Vector3::zeros();

    let mut graphs = Vec::with_capacity(blueprint.facet_lists.len());
    for facet_list in &blueprint.facet_lists {
        let mut facets: Vec<Facet> = facet_list.to_vec();

        let (degrees, max_degree) = graph_degree(&facets, num_nbrs, blueprint.max_degree)?;
        if max_degree != blueprint.max_degree {
            return Err(TemplateError::DegreeBoundMismatch {
                computed: max_degree,
                declared: blueprint.max_degree,
            });
        }

        orient_facets(&points[1..], &mut facets, &origin)?;

        let (labelling, fingerprint) =
            canonical_form_coloured(&facets, num_nbrs, &degrees, blueprint.colouring)?;
        debug!(
            "{}: {} neighbours, {} facets, fingerprint {}",
            blueprint.kind,
            num_nbrs,
            facets.len(),
            fingerprint
        );
        graphs.push(FacetGraph::new(facets, degrees, labelling, fingerprint));
    }

    Ok(ReferenceStructure::new(
        blueprint.kind,
        points,
        blueprint.colouring.to_vec(),
        blueprint.max_degree,
        graphs,
    ))
}
