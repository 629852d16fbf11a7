// Reference structure registry
//
// Statically enumerates the seven reference structures as blueprints (fixed
// point sets, colourings, declared degree bounds, and raw facet lists) and
// defines the `Registry` the initialization controller assembles from them.

use nalgebra::Vector3;

use crate::config::MAX_NBRS;
use crate::interfaces::VertexColour;
use crate::templates::reference_structure::{ReferenceStructure, StructureKind};
use crate::templates::template_data;

// ======================== DEFAULT COLOURINGS ========================

/// All neighbours play the same role in the five single-shell structures.
const SINGLE_ROLE_COLOURING: [VertexColour; MAX_NBRS] = [0; MAX_NBRS];

/// Diamond structures distinguish the four nearest neighbours (the opposite
/// sublattice) from the twelve second-shell neighbours (the centre's own
/// sublattice).
const DIAMOND_COLOURING: [VertexColour; MAX_NBRS] =
    [1, 1, 1, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0];

// ======================== BLUEPRINTS ========================

/// Pre-initialization record of one reference structure: everything the
/// controller needs to build a [`ReferenceStructure`].
pub struct TemplateBlueprint {
    pub kind: StructureKind,
    pub points: &'static [[f64; 3]],
    pub colouring: &'static [VertexColour],
    pub max_degree: u8,
    /// One or more symmetry-equivalent facet lists; all must canonicalize to
    /// the same fingerprint.
    pub facet_lists: Vec<&'static [[u8; 3]]>,
}

impl TemplateBlueprint {
    pub fn num_nbrs(&self) -> usize {
        self.points.len() - 1
    }

    /// Template points as vectors; index 0 is the centre atom.
    pub fn points_vec(&self) -> Vec<Vector3<f64>> {
        self.points
            .iter()
            .map(|p| Vector3::new(p[0], p[1], p[2]))
            .collect()
    }
}

/// The seven reference structures, in [`StructureKind::ALL`] order.
pub fn blueprints() -> Vec<TemplateBlueprint> {
    vec![
        TemplateBlueprint {
            kind: StructureKind::SimpleCubic,
            points: &template_data::POINTS_SC,
            colouring: &SINGLE_ROLE_COLOURING[..6],
            max_degree: 4,
            facet_lists: vec![&template_data::FACETS_SC],
        },
        TemplateBlueprint {
            kind: StructureKind::FaceCenteredCubic,
            points: &template_data::POINTS_FCC,
            colouring: &SINGLE_ROLE_COLOURING[..12],
            max_degree: 6,
            facet_lists: vec![&template_data::FACETS_FCC],
        },
        TemplateBlueprint {
            kind: StructureKind::HexagonalClosePacked,
            points: &template_data::POINTS_HCP,
            colouring: &SINGLE_ROLE_COLOURING[..12],
            max_degree: 6,
            facet_lists: vec![&template_data::FACETS_HCP],
        },
        TemplateBlueprint {
            kind: StructureKind::Icosahedral,
            points: &template_data::POINTS_ICO,
            colouring: &SINGLE_ROLE_COLOURING[..12],
            max_degree: 5,
            facet_lists: vec![&template_data::FACETS_ICO],
        },
        TemplateBlueprint {
            kind: StructureKind::BodyCenteredCubic,
            points: &template_data::POINTS_BCC,
            colouring: &SINGLE_ROLE_COLOURING[..14],
            max_degree: 6,
            facet_lists: vec![&template_data::FACETS_BCC, &template_data::FACETS_BCC_ALT],
        },
        TemplateBlueprint {
            kind: StructureKind::DiamondCubic,
            points: &template_data::POINTS_DCUB,
            colouring: &DIAMOND_COLOURING,
            max_degree: 7,
            facet_lists: vec![&template_data::FACETS_DCUB],
        },
        TemplateBlueprint {
            kind: StructureKind::DiamondHexagonal,
            points: &template_data::POINTS_DHEX,
            colouring: &DIAMOND_COLOURING,
            max_degree: 7,
            facet_lists: vec![&template_data::FACETS_DHEX],
        },
    ]
}

// ======================== REGISTRY ========================

/// The process-wide table of canonicalized reference structures. Built once
/// by the initialization controller, then read-only.
#[derive(Debug, Clone)]
pub struct Registry {
    structures: Vec<ReferenceStructure>,
}

impl Registry {
    pub(crate) fn new(structures: Vec<ReferenceStructure>) -> Self {
        Self { structures }
    }

    /// All reference structures, in [`StructureKind::ALL`] order.
    pub fn structures(&self) -> &[ReferenceStructure] {
        &self.structures
    }

    /// Look up one structure by kind.
    pub fn get(&self, kind: StructureKind) -> &ReferenceStructure {
        // Registry order mirrors StructureKind::ALL; linear scan over seven
        // entries keeps the lookup index-free.
        self.structures
            .iter()
            .find(|s| s.kind() == kind)
            .expect("registry holds every structure kind")
    }

    pub fn iter(&self) -> impl Iterator<Item = &ReferenceStructure> {
        self.structures.iter()
    }

    pub fn len(&self) -> usize {
        self.structures.len()
    }

    pub fn is_empty(&self) -> bool {
        self.structures.is_empty()
    }
}
