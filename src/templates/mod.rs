// Templates module: fixed reference structure data and the process-wide registry

// ======================== MODULE DECLARATIONS ========================
pub mod reference_structure;
pub mod registry;
pub mod template_data;

// Test modules
mod _tests_registry;

// ======================== REFERENCE STRUCTURES ========================
pub use reference_structure::{
    FacetGraph,          // struct - canonicalized facet-graph variant (facets, degrees, labelling, fingerprint)
    ReferenceStructure,  // struct - one template with its canonicalized graph variants
    StructureKind,       // enum - the seven reference structure families
};

// ======================== REGISTRY ========================
pub use registry::{
    blueprints,        // fn() -> Vec<TemplateBlueprint> - static enumeration of the seven structures
    Registry,          // struct - process-wide table of canonicalized structures
    TemplateBlueprint, // struct - pre-initialization record of one structure
};
