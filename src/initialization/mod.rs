// Initialization module: one-shot global setup and per-worker geometry contexts

// ======================== MODULE DECLARATIONS ========================
pub mod controller;
pub mod worker_context;


// ======================== GLOBAL INITIALIZATION ========================
pub use controller::{
    initialize_global, // fn() -> Result<()> - idempotent one-shot canonicalization of every registered template
    is_initialized,    // fn() -> bool - whether the registry is ready
    registry,          // fn() -> &'static Registry - the ready registry; panics when uninitialized
};

// ======================== WORKER CONTEXTS ========================
pub use worker_context::{
    create_worker_context,  // fn() -> WorkerContext - per-worker scratch arena; panics when uninitialized
    release_worker_context, // fn(WorkerContext) - consumes and releases a context
    WorkerContext,          // struct - owned per-worker geometry buffers
};
