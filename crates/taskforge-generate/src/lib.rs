//! Deterministic dataset generation for the Taskforge project-management domain.
//!
//! The pipeline runs one generator per entity in dependency order, threading
//! identifier lists forward, and produces an in-memory [`taskforge_core::Dataset`]
//! ready for the persistence sink. All randomness flows through per-stage
//! ChaCha8 sub-sequences derived from the run seed.

pub mod dates;
pub mod errors;
pub mod generators;
pub mod pipeline;
pub mod pools;
pub mod rng;

pub use errors::GenerationError;
pub use pipeline::{Pipeline, Stage};
