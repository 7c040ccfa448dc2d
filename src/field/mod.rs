//! Sampled distance fields and surface vector estimation.

mod sampler;
mod vectors;

pub use sampler::{FieldSampler, SamplerState};
pub use vectors::{surface_vector_at, surface_vectors, Side, SurfaceVector};
