use crate::core::fractals::julia::{algorithm::JuliaAlgorithm, colour_mapping::map::JuliaColourMap};

/// Snapshot of everything one interactive render needs.
pub struct RenderRequest {
    pub algorithm: JuliaAlgorithm,
    pub colour_map: Box<dyn JuliaColourMap>,
}
