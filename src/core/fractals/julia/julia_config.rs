use crate::controllers::interactive::data::render_request::RenderRequest;
use crate::core::data::complex::Complex;
use crate::core::data::viewport::Viewport;
use crate::core::fractals::julia::{
    algorithm::JuliaAlgorithm,
    colour_mapping::{factory::julia_colour_map_factory, scheme::ColourScheme},
    iteration_config::IterationConfig,
    presets::BASELINE,
};

/// Everything a host needs to keep to re-render the Julia view.
#[derive(Debug, Clone, PartialEq)]
pub struct JuliaConfig {
    pub viewport: Viewport,
    pub c: Complex,
    pub iterations: IterationConfig,
    pub colour_scheme: ColourScheme,
}

impl Default for JuliaConfig {
    fn default() -> Self {
        Self {
            viewport: Viewport::default(),
            c: BASELINE.c,
            iterations: IterationConfig::default(),
            colour_scheme: ColourScheme::default(),
        }
    }
}

impl JuliaConfig {
    #[must_use]
    pub fn algorithm(&self) -> JuliaAlgorithm {
        JuliaAlgorithm::new(self.viewport, self.c, self.iterations)
    }

    #[must_use]
    pub fn build_render_request(&self) -> RenderRequest {
        RenderRequest {
            algorithm: self.algorithm(),
            colour_map: julia_colour_map_factory(
                &self.colour_scheme,
                self.iterations.max_iterations(),
            ),
        }
    }
}
