use std::time::Instant;

use crate::core::actions::cancellation::{CancelToken, Cancelled, NeverCancel};
use crate::core::actions::generate_fractal::generate_fractal_parallel_rayon::generate_fractal_parallel_rayon_cancelable;
use crate::core::actions::generate_fractal::generate_fractal_serial::generate_fractal_serial;
use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::actions::generate_pixel_buffer::generate_pixel_buffer::{
    paint_rows, paint_serial,
};
use crate::core::actions::generate_pixel_buffer::ports::colour_map::ColourMap;
use crate::core::data::complex::Complex;
use crate::core::data::pixel_buffer::PixelBuffer;
use crate::core::data::viewport::Viewport;
use crate::core::fractals::julia::algorithm::JuliaAlgorithm;
use crate::core::fractals::julia::colour_mapping::factory::julia_colour_map_factory;
use crate::core::fractals::julia::colour_mapping::scheme::ColourScheme;
use crate::core::fractals::julia::iteration_config::IterationConfig;
use crate::core::fractals::julia::julia_config::JuliaConfig;

/// Renders the Julia set of `c` into a fresh RGBA buffer.
///
/// Rows are computed in parallel and the call returns once every row is
/// done. There is no cache: equal inputs are recomputed and give
/// byte-identical output.
#[must_use]
pub fn render(
    viewport: Viewport,
    c: Complex,
    iterations: IterationConfig,
    colour_scheme: &ColourScheme,
) -> PixelBuffer {
    let algorithm = JuliaAlgorithm::new(viewport, c, iterations);
    let colour_map = julia_colour_map_factory(colour_scheme, iterations.max_iterations());

    match render_algorithm_cancelable(&algorithm, &colour_map, &NeverCancel) {
        Ok(pixel_buffer) => pixel_buffer,
        Err(Cancelled) => unreachable!("NeverCancel token should never signal cancellation"),
    }
}

#[must_use]
pub fn render_config(config: &JuliaConfig) -> PixelBuffer {
    render(
        config.viewport,
        config.c,
        config.iterations,
        &config.colour_scheme,
    )
}

/// Single-threaded reference path; produces the same bytes as [`render`].
#[must_use]
pub fn render_serial(
    viewport: Viewport,
    c: Complex,
    iterations: IterationConfig,
    colour_scheme: &ColourScheme,
) -> PixelBuffer {
    let algorithm = JuliaAlgorithm::new(viewport, c, iterations);
    let colour_map = julia_colour_map_factory(colour_scheme, iterations.max_iterations());

    let escape_times = generate_fractal_serial(&algorithm);
    let mut pixel_buffer = PixelBuffer::new(viewport.width(), viewport.height());
    paint_serial(&escape_times, &colour_map, pixel_buffer.data_mut());

    pixel_buffer
}

pub fn render_cancelable<C: CancelToken>(
    viewport: Viewport,
    c: Complex,
    iterations: IterationConfig,
    colour_scheme: &ColourScheme,
    cancel: &C,
) -> Result<PixelBuffer, Cancelled> {
    let algorithm = JuliaAlgorithm::new(viewport, c, iterations);
    let colour_map = julia_colour_map_factory(colour_scheme, iterations.max_iterations());

    render_algorithm_cancelable(&algorithm, &colour_map, cancel)
}

/// Renders `algorithm` unless `cancel` fires first. A cancelled render never
/// hands back a partially filled buffer.
pub fn render_algorithm_cancelable<CMap, C>(
    algorithm: &JuliaAlgorithm,
    colour_map: &CMap,
    cancel: &C,
) -> Result<PixelBuffer, Cancelled>
where
    CMap: ColourMap<u32>,
    C: CancelToken,
{
    let viewport = *algorithm.viewport();
    let start = Instant::now();

    let escape_times = generate_fractal_parallel_rayon_cancelable(algorithm, cancel)?;
    let iterate_duration = start.elapsed();

    if cancel.is_cancelled() {
        return Err(Cancelled);
    }

    let mut pixel_buffer = PixelBuffer::new(viewport.width(), viewport.height());
    paint_rows(
        &escape_times,
        colour_map,
        viewport.width() as usize,
        pixel_buffer.data_mut(),
        cancel,
    )?;

    log::debug!(
        "rendered {}x{} julia c={} max_iterations={} (iterate {:?}, total {:?})",
        viewport.width(),
        viewport.height(),
        algorithm.c(),
        algorithm.iterations().max_iterations(),
        iterate_duration,
        start.elapsed()
    );

    Ok(pixel_buffer)
}
