use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::complex::Complex;
use crate::core::data::point::Point;
use crate::core::data::viewport::Viewport;
use crate::core::fractals::julia::iteration_config::IterationConfig;
use crate::core::util::pixel_to_complex_coords::pixel_to_complex_coords;
use std::ops::ControlFlow;

/// Escape-time iteration of `z → z² + c` seeded at each pixel's position.
#[derive(Debug, Clone, PartialEq)]
pub struct JuliaAlgorithm {
    viewport: Viewport,
    c: Complex,
    iterations: IterationConfig,
}

impl FractalAlgorithm for JuliaAlgorithm {
    type Success = u32;

    fn compute(&self, pixel: Point) -> Self::Success {
        self.escape_time(pixel_to_complex_coords(pixel, &self.viewport))
    }

    fn viewport(&self) -> &Viewport {
        &self.viewport
    }
}

impl JuliaAlgorithm {
    #[must_use]
    pub fn new(viewport: Viewport, c: Complex, iterations: IterationConfig) -> Self {
        Self {
            viewport,
            c,
            iterations,
        }
    }

    #[must_use]
    pub fn c(&self) -> Complex {
        self.c
    }

    #[must_use]
    pub fn iterations(&self) -> IterationConfig {
        self.iterations
    }

    /// Number of steps taken before `|z|` reached the escape radius, or the
    /// full budget if it never did.
    ///
    /// The bound test is written as `|z|² < r²` so a NaN orbit counts as
    /// escaped instead of looping to the budget.
    #[must_use]
    pub fn escape_time(&self, seed: Complex) -> u32 {
        let max_iterations = self.iterations.max_iterations();
        let threshold = self.iterations.escape_radius_squared();
        let c = self.c;

        let iterations = (0..max_iterations).try_fold(seed, |z, iteration| {
            if z.magnitude_squared() < threshold {
                ControlFlow::Continue(z.square() + c)
            } else {
                ControlFlow::Break(iteration)
            }
        });

        match iterations {
            ControlFlow::Break(iteration) => iteration,
            ControlFlow::Continue(_) => max_iterations,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::fractals::julia::presets::BASELINE;

    fn algorithm(c: Complex, max_iterations: u32) -> JuliaAlgorithm {
        JuliaAlgorithm::new(
            Viewport::default(),
            c,
            IterationConfig::new(max_iterations),
        )
    }

    #[test]
    fn test_baseline_centre_pixel_escape_time() {
        let algorithm = algorithm(BASELINE.c, 300);

        assert_eq!(algorithm.compute(Point { x: 300, y: 300 }), 96);
    }

    #[test]
    fn test_baseline_centre_escape_time_is_stable_across_budgets() {
        assert_eq!(algorithm(BASELINE.c, 500).escape_time(Complex::ZERO), 96);
        assert_eq!(algorithm(BASELINE.c, 97).escape_time(Complex::ZERO), 96);
        assert_eq!(algorithm(BASELINE.c, 96).escape_time(Complex::ZERO), 96);
        assert_eq!(algorithm(BASELINE.c, 50).escape_time(Complex::ZERO), 50);
    }

    #[test]
    fn test_seed_outside_radius_escapes_immediately() {
        let algorithm = algorithm(Complex::ZERO, 300);

        assert_eq!(algorithm.escape_time(Complex::new(2.0, 0.0)), 0);
        assert_eq!(algorithm.escape_time(Complex::new(-3.0, 1.0)), 0);
    }

    #[test]
    fn test_zero_c_unit_disk_never_escapes() {
        let algorithm = algorithm(Complex::ZERO, 300);

        assert_eq!(algorithm.escape_time(Complex::new(0.5, 0.5)), 300);
        assert_eq!(algorithm.escape_time(Complex::new(-0.9, 0.0)), 300);
    }

    #[test]
    fn test_zero_c_outside_unit_circle_escapes_quickly() {
        let algorithm = algorithm(Complex::ZERO, 300);

        // 1.1 -> 1.21 -> 1.4641 -> 2.14...
        assert_eq!(algorithm.escape_time(Complex::new(1.1, 0.0)), 3);
        // 1.5 -> 2.25
        assert_eq!(algorithm.escape_time(Complex::new(1.5, 0.0)), 1);
    }

    #[test]
    fn test_zero_budget_reports_zero_iterations() {
        let algorithm = algorithm(BASELINE.c, 0);

        assert_eq!(algorithm.escape_time(Complex::ZERO), 0);
        assert_eq!(algorithm.escape_time(Complex::new(5.0, 5.0)), 0);
    }

    #[test]
    fn test_nan_parameter_escapes_after_first_step() {
        let algorithm = algorithm(Complex::new(f64::NAN, 0.0), 300);

        assert_eq!(algorithm.escape_time(Complex::ZERO), 1);
    }

    #[test]
    fn test_infinite_parameter_escapes_after_first_step() {
        let algorithm = algorithm(Complex::new(f64::INFINITY, 0.0), 300);

        assert_eq!(algorithm.escape_time(Complex::new(0.1, 0.1)), 1);
    }

    #[test]
    fn test_nan_seed_escapes_immediately() {
        let algorithm = algorithm(BASELINE.c, 300);

        assert_eq!(algorithm.escape_time(Complex::new(f64::NAN, f64::NAN)), 0);
    }

    #[test]
    fn test_larger_escape_radius_takes_longer() {
        let narrow = algorithm(Complex::ZERO, 300);
        let wide = JuliaAlgorithm::new(
            Viewport::default(),
            Complex::ZERO,
            IterationConfig::new(300).with_escape_radius(10.0),
        );
        let seed = Complex::new(1.5, 0.0);

        assert!(wide.escape_time(seed) > narrow.escape_time(seed));
    }
}
