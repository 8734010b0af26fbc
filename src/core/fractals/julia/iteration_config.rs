pub const DEFAULT_MAX_ITERATIONS: u32 = 300;
pub const DEFAULT_ESCAPE_RADIUS: f64 = 2.0;

/// Iteration budget and bail-out radius of the escape-time loop.
///
/// A budget of zero is allowed and makes every point interior.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct IterationConfig {
    max_iterations: u32,
    escape_radius: f64,
}

impl IterationConfig {
    #[must_use]
    pub fn new(max_iterations: u32) -> Self {
        Self {
            max_iterations,
            escape_radius: DEFAULT_ESCAPE_RADIUS,
        }
    }

    #[must_use]
    pub fn with_escape_radius(self, escape_radius: f64) -> Self {
        Self {
            escape_radius,
            ..self
        }
    }

    #[must_use]
    pub fn max_iterations(&self) -> u32 {
        self.max_iterations
    }

    #[must_use]
    pub fn escape_radius(&self) -> f64 {
        self.escape_radius
    }

    #[must_use]
    pub fn escape_radius_squared(&self) -> f64 {
        self.escape_radius * self.escape_radius
    }
}

impl Default for IterationConfig {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_ITERATIONS)
    }
}
