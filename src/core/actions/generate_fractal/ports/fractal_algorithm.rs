use crate::core::data::point::Point;
use crate::core::data::viewport::Viewport;

/// A per-pixel computation over a viewport.
pub trait FractalAlgorithm {
    type Success;

    fn compute(&self, pixel: Point) -> Self::Success;

    fn viewport(&self) -> &Viewport;
}
