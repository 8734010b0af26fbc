use crate::core::data::colour::Colour;

/// Turns one per-pixel fractal result into a colour.
///
/// Implementations are total: every input value has a colour.
pub trait ColourMap<T>: Send + Sync {
    fn map(&self, value: T) -> Colour;

    fn display_name(&self) -> &str;
}
