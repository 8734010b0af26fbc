use crate::core::actions::generate_pixel_buffer::ports::colour_map::ColourMap;
use crate::core::data::colour::Colour;
use crate::core::fractals::julia::colour_mapping::intensity::{escape_fraction, to_channel};
use crate::core::fractals::julia::colour_mapping::kinds::JuliaColourMapKinds;
use crate::core::fractals::julia::colour_mapping::map::JuliaColourMap;

/// Interior black, escaping points `(0, 0, v)` with `v` proportional to the
/// escape iteration.
#[derive(Debug)]
pub struct JuliaBlueGradient {
    max_iterations: u32,
}

impl ColourMap<u32> for JuliaBlueGradient {
    fn map(&self, iterations: u32) -> Colour {
        match escape_fraction(iterations, self.max_iterations) {
            None => Colour::BLACK,
            Some(t) => Colour {
                r: 0,
                g: 0,
                b: to_channel(t),
            },
        }
    }

    fn display_name(&self) -> &str {
        self.kind().display_name()
    }
}

impl JuliaColourMap for JuliaBlueGradient {
    fn kind(&self) -> JuliaColourMapKinds {
        JuliaColourMapKinds::BlueGradient
    }
}

impl JuliaBlueGradient {
    #[must_use]
    pub fn new(max_iterations: u32) -> Self {
        Self { max_iterations }
    }
}
