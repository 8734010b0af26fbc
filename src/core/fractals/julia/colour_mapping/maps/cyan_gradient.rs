use crate::core::actions::generate_pixel_buffer::ports::colour_map::ColourMap;
use crate::core::data::colour::Colour;
use crate::core::fractals::julia::colour_mapping::intensity::{escape_fraction, to_channel};
use crate::core::fractals::julia::colour_mapping::kinds::JuliaColourMapKinds;
use crate::core::fractals::julia::colour_mapping::map::JuliaColourMap;

#[derive(Debug)]
pub struct JuliaCyanGradient {
    max_iterations: u32,
}

impl ColourMap<u32> for JuliaCyanGradient {
    fn map(&self, iterations: u32) -> Colour {
        match escape_fraction(iterations, self.max_iterations) {
            None => Colour::BLACK,
            Some(t) => {
                let v = to_channel(t);

                Colour { r: 0, g: v, b: v }
            }
        }
    }

    fn display_name(&self) -> &str {
        self.kind().display_name()
    }
}

impl JuliaColourMap for JuliaCyanGradient {
    fn kind(&self) -> JuliaColourMapKinds {
        JuliaColourMapKinds::CyanGradient
    }
}

impl JuliaCyanGradient {
    #[must_use]
    pub fn new(max_iterations: u32) -> Self {
        Self { max_iterations }
    }
}
