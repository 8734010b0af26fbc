use crate::core::actions::generate_pixel_buffer::ports::colour_map::ColourMap;
use crate::core::data::colour::Colour;
use crate::core::fractals::julia::colour_mapping::intensity::escape_fraction;
use crate::core::fractals::julia::colour_mapping::kinds::JuliaColourMapKinds;
use crate::core::fractals::julia::colour_mapping::map::JuliaColourMap;
use crate::core::fractals::julia::colour_mapping::ramp::ColourRamp;

#[derive(Debug)]
pub struct JuliaCustomRamp {
    max_iterations: u32,
    ramp: ColourRamp,
}

impl ColourMap<u32> for JuliaCustomRamp {
    fn map(&self, iterations: u32) -> Colour {
        match escape_fraction(iterations, self.max_iterations) {
            None => Colour::BLACK,
            Some(t) => self.ramp.sample(t),
        }
    }

    fn display_name(&self) -> &str {
        self.kind().display_name()
    }
}

impl JuliaColourMap for JuliaCustomRamp {
    fn kind(&self) -> JuliaColourMapKinds {
        JuliaColourMapKinds::CustomRamp
    }
}

impl JuliaCustomRamp {
    #[must_use]
    pub fn new(max_iterations: u32, ramp: ColourRamp) -> Self {
        Self {
            max_iterations,
            ramp,
        }
    }
}
