use crate::core::fractals::julia::colour_mapping::map::JuliaColourMap;
use crate::core::fractals::julia::colour_mapping::maps::{
    blue_gradient::JuliaBlueGradient, custom_ramp::JuliaCustomRamp,
    cyan_gradient::JuliaCyanGradient,
};
use crate::core::fractals::julia::colour_mapping::scheme::ColourScheme;

#[must_use]
pub fn julia_colour_map_factory(
    scheme: &ColourScheme,
    max_iterations: u32,
) -> Box<dyn JuliaColourMap> {
    match scheme {
        ColourScheme::BlueGradient => Box::new(JuliaBlueGradient::new(max_iterations)),
        ColourScheme::CyanGradient => Box::new(JuliaCyanGradient::new(max_iterations)),
        ColourScheme::CustomRamp(ramp) => {
            Box::new(JuliaCustomRamp::new(max_iterations, ramp.clone()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::actions::generate_pixel_buffer::ports::colour_map::ColourMap;
    use crate::core::data::colour::Colour;
    use crate::core::fractals::julia::colour_mapping::kinds::JuliaColourMapKinds;

    #[test]
    fn factory_round_trip_for_all_kinds() {
        for &kind in JuliaColourMapKinds::ALL {
            let map = julia_colour_map_factory(&ColourScheme::from_kind(kind, None), 256);
            assert_eq!(map.kind(), kind);
        }
    }

    #[test]
    fn display_names_match_between_kind_and_concrete() {
        for &kind in JuliaColourMapKinds::ALL {
            let map = julia_colour_map_factory(&ColourScheme::from_kind(kind, None), 256);
            assert_eq!(map.display_name(), kind.display_name());
        }
    }

    #[test]
    fn every_scheme_paints_interior_black() {
        for &kind in JuliaColourMapKinds::ALL {
            let map = julia_colour_map_factory(&ColourScheme::from_kind(kind, None), 256);
            assert_eq!(map.map(256), Colour::BLACK);
        }
    }
}
