pub mod algorithm;
pub mod colour_mapping;
pub mod iteration_config;
pub mod julia_config;
pub mod presets;
