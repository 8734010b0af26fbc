pub mod factory;
pub mod intensity;
pub mod kinds;
pub mod map;
pub mod maps;
pub mod ramp;
pub mod scheme;
