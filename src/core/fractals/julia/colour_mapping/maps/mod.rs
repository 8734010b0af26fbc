pub mod blue_gradient;
pub mod custom_ramp;
pub mod cyan_gradient;
