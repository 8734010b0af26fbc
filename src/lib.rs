pub mod controllers;
pub mod core;
pub mod input;
pub mod logging;
pub mod presenters;

pub use controllers::cli::cli_render::CliRenderController;
pub use controllers::interactive::{
    FrameData, InteractiveController, InteractiveControllerPresenterPort, RenderRequest,
};
pub use controllers::ports::file_presenter::FilePresenterPort;
pub use crate::core::actions::cancellation::{CancelToken, Cancelled, NeverCancel};
pub use crate::core::actions::render_julia::render_julia::{
    render, render_cancelable, render_config, render_serial,
};
pub use crate::core::data::complex::Complex;
pub use crate::core::data::pixel_buffer::PixelBuffer;
pub use crate::core::data::viewport::{Viewport, ViewportError};
pub use crate::core::fractals::julia::colour_mapping::kinds::JuliaColourMapKinds;
pub use crate::core::fractals::julia::colour_mapping::ramp::{ColourRamp, ColourRampError};
pub use crate::core::fractals::julia::colour_mapping::scheme::ColourScheme;
pub use crate::core::fractals::julia::iteration_config::IterationConfig;
pub use crate::core::fractals::julia::julia_config::JuliaConfig;
pub use crate::core::fractals::julia::presets::{BASELINE, FAVOURITES, JuliaPreset, favourites_text};
pub use input::cli::args::CliArgs;
pub use input::text::complex_fields::{ComplexFields, parse_component};
pub use logging::{LoggingConfig, init_logging};
pub use presenters::canvas::canvas::CanvasPresenter;
pub use presenters::file::ppm::PpmFilePresenter;
