use std::error::Error;
use std::fmt;
use std::path::PathBuf;

use clap::Parser;

use crate::core::data::complex::Complex;
use crate::core::data::viewport::{
    DEFAULT_HEIGHT, DEFAULT_WIDTH, DEFAULT_ZOOM, Viewport, ViewportError,
};
use crate::core::fractals::julia::colour_mapping::kinds::JuliaColourMapKinds;
use crate::core::fractals::julia::colour_mapping::ramp::ColourRamp;
use crate::core::fractals::julia::colour_mapping::scheme::ColourScheme;
use crate::core::fractals::julia::iteration_config::{DEFAULT_MAX_ITERATIONS, IterationConfig};
use crate::core::fractals::julia::julia_config::JuliaConfig;
use crate::core::fractals::julia::presets::{BASELINE, FAVOURITES, favourite};
use crate::input::text::complex_fields::parse_component;

#[derive(Debug, Clone, PartialEq)]
pub enum CliArgsError {
    UnknownPreset { index: usize },
    Viewport(ViewportError),
}

impl fmt::Display for CliArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownPreset { index } => write!(
                f,
                "no preset {}, expected 0..{} (see --list-presets)",
                index,
                FAVOURITES.len() - 1
            ),
            Self::Viewport(err) => write!(f, "{}", err),
        }
    }
}

impl Error for CliArgsError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::UnknownPreset { .. } => None,
            Self::Viewport(err) => Some(err),
        }
    }
}

impl From<ViewportError> for CliArgsError {
    fn from(err: ViewportError) -> Self {
        Self::Viewport(err)
    }
}

#[derive(Parser, Debug)]
#[command(name = "julia_renderer")]
#[command(about = "Render a Julia set to a PPM image")]
pub struct CliArgs {
    /// Real part of c. Unreadable text counts as 0
    #[arg(long, allow_hyphen_values = true)]
    pub c_re: Option<String>,

    /// Imaginary part of c. Unreadable text counts as 0
    #[arg(long, allow_hyphen_values = true)]
    pub c_im: Option<String>,

    /// Start from favourite N (0-based) instead of the baseline parameter
    #[arg(long)]
    pub preset: Option<usize>,

    #[arg(long, default_value_t = DEFAULT_MAX_ITERATIONS)]
    pub max_iterations: u32,

    #[arg(long, default_value_t = DEFAULT_ZOOM)]
    pub zoom: f64,

    #[arg(long, default_value_t = DEFAULT_WIDTH)]
    pub width: u32,

    #[arg(long, default_value_t = DEFAULT_HEIGHT)]
    pub height: u32,

    /// blue, cyan or ramp
    #[arg(long, default_value = "blue")]
    pub colour_scheme: String,

    /// Comma separated rrggbb stops used by the ramp scheme
    #[arg(long)]
    pub ramp: Option<String>,

    #[arg(short, long, default_value = "output/julia.ppm")]
    pub output: PathBuf,

    /// Print the suggested parameters and exit
    #[arg(long)]
    pub list_presets: bool,
}

impl CliArgs {
    /// `c` from the preset (or the baseline), with any text fields
    /// overriding the matching component.
    pub fn parameter(&self) -> Result<Complex, CliArgsError> {
        let start = match self.preset {
            Some(index) => favourite(index).ok_or(CliArgsError::UnknownPreset { index })?,
            None => BASELINE,
        };

        let real = self.c_re.as_deref().map_or(start.c.real, parse_component);
        let imag = self.c_im.as_deref().map_or(start.c.imag, parse_component);

        Ok(Complex::new(real, imag))
    }

    pub fn colour_scheme(&self) -> Result<ColourScheme, Box<dyn Error>> {
        let kind: JuliaColourMapKinds = self.colour_scheme.parse()?;
        let ramp = self
            .ramp
            .as_deref()
            .map(str::parse::<ColourRamp>)
            .transpose()?;

        if ramp.is_some() && kind != JuliaColourMapKinds::CustomRamp {
            log::warn!("--ramp is ignored by the {} scheme", kind);
        }

        Ok(ColourScheme::from_kind(kind, ramp))
    }

    pub fn to_config(&self) -> Result<JuliaConfig, Box<dyn Error>> {
        Ok(JuliaConfig {
            viewport: Viewport::new(self.width, self.height, self.zoom, Complex::ZERO)
                .map_err(CliArgsError::from)?,
            c: self.parameter()?,
            iterations: IterationConfig::new(self.max_iterations),
            colour_scheme: self.colour_scheme()?,
        })
    }
}
