use crate::core::fractals::julia::colour_mapping::kinds::JuliaColourMapKinds;
use crate::core::fractals::julia::colour_mapping::ramp::ColourRamp;

/// How escape iterations become colours. Interior points are always black.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ColourScheme {
    /// `(0, 0, v)`
    #[default]
    BlueGradient,
    /// `(0, v, v)`
    CyanGradient,
    CustomRamp(ColourRamp),
}

impl ColourScheme {
    #[must_use]
    pub fn kind(&self) -> JuliaColourMapKinds {
        match self {
            Self::BlueGradient => JuliaColourMapKinds::BlueGradient,
            Self::CyanGradient => JuliaColourMapKinds::CyanGradient,
            Self::CustomRamp(_) => JuliaColourMapKinds::CustomRamp,
        }
    }

    /// The scheme for `kind`, using `ramp` when the kind needs one.
    #[must_use]
    pub fn from_kind(kind: JuliaColourMapKinds, ramp: Option<ColourRamp>) -> Self {
        match kind {
            JuliaColourMapKinds::BlueGradient => Self::BlueGradient,
            JuliaColourMapKinds::CyanGradient => Self::CyanGradient,
            JuliaColourMapKinds::CustomRamp => Self::CustomRamp(ramp.unwrap_or_default()),
        }
    }
}
