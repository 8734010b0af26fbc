use crate::core::data::colour::Colour;
use crate::core::fractals::julia::colour_mapping::intensity::to_channel;
use std::error::Error;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColourRampError {
    TooFewStops { count: usize },
    InvalidStop { stop: String },
}

impl fmt::Display for ColourRampError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TooFewStops { count } => {
                write!(f, "a colour ramp needs at least 2 stops, got {}", count)
            }
            Self::InvalidStop { stop } => {
                write!(f, "'{}' is not a colour stop of the form rrggbb", stop)
            }
        }
    }
}

impl Error for ColourRampError {}

/// Evenly spaced colour stops across `[0, 1]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColourRamp {
    stops: Vec<Colour>,
}

impl ColourRamp {
    pub fn new(stops: Vec<Colour>) -> Result<Self, ColourRampError> {
        if stops.len() < 2 {
            return Err(ColourRampError::TooFewStops { count: stops.len() });
        }

        Ok(Self { stops })
    }

    /// Black through red, orange and yellow to white.
    #[must_use]
    pub fn fire() -> Self {
        Self {
            stops: vec![
                Colour { r: 0, g: 0, b: 0 },
                Colour { r: 255, g: 0, b: 0 },
                Colour { r: 255, g: 165, b: 0 },
                Colour { r: 255, g: 255, b: 0 },
                Colour {
                    r: 255,
                    g: 255,
                    b: 255,
                },
            ],
        }
    }

    #[must_use]
    pub fn stops(&self) -> &[Colour] {
        &self.stops
    }

    /// Linear interpolation between the two stops around `t`.
    #[must_use]
    pub fn sample(&self, t: f64) -> Colour {
        let segments = self.stops.len() - 1;
        let position = t.clamp(0.0, 1.0) * segments as f64;
        let index = (position.floor() as usize).min(segments - 1);
        let local_t = position - index as f64;

        let from = self.stops[index];
        let to = self.stops[index + 1];

        Colour {
            r: lerp_channel(from.r, to.r, local_t),
            g: lerp_channel(from.g, to.g, local_t),
            b: lerp_channel(from.b, to.b, local_t),
        }
    }
}

impl Default for ColourRamp {
    fn default() -> Self {
        Self::fire()
    }
}

impl FromStr for ColourRamp {
    type Err = ColourRampError;

    /// Parses comma separated `rrggbb` stops, each optionally prefixed by `#`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let stops = s
            .split(',')
            .map(str::trim)
            .filter(|stop| !stop.is_empty())
            .map(parse_stop)
            .collect::<Result<Vec<_>, _>>()?;

        Self::new(stops)
    }
}

fn parse_stop(stop: &str) -> Result<Colour, ColourRampError> {
    let invalid = || ColourRampError::InvalidStop {
        stop: stop.to_string(),
    };

    let hex = stop.strip_prefix('#').unwrap_or(stop);

    if hex.len() != 6 || !hex.is_ascii() {
        return Err(invalid());
    }

    let channel = |range: std::ops::Range<usize>| {
        u8::from_str_radix(&hex[range], 16).map_err(|_| invalid())
    };

    Ok(Colour {
        r: channel(0..2)?,
        g: channel(2..4)?,
        b: channel(4..6)?,
    })
}

fn lerp_channel(from: u8, to: u8, t: f64) -> u8 {
    let from = from as f64 / 255.0;
    let to = to as f64 / 255.0;

    to_channel(from + (to - from) * t)
}
