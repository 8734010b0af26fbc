use crate::core::data::complex::Complex;
use crate::core::data::point::Point;
use std::error::Error;
use std::fmt;

pub const DEFAULT_WIDTH: u32 = 600;
pub const DEFAULT_HEIGHT: u32 = 600;
pub const DEFAULT_ZOOM: f64 = 1.0;

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum ViewportError {
    InvalidSize { width: u32, height: u32 },
    InvalidZoom { zoom: f64 },
}

impl fmt::Display for ViewportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidSize { width, height } => {
                write!(f, "viewport size must be positive: {}x{}", width, height)
            }
            Self::InvalidZoom { zoom } => {
                write!(f, "viewport zoom must be finite and greater than zero: {}", zoom)
            }
        }
    }
}

impl Error for ViewportError {}

/// Pixel dimensions plus the zoom and centre offset that place them on the
/// complex plane. At zoom `1.0` the visible region spans `[-1.5, 1.5]` on the
/// real axis and `[-1, 1]` on the imaginary axis.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Viewport {
    width: u32,
    height: u32,
    zoom: f64,
    centre_offset: Complex,
}

impl Viewport {
    pub fn new(
        width: u32,
        height: u32,
        zoom: f64,
        centre_offset: Complex,
    ) -> Result<Self, ViewportError> {
        if width == 0 || height == 0 {
            return Err(ViewportError::InvalidSize { width, height });
        }

        if !zoom.is_finite() || zoom <= 0.0 {
            return Err(ViewportError::InvalidZoom { zoom });
        }

        Ok(Self {
            width,
            height,
            zoom,
            centre_offset,
        })
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[must_use]
    pub fn zoom(&self) -> f64 {
        self.zoom
    }

    #[must_use]
    pub fn centre_offset(&self) -> Complex {
        self.centre_offset
    }

    #[must_use]
    pub fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    #[must_use]
    pub fn centre_pixel(&self) -> Point {
        Point {
            x: self.width / 2,
            y: self.height / 2,
        }
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            zoom: DEFAULT_ZOOM,
            centre_offset: Complex::ZERO,
        }
    }
}
