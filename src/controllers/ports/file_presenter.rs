use std::path::Path;

use crate::core::data::pixel_buffer::PixelBuffer;

/// A drawing surface that persists a finished frame to a file.
pub trait FilePresenterPort {
    fn present(&self, buffer: &PixelBuffer, filepath: impl AsRef<Path>) -> std::io::Result<()>;
}
