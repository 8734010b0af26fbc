pub const OPAQUE: u8 = 255;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub struct Colour {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Colour {
    pub const BLACK: Self = Self { r: 0, g: 0, b: 0 };

    /// RGBA bytes as laid out in a [`PixelBuffer`](super::pixel_buffer::PixelBuffer).
    #[must_use]
    pub const fn to_rgba(self) -> [u8; 4] {
        [self.r, self.g, self.b, OPAQUE]
    }
}
