use crate::core::data::complex::Complex;
use crate::core::data::point::Point;
use crate::core::data::viewport::Viewport;

/// Horizontal stretch applied on top of the zoom so a square canvas shows
/// three units of the real axis against two of the imaginary axis.
pub const REAL_AXIS_STRETCH: f64 = 1.5;

/// Maps a pixel to its seed on the complex plane.
///
/// The mapping is affine and defined for any pixel, including ones outside
/// the viewport, so it never fails.
#[must_use]
pub fn pixel_to_complex_coords(pixel: Point, viewport: &Viewport) -> Complex {
    let width = viewport.width() as f64;
    let height = viewport.height() as f64;
    let zoom = viewport.zoom();
    let offset = viewport.centre_offset();

    let real = REAL_AXIS_STRETCH * (pixel.x as f64 - width / 2.0) / (0.5 * zoom * width)
        + offset.real;
    let imag = (pixel.y as f64 - height / 2.0) / (0.5 * zoom * height) + offset.imag;

    Complex { real, imag }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn viewport(width: u32, height: u32, zoom: f64, offset: Complex) -> Viewport {
        Viewport::new(width, height, zoom, offset).unwrap()
    }

    #[test]
    fn test_centre_pixel_maps_to_offset() {
        let offset = Complex::new(0.25, -0.5);
        let viewport = viewport(600, 600, 1.0, offset);

        let result = pixel_to_complex_coords(viewport.centre_pixel(), &viewport);

        assert_eq!(result, offset);
    }

    #[test]
    fn test_centre_pixel_maps_to_origin_without_offset() {
        let viewport = Viewport::default();

        let result = pixel_to_complex_coords(Point { x: 300, y: 300 }, &viewport);

        assert_eq!(result, Complex::ZERO);
    }

    #[test]
    fn test_top_left_pixel() {
        let viewport = viewport(600, 600, 1.0, Complex::ZERO);

        let result = pixel_to_complex_coords(Point { x: 0, y: 0 }, &viewport);

        assert_eq!(result, Complex::new(-1.5, -1.0));
    }

    #[test]
    fn test_zoom_shrinks_visible_region() {
        let viewport = viewport(600, 600, 2.0, Complex::ZERO);

        let result = pixel_to_complex_coords(Point { x: 0, y: 0 }, &viewport);

        assert_eq!(result, Complex::new(-0.75, -0.5));
    }

    #[test]
    fn test_non_square_viewport_keeps_axis_spans() {
        let viewport = viewport(800, 400, 1.0, Complex::ZERO);

        let top_left = pixel_to_complex_coords(Point { x: 0, y: 0 }, &viewport);
        let centre = pixel_to_complex_coords(Point { x: 400, y: 200 }, &viewport);

        assert_eq!(top_left, Complex::new(-1.5, -1.0));
        assert_eq!(centre, Complex::ZERO);
    }

    #[test]
    fn test_rows_equidistant_from_centre_are_negated() {
        let viewport = viewport(64, 64, 1.0, Complex::ZERO);

        for y in 1..64 {
            let upper = pixel_to_complex_coords(Point { x: 7, y }, &viewport);
            let lower = pixel_to_complex_coords(Point { x: 7, y: 64 - y }, &viewport);

            assert_eq!(upper.real, lower.real);
            assert_eq!(upper.imag, -lower.imag);
        }
    }
}
