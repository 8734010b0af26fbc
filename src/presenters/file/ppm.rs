use crate::controllers::ports::file_presenter::FilePresenterPort;
use crate::core::data::pixel_buffer::{BYTES_PER_PIXEL, PixelBuffer};
use std::io::{BufWriter, Write};
use std::path::Path;

/// Writes frames as binary PPM. PPM has no alpha channel, so it is dropped.
pub struct PpmFilePresenter {}

impl FilePresenterPort for PpmFilePresenter {
    fn present(&self, buffer: &PixelBuffer, filepath: impl AsRef<Path>) -> std::io::Result<()> {
        let file = std::fs::File::create(filepath)?;
        let mut writer = BufWriter::new(file);

        write_ppm(buffer, &mut writer)?;
        writer.flush()
    }
}

impl Default for PpmFilePresenter {
    fn default() -> Self {
        Self::new()
    }
}

impl PpmFilePresenter {
    pub fn new() -> Self {
        Self {}
    }
}

fn write_ppm(buffer: &PixelBuffer, out: &mut impl Write) -> std::io::Result<()> {
    // PPM header: P6 means binary RGB, then width, height and max_colour
    writeln!(out, "P6")?;
    writeln!(out, "{} {}", buffer.width(), buffer.height())?;
    writeln!(out, "255")?;

    for pixel in buffer.buffer().chunks_exact(BYTES_PER_PIXEL) {
        out.write_all(&pixel[..3])?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_and_rgb_payload() {
        let buffer = PixelBuffer::from_data(
            2,
            1,
            vec![
                10, 20, 30, 255, // pixel (0,0)
                40, 50, 60, 255, // pixel (1,0)
            ],
        )
        .unwrap();
        let mut out = Vec::new();

        write_ppm(&buffer, &mut out).unwrap();

        let mut expected = b"P6\n2 1\n255\n".to_vec();
        expected.extend_from_slice(&[10, 20, 30, 40, 50, 60]);
        assert_eq!(out, expected);
    }

    #[test]
    fn test_present_writes_file() {
        let path = std::env::temp_dir().join(format!(
            "julia_renderer_ppm_test_{}.ppm",
            std::process::id()
        ));
        let buffer = PixelBuffer::from_data(1, 1, vec![1, 2, 3, 255]).unwrap();

        PpmFilePresenter::new().present(&buffer, &path).unwrap();
        let written = std::fs::read(&path).unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(written, b"P6\n1 1\n255\n\x01\x02\x03".to_vec());
    }

    #[test]
    fn test_present_into_missing_directory_fails() {
        let path = std::env::temp_dir()
            .join("julia_renderer_no_such_dir")
            .join("nested")
            .join("frame.ppm");
        let buffer = PixelBuffer::new(1, 1);

        assert!(PpmFilePresenter::new().present(&buffer, &path).is_err());
    }
}
