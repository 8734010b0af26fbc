use rayon::prelude::*;

use crate::core::actions::cancellation::{CANCEL_CHECK_INTERVAL_PIXELS, CancelToken, Cancelled};
use crate::core::actions::generate_pixel_buffer::ports::colour_map::ColourMap;
use crate::core::data::pixel_buffer::BYTES_PER_PIXEL;

/// Writes the colour of each input value into the matching 4-byte pixel of
/// `output`, one row per rayon task.
///
/// `output` must be `input.len() * 4` bytes and `row_width` non-zero.
pub(crate) fn paint_rows<T, CMap, C>(
    input: &[T],
    mapper: &CMap,
    row_width: usize,
    output: &mut [u8],
    cancel: &C,
) -> Result<(), Cancelled>
where
    T: Copy + Sync,
    CMap: ColourMap<T>,
    C: CancelToken,
{
    debug_assert_eq!(output.len(), input.len() * BYTES_PER_PIXEL);

    output
        .par_chunks_mut(row_width * BYTES_PER_PIXEL)
        .zip(input.par_chunks(row_width))
        .try_for_each(|(row_bytes, row_values)| {
            for (i, (pixel, &value)) in row_bytes
                .chunks_exact_mut(BYTES_PER_PIXEL)
                .zip(row_values)
                .enumerate()
            {
                if i % CANCEL_CHECK_INTERVAL_PIXELS == 0 && cancel.is_cancelled() {
                    return Err(Cancelled);
                }

                pixel.copy_from_slice(&mapper.map(value).to_rgba());
            }

            Ok(())
        })
}

/// Single-threaded counterpart of [`paint_rows`].
pub(crate) fn paint_serial<T, CMap>(input: &[T], mapper: &CMap, output: &mut [u8])
where
    T: Copy,
    CMap: ColourMap<T>,
{
    debug_assert_eq!(output.len(), input.len() * BYTES_PER_PIXEL);

    for (pixel, &value) in output.chunks_exact_mut(BYTES_PER_PIXEL).zip(input) {
        pixel.copy_from_slice(&mapper.map(value).to_rgba());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::actions::cancellation::NeverCancel;
    use crate::core::data::colour::Colour;
    use std::sync::atomic::{AtomicBool, Ordering};

    #[derive(Debug)]
    struct StubColourMap {}

    impl ColourMap<u8> for StubColourMap {
        fn map(&self, value: u8) -> Colour {
            Colour {
                r: value,
                g: value,
                b: value,
            }
        }

        fn display_name(&self) -> &str {
            "Stub"
        }
    }

    #[test]
    fn test_paints_rows_correctly() {
        let input: Vec<u8> = vec![1, 2, 3, 4, 5, 6];
        let expected_buffer: Vec<u8> = vec![
            1, 1, 1, 255, 2, 2, 2, 255, 3, 3, 3, 255, 4, 4, 4, 255, 5, 5, 5, 255, 6, 6, 6, 255,
        ];
        let mut output = vec![0; input.len() * BYTES_PER_PIXEL];

        paint_rows(&input, &StubColourMap {}, 3, &mut output, &NeverCancel).unwrap();

        assert_eq!(output, expected_buffer);
    }

    #[test]
    fn test_returns_cancelled_when_token_is_cancelled() {
        let input: Vec<u8> = vec![1, 2, 3, 4, 5, 6];
        let cancelled = AtomicBool::new(true);
        let cancel_token = || cancelled.load(Ordering::Relaxed);
        let mut output = vec![0; input.len() * BYTES_PER_PIXEL];

        let result = paint_rows(&input, &StubColourMap {}, 3, &mut output, &cancel_token);

        assert_eq!(result, Err(Cancelled));
    }

    #[test]
    fn test_serial_painting_matches_parallel() {
        let input: Vec<u8> = (0..=255).collect();
        let mut parallel = vec![0; input.len() * BYTES_PER_PIXEL];
        let mut serial = vec![0; input.len() * BYTES_PER_PIXEL];

        paint_rows(&input, &StubColourMap {}, 16, &mut parallel, &NeverCancel).unwrap();
        paint_serial(&input, &StubColourMap {}, &mut serial);

        assert_eq!(parallel, serial);
    }
}
