use rayon::prelude::*;

use crate::core::actions::cancellation::{CANCEL_CHECK_INTERVAL_PIXELS, CancelToken, Cancelled};
use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::point::Point;

/// Generates fractal data in parallel using rayon's work-stealing scheduler,
/// polling `cancel` at the start of each row and every
/// [`CANCEL_CHECK_INTERVAL_PIXELS`] pixels within a row.
///
/// The output is allocated once and split into one row slice per task, so
/// every task writes a disjoint region and no locking is needed. Results are
/// row-major, identical to [`generate_fractal_serial`].
///
/// [`Cancelled`] is expected control flow when a newer request supersedes this
/// one, not an error to display.
///
/// [`generate_fractal_serial`]: super::generate_fractal_serial::generate_fractal_serial
pub fn generate_fractal_parallel_rayon_cancelable<Alg, C>(
    algorithm: &Alg,
    cancel: &C,
) -> Result<Vec<Alg::Success>, Cancelled>
where
    Alg: FractalAlgorithm + Sync,
    Alg::Success: Copy + Default + Send,
    C: CancelToken,
{
    let viewport = algorithm.viewport();
    let row_width = viewport.width() as usize;
    let mut results = vec![Alg::Success::default(); viewport.pixel_count()];

    results
        .par_chunks_mut(row_width)
        .enumerate()
        .try_for_each(|(y, row)| {
            for (x, slot) in row.iter_mut().enumerate() {
                if x % CANCEL_CHECK_INTERVAL_PIXELS == 0 && cancel.is_cancelled() {
                    return Err(Cancelled);
                }

                *slot = algorithm.compute(Point {
                    x: x as u32,
                    y: y as u32,
                });
            }

            Ok(())
        })?;

    Ok(results)
}
