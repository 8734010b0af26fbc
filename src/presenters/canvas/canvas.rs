use crate::controllers::interactive::data::frame_data::FrameData;
use crate::controllers::interactive::ports::presenter::InteractiveControllerPresenterPort;
use crate::core::data::pixel_buffer::PixelBuffer;
use std::sync::{Mutex, PoisonError};
use std::time::Duration;

#[derive(Default)]
struct CanvasState {
    frame: Option<FrameData>,
    last_presented_generation: u64,
}

/// In-memory drawing surface holding the newest frame it has been shown.
///
/// Frames can arrive from the render worker at any time; a frame older than
/// the one already on the canvas is ignored.
#[derive(Default)]
pub struct CanvasPresenter {
    state: Mutex<CanvasState>,
}

impl InteractiveControllerPresenterPort for CanvasPresenter {
    fn present(&self, frame: FrameData) {
        let mut state = self.state.lock().unwrap_or_else(PoisonError::into_inner);

        if frame.generation <= state.last_presented_generation {
            log::debug!(
                "canvas ignoring generation {}, already showing {}",
                frame.generation,
                state.last_presented_generation
            );
            return;
        }

        state.last_presented_generation = frame.generation;
        state.frame = Some(frame);
    }
}

impl CanvasPresenter {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn last_presented_generation(&self) -> u64 {
        self.lock_state().last_presented_generation
    }

    /// A copy of the pixels currently on the canvas.
    #[must_use]
    pub fn snapshot(&self) -> Option<PixelBuffer> {
        self.lock_state()
            .frame
            .as_ref()
            .map(|frame| frame.pixel_buffer.clone())
    }

    #[must_use]
    pub fn last_render_duration(&self) -> Option<Duration> {
        self.lock_state()
            .frame
            .as_ref()
            .map(|frame| frame.render_duration)
    }

    fn lock_state(&self) -> std::sync::MutexGuard<'_, CanvasState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
