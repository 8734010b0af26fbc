use std::path::Path;
use std::time::Instant;

use crate::controllers::ports::file_presenter::FilePresenterPort;
use crate::core::actions::render_julia::render_julia::render_config;
use crate::core::data::pixel_buffer::PixelBuffer;
use crate::core::fractals::julia::julia_config::JuliaConfig;

/// Renders one frame and hands it to a file surface.
pub struct CliRenderController<P: FilePresenterPort> {
    presenter: P,
    buffer: Option<PixelBuffer>,
}

impl<P: FilePresenterPort> CliRenderController<P> {
    pub fn new(presenter: P) -> Self {
        Self {
            presenter,
            buffer: None,
        }
    }

    pub fn generate(&mut self, config: &JuliaConfig) -> &PixelBuffer {
        log::info!("Rendering Julia set for c = {}", config.c);
        log::info!(
            "Image size: {}x{}, zoom {}",
            config.viewport.width(),
            config.viewport.height(),
            config.viewport.zoom()
        );
        log::info!(
            "Max iterations: {}, colour scheme: {}",
            config.iterations.max_iterations(),
            config.colour_scheme.kind()
        );

        let start = Instant::now();
        let buffer = render_config(config);
        log::info!("Duration: {:?}", start.elapsed());

        self.buffer.insert(buffer)
    }

    #[must_use]
    pub fn buffer(&self) -> Option<&PixelBuffer> {
        self.buffer.as_ref()
    }

    pub fn write(&self, filepath: impl AsRef<Path>) -> std::io::Result<()> {
        match &self.buffer {
            Some(buffer) => {
                self.presenter.present(buffer, &filepath)?;
                log::info!("Wrote {}", filepath.as_ref().display());
            }
            None => log::warn!("nothing rendered yet, skipping write"),
        }

        Ok(())
    }
}
