//! Interactive controller for re-rendering as the Julia parameter changes.
//!
//! A host submits a [`RenderRequest`] whenever `c` (or any other setting)
//! changes. A single worker thread renders the newest request; requests that
//! are superseded mid-render are cancelled and never presented.

mod controller;
pub mod data;
pub mod ports;

pub use controller::InteractiveController;
pub use data::{frame_data::FrameData, render_request::RenderRequest};
pub use ports::presenter::InteractiveControllerPresenterPort;
