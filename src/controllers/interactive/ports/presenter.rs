use crate::controllers::interactive::data::frame_data::FrameData;

/// Drawing surface the interactive controller hands finished frames to.
pub trait InteractiveControllerPresenterPort: Send + Sync {
    fn present(&self, frame: FrameData);
}
