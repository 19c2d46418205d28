pub mod camera_flow;
pub mod input_flow;
pub mod scan_ctx;

pub use camera_flow::{CameraFlow, ScanState, StopHandle};
pub use input_flow::InputFlow;
pub use scan_ctx::ScanCtx;
