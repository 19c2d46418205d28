pub mod category;
pub mod frame;
pub mod loaders;
pub mod scan;

pub use category::Category;
pub use frame::Frame;
pub use loaders::load_all_capture_files;
pub use scan::{BatchSummary, ScanInput, ScanKind, ScanResult, ScanSource};
