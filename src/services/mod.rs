pub mod chunker;
pub mod classifier;
pub mod preferences;
pub mod presenter;
pub mod report_writer;

pub use chunker::{chunk, COMPACT_CHUNK_WIDTH, DEFAULT_CHUNK_WIDTH};
pub use classifier::{validate_pix, PayloadClassifier};
pub use preferences::{PreferenceStore, Preferences, Theme};
pub use presenter::ResultPresenter;
pub use report_writer::ReportWriter;
