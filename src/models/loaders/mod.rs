pub mod capture_loader;

pub use capture_loader::{load_all_capture_files, load_capture_file};
