// Data Models
pub mod duplicate_report;
pub mod file_collection;
pub mod file_handle;
pub mod selection;

pub use duplicate_report::DuplicateReport;
pub use file_collection::FileCollection;
pub use file_handle::FileHandle;
pub use selection::{AddOutcome, MultiFileSelection, SingleFileSelection};
