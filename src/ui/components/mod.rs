// UI Components
pub mod command_bar;
pub mod dialog;
pub mod drop_zone;
pub mod file_list;
pub mod selection_dialog;
pub mod status_bar;
pub mod warning;

// Re-export components for convenience
pub use command_bar::{CommandBar, CommandItem};
pub use dialog::{Dialog, DialogKind};
pub use drop_zone::{DropZone, DropZoneStatus};
pub use file_list::FileList;
pub use selection_dialog::{SelectionDialog, SelectionDialogText};
pub use status_bar::StatusBar;
pub use warning::{DuplicateBanner, WarningScreen};
