// UI Layer
pub mod components;
pub mod i18n;
pub mod layout;
pub mod pointer;
pub mod theme;

pub use i18n::{I18n, Language, MessageKey, TextKey};
pub use layout::{
    compute_dialog_areas, DialogAreas, LayoutAreas, LayoutManager, LayoutMode, MIN_HEIGHT,
    MIN_WIDTH,
};
pub use pointer::{DropRegions, HitRegion, PointerRouter};
pub use theme::{Theme, ThemeManager};

pub use components::{
    CommandBar, CommandItem, Dialog, DialogKind, DropZone, DropZoneStatus, FileList,
    SelectionDialog, SelectionDialogText, StatusBar, WarningScreen,
};
