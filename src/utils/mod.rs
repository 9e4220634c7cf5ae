// Utilities
pub mod accept;
pub mod error;
pub mod formatter;
pub mod keys;
pub mod path_display;

pub use accept::AcceptPattern;
pub use keys::{display_key, identity_key};
