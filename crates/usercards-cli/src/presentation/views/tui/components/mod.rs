//! TUI Components
//!
//! Components own UI state (query text, focus, open modal) and input
//! handling, and delegate drawing to the views in the parent module.

pub mod browse;

pub use browse::{BrowseAction, BrowseComponent};
