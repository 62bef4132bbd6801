//! TUI View Components
//!
//! Ratatui Widget implementations that materialize the card list view tree.
//!
//! ## Design Principles:
//! - Views borrow the tree or plain values (no ownership)
//! - No filtering or matching here; views only map nodes to widgets
//! - Stateful pieces (focus, modal, query) live in `components/`

pub mod card_list;
pub mod components;
pub mod profile_modal;
pub mod search_bar;
pub mod status_bar;

pub use card_list::CardListView;
pub use profile_modal::ProfileModalView;
pub use search_bar::SearchBarView;
pub use status_bar::StatusBarView;
