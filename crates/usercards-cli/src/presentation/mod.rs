//! # Presentation Layer
//!
//! ## 🏗️ Architecture & Data Flow
//!
//! ```text
//! [ Handler ] --> [ Presenter ] --> [ ViewModel ] --> [ Renderer ] --> [ Output ]
//!  (Controller)    (Converter)       (Contract)        (Driver)     (Console/JSON/TUI)
//! ```
//!
//! The card list itself is a view tree built by `usercards-engine`. Views in
//! this module are backends for that tree: `views::text` prints it, and
//! `views::tui` draws it with Ratatui.
//!
//! ## 📂 Directory Guide
//!
//! * `view_models/`: raw data handed to renderers. Must implement `Serialize`
//!   (the JSON output is the view model as-is).
//! * `presenters/`: pure functions from domain data to view models.
//! * `views/`: `fmt::Display` and Ratatui `Widget` implementations.
//! * `renderers/`: console (text/JSON) and the interactive TUI loop.

pub mod presenters;
pub mod renderers;
pub mod view_models;
pub mod views;

pub use renderers::{ConsoleRenderer, Renderer, TuiRenderer};
pub use view_models::{CommandResultViewModel, CreateView, Guidance, StatusBadge, StatusLevel};
