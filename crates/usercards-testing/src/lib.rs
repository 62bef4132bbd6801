//! Testing infrastructure for usercards tests.
//!
//! - `TestWorld`: isolated data directory plus CLI invocation
//! - `clock`: a hand-driven clock for debounce tests
//! - `surface`: a surface that records every render it receives
//! - `fixtures`: sample directories on disk

pub mod clock;
pub mod fixtures;
pub mod surface;
pub mod world;

pub use clock::ManualClock;
pub use surface::RecordingSurface;
pub use world::{CliResult, TestWorld};
