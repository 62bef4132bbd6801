// NOTE: usercards Architecture
//
// Why a view tree (not direct widget calls)?
// - Filtering and card layout live in usercards-engine and know nothing about terminals
// - The same tree feeds the interactive TUI, the plain-text listing and the JSON dump
// - Handlers are data on the tree, so keyboard activation is testable without a terminal
//
// Why a polled debounce (not a timer thread)?
// - The TUI loop already waits on input with a timeout; the pending deadline just shortens it
// - Everything stays on one thread, so at most one render is ever pending

mod args;
mod commands;
pub mod config;
mod handlers;
pub mod logging;
pub mod presentation;
pub mod types;

pub use args::{Cli, Commands};
pub use commands::run;
