mod context;

pub mod browse;
pub mod list;
pub mod search;
pub mod show;
pub mod tree;

pub use context::HandlerContext;
