pub mod common;
pub mod profile;
pub mod result;
pub mod search;
pub mod tree;

use std::fmt;

pub use common::{Guidance, OutputFormat, StatusBadge, StatusLevel};
pub use profile::ProfilePresentationViewModel;
pub use result::CommandResultViewModel;
pub use search::{ProfileViewModel, SearchResultViewModel};
pub use tree::ViewTreeViewModel;

/// Bridge from a view model to its text view
pub trait CreateView {
    fn create_view<'a>(&'a self) -> Box<dyn fmt::Display + 'a>;
}
