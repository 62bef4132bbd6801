pub mod profile;
pub mod search;

pub use profile::present_profile;
pub use search::{present_list, present_search, present_tree};
