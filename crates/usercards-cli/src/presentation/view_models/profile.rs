use serde::Serialize;
use std::fmt;

use super::CreateView;

#[derive(Debug, Clone, Serialize)]
pub struct ProfilePresentationViewModel {
    pub name: String,
    pub bio: String,
    /// Exactly what an activated card presents
    pub message: String,
}

impl CreateView for ProfilePresentationViewModel {
    fn create_view<'a>(&'a self) -> Box<dyn fmt::Display + 'a> {
        Box::new(ProfilePresentationView { data: self })
    }
}

struct ProfilePresentationView<'a> {
    data: &'a ProfilePresentationViewModel,
}

impl<'a> fmt::Display for ProfilePresentationView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "{}", self.data.message)
    }
}
