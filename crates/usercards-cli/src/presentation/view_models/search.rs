use serde::Serialize;
use std::fmt;
use usercards_engine::Node;
use usercards_types::UserRecord;

use super::CreateView;
use crate::presentation::views::text::CardListTextView;

#[derive(Debug, Clone, Serialize)]
pub struct ProfileViewModel {
    pub name: String,
    pub picture_url: String,
    pub bio: Option<String>,
}

impl From<&UserRecord> for ProfileViewModel {
    fn from(record: &UserRecord) -> Self {
        Self {
            name: record.name.clone(),
            picture_url: record.picture_url.clone(),
            bio: record.bio.clone(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct SearchResultViewModel {
    /// Normalized query; `None` when everything is listed
    pub query: Option<String>,
    pub total: usize,
    pub matches: Vec<ProfileViewModel>,

    /// Rendered card list, materialized by the text view
    #[serde(skip)]
    pub view: Node,
}

impl CreateView for SearchResultViewModel {
    fn create_view<'a>(&'a self) -> Box<dyn fmt::Display + 'a> {
        Box::new(CardListTextView::new(&self.view))
    }
}
