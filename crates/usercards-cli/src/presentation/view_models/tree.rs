use serde::Serialize;
use std::fmt;
use usercards_engine::Node;

use super::CreateView;
use crate::presentation::views::text::TreeOutlineView;

#[derive(Debug, Clone, Serialize)]
pub struct ViewTreeViewModel {
    pub query: String,
    pub tree: Node,
}

impl CreateView for ViewTreeViewModel {
    fn create_view<'a>(&'a self) -> Box<dyn fmt::Display + 'a> {
        Box::new(TreeOutlineView::new(&self.tree))
    }
}
