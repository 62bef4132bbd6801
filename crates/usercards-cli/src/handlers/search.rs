use crate::handlers::HandlerContext;
use crate::presentation::presenters;
use crate::types::OutputFormat;
use anyhow::Result;
use usercards_types::Directory;

pub fn handle(directory: &Directory, query: &str, format: OutputFormat) -> Result<()> {
    let ctx = HandlerContext::new(format);
    let view_model = presenters::present_search(query, directory);
    tracing::debug!(query, matches = view_model.content.matches.len(), "search");
    ctx.render(view_model)
}
