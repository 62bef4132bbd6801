use crate::handlers::HandlerContext;
use crate::presentation::presenters;
use crate::types::OutputFormat;
use anyhow::Result;
use usercards_types::Directory;

pub fn handle(directory: &Directory, format: OutputFormat) -> Result<()> {
    let ctx = HandlerContext::new(format);
    ctx.render(presenters::present_list(directory))
}
