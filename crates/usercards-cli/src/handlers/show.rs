use crate::handlers::HandlerContext;
use crate::presentation::presenters;
use crate::types::OutputFormat;
use anyhow::Result;
use usercards_types::Directory;

pub fn handle(directory: &Directory, name: &str, format: OutputFormat) -> Result<()> {
    let ctx = HandlerContext::new(format);

    let Some(record) = directory.find_by_name(name) else {
        anyhow::bail!(
            "No profile named '{}'. Run 'usercards list' to see every profile.",
            name.trim()
        );
    };

    let view_model = presenters::present_profile(record)?;
    ctx.render(view_model)
}
