use anyhow::Result;

use crate::context::ExecutionContext;
use crate::presentation::presenters::present_check;

pub fn handle(ctx: &ExecutionContext) -> Result<()> {
    let config = ctx.config()?;
    let session = ctx.start_session()?;
    let catalog = session.browser().catalog();

    let missing_default = config
        .default_project
        .as_ref()
        .filter(|id| !catalog.contains(id));

    ctx.render(present_check(catalog, session.source(), missing_default))
}
