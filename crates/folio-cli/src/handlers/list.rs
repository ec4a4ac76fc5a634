use anyhow::Result;

use crate::context::ExecutionContext;
use crate::presentation::presenters::present_list;

pub fn handle(ctx: &ExecutionContext, filter: Option<String>) -> Result<()> {
    let mut session = ctx.start_session()?;
    if let Some(raw) = filter.as_deref() {
        session.set_filter_str(raw)?;
    }

    ctx.render(present_list(session.browser()))
}
