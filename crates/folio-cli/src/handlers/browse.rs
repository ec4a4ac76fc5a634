use anyhow::Result;
use is_terminal::IsTerminal;
use tracing::debug;

use crate::context::ExecutionContext;
use crate::presentation::presenters::present_list;
use crate::presentation::renderers::TuiRenderer;
use crate::types::OutputFormat;

pub fn handle(ctx: &ExecutionContext, filter: Option<String>) -> Result<()> {
    let mut session = ctx.start_session()?;
    if let Some(raw) = filter.as_deref() {
        session.set_filter_str(raw)?;
    }

    let use_tui = ctx.format == OutputFormat::Plain && std::io::stdout().is_terminal();
    if !use_tui {
        debug!("not attached to a terminal; printing the gallery");
        return ctx.render(present_list(session.browser()));
    }

    TuiRenderer::run(session)
}
