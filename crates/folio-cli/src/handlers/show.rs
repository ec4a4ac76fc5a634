use anyhow::{anyhow, Result};
use folio_engine::{Action, Transition};
use folio_types::{ProjectId, Section};

use crate::context::ExecutionContext;
use crate::presentation::presenters::present_show;

pub fn handle(ctx: &ExecutionContext, id: String, section: Section) -> Result<()> {
    let mut session = ctx.start_session()?;
    let requested = ProjectId::new(id);

    let Transition::Opened(opened) = session.dispatch(Action::Open(requested.clone())) else {
        return Err(anyhow!("detail view did not open for '{}'", requested));
    };
    session.dispatch(Action::SelectSection(section));

    let browser = session.browser();
    let project = browser
        .open_project()
        .ok_or_else(|| anyhow!("detail view did not open for '{}'", requested))?;

    ctx.render(present_show(
        project,
        browser.selection().active_section(),
        &opened,
    ))
}
