use anyhow::Result;
use folio_runtime::init_workspace;

use crate::context::ExecutionContext;
use crate::presentation::presenters::present_init_result;

pub fn handle(ctx: &ExecutionContext, with_sample: bool) -> Result<()> {
    let result = init_workspace(ctx.data_dir(), with_sample)?;
    ctx.render(present_init_result(result))
}
