use super::args::{Cli, Commands};
use super::handlers;
use crate::context::ExecutionContext;
use anyhow::Result;
use folio_runtime::resolve_workspace_path;

pub fn run(cli: Cli) -> Result<()> {
    let data_dir = resolve_workspace_path(cli.data_dir.as_deref())?;
    let ctx = ExecutionContext::new(data_dir, cli.catalog, cli.format);

    let command = cli.command.unwrap_or(Commands::Browse { filter: None });

    match command {
        Commands::Browse { filter } => handlers::browse::handle(&ctx, filter),
        Commands::List { filter } => handlers::list::handle(&ctx, filter),
        Commands::Show { id, section } => handlers::show::handle(&ctx, id, section.into()),
        Commands::Check => handlers::check::handle(&ctx),
        Commands::Init { with_sample } => handlers::init::handle(&ctx, with_sample),
    }
}
