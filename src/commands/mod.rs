use crate::cli::Cmd;
use crate::core::storage::AppCtx;

pub mod action;
pub mod copy;
pub mod delete;
pub mod generate;
pub mod interactive;
pub mod list;
pub mod optimize;
pub mod save;
pub mod search;
pub mod test;
pub mod use_prompt;

/// Dispatches the parsed command to the appropriate handler.
pub async fn dispatch(command: Cmd, ctx: &AppCtx) -> Result<(), String> {
    match command {
        Cmd::Generate(args) => generate::run(ctx, &args).await,
        Cmd::Optimize(args) => optimize::run(ctx, &args).await,
        Cmd::Test(args) => test::run(ctx, &args).await,
        Cmd::Save(args) => save::run(ctx, &args),
        Cmd::List { model } => list::run(ctx, model.as_deref()),
        Cmd::Search { query, model } => search::run(ctx, &query, &model),
        Cmd::Delete { id, yes } => delete::run(ctx, id, yes),
        Cmd::Copy { id } => copy::run(ctx, id),
        Cmd::Use { id, model } => use_prompt::run(ctx, id, model).await,
        Cmd::Interactive => interactive::run(ctx).await,
    }
}
