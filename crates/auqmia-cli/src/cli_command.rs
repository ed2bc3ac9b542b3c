use auqmia_client::SessionPhase;
use serde_json::json;

use crate::cli_args::*;
use crate::modules::animals::handle_animals;
use crate::modules::auth::{handle_login, handle_logout, handle_register, handle_whoami};
use crate::modules::profile::handle_profile;
use crate::modules::system::CommandContext;

pub(crate) async fn handle_command(
    command: Command,
    ctx: &CommandContext<'_>,
) -> anyhow::Result<()> {
    match command {
        Command::Login(args) => handle_login(args, ctx).await?,
        Command::Logout => handle_logout(ctx)?,
        Command::Register(args) => handle_register(args, ctx).await?,
        Command::Whoami => handle_whoami(ctx)?,
        Command::Profile(args) => handle_profile(args, ctx).await?,
        Command::Animals(args) => handle_animals(args, ctx).await?,
        Command::Status => {
            let snapshot = ctx.coordinator.snapshot();
            let phase = match snapshot.phase {
                SessionPhase::Unauthenticated => "unauthenticated",
                SessionPhase::Authenticating => "authenticating",
                SessionPhase::Authenticated => "authenticated",
            };
            let status = json!({
                "addr": ctx.addr,
                "logged_in": snapshot.is_logged,
                "phase": phase,
                "user_id": snapshot.user.as_ref().map(|user| user.id.to_string()),
                "animals": snapshot.animals.len(),
                "credential_backend": ctx.config.credential_backend,
            });
            println!("{}", serde_json::to_string_pretty(&status)?);
        }
        Command::Config(_) => unreachable!(),
    }

    Ok(())
}
