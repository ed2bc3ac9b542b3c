use auqmia_core::{Address, UserPatch};

use crate::cli_args::{ProfileArgs, ProfileCommand, ProfileUpdateArgs};
use crate::modules::auth::parse_fields;
use crate::modules::system::CommandContext;

pub(crate) async fn handle_profile(
    args: ProfileArgs,
    ctx: &CommandContext<'_>,
) -> anyhow::Result<()> {
    match args.command {
        ProfileCommand::Update(args) => {
            let patch = user_patch(args)?;
            if patch.is_empty() {
                anyhow::bail!("nothing to update");
            }
            let user = ctx.coordinator.update_user(&patch).await?;
            println!("{}", serde_json::to_string_pretty(&user)?);
        }
    }
    Ok(())
}

pub(crate) fn user_patch(args: ProfileUpdateArgs) -> anyhow::Result<UserPatch> {
    let address = match (args.state, args.city, args.district) {
        (Some(state), Some(city), Some(district)) => Some(Address {
            state: state.to_uppercase(),
            city,
            district,
        }),
        (None, None, None) => None,
        _ => anyhow::bail!("--state, --city and --district must be given together"),
    };
    Ok(UserPatch {
        name: args.name,
        email: args.email.map(|email| email.trim().to_string()),
        password: None,
        address,
        extra: parse_fields(&args.field)?,
    })
}
