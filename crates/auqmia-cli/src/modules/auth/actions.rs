use auqmia_core::{LoginRequest, RegistrationInput};
use serde_json::{Map, Value};

use crate::cli_args::{LoginArgs, RegisterArgs};
use crate::modules::system::CommandContext;
use crate::prompt_password;

pub(crate) async fn handle_login(args: LoginArgs, ctx: &CommandContext<'_>) -> anyhow::Result<()> {
    let password = match args.password {
        Some(password) => password,
        None => prompt_password("Password: ")?,
    };
    let credentials = LoginRequest {
        email: args.email.trim().to_string(),
        password,
    };
    ctx.coordinator.login(&credentials).await?;
    Ok(())
}

pub(crate) fn handle_logout(ctx: &CommandContext<'_>) -> anyhow::Result<()> {
    if !ctx.coordinator.is_logged() {
        println!("not logged in");
    }
    ctx.coordinator.logout()?;
    Ok(())
}

pub(crate) async fn handle_register(
    args: RegisterArgs,
    ctx: &CommandContext<'_>,
) -> anyhow::Result<()> {
    let input = registration_input(args)?;
    ctx.coordinator.register(input).await?;
    Ok(())
}

pub(crate) fn handle_whoami(ctx: &CommandContext<'_>) -> anyhow::Result<()> {
    if !ctx.coordinator.is_logged() {
        anyhow::bail!("not logged in");
    }
    let user = ctx
        .coordinator
        .user()
        .ok_or_else(|| anyhow::anyhow!("profile could not be loaded from {}", ctx.addr))?;
    println!("{}", serde_json::to_string_pretty(&user)?);
    Ok(())
}

pub(crate) fn registration_input(args: RegisterArgs) -> anyhow::Result<RegistrationInput> {
    let password = match args.password {
        Some(password) => password,
        None => prompt_password("Password: ")?,
    };
    let confirm_password = match args.confirm_password {
        Some(confirm) => confirm,
        None => prompt_password("Confirm password: ")?,
    };
    if password != confirm_password {
        anyhow::bail!("passwords do not match");
    }
    Ok(RegistrationInput {
        name: args.name,
        email: args.email.trim().to_string(),
        password,
        confirm_password,
        state: args.state,
        district: args.district,
        city: args.city,
        extra: parse_fields(&args.fields)?,
    })
}

pub(crate) fn parse_fields(fields: &[String]) -> anyhow::Result<Map<String, Value>> {
    let mut extra = Map::new();
    for field in fields {
        let Some((key, value)) = field.split_once('=') else {
            anyhow::bail!("expected KEY=VALUE, got {field}");
        };
        let key = key.trim();
        if key.is_empty() {
            anyhow::bail!("field name is empty: {field}");
        }
        extra.insert(key.to_string(), Value::String(value.to_string()));
    }
    Ok(extra)
}
