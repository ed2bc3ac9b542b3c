use crate::cli_args::{AnimalsArgs, AnimalsCommand};
use crate::modules::system::CommandContext;

pub(crate) async fn handle_animals(
    args: AnimalsArgs,
    ctx: &CommandContext<'_>,
) -> anyhow::Result<()> {
    match args.command {
        AnimalsCommand::List => {
            ctx.coordinator.refresh_animals().await?;
            let animals = ctx.coordinator.animals();
            println!("{}", serde_json::to_string_pretty(&animals)?);
        }
        AnimalsCommand::Delete(args) => {
            ctx.coordinator.delete_animal(&args.id).await?;
            println!(
                "deleted animal {} ({} left)",
                args.id,
                ctx.coordinator.animals().len()
            );
        }
    }
    Ok(())
}
