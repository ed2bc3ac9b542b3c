use clap::{Args, Subcommand};

#[derive(Args)]
pub struct AnimalsArgs {
    #[command(subcommand)]
    pub command: AnimalsCommand,
}

#[derive(Subcommand)]
pub enum AnimalsCommand {
    #[command(about = "List animals up for adoption")]
    List,
    #[command(about = "Remove an animal from the catalog")]
    Delete(AnimalDeleteArgs),
}

#[derive(Args)]
pub struct AnimalDeleteArgs {
    #[arg(help = "Animal ID")]
    pub id: String,
}
