use clap::{Args, Subcommand};

#[derive(Args)]
pub struct ProfileArgs {
    #[command(subcommand)]
    pub command: ProfileCommand,
}

#[derive(Subcommand)]
pub enum ProfileCommand {
    #[command(about = "Change profile fields; omitted fields are left as they are")]
    Update(ProfileUpdateArgs),
}

#[derive(Args)]
pub struct ProfileUpdateArgs {
    #[arg(long)]
    pub name: Option<String>,
    #[arg(long)]
    pub email: Option<String>,
    #[arg(long, requires_all = ["city", "district"])]
    pub state: Option<String>,
    #[arg(long, requires_all = ["state", "district"])]
    pub city: Option<String>,
    #[arg(long, requires_all = ["state", "city"])]
    pub district: Option<String>,
    #[arg(long, value_name = "KEY=VALUE", help = "Extra profile field")]
    pub field: Vec<String>,
}
