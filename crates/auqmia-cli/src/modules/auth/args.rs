use clap::Args;

#[derive(Args)]
pub struct LoginArgs {
    #[arg(long)]
    pub email: String,
    #[arg(long, help = "Prompted for when omitted")]
    pub password: Option<String>,
}

#[derive(Args)]
pub struct RegisterArgs {
    #[arg(long)]
    pub name: String,
    #[arg(long)]
    pub email: String,
    #[arg(long, help = "Prompted for when omitted")]
    pub password: Option<String>,
    #[arg(long)]
    pub confirm_password: Option<String>,
    #[arg(long, help = "Two-letter state code")]
    pub state: String,
    #[arg(long)]
    pub city: String,
    #[arg(long)]
    pub district: String,
    #[arg(long = "field", value_name = "KEY=VALUE", help = "Extra profile field")]
    pub fields: Vec<String>,
}
