use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "crumb", bin_name = "crumb", version)]
#[command(about = "Interactive inventory tracker for small bakeries", long_about = None)]
pub struct Cli {
    /// Disable colored output
    #[arg(long)]
    pub plain: bool,

    /// Currency symbol to use when printing prices (overrides config)
    #[arg(long)]
    pub currency: Option<String>,
}
