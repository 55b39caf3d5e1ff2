use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "scamcheck-server")]
#[command(about = "Scamcheck scam text detection API", long_about = None)]
pub struct Cli {
    /// Configuration file path
    #[arg(short, long, default_value = "config.yaml")]
    pub config: String,

    /// Model artifact path (overrides the config file)
    #[arg(short, long)]
    pub model: Option<String>,

    /// Listen address
    #[arg(short = 'l', long, default_value = "0.0.0.0")]
    pub listen: String,

    /// Listen port
    #[arg(short = 'P', long, default_value = "5000")]
    pub port: u16,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}
