use clap::Parser;

/// framefind: a window with one embedded page and find-in-page.
#[derive(Parser, Debug, Default)]
#[command(name = "framefind", version, about)]
pub struct Args {
    /// Page to load instead of the built-in sample.
    #[arg(long)]
    pub url: Option<String>,

    /// Search for this text once the page has loaded.
    #[arg(long)]
    pub find: Option<String>,

    /// Config file path override.
    #[arg(long)]
    pub config: Option<String>,

    /// Log level override (trace, debug, info, warn, error).
    #[arg(long)]
    pub log_level: Option<String>,
}

pub fn parse() -> Args {
    Args::parse()
}
