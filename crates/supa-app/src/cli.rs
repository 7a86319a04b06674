use clap::Parser;

/// SUPA Chat: talk to an OpenAI-compatible model from the terminal.
#[derive(Parser, Debug)]
#[command(name = "supa-chat", version, about)]
pub struct Args {
    /// Config file path override.
    #[arg(long)]
    pub config: Option<String>,

    /// Log filter directive (e.g. debug, supa=debug).
    #[arg(long)]
    pub log_level: Option<String>,

    /// Model identifier override.
    #[arg(short = 'm', long)]
    pub model: Option<String>,

    /// Wait for full replies instead of streaming them.
    #[arg(long)]
    pub no_stream: bool,
}

pub fn parse() -> Args {
    Args::parse()
}
