use anyhow::Result;
use clap::Parser;
use terminal_streak::cli::Cli;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    terminal_streak::run(cli).await
}
