use clap::Parser;

mod cli;
mod modify;

use cli::Cli;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Setup logging
    tracing_subscriber::fmt()
        .with_max_level(cli.log.level())
        .with_target(false)
        .without_time()
        .init();

    modify::execute(&cli)
}
