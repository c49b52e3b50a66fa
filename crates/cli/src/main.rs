use clap::Parser;

use bankledger_cli::{Cli, run};

fn main() -> anyhow::Result<()> {
    bankledger_observability::init();

    let cli = Cli::parse();
    run(&cli)
}
