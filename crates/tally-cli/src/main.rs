use clap::Parser;
use tally_cli::TallyCli;

fn main() -> anyhow::Result<()> {
    tally_cli::run(TallyCli::parse())
}
