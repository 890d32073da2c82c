use clap::Parser;
use phonabet::cli::Cli;

fn main() -> anyhow::Result<()> {
    Cli::parse().run()
}
