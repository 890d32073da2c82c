//! Command-line surface: argument parsing and command dispatch.

use anyhow::Context;
use clap::{Parser, Subcommand};
use console::Style;
use phonabet_render::{StdoutSink, TableRenderer};

use crate::alphabet;

/// Terminal reference for the sound alphabet
#[derive(Parser)]
#[command(name = "phonabet", version, about)]
pub struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Print the full sound alphabet as a table
    ShowAlphabet,
    /// Print a smoke-test greeting
    Test,
}

impl Cli {
    /// Run the parsed command.
    pub fn run(self) -> anyhow::Result<()> {
        match self.command {
            Command::ShowAlphabet => show_alphabet(),
            Command::Test => {
                println!("\n {} \n", Style::new().red().apply_to("hello from test"));
                Ok(())
            }
        }
    }
}

fn show_alphabet() -> anyhow::Result<()> {
    let spec = alphabet::table_spec();
    let mut renderer = TableRenderer::new(StdoutSink);
    renderer
        .render(&spec)
        .context("failed to render the sound alphabet")
}
