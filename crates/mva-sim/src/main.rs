use std::error::Error;

use clap::{Parser, Subcommand};

use commands::demo::{self, DemoArgs};
use commands::run::{self, RunArgs};

mod commands;
mod scenario;

#[derive(Parser, Debug)]
#[command(name = "mva-sim", about = "Multiverse analyzer session driver")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Execute a YAML scenario against a fresh engine and write reports.
    Run(RunArgs),
    /// Run the built-in demonstration scenario and print its reports.
    Demo(DemoArgs),
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();
    match cli.command {
        Command::Run(args) => run::run(&args),
        Command::Demo(args) => demo::run(&args),
    }
}
