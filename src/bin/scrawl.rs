use std::{fs, path::PathBuf};

use clap::{Parser, Subcommand};

use scrawl::{Engine, Repl, ScrawlError};

#[derive(Parser)]
#[command(author, version, about = "Scrawl stack language interpreter")]
struct Args {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Run a Scrawl script file
    Run { script: PathBuf },
    /// Evaluate a snippet of Scrawl code
    Eval { source: String },
    /// Start an interactive session
    Repl,
}

fn main() -> Result<(), ScrawlError> {
    let args = Args::parse();
    match args.command.unwrap_or(Command::Repl) {
        Command::Run { script } => run_script(script),
        Command::Eval { source } => {
            let mut engine = Engine::new();
            engine.run(&source)
        }
        Command::Repl => {
            let mut repl = Repl::new();
            repl.run()
        }
    }
}

fn run_script(path: PathBuf) -> Result<(), ScrawlError> {
    let source = fs::read_to_string(&path)?;
    let mut engine = Engine::new();
    engine.run(&source)
}
