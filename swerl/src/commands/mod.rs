mod check;
mod completions;
mod plan;
mod session;
mod targets;
mod types;

use check::CheckCommand;
use clap::{ArgAction, Parser, Subcommand};
use completions::CompletionsCommand;
use eyre::Result;
use plan::PlanCommand;
use targets::TargetsCommand;
use types::TypesCommand;

/// Extension trait for exiting on configuration or generation errors with
/// pretty formatting
pub(crate) trait UnwrapOrExit<T> {
    fn unwrap_or_exit(self) -> T;
}

impl<T> UnwrapOrExit<T> for swerl_spec::Result<T> {
    fn unwrap_or_exit(self) -> T {
        match self {
            Ok(v) => v,
            Err(e) => {
                eprintln!("{:?}", miette::Report::new(*e));
                std::process::exit(1);
            }
        }
    }
}

impl<T> UnwrapOrExit<T> for swerl_codegen::Result<T> {
    fn unwrap_or_exit(self) -> T {
        match self {
            Ok(v) => v,
            Err(e) => {
                eprintln!("{:?}", miette::Report::new(e));
                std::process::exit(1);
            }
        }
    }
}

#[derive(Parser)]
#[command(name = "swerl")]
#[command(version)]
#[command(about = "Plan Erlang API clients from Swagger and OpenAPI descriptions")]
pub(crate) struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn run(&self) -> Result<()> {
        match &self.command {
            Commands::Check(cmd) => cmd.run(),
            Commands::Plan(cmd) => cmd.run(),
            Commands::Types(cmd) => cmd.run(),
            Commands::Targets(cmd) => cmd.run(),
            Commands::Completions(cmd) => cmd.run(),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Validate the configuration and API description without writing anything
    Check(CheckCommand),

    /// Print or write the generation plan
    Plan(PlanCommand),

    /// Show the type table of a target
    Types(TypesCommand),

    /// List available targets
    Targets(TargetsCommand),

    /// Generate shell completions
    Completions(CompletionsCommand),
}
