use clap::Args;
use eyre::Result;

use crate::target;

#[derive(Args)]
pub struct TargetsCommand {}

impl TargetsCommand {
    pub fn run(&self) -> Result<()> {
        println!("Targets:");
        for (name, help) in target::list() {
            println!("  {:<20} {}", name, help);
        }
        Ok(())
    }
}
