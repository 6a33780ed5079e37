use clap::Args;
use eyre::Result;

use super::session::GeneratorArgs;

#[derive(Args)]
pub struct TypesCommand {
    #[command(flatten)]
    pub args: GeneratorArgs,
}

impl TypesCommand {
    pub fn run(&self) -> Result<()> {
        let session = self.args.load()?;
        let descriptor = session.descriptor()?;

        println!("{} types:", descriptor.name());
        for (source, target) in descriptor.type_mapping().iter() {
            println!("  {:<12} -> {}", source, target);
        }
        Ok(())
    }
}
