use clap::Args;
use eyre::Result;
use swerl_codegen::Engine;

use super::{UnwrapOrExit, session::GeneratorArgs};

#[derive(Args)]
pub struct CheckCommand {
    #[command(flatten)]
    pub args: GeneratorArgs,
}

impl CheckCommand {
    /// Run the check command
    pub fn run(&self) -> Result<()> {
        let session = self.args.load()?;
        let descriptor = session.descriptor()?;
        let document = session.document()?;

        let plan = Engine::new(descriptor.as_ref())
            .run(&document)
            .unwrap_or_exit();

        let source = document
            .path()
            .map(|path| path.display().to_string())
            .unwrap_or_default();
        println!("✓ {} is valid\n", source);

        let api = document.api();
        if let Some(info) = &api.info {
            println!(
                "  {} v{}\n",
                info.title.as_deref().unwrap_or("untitled"),
                info.version.as_deref().unwrap_or("?")
            );
        }

        println!("  target:  {} ({})", plan.target, plan.kind);
        println!("  package: {}", plan.package_name);
        println!("  format:  {}\n", document.format());

        let count = plan.api_files.len();
        println!(
            "  {} API module{}:",
            count,
            if count == 1 { "" } else { "s" }
        );
        for file in &plan.api_files {
            println!(
                "    {} ({} operation{})",
                file.path.display(),
                file.group.operations.len(),
                if file.group.operations.len() == 1 { "" } else { "s" }
            );
        }

        println!(
            "\n  {} supporting file{}",
            plan.supporting_files.len(),
            if plan.supporting_files.len() == 1 { "" } else { "s" }
        );

        Ok(())
    }
}
