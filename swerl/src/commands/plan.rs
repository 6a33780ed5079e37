use std::path::{Path, PathBuf};

use clap::Args;
use eyre::{Context, Result};
use swerl_codegen::Engine;
use swerl_core::{File, FileRules, WriteResult};

use super::{UnwrapOrExit, session::GeneratorArgs};

#[derive(Args)]
pub struct PlanCommand {
    #[command(flatten)]
    pub args: GeneratorArgs,

    /// Write the plan to a file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Leave an existing --output file untouched
    #[arg(long, requires = "output")]
    pub keep_existing: bool,
}

impl PlanCommand {
    pub fn run(&self) -> Result<()> {
        let session = self.args.load()?;
        let descriptor = session.descriptor()?;
        let document = session.document()?;

        let plan = Engine::new(descriptor.as_ref())
            .with_properties(session.properties()?)
            .run(&document)
            .unwrap_or_exit();

        let json =
            serde_json::to_string_pretty(&plan).wrap_err("failed to serialize generation plan")?;

        match &self.output {
            Some(path) => match write_plan(path, &json, self.keep_existing)? {
                WriteResult::Written => println!(
                    "Wrote plan for {} files to {}",
                    plan.output_paths().len(),
                    path.display()
                ),
                WriteResult::Skipped => println!("Kept existing {}", path.display()),
            },
            None => println!("{}", json),
        }

        Ok(())
    }
}

fn write_plan(path: &Path, json: &str, keep_existing: bool) -> Result<WriteResult> {
    let rules = if keep_existing {
        FileRules::if_missing()
    } else {
        FileRules::always()
    };

    File::new(path, format!("{}\n", json))
        .with_rules(rules)
        .write()
        .wrap_err_with(|| format!("failed to write {}", path.display()))
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_write_plan_replaces_existing_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("plan.json");
        fs::write(&path, "old").unwrap();

        assert_eq!(write_plan(&path, "{}", false).unwrap(), WriteResult::Written);
        assert_eq!(fs::read_to_string(&path).unwrap(), "{}\n");
    }

    #[test]
    fn test_write_plan_keeps_existing_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("plans").join("plan.json");

        assert_eq!(write_plan(&path, "{}", true).unwrap(), WriteResult::Written);
        assert_eq!(write_plan(&path, "[]", true).unwrap(), WriteResult::Skipped);
        assert_eq!(fs::read_to_string(&path).unwrap(), "{}\n");
    }
}
