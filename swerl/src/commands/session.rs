//! Configuration loading shared by the generation commands.

use std::path::{Path, PathBuf};

use clap::Args;
use eyre::{Context, Result, bail};
use indexmap::IndexMap;
use serde_json::Value;
use swerl_codegen::TargetDescriptor;
use swerl_core::PackageName;
use swerl_spec::{ApiDocument, CONFIG_FILENAME, Config, ConfigFile};

use super::UnwrapOrExit;
use crate::target;

#[derive(Args)]
pub struct GeneratorArgs {
    /// Path to swerl.toml (defaults to ./swerl.toml when present)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// API description to generate from (overrides `input`)
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Target to generate for (overrides `target`)
    #[arg(short, long)]
    pub target: Option<String>,

    /// Prefix of every generated module (overrides `package_name`)
    #[arg(short, long)]
    pub package_name: Option<String>,
}

/// Settings for one run, after command-line overrides.
pub struct Session {
    pub config: Config,
    /// API description path, if configured anywhere
    pub input: Option<PathBuf>,
}

impl GeneratorArgs {
    /// Load the configuration file and apply command-line overrides.
    ///
    /// A missing `./swerl.toml` means defaults; a missing `--config` file is
    /// an error.
    pub fn load(&self) -> Result<Session> {
        let (mut config, mut input) = match &self.config {
            Some(path) if !path.exists() => {
                bail!("configuration file '{}' not found", path.display())
            }
            Some(path) => read_config(path),
            None if Path::new(CONFIG_FILENAME).exists() => read_config(Path::new(CONFIG_FILENAME)),
            None => {
                tracing::debug!("no {} found, using defaults", CONFIG_FILENAME);
                (Config::default(), None)
            }
        };

        if let Some(target) = &self.target {
            config.target = target.clone();
        }
        if let Some(name) = &self.package_name {
            config.package_name =
                PackageName::new(name.as_str()).wrap_err("invalid --package-name")?;
        }
        if let Some(path) = &self.input {
            input = Some(path.clone());
        }

        tracing::info!(
            generator = %config.target,
            package = %config.package_name,
            "loaded configuration"
        );

        Ok(Session { config, input })
    }
}

fn read_config(path: &Path) -> (Config, Option<PathBuf>) {
    let file = ConfigFile::open(path).unwrap_or_exit();
    let input = file.input_path();
    (file.into_config(), input)
}

impl Session {
    pub fn descriptor(&self) -> Result<Box<dyn TargetDescriptor>> {
        target::descriptor(&self.config.target, self.config.package_name.clone())
    }

    /// Open the API description.
    pub fn document(&self) -> Result<ApiDocument> {
        let Some(input) = &self.input else {
            bail!(
                "no API description given, set `input` in {} or pass --input",
                CONFIG_FILENAME
            );
        };
        Ok(ApiDocument::open(input).unwrap_or_exit())
    }

    /// User template properties as JSON values.
    pub fn properties(&self) -> Result<IndexMap<String, Value>> {
        self.config
            .properties
            .iter()
            .map(|(key, value)| {
                let value = serde_json::to_value(value)
                    .wrap_err_with(|| format!("invalid property '{}'", key))?;
                Ok((key.clone(), value))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    fn args(config: PathBuf) -> GeneratorArgs {
        GeneratorArgs {
            config: Some(config),
            input: None,
            target: None,
            package_name: None,
        }
    }

    #[test]
    fn test_load_config_file() {
        let dir = TempDir::new().unwrap();
        let config = dir.path().join(CONFIG_FILENAME);
        fs::write(
            &config,
            r#"
            [generator]
            target = "erlang-client-oas3"
            package_name = "petstore"
            input = "specs/petstore.json"

            [properties]
            apiVersion = "2.0.0"
            retries = 3
            "#,
        )
        .unwrap();

        let session = args(config).load().unwrap();
        assert_eq!(session.config.target, "erlang-client-oas3");
        assert_eq!(session.config.package_name.as_str(), "petstore");
        assert_eq!(session.input, Some(dir.path().join("specs/petstore.json")));

        let properties = session.properties().unwrap();
        assert_eq!(properties["apiVersion"], "2.0.0");
        assert_eq!(properties["retries"], 3);
    }

    #[test]
    fn test_command_line_overrides() {
        let dir = TempDir::new().unwrap();
        let config = dir.path().join(CONFIG_FILENAME);
        fs::write(&config, "[generator]\npackage_name = \"petstore\"\n").unwrap();

        let session = GeneratorArgs {
            input: Some(PathBuf::from("api.yaml")),
            target: Some("erlang-client-oas3".to_string()),
            package_name: Some("shop".to_string()),
            ..args(config)
        }
        .load()
        .unwrap();

        assert_eq!(session.config.target, "erlang-client-oas3");
        assert_eq!(session.config.package_name.as_str(), "shop");
        assert_eq!(session.input, Some(PathBuf::from("api.yaml")));
        assert_eq!(session.descriptor().unwrap().name(), "erlang-client-oas3");
    }

    #[test]
    fn test_missing_default_config_uses_defaults() {
        assert!(!Path::new(CONFIG_FILENAME).exists());

        let session = GeneratorArgs {
            config: None,
            input: None,
            target: None,
            package_name: None,
        }
        .load()
        .unwrap();

        assert_eq!(session.config, Config::default());
        assert!(session.input.is_none());
        assert!(session.document().is_err());
    }

    #[test]
    fn test_missing_explicit_config_is_an_error() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("other.toml");

        let Err(err) = args(missing.clone()).load() else {
            panic!("expected a missing configuration error");
        };
        assert_eq!(
            err.to_string(),
            format!("configuration file '{}' not found", missing.display())
        );
    }

    #[test]
    fn test_invalid_package_name_override() {
        let dir = TempDir::new().unwrap();
        let config = dir.path().join(CONFIG_FILENAME);
        fs::write(&config, "").unwrap();

        let result = GeneratorArgs {
            package_name: Some("Pet/Store".to_string()),
            ..args(config)
        }
        .load();

        assert!(result.is_err());
    }
}
