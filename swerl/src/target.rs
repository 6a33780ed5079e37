//! Target dispatch.
//!
//! Maps target names from `swerl.toml` or the command line to descriptors.

use eyre::{Result, bail};
use swerl_codegen::TargetDescriptor;
use swerl_codegen_erlang::{ErlangDescriptor, Flavor};
use swerl_core::PackageName;

/// Names of every available target.
pub fn names() -> Vec<&'static str> {
    Flavor::ALL.iter().map(Flavor::name).collect()
}

/// `(name, help)` pairs of every available target.
pub fn list() -> Vec<(&'static str, &'static str)> {
    Flavor::ALL
        .iter()
        .map(|flavor| (flavor.name(), flavor.help()))
        .collect()
}

/// Create the descriptor for a target.
pub fn descriptor(name: &str, package_name: PackageName) -> Result<Box<dyn TargetDescriptor>> {
    let Ok(flavor) = name.parse::<Flavor>() else {
        bail!(
            "unknown target '{}', available targets: {}",
            name,
            names().join(", ")
        );
    };

    Ok(Box::new(ErlangDescriptor::new(flavor, package_name)?))
}
