//! Output layout of a generated Erlang client.

use std::path::PathBuf;

use swerl_core::PackageName;

/// Erlang source directory relative to the output root.
pub const SRC_DIR: &str = "src";

/// Private resources directory relative to the output root.
pub const PRIV_DIR: &str = "priv";

/// File extension of Erlang source files.
pub const FILE_EXTENSION: &str = "erl";

/// Path of a file in the source directory.
pub fn source_file_path(file_name: &str) -> PathBuf {
    PathBuf::from(SRC_DIR).join(file_name)
}

/// Path of a file in the private resources directory.
pub fn priv_file_path(file_name: &str) -> PathBuf {
    PathBuf::from(PRIV_DIR).join(file_name)
}

/// Path of a package module: `src/<package>.erl` for an empty suffix,
/// `src/<package>_<suffix>.erl` otherwise.
pub fn package_module_path(package: &PackageName, suffix: &str) -> PathBuf {
    let module = if suffix.is_empty() {
        package.to_string()
    } else {
        format!("{}_{}", package, suffix)
    };
    source_file_path(&format!("{}.{}", module, FILE_EXTENSION))
}
