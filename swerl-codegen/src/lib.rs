//! Target descriptor abstractions and the generation engine for swerl.
//!
//! A target language plugs into the engine by implementing
//! [`TargetDescriptor`]. The engine walks an API description once, asks the
//! descriptor how to name and type everything, and returns a
//! [`GenerationPlan`] describing every file a renderer should produce.
//!
//! # Module Organization
//!
//! - [`TargetDescriptor`] - The capability interface of a target
//! - [`TypeMapping`] / [`NamingConvention`] - Tables and rules a descriptor is built from
//! - [`Engine`] - Drives a descriptor over an [`ApiDocument`](swerl_spec::ApiDocument)
//! - [`GenerationPlan`] - The engine's output

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

mod context;
mod descriptor;
mod engine;
mod error;
mod naming;
mod operation;
mod plan;
mod scope;
mod supporting;
mod type_mapping;

pub use context::SupportingFileContext;
pub use descriptor::{GeneratorKind, TargetDescriptor};
pub use engine::Engine;
pub use error::{Error, Result};
pub use naming::NamingConvention;
pub use operation::{CodegenOperation, CodegenParameter, OperationGroup};
pub use plan::{ApiFile, GenerationPlan};
pub use scope::NameScope;
pub use supporting::SupportingFile;
pub use type_mapping::TypeMapping;
