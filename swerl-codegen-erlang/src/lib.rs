//! Erlang client target for swerl.
//!
//! [`ErlangDescriptor`] implements [`TargetDescriptor`](swerl_codegen::TargetDescriptor)
//! for the `erlang-client` (Swagger 2.0) and `erlang-client-oas3` (OpenAPI 3)
//! targets. The two differ only in the values of their [`Flavor`].

mod descriptor;
mod flavor;
mod naming;
mod type_mapper;

pub mod layout;

pub use descriptor::{DEFAULT_API_VERSION, ErlangDescriptor};
pub use flavor::Flavor;
pub use naming::ERLANG_NAMING;
pub use type_mapper::erlang_type_mapping;
