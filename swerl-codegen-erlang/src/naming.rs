//! Erlang naming conventions.

use swerl_codegen::NamingConvention;
use swerl_core::{camelize, underscore};

fn escape_erlang_reserved(name: &str) -> String {
    format!("_{}", name)
}

/// Unquoted atoms start with a lowercase letter.
fn is_atom_start(c: char) -> bool {
    c.is_ascii_lowercase()
}

/// Erlang naming conventions.
///
/// Modules and functions are lowercase atoms (`get_pet`), variables are
/// CamelCase (`PetId`). Reserved words are escaped with a leading underscore.
pub const ERLANG_NAMING: NamingConvention = NamingConvention {
    to_identifier: underscore,
    to_variable: camelize,
    is_identifier_start: is_atom_start,
    reserved_words: &[
        "after", "and", "andalso", "band", "begin", "bnot", "bor", "bsl", "bsr", "bxor", "case",
        "catch", "cond", "div", "end", "fun", "if", "let", "not", "of", "or", "orelse", "receive",
        "rem", "try", "when", "xor",
    ],
    escape_reserved: escape_erlang_reserved,
    operation_prefix: "call_",
    api_suffix: "api",
};
