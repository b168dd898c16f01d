//! Common helpers for initbind integration tests.

#![allow(dead_code)]

use indexmap::IndexMap;
use initbind::{DeclOptions, Defaults, Keyword, Name, ParameterSet, RawDecl, Value};

/// Bare-name declaration.
pub fn decl(name: &str) -> RawDecl {
    RawDecl::Name(name.to_string())
}

/// Declaration with per-attribute options.
pub fn decl_with(name: &str, opts: DeclOptions) -> RawDecl {
    RawDecl::WithOptions(name.to_string(), opts)
}

/// Options overriding only the visibility token.
pub fn vis(token: &str) -> DeclOptions {
    DeclOptions {
        visibility: Some(token.to_string()),
        ..Default::default()
    }
}

/// Options overriding only the keyword mode.
pub fn kw(keyword: Keyword) -> DeclOptions {
    DeclOptions {
        keyword: Some(keyword),
        ..Default::default()
    }
}

/// Keyword-argument map preserving the given pair order.
pub fn kwargs(pairs: &[(&str, Value)]) -> IndexMap<Name, Value> {
    pairs
        .iter()
        .map(|(name, value)| (Name::from(*name), value.clone()))
        .collect()
}

/// Normalizes with list-wide defaults, panicking on failure.
pub fn build(decls: Vec<RawDecl>) -> ParameterSet {
    ParameterSet::build(decls, &Defaults::default()).expect("specification should normalize")
}
