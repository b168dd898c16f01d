//! Declarative constructor specification and argument binding.
//!
//! Attribute declarations (name, visibility, positional/keyword-ness,
//! optional default) are normalized once per type into a [`ParameterSet`];
//! every construction call is then validated and bound against that set,
//! producing an ordered name → value mapping for field assignment. Accessor
//! capabilities (read, write, both, none) are registered per attribute at
//! configuration time through an [`AccessorSink`].

pub mod bind;
pub mod class;
pub mod collect;
pub mod core;
pub mod error;
pub mod object;
pub mod spec;

pub use crate::bind::{Bindings, BoundAttribute, BoundList};
pub use crate::class::{Access, AccessorSink, AccessorTable, configure, register_accessors};
pub use crate::core::value::{Name, Value};
pub use crate::error::InitError;
pub use crate::object::{Fields, MergePolicy};
pub use crate::spec::decl::{DeclOptions, Defaults, Keyword, RawDecl, Visibility};
pub use crate::spec::params::{AttributeSpec, ParameterSet};
