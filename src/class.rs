//! Accessor capability registration at class-configuration time.

use std::sync::Arc;

use indexmap::IndexMap;

use crate::core::value::Name;
use crate::error::InitError;
use crate::spec::decl::{Defaults, RawDecl, Visibility};
use crate::spec::params::ParameterSet;

/// Receives accessor capabilities for the attributes of one type. Backed by
/// codegen in real integrations; [`AccessorTable`] records them for
/// inspection.
pub trait AccessorSink {
    fn register_reader(&mut self, name: &str);
    fn register_writer(&mut self, name: &str);
}

/// Read/write capability pair for one attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Access {
    pub read: bool,
    pub write: bool,
}

/// Recording sink: the capability table handed to accessor generation.
/// Attributes with visibility `none` never appear in it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AccessorTable {
    entries: IndexMap<Name, Access>,
}

impl AccessorTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Capabilities registered for `name`; both flags false when nothing was.
    pub fn get(&self, name: &str) -> Access {
        self.entries.get(name).copied().unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Name, &Access)> {
        self.entries.iter()
    }

    fn entry(&mut self, name: &str) -> &mut Access {
        self.entries.entry(Arc::from(name)).or_default()
    }
}

impl AccessorSink for AccessorTable {
    fn register_reader(&mut self, name: &str) {
        self.entry(name).read = true;
    }

    fn register_writer(&mut self, name: &str) {
        self.entry(name).write = true;
    }
}

/// Registers the capabilities each attribute's visibility calls for, once
/// per attribute.
pub fn register_accessors(set: &ParameterSet, sink: &mut impl AccessorSink) {
    for spec in set.iter() {
        match spec.visibility {
            Visibility::Accessor => {
                sink.register_reader(&spec.name);
                sink.register_writer(&spec.name);
            }
            Visibility::Reader => sink.register_reader(&spec.name),
            Visibility::Writer => sink.register_writer(&spec.name),
            Visibility::None => {}
        }
    }
}

/// Class-configuration entry point: normalizes `decls` and registers every
/// attribute's accessor capabilities, before any bind can happen. A failed
/// normalization registers nothing.
pub fn configure(
    decls: impl IntoIterator<Item = RawDecl>,
    defaults: &Defaults,
    sink: &mut impl AccessorSink,
) -> Result<ParameterSet, InitError> {
    let set = ParameterSet::build(decls, defaults)?;
    register_accessors(&set, sink);
    Ok(set)
}
