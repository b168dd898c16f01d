//! Field storage for constructed instances.

use indexmap::IndexMap;

use crate::bind::Bindings;
use crate::core::value::{Name, Value};

/// Merge behavior when a bound attribute collides with a field that already
/// holds a value, e.g. one set by an earlier initializer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MergePolicy {
    /// The bound value replaces whatever is there.
    #[default]
    Overwrite,
    /// An existing field keeps its value; only absent fields are created
    /// from the bindings.
    KeepExisting,
}

/// Named fields of one instance, in insertion order. Each field exclusively
/// owns its value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Fields {
    map: IndexMap<Name, Value>,
}

impl Fields {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.map.get(name)
    }

    pub fn set(&mut self, name: Name, value: Value) {
        self.map.insert(name, value);
    }

    pub fn contains(&self, name: &str) -> bool {
        self.map.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Name, &Value)> {
        self.map.iter()
    }

    /// Assigns one bind's result into the fields. Absent fields are always
    /// created; colliding fields follow `policy`.
    pub fn assign(&mut self, bindings: &Bindings, policy: MergePolicy) {
        for (name, value) in bindings {
            match policy {
                MergePolicy::Overwrite => {
                    self.map.insert(name.clone(), value.clone());
                }
                MergePolicy::KeepExisting => {
                    self.map
                        .entry(name.clone())
                        .or_insert_with(|| value.clone());
                }
            }
        }
    }
}
