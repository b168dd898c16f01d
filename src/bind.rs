//! Argument validation and binding against a normalized parameter set.

use indexmap::IndexMap;
use smallvec::SmallVec;

use crate::core::value::{Name, Value};
use crate::error::InitError;
use crate::spec::decl::Keyword;
use crate::spec::params::{AttributeSpec, ParameterSet};

pub const INLINE_BIND_CAPACITY: usize = 8;

/// Attributes bound during one call; spills to the heap past the inline
/// capacity.
pub type BoundList<'a> = SmallVec<[BoundAttribute<'a>; INLINE_BIND_CAPACITY]>;

/// Ordered name → value mapping produced by one bind: one entry per declared
/// attribute, required group first, then keyword-required, then
/// keyword-optional.
pub type Bindings = IndexMap<Name, Value>;

/// One attribute with its value resolved for a single call. Lives only for
/// the duration of that call; the mapping built from it owns the values.
#[derive(Debug, Clone, PartialEq)]
pub struct BoundAttribute<'a> {
    pub spec: &'a AttributeSpec,
    pub value: Value,
}

impl ParameterSet {
    /// Validates one call's arguments and resolves every attribute to a value.
    ///
    /// Validation order: positional arity, then missing required keywords,
    /// then unknown keywords. The first failing check reports alone, but
    /// lists every offender of its own kind.
    pub fn bind_attributes<'a>(
        &'a self,
        values: &[Value],
        kw_values: &IndexMap<Name, Value>,
    ) -> Result<BoundList<'a>, InitError> {
        self.validate(values, kw_values)?;

        let mut bound = BoundList::new();

        for (spec, value) in self.required().iter().zip(values) {
            bound.push(BoundAttribute {
                spec,
                value: value.clone(),
            });
        }

        for spec in self.keyword_required() {
            let value = kw_values
                .get(spec.name.as_ref())
                .ok_or_else(|| InitError::MissingKeywords {
                    names: vec![spec.name.clone()],
                })?
                .clone();
            bound.push(BoundAttribute { spec, value });
        }

        for spec in self.keyword_optional() {
            // Key presence decides, not the value: an explicit Null supplied
            // by the caller overrides the default.
            let value = match kw_values.get(spec.name.as_ref()) {
                Some(value) => value.clone(),
                None => match &spec.keyword {
                    Keyword::Optional { default: Some(d) } => d.clone(),
                    _ => Value::Uninitialized,
                },
            };
            bound.push(BoundAttribute { spec, value });
        }

        Ok(bound)
    }

    /// Binds one call's arguments into the final field mapping.
    ///
    /// Pure: never mutates the set and allocates a fresh mapping per call,
    /// so identical inputs always produce equal mappings.
    pub fn bind(
        &self,
        values: &[Value],
        kw_values: &IndexMap<Name, Value>,
    ) -> Result<Bindings, InitError> {
        let bound = self.bind_attributes(values, kw_values)?;
        let mut map = Bindings::with_capacity(bound.len());
        for attr in bound {
            map.insert(attr.spec.name.clone(), attr.value);
        }
        Ok(map)
    }

    fn validate(
        &self,
        values: &[Value],
        kw_values: &IndexMap<Name, Value>,
    ) -> Result<(), InitError> {
        if values.len() != self.required().len() {
            return Err(InitError::ArityMismatch {
                given: values.len(),
                expected: self.required().len(),
            });
        }

        let missing: Vec<Name> = self
            .keyword_required()
            .iter()
            .filter(|spec| !kw_values.contains_key(spec.name.as_ref()))
            .map(|spec| spec.name.clone())
            .collect();
        if !missing.is_empty() {
            return Err(InitError::MissingKeywords { names: missing });
        }

        let unknown: Vec<Name> = kw_values
            .keys()
            .filter(|key| !self.keyword_attrs().any(|spec| spec.name == **key))
            .cloned()
            .collect();
        if !unknown.is_empty() {
            return Err(InitError::UnknownKeywords { names: unknown });
        }

        Ok(())
    }
}
