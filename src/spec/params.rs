//! Canonical parameter model and the declaration normalizer.

use std::sync::Arc;

use indexmap::IndexMap;

use crate::collect::EachWithHash;
use crate::core::value::Name;
use crate::error::InitError;
use crate::spec::decl::{DeclOptions, Defaults, Keyword, RawDecl, Visibility};

/// One normalized attribute declaration.
#[derive(Debug, Clone, PartialEq)]
pub struct AttributeSpec {
    pub name: Name,
    pub visibility: Visibility,
    pub keyword: Keyword,
}

/// The normalized specification: attributes partitioned by how they bind,
/// declaration order preserved within each group.
///
/// Built once per type configuration and immutable afterwards; a set can be
/// shared read-only across any number of concurrently running `bind` calls.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ParameterSet {
    required: Vec<AttributeSpec>,
    keyword_required: Vec<AttributeSpec>,
    keyword_optional: Vec<AttributeSpec>,
}

impl ParameterSet {
    /// Normalizes a declaration list into a parameter set.
    ///
    /// Names have a single leading `@` sigil stripped before any comparison.
    /// Fails on an empty list, on a visibility token outside
    /// accessor/reader/writer/none, and on duplicated normalized names
    /// (every duplicate reported, first-seen order).
    pub fn build(
        decls: impl IntoIterator<Item = RawDecl>,
        defaults: &Defaults,
    ) -> Result<ParameterSet, InitError> {
        let decls: Vec<RawDecl> = decls.into_iter().collect();
        if decls.is_empty() {
            return Err(InitError::EmptySpec);
        }

        // Reject a bad list-wide visibility before looking at any attribute.
        Visibility::parse(&defaults.visibility, None)?;

        let mut specs = Vec::with_capacity(decls.len());
        for decl in decls {
            specs.push(Self::normalize_decl(decl, defaults)?);
        }

        let tally = specs
            .iter()
            .map(|spec| spec.name.clone())
            .each_with_hash(|name, counts: &mut IndexMap<Name, usize>| {
                *counts.entry(name).or_insert(0) += 1;
            });
        let repeated: Vec<Name> = tally
            .into_iter()
            .filter(|(_, count)| *count > 1)
            .map(|(name, _)| name)
            .collect();
        if !repeated.is_empty() {
            return Err(InitError::DuplicateAttributes { names: repeated });
        }

        let mut set = ParameterSet::default();
        for spec in specs {
            match spec.keyword {
                Keyword::Positional => set.required.push(spec),
                Keyword::Required => set.keyword_required.push(spec),
                Keyword::Optional { .. } => set.keyword_optional.push(spec),
            }
        }
        Ok(set)
    }

    fn normalize_decl(decl: RawDecl, defaults: &Defaults) -> Result<AttributeSpec, InitError> {
        let (raw_name, opts) = match decl {
            RawDecl::Name(name) => (name, DeclOptions::default()),
            RawDecl::WithOptions(name, opts) => (name, opts),
        };
        let name: Name = Arc::from(raw_name.strip_prefix('@').unwrap_or(&raw_name));

        let token = opts.visibility.as_deref().unwrap_or(&defaults.visibility);
        let visibility = Visibility::parse(token, Some(&name))?;
        let keyword = opts.keyword.unwrap_or_else(|| defaults.keyword.clone());

        Ok(AttributeSpec {
            name,
            visibility,
            keyword,
        })
    }

    /// Positional attributes, in declaration order.
    pub fn required(&self) -> &[AttributeSpec] {
        &self.required
    }

    /// Keyword attributes without a default, in declaration order.
    pub fn keyword_required(&self) -> &[AttributeSpec] {
        &self.keyword_required
    }

    /// Keyword attributes carrying a default, in declaration order.
    pub fn keyword_optional(&self) -> &[AttributeSpec] {
        &self.keyword_optional
    }

    /// All attributes: required, then keyword-required, then keyword-optional.
    pub fn iter(&self) -> impl Iterator<Item = &AttributeSpec> {
        self.required
            .iter()
            .chain(self.keyword_required.iter())
            .chain(self.keyword_optional.iter())
    }

    /// Keyword attributes only, required before optional.
    pub(crate) fn keyword_attrs(&self) -> impl Iterator<Item = &AttributeSpec> {
        self.keyword_required
            .iter()
            .chain(self.keyword_optional.iter())
    }

    pub fn len(&self) -> usize {
        self.required.len() + self.keyword_required.len() + self.keyword_optional.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
