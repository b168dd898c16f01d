//! Raw attribute declarations as supplied at class-configuration time.

use crate::core::value::{Name, Value};
use crate::error::InitError;

/// Accessor capability generated for an attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Visibility {
    /// Reader and writer
    #[default]
    Accessor,
    /// Reader only
    Reader,
    /// Writer only
    Writer,
    /// No accessors at all
    None,
}

impl Visibility {
    /// Parses a raw visibility token. `attr` names the declaration being
    /// normalized, `None` when validating the list-wide defaults.
    pub(crate) fn parse(token: &str, attr: Option<&Name>) -> Result<Visibility, InitError> {
        match token {
            "accessor" => Ok(Visibility::Accessor),
            "reader" => Ok(Visibility::Reader),
            "writer" => Ok(Visibility::Writer),
            "none" => Ok(Visibility::None),
            _ => Err(InitError::InvalidVisibility {
                attr: attr.cloned(),
                given: token.to_string(),
            }),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Visibility::Accessor => "accessor",
            Visibility::Reader => "reader",
            Visibility::Writer => "writer",
            Visibility::None => "none",
        }
    }
}

/// How an attribute receives its value at construction time.
///
/// One enum with the optional default as payload, so the binder never has to
/// branch on the shape of a loosely typed mode flag.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Keyword {
    /// Bound from the positional argument list, required.
    #[default]
    Positional,
    /// Bound from the keyword arguments, required.
    Required,
    /// Bound from the keyword arguments when the key is present, otherwise
    /// from `default`. No declared default binds `Value::Uninitialized`.
    Optional { default: Option<Value> },
}

impl Keyword {
    /// Optional keyword with no declared default.
    pub fn optional() -> Keyword {
        Keyword::Optional { default: None }
    }

    /// Optional keyword falling back to `value` when the caller omits the key.
    pub fn optional_with(value: impl Into<Value>) -> Keyword {
        Keyword::Optional {
            default: Some(value.into()),
        }
    }
}

/// Per-attribute overrides. Only fields explicitly set override the
/// list-wide defaults; an unset field leaves the default in force.
#[derive(Debug, Clone, Default)]
pub struct DeclOptions {
    pub visibility: Option<String>,
    pub keyword: Option<Keyword>,
}

/// List-wide declaration defaults. The visibility token is validated when
/// the declaration list is normalized.
#[derive(Debug, Clone)]
pub struct Defaults {
    pub visibility: String,
    pub keyword: Keyword,
}

impl Default for Defaults {
    fn default() -> Self {
        Defaults {
            visibility: Visibility::Accessor.as_str().to_string(),
            keyword: Keyword::Positional,
        }
    }
}

/// One user-supplied attribute declaration: a bare name, or a name paired
/// with per-attribute options.
#[derive(Debug, Clone)]
pub enum RawDecl {
    Name(String),
    WithOptions(String, DeclOptions),
}

impl RawDecl {
    /// The declared name, sigil and all.
    pub fn raw_name(&self) -> &str {
        match self {
            RawDecl::Name(name) | RawDecl::WithOptions(name, _) => name,
        }
    }
}

impl From<&str> for RawDecl {
    fn from(name: &str) -> Self {
        RawDecl::Name(name.to_string())
    }
}

impl From<(&str, DeclOptions)> for RawDecl {
    fn from((name, opts): (&str, DeclOptions)) -> Self {
        RawDecl::WithOptions(name.to_string(), opts)
    }
}
