use crate::core::value::Name;

/// Validation failure raised while normalizing a specification or binding
/// one call's arguments.
///
/// Every failure is total: a failed build produces no parameter set and a
/// failed bind produces no bindings. Checks that can name several offenders
/// (duplicates, missing keywords, unknown keywords) report all of them in
/// one error rather than stopping at the first.
#[derive(Debug, Clone, PartialEq)]
pub enum InitError {
    /// Empty declaration list
    EmptySpec,
    /// Visibility token outside accessor/reader/writer/none.
    /// `attr` is `None` when the list-wide defaults carried the bad token.
    InvalidVisibility { attr: Option<Name>, given: String },
    /// Same normalized name declared more than once
    DuplicateAttributes { names: Vec<Name> },
    /// Positional argument count mismatch
    ArityMismatch { given: usize, expected: usize },
    /// Required keywords absent from the call, in declared order
    MissingKeywords { names: Vec<Name> },
    /// Supplied keywords no attribute declares, in caller order
    UnknownKeywords { names: Vec<Name> },
}

impl std::fmt::Display for InitError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InitError::EmptySpec => {
                write!(f, "at least 1 attribute is required")
            }
            InitError::InvalidVisibility {
                attr: Some(attr),
                given,
            } => {
                write!(
                    f,
                    "wrong visibility for `{}` (given `{}`, expected accessor (default), reader, writer or none)",
                    attr, given
                )
            }
            InitError::InvalidVisibility { attr: None, given } => {
                write!(
                    f,
                    "wrong visibility (given `{}`, expected accessor (default), reader, writer or none)",
                    given
                )
            }
            InitError::DuplicateAttributes { names } => {
                write!(f, "duplicated attribute names: {}", names.join(", "))
            }
            InitError::ArityMismatch { given, expected } => {
                write!(
                    f,
                    "wrong number of arguments (given {}, expected {})",
                    given, expected
                )
            }
            InitError::MissingKeywords { names } => {
                write!(f, "missing keywords: {}", names.join(", "))
            }
            InitError::UnknownKeywords { names } => {
                write!(f, "unknown keywords: {}", names.join(", "))
            }
        }
    }
}

impl std::error::Error for InitError {}
