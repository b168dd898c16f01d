pub mod decl;
pub mod params;

pub use decl::{DeclOptions, Defaults, Keyword, RawDecl, Visibility};
pub use params::{AttributeSpec, ParameterSet};
