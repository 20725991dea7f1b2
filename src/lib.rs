//! halo-named-query：把 `:name` 命名参数改写为位置参数，并按名字绑定参数值。
//!
//! ```
//! use halo_named_query::{Flavor, NamedQuery};
//!
//! let mut q = NamedQuery::for_flavor(
//!     "SELECT * FROM user WHERE name = :name AND status <> 'x:y'",
//!     Flavor::MySQL,
//! );
//! q.set_value("name", "Alice");
//! assert_eq!(q.revised_query(), "SELECT * FROM user WHERE name = ? AND status <> 'x:y'");
//! ```

pub mod arg;
pub mod flavor;
pub mod params;
pub mod query;
pub mod scanner;
#[cfg(test)]
mod scanner_tests;
mod string_builder;
pub mod style;
pub mod value;
pub mod valuer;

pub use crate::arg::Arg;
pub use crate::flavor::Flavor;
pub use crate::params::{BindError, ParamField, ParamStruct};
pub use crate::query::NamedQuery;
pub use crate::scanner::{Scanned, scan};
pub use crate::style::{
    DefaultStyleGuard, PlaceholderStyle, StyleParseError, default_style, set_default_style,
    set_default_style_scoped,
};
pub use crate::value::SqlValue;
pub use crate::valuer::{SqlValuer, ValuerError};
