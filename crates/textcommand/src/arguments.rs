//! Free-text argument resolution.
//!
//! A command body is split into tokens, each token's type is inferred from its
//! surface form, and the command's declared schema is walked left to right to
//! build a typed argument record.

pub mod classify;
pub mod resolve;
pub mod schema;
pub mod value;
pub mod walker;

pub use classify::classify;
pub use resolve::resolve_value;
pub use schema::{ArgumentSchema, ArgumentSpec, ArgumentType, Choice};
pub use value::{ArgumentValue, ResolvedArguments};
pub use walker::{resolve_arguments, TokenStream};
