//! Command definitions, lookup, and text dispatch.

pub mod category;
pub mod definition;
pub mod dispatch;
pub mod parser;
pub mod registry;

pub use category::Category;
pub use definition::{Command, CommandHandler};
pub use dispatch::{DispatchOutcome, Dispatcher};
pub use parser::{parse_invocation, Invocation};
pub use registry::CommandRegistry;
