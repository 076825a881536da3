//! Text command layer for a chat bot.
//!
//! - Argument schemas and the free-text argument resolver
//! - A reply surface shared by text messages and native interactions
//! - Command registry and prefix dispatch
//! - Bot configuration

pub mod arguments;
pub mod command;
pub mod config;
pub mod entity;
pub mod error;
pub mod interaction;

pub use arguments::{
    classify, resolve_arguments, ArgumentSchema, ArgumentSpec, ArgumentType, ArgumentValue,
    Choice, ResolvedArguments, TokenStream,
};
pub use command::{Category, Command, CommandHandler, CommandRegistry, DispatchOutcome, Dispatcher};
pub use config::{load_or_create_bot_config, BotConfig};
pub use entity::{Channel, EntityCache, EntityKind, EntityLookup, Role, Snowflake, User};
pub use error::{BotError, BotResult, ParsingFailure, ResolveError};
pub use interaction::{
    Interaction, InteractionApi, InvocationContext, MessageHandle, MessageInteraction,
    MessageTransport, NativeInteraction, ReplyOptions,
};
