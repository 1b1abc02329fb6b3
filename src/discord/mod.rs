//! Discord integration.
//!
//! - [`handler`] - gateway event handler answering slash commands
//! - [`registration`] - converts the command descriptors into Discord commands
//! - [`embed`] - converts replies into serenity builders

pub mod embed;
pub mod handler;
pub mod registration;

pub use crate::discord::handler::Handler;
