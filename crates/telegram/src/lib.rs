//! Telegram adapter for the parley messaging core.
//!
//! Long-polls the Bot API with teloxide, translates inbound updates into
//! use-case inputs, and sends the planned response (if any) back as a reply.

pub mod bot;
pub mod handlers;
pub mod state;

pub use {bot::start_polling, state::BotState};
