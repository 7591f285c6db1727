//! Conversational-message ingestion and response planning.
//!
//! Flow: platform adapter → [`RegisterConversation`] → [`RecordIncomingMessage`]
//! → [`PlanResponse`] → adapter sends the reply. This crate owns the domain
//! records and the orchestration; storage and the response policy are ports
//! implemented elsewhere.

pub mod entities;
pub mod error;
pub mod plan;
pub mod policy;
pub mod ports;
pub mod record;
pub mod register;

pub use {
    error::{Error, Result},
    plan::PlanResponse,
    record::RecordIncomingMessage,
    register::RegisterConversation,
};
