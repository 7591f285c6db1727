//! Ports consumed by the use cases. Implementations own their concurrency
//! discipline; the core assumes they are safe to call concurrently.

use async_trait::async_trait;

use crate::{
    Result,
    entities::{Agent, Conversation, Message, Participant, ResponsePlan},
};

/// Storage for [`Conversation`] records.
///
/// `find_by_id` returns `Ok(None)` for absent rows — absence is not an error.
/// `save` is an idempotent upsert by id.
#[async_trait]
pub trait ConversationRepository: Send + Sync {
    async fn find_by_id(&self, id: &str) -> Result<Option<Conversation>>;
    async fn save(&self, conversation: Conversation) -> Result<()>;
}

/// Storage for [`Participant`] records. Same contract shape as
/// [`ConversationRepository`].
#[async_trait]
pub trait ParticipantRepository: Send + Sync {
    async fn find_by_id(&self, id: &str) -> Result<Option<Participant>>;
    async fn save(&self, participant: Participant) -> Result<()>;
}

/// Storage for [`Message`] records.
#[async_trait]
pub trait MessageRepository: Send + Sync {
    async fn find_by_id(&self, id: &str) -> Result<Option<Message>>;
    async fn save(&self, message: Message) -> Result<()>;
}

/// Decides whether and how to respond to an inbound message.
///
/// `None` means stay silent — an expected outcome, not an error. The contract
/// is a pure, total function of `(agent, message)`; it is async only so that
/// future policies may be I/O-backed.
#[async_trait]
pub trait ResponsePolicy: Send + Sync {
    async fn decide(&self, agent: &Agent, message: &Message) -> Option<ResponsePlan>;
}
