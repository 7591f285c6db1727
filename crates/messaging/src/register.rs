//! Registers the conversation an inbound event belongs to, first write wins.

use std::sync::Arc;

use tracing::debug;

use crate::{
    Result,
    entities::{AgentId, Conversation, ConversationId, ConversationKind},
    ports::ConversationRepository,
};

#[derive(Debug, Clone)]
pub struct RegisterConversationInput {
    pub conversation_id: ConversationId,
    pub kind: ConversationKind,
    pub title: Option<String>,
    pub owner_agent_id: AgentId,
}

#[derive(Debug, Clone)]
pub struct RegisterConversationOutput {
    pub conversation: Conversation,
    /// `false` when the id was already registered and the stored record was
    /// returned unchanged.
    pub was_created: bool,
}

/// Idempotent conversation registration.
///
/// On an id collision the stored record wins: the supplied kind/title/owner
/// are discarded even when they differ from what is stored. Callers get no
/// signal about the discarded snapshot — a deliberate trade-off for a
/// minimal bot.
pub struct RegisterConversation {
    conversations: Arc<dyn ConversationRepository>,
}

impl RegisterConversation {
    #[must_use]
    pub fn new(conversations: Arc<dyn ConversationRepository>) -> Self {
        Self { conversations }
    }

    pub async fn execute(
        &self,
        input: RegisterConversationInput,
    ) -> Result<RegisterConversationOutput> {
        if let Some(existing) = self.conversations.find_by_id(&input.conversation_id).await? {
            return Ok(RegisterConversationOutput {
                conversation: existing,
                was_created: false,
            });
        }

        let conversation = Conversation::new(
            input.conversation_id,
            input.kind,
            input.title,
            input.owner_agent_id,
        );
        self.conversations.save(conversation.clone()).await?;
        debug!(conversation_id = %conversation.id, "registered conversation");

        Ok(RegisterConversationOutput {
            conversation,
            was_created: true,
        })
    }
}
