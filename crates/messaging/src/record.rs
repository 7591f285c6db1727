//! Persists an inbound message, creating its conversation and participant on
//! first contact.

use std::sync::Arc;

use {parley_common::clock::now_ms, tracing::debug};

use crate::{
    Result,
    entities::{
        AgentId, Conversation, ConversationId, ConversationKind, Message, MessageId, MessageKind,
        Participant, ParticipantId,
    },
    ports::{ConversationRepository, MessageRepository, ParticipantRepository},
};

/// What the platform adapter knows about the chat at the time of the event.
/// Only consulted when the conversation does not exist yet.
#[derive(Debug, Clone)]
pub struct ConversationSnapshot {
    pub id: ConversationId,
    pub kind: ConversationKind,
    pub title: Option<String>,
    pub owner_agent_id: AgentId,
}

/// What the platform adapter knows about the sender. Only consulted when the
/// participant does not exist yet.
#[derive(Debug, Clone)]
pub struct ParticipantSnapshot {
    pub id: ParticipantId,
    pub first_name: String,
    pub last_name: Option<String>,
    pub handle: Option<String>,
    pub locale: Option<String>,
}

#[derive(Debug, Clone)]
pub struct RecordIncomingMessageInput {
    pub message_id: MessageId,
    pub conversation: ConversationSnapshot,
    pub participant: ParticipantSnapshot,
    pub text: String,
    pub kind: MessageKind,
    /// Unix ms. Defaults to the current time when the platform omits it.
    pub sent_at: Option<i64>,
    pub reply_to_message_id: Option<MessageId>,
}

#[derive(Debug, Clone)]
pub struct RecordIncomingMessageOutput {
    pub conversation: Conversation,
    pub participant: Participant,
    pub message: Message,
}

/// Records one inbound message.
///
/// Conversation and participant are ensured concurrently, both first-write-
/// wins; the message is saved only after both resolve, since it embeds their
/// ids. Messages themselves are always saved fresh — the platform guarantees
/// unique message ids and the core does not deduplicate them.
pub struct RecordIncomingMessage {
    conversations: Arc<dyn ConversationRepository>,
    participants: Arc<dyn ParticipantRepository>,
    messages: Arc<dyn MessageRepository>,
}

impl RecordIncomingMessage {
    #[must_use]
    pub fn new(
        conversations: Arc<dyn ConversationRepository>,
        participants: Arc<dyn ParticipantRepository>,
        messages: Arc<dyn MessageRepository>,
    ) -> Self {
        Self {
            conversations,
            participants,
            messages,
        }
    }

    pub async fn execute(
        &self,
        input: RecordIncomingMessageInput,
    ) -> Result<RecordIncomingMessageOutput> {
        let (conversation, participant) = tokio::try_join!(
            self.ensure_conversation(input.conversation),
            self.ensure_participant(input.participant),
        )?;

        let message = Message {
            id: input.message_id,
            conversation_id: conversation.id.clone(),
            participant_id: participant.id.clone(),
            text: input.text,
            kind: input.kind,
            sent_at: input.sent_at.unwrap_or_else(now_ms),
            reply_to_message_id: input.reply_to_message_id,
        };
        self.messages.save(message.clone()).await?;
        debug!(
            message_id = %message.id,
            conversation_id = %message.conversation_id,
            "recorded incoming message"
        );

        Ok(RecordIncomingMessageOutput {
            conversation,
            participant,
            message,
        })
    }

    /// Same first-write-wins semantics as conversation registration.
    async fn ensure_conversation(&self, snapshot: ConversationSnapshot) -> Result<Conversation> {
        if let Some(existing) = self.conversations.find_by_id(&snapshot.id).await? {
            return Ok(existing);
        }
        let conversation = Conversation::new(
            snapshot.id,
            snapshot.kind,
            snapshot.title,
            snapshot.owner_agent_id,
        );
        self.conversations.save(conversation.clone()).await?;
        Ok(conversation)
    }

    async fn ensure_participant(&self, snapshot: ParticipantSnapshot) -> Result<Participant> {
        if let Some(existing) = self.participants.find_by_id(&snapshot.id).await? {
            return Ok(existing);
        }
        let participant = Participant {
            id: snapshot.id,
            first_name: snapshot.first_name,
            last_name: snapshot.last_name,
            handle: snapshot.handle,
            locale: snapshot.locale,
            created_at: now_ms(),
        };
        self.participants.save(participant.clone()).await?;
        Ok(participant)
    }
}
