//! Domain records. All of them are plain data, immutable after creation:
//! repositories insert and read, nothing updates in place.

use parley_common::clock::now_ms;

// Platform-native ids coerced to strings. The core never mints these.
pub type AgentId = String;
pub type ConversationId = String;
pub type ParticipantId = String;
pub type MessageId = String;

/// The bot's own identity. Created once at process start.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Agent {
    pub id: AgentId,
    pub username: String,
    pub display_name: String,
    pub created_at: i64,
}

impl Agent {
    #[must_use]
    pub fn new(id: AgentId, username: impl Into<String>, display_name: impl Into<String>) -> Self {
        Self {
            id,
            username: username.into(),
            display_name: display_name.into(),
            created_at: now_ms(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConversationKind {
    Direct,
    Group,
    Broadcast,
}

/// A chat thread the agent participates in.
///
/// The kind/title snapshot is frozen at creation time; a live chat being
/// retitled is not reflected here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Conversation {
    pub id: ConversationId,
    pub kind: ConversationKind,
    pub title: Option<String>,
    pub owner_agent_id: AgentId,
    pub created_at: i64,
}

impl Conversation {
    #[must_use]
    pub fn new(
        id: ConversationId,
        kind: ConversationKind,
        title: Option<String>,
        owner_agent_id: AgentId,
    ) -> Self {
        Self {
            id,
            kind,
            title,
            owner_agent_id,
            created_at: now_ms(),
        }
    }
}

/// A human or external account that sends messages into a conversation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Participant {
    pub id: ParticipantId,
    pub first_name: String,
    pub last_name: Option<String>,
    pub handle: Option<String>,
    pub locale: Option<String>,
    pub created_at: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageKind {
    Text,
    Command,
}

/// An inbound message. Always saved fresh — message ids are never
/// deduplicated, unlike conversations and participants.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub id: MessageId,
    pub conversation_id: ConversationId,
    pub participant_id: ParticipantId,
    pub text: String,
    pub kind: MessageKind,
    pub sent_at: i64,
    pub reply_to_message_id: Option<MessageId>,
}

impl Message {
    #[must_use]
    pub fn is_command(&self) -> bool {
        self.kind == MessageKind::Command
    }
}

/// Kind of outgoing response. Only plain text today.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ResponseKind {
    #[default]
    Text,
}

/// The decided outgoing message for an inbound one. Ephemeral: produced per
/// invocation, never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResponsePlan {
    pub conversation_id: ConversationId,
    pub text: String,
    pub kind: ResponseKind,
    pub reply_to_message_id: Option<MessageId>,
}

impl ResponsePlan {
    /// Build a text plan addressed to `conversation_id`.
    #[must_use]
    pub fn text(
        conversation_id: ConversationId,
        text: impl Into<String>,
        reply_to_message_id: Option<MessageId>,
    ) -> Self {
        Self {
            conversation_id,
            text: text.into(),
            kind: ResponseKind::Text,
            reply_to_message_id,
        }
    }
}
