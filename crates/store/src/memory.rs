use std::collections::HashMap;

use {async_trait::async_trait, tokio::sync::RwLock};

use parley_messaging::{
    Result,
    entities::{Conversation, Message, Participant},
    ports::{ConversationRepository, MessageRepository, ParticipantRepository},
};

/// In-memory [`ConversationRepository`]. Upsert by id.
#[derive(Default)]
pub struct InMemoryConversationRepository {
    rows: RwLock<HashMap<String, Conversation>>,
}

impl InMemoryConversationRepository {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ConversationRepository for InMemoryConversationRepository {
    async fn find_by_id(&self, id: &str) -> Result<Option<Conversation>> {
        Ok(self.rows.read().await.get(id).cloned())
    }

    async fn save(&self, conversation: Conversation) -> Result<()> {
        self.rows
            .write()
            .await
            .insert(conversation.id.clone(), conversation);
        Ok(())
    }
}

/// In-memory [`ParticipantRepository`]. Upsert by id.
#[derive(Default)]
pub struct InMemoryParticipantRepository {
    rows: RwLock<HashMap<String, Participant>>,
}

impl InMemoryParticipantRepository {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ParticipantRepository for InMemoryParticipantRepository {
    async fn find_by_id(&self, id: &str) -> Result<Option<Participant>> {
        Ok(self.rows.read().await.get(id).cloned())
    }

    async fn save(&self, participant: Participant) -> Result<()> {
        self.rows
            .write()
            .await
            .insert(participant.id.clone(), participant);
        Ok(())
    }
}

/// In-memory [`MessageRepository`]. Upsert by id.
#[derive(Default)]
pub struct InMemoryMessageRepository {
    rows: RwLock<HashMap<String, Message>>,
}

impl InMemoryMessageRepository {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl MessageRepository for InMemoryMessageRepository {
    async fn find_by_id(&self, id: &str) -> Result<Option<Message>> {
        Ok(self.rows.read().await.get(id).cloned())
    }

    async fn save(&self, message: Message) -> Result<()> {
        self.rows.write().await.insert(message.id.clone(), message);
        Ok(())
    }
}
