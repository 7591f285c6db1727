//! Tests for [`RegisterConversation`].
//!
//! These live as integration tests because they exercise the use case against
//! `parley-store`, which itself depends on this crate; a unit test would link
//! two distinct copies of the library and the repository traits would not
//! unify.

use std::sync::Arc;

use {
    async_trait::async_trait,
    parley_messaging::{
        Error, RegisterConversation, Result,
        entities::{Conversation, ConversationKind},
        ports::ConversationRepository,
        register::RegisterConversationInput,
    },
    parley_store::InMemoryConversationRepository,
};

fn input(id: &str, kind: ConversationKind, title: Option<&str>) -> RegisterConversationInput {
    RegisterConversationInput {
        conversation_id: id.into(),
        kind,
        title: title.map(String::from),
        owner_agent_id: "A1".into(),
    }
}

#[tokio::test]
async fn creates_then_returns_existing() {
    let use_case = RegisterConversation::new(Arc::new(InMemoryConversationRepository::new()));

    let first = use_case
        .execute(input("C1", ConversationKind::Direct, Some("Ada")))
        .await
        .unwrap();
    assert!(first.was_created);

    // Second registration with differing kind and title: first write wins.
    let second = use_case
        .execute(input("C1", ConversationKind::Group, Some("Renamed")))
        .await
        .unwrap();
    assert!(!second.was_created);
    assert_eq!(second.conversation, first.conversation);
    assert_eq!(second.conversation.kind, ConversationKind::Direct);
    assert_eq!(second.conversation.title.as_deref(), Some("Ada"));
}

/// Repository whose storage is unreachable.
struct OfflineConversationRepository;

#[async_trait]
impl ConversationRepository for OfflineConversationRepository {
    async fn find_by_id(&self, _id: &str) -> Result<Option<Conversation>> {
        Err(Error::storage(
            "conversation lookup",
            std::io::Error::other("store offline"),
        ))
    }

    async fn save(&self, _conversation: Conversation) -> Result<()> {
        Err(Error::storage(
            "conversation save",
            std::io::Error::other("store offline"),
        ))
    }
}

#[tokio::test]
async fn repository_failure_aborts_the_use_case() {
    let use_case = RegisterConversation::new(Arc::new(OfflineConversationRepository));

    // No retry, no fallback: the storage error reaches the caller as-is.
    let err = use_case
        .execute(input("C1", ConversationKind::Direct, None))
        .await
        .unwrap_err();
    assert!(matches!(err, Error::Storage { .. }));
    assert!(err.to_string().contains("conversation lookup"));
}
