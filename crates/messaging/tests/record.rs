//! Tests for [`RecordIncomingMessage`].
//!
//! These live as integration tests because they exercise the use case against
//! `parley-store`, which itself depends on this crate; a unit test would link
//! two distinct copies of the library and the repository traits would not
//! unify.

use std::sync::Arc;

use {
    parley_messaging::{
        RecordIncomingMessage,
        entities::{ConversationKind, MessageKind},
        ports::MessageRepository as _,
        record::{ConversationSnapshot, ParticipantSnapshot, RecordIncomingMessageInput},
    },
    parley_store::{
        InMemoryConversationRepository, InMemoryMessageRepository, InMemoryParticipantRepository,
    },
};

fn use_case() -> (RecordIncomingMessage, Arc<InMemoryMessageRepository>) {
    let messages = Arc::new(InMemoryMessageRepository::new());
    let use_case = RecordIncomingMessage::new(
        Arc::new(InMemoryConversationRepository::new()),
        Arc::new(InMemoryParticipantRepository::new()),
        messages.clone(),
    );
    (use_case, messages)
}

fn input(message_id: &str, conversation_id: &str, first_name: &str) -> RecordIncomingMessageInput {
    RecordIncomingMessageInput {
        message_id: message_id.into(),
        conversation: ConversationSnapshot {
            id: conversation_id.into(),
            kind: ConversationKind::Direct,
            title: None,
            owner_agent_id: "A1".into(),
        },
        participant: ParticipantSnapshot {
            id: "P1".into(),
            first_name: first_name.into(),
            last_name: None,
            handle: None,
            locale: None,
        },
        text: "hello".into(),
        kind: MessageKind::Text,
        sent_at: Some(1_000),
        reply_to_message_id: None,
    }
}

#[tokio::test]
async fn first_write_wins_for_participants() {
    let (use_case, _) = use_case();

    let first = use_case.execute(input("M1", "C1", "Ada")).await.unwrap();
    let second = use_case.execute(input("M2", "C1", "Grace")).await.unwrap();

    assert_eq!(first.participant.first_name, "Ada");
    // The second snapshot's differing first name is discarded.
    assert_eq!(second.participant.first_name, "Ada");
    assert_eq!(second.participant, first.participant);
}

#[tokio::test]
async fn distinct_message_ids_are_both_persisted() {
    let (use_case, messages) = use_case();

    use_case.execute(input("M1", "C1", "Ada")).await.unwrap();
    use_case.execute(input("M2", "C1", "Ada")).await.unwrap();

    assert!(messages.find_by_id("M1").await.unwrap().is_some());
    assert!(messages.find_by_id("M2").await.unwrap().is_some());
}

#[tokio::test]
async fn sent_at_defaults_to_now_when_omitted() {
    let (use_case, _) = use_case();
    let mut req = input("M1", "C1", "Ada");
    req.sent_at = None;

    let out = use_case.execute(req).await.unwrap();
    assert!(out.message.sent_at > 1_704_067_200_000);
}

#[tokio::test]
async fn concurrent_new_conversations_resolve_independently() {
    let (use_case, _) = use_case();
    let use_case = Arc::new(use_case);

    let mut a = input("M1", "C1", "Ada");
    a.conversation.title = Some("first".into());
    let mut b = input("M2", "C2", "Ada");
    b.conversation.title = Some("second".into());

    let (ra, rb) = tokio::join!(use_case.execute(a), use_case.execute(b));
    let (ra, rb) = (ra.unwrap(), rb.unwrap());

    assert_eq!(ra.conversation.id, "C1");
    assert_eq!(ra.conversation.title.as_deref(), Some("first"));
    assert_eq!(rb.conversation.id, "C2");
    assert_eq!(rb.conversation.title.as_deref(), Some("second"));
}
