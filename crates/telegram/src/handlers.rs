use std::sync::Arc;

use {
    teloxide::{
        payloads::SendMessageSetters,
        prelude::*,
        types::{Chat, Message as TgMessage, MessageId, ReplyParameters},
    },
    tracing::debug,
};

use parley_messaging::{
    entities::{ConversationKind, MessageKind},
    plan::PlanResponseInput,
    record::{ConversationSnapshot, ParticipantSnapshot, RecordIncomingMessageInput},
    register::RegisterConversationInput,
};

use crate::state::BotState;

/// Handle a single inbound Telegram message.
///
/// Flow: register the conversation → record the message → plan a response →
/// reply. A `None` plan means stay silent. Updates without text or a sender
/// are skipped; the core is only defined for well-formed input.
pub async fn handle_message(msg: TgMessage, bot: &Bot, state: &Arc<BotState>) -> anyhow::Result<()> {
    let Some(text) = msg.text().map(str::to_string) else {
        debug!(chat_id = msg.chat.id.0, "ignoring non-text message");
        return Ok(());
    };
    let Some(from) = msg.from.as_ref() else {
        debug!(chat_id = msg.chat.id.0, "ignoring message without a sender");
        return Ok(());
    };

    let conversation_id = msg.chat.id.0.to_string();
    let kind = map_conversation_kind(&msg.chat);
    let title = resolve_conversation_title(&msg.chat);

    state
        .register_conversation
        .execute(RegisterConversationInput {
            conversation_id: conversation_id.clone(),
            kind,
            title: title.clone(),
            owner_agent_id: state.agent.id.clone(),
        })
        .await?;

    let recorded = state
        .record_incoming_message
        .execute(RecordIncomingMessageInput {
            message_id: msg.id.0.to_string(),
            conversation: ConversationSnapshot {
                id: conversation_id.clone(),
                kind,
                title,
                owner_agent_id: state.agent.id.clone(),
            },
            participant: ParticipantSnapshot {
                id: from.id.0.to_string(),
                first_name: from.first_name.clone(),
                last_name: from.last_name.clone(),
                handle: from.username.clone(),
                locale: from.language_code.clone(),
            },
            text: text.clone(),
            kind: map_message_kind(&text),
            sent_at: Some(msg.date.timestamp_millis()),
            reply_to_message_id: msg.reply_to_message().map(|m| m.id.0.to_string()),
        })
        .await?;

    let planned = state
        .plan_response
        .execute(PlanResponseInput {
            agent: state.agent.clone(),
            message: recorded.message,
        })
        .await;

    let Some(plan) = planned.plan else {
        debug!(conversation_id, "no response plan, staying silent");
        return Ok(());
    };

    let mut request = bot.send_message(msg.chat.id, plan.text);
    if let Some(reply_to) = plan
        .reply_to_message_id
        .as_deref()
        .and_then(|id| id.parse::<i32>().ok())
    {
        request = request
            .reply_parameters(ReplyParameters::new(MessageId(reply_to)).allow_sending_without_reply());
    }
    request.await?;

    Ok(())
}

fn map_conversation_kind(chat: &Chat) -> ConversationKind {
    if chat.is_private() {
        ConversationKind::Direct
    } else if chat.is_channel() {
        ConversationKind::Broadcast
    } else {
        ConversationKind::Group
    }
}

fn map_message_kind(text: &str) -> MessageKind {
    if text.trim().starts_with('/') {
        MessageKind::Command
    } else {
        MessageKind::Text
    }
}

/// Group/channel chats carry a title; private chats get the sender's name.
fn resolve_conversation_title(chat: &Chat) -> Option<String> {
    if let Some(title) = chat.title() {
        return Some(title.to_string());
    }
    join_name(chat.first_name(), chat.last_name())
}

fn join_name(first: Option<&str>, last: Option<&str>) -> Option<String> {
    let name = [first, last]
        .into_iter()
        .flatten()
        .collect::<Vec<_>>()
        .join(" ");
    let name = name.trim().to_string();
    (!name.is_empty()).then_some(name)
}
