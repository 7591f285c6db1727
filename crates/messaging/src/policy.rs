//! Keyword lookup policy: normalized message text → canned response template.

use std::collections::BTreeMap;

use async_trait::async_trait;

use crate::{
    entities::{Agent, Message, ResponsePlan},
    ports::ResponsePolicy,
};

/// Literal token replaced with the agent's display name in templates.
const AGENT_NAME_TOKEN: &str = "{agentName}";

/// Configuration for [`KeywordResponsePolicy`].
#[derive(Debug, Clone, Default)]
pub struct KeywordPolicyConfig {
    /// Normalized keyword → response template.
    pub responses: BTreeMap<String, String>,
    /// Template used when no keyword matches. `None` means stay silent.
    pub fallback: Option<String>,
}

/// Maps normalized message text to canned responses.
///
/// Deterministic given the same mapping, agent, and message; no side effects,
/// no I/O. A response selection, not inference.
pub struct KeywordResponsePolicy {
    config: KeywordPolicyConfig,
}

impl KeywordResponsePolicy {
    #[must_use]
    pub fn new(config: KeywordPolicyConfig) -> Self {
        Self { config }
    }

    /// Trim, lowercase, and strip a single leading `/` from commands.
    fn normalize(message: &Message) -> String {
        let trimmed = message.text.trim().to_lowercase();
        if message.is_command() {
            if let Some(stripped) = trimmed.strip_prefix('/') {
                return stripped.to_string();
            }
        }
        trimmed
    }
}

#[async_trait]
impl ResponsePolicy for KeywordResponsePolicy {
    async fn decide(&self, agent: &Agent, message: &Message) -> Option<ResponsePlan> {
        let normalized = Self::normalize(message);
        let template = self
            .config
            .responses
            .get(&normalized)
            .or(self.config.fallback.as_ref())?;

        let text = template.replace(AGENT_NAME_TOKEN, &agent.display_name);
        Some(ResponsePlan::text(
            message.conversation_id.clone(),
            text,
            Some(message.id.clone()),
        ))
    }
}
