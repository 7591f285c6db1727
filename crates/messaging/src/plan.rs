//! Pass-through orchestration boundary in front of the response policy.

use std::sync::Arc;

use crate::{
    entities::{Agent, Message, ResponsePlan},
    ports::ResponsePolicy,
};

#[derive(Debug, Clone)]
pub struct PlanResponseInput {
    pub agent: Agent,
    pub message: Message,
}

#[derive(Debug, Clone)]
pub struct PlanResponseOutput {
    /// `None` means stay silent.
    pub plan: Option<ResponsePlan>,
}

/// Delegates to the configured [`ResponsePolicy`]. No additional logic: this
/// boundary exists so the policy can be swapped without touching callers.
pub struct PlanResponse {
    policy: Arc<dyn ResponsePolicy>,
}

impl PlanResponse {
    #[must_use]
    pub fn new(policy: Arc<dyn ResponsePolicy>) -> Self {
        Self { policy }
    }

    pub async fn execute(&self, input: PlanResponseInput) -> PlanResponseOutput {
        let plan = self.policy.decide(&input.agent, &input.message).await;
        PlanResponseOutput { plan }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        entities::MessageKind,
        policy::{KeywordPolicyConfig, KeywordResponsePolicy},
    };

    #[tokio::test]
    async fn delegates_to_the_policy() {
        let policy = KeywordResponsePolicy::new(KeywordPolicyConfig {
            responses: [("ping".to_string(), "pong".to_string())].into(),
            fallback: None,
        });
        let use_case = PlanResponse::new(Arc::new(policy));

        let out = use_case
            .execute(PlanResponseInput {
                agent: Agent::new("A1".into(), "bot", "Bot"),
                message: Message {
                    id: "M1".into(),
                    conversation_id: "C1".into(),
                    participant_id: "P1".into(),
                    text: "ping".into(),
                    kind: MessageKind::Text,
                    sent_at: 0,
                    reply_to_message_id: None,
                },
            })
            .await;

        assert_eq!(out.plan.unwrap().text, "pong");
    }
}
