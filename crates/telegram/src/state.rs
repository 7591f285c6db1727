use parley_messaging::{
    PlanResponse, RecordIncomingMessage, RegisterConversation, entities::Agent,
};

/// Everything the polling loop and handlers need, composed once at startup.
pub struct BotState {
    pub agent: Agent,
    pub register_conversation: RegisterConversation,
    pub record_incoming_message: RecordIncomingMessage,
    pub plan_response: PlanResponse,
}
