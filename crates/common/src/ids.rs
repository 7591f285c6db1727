/// Generate a time-ordered runtime id (UUID v7).
///
/// Used for identities minted by this process, such as the agent id when the
/// config does not pin one. Platform-native ids (chats, users, messages) are
/// never generated here.
#[must_use]
pub fn runtime_id() -> String {
    uuid::Uuid::now_v7().to_string()
}
