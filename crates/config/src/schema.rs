use std::collections::BTreeMap;

use {
    secrecy::{ExposeSecret, Secret},
    serde::{Deserialize, Serialize},
};

/// Root configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ParleyConfig {
    pub runtime: RuntimeConfig,
    pub agent: AgentConfig,
    pub telegram: TelegramConfig,
    pub policy: PolicyConfig,
}

/// Process-level settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RuntimeConfig {
    pub name: String,
    pub environment: String,
    pub version: String,
    /// Default log level when `RUST_LOG` and `--log-level` are absent.
    pub log_level: String,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            name: "parley".into(),
            environment: "development".into(),
            version: env!("CARGO_PKG_VERSION").into(),
            log_level: "info".into(),
        }
    }
}

/// Identity of the bot agent. Unset fields are derived at composition time:
/// the id from a fresh runtime id, the display name from the runtime name,
/// the username from the display name.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AgentConfig {
    pub id: Option<String>,
    pub username: Option<String>,
    pub display_name: Option<String>,
}

/// Telegram bot account settings.
#[derive(Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TelegramConfig {
    /// Bot token from @BotFather. Usually supplied via `TELEGRAM_BOT_TOKEN`.
    #[serde(serialize_with = "serialize_secret")]
    pub token: Secret<String>,

    /// Discard updates that queued up while the bot was offline.
    pub drop_pending_updates: bool,
}

impl TelegramConfig {
    /// True when no token has been configured at all.
    #[must_use]
    pub fn token_is_empty(&self) -> bool {
        self.token.expose_secret().is_empty()
    }
}

impl std::fmt::Debug for TelegramConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TelegramConfig")
            .field("token", &"[REDACTED]")
            .field("drop_pending_updates", &self.drop_pending_updates)
            .finish()
    }
}

impl Default for TelegramConfig {
    fn default() -> Self {
        Self {
            token: Secret::new(String::new()),
            drop_pending_updates: true,
        }
    }
}

fn serialize_secret<S: serde::Serializer>(
    secret: &Secret<String>,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(secret.expose_secret())
}

/// Keyword → template mapping fed to the response policy.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PolicyConfig {
    /// Normalized keyword → response template. `{agentName}` is substituted
    /// with the agent's display name.
    pub responses: BTreeMap<String, String>,
    /// Template used when no keyword matches. Omit to stay silent.
    pub fallback: Option<String>,
}

impl Default for PolicyConfig {
    fn default() -> Self {
        Self {
            responses: [(
                "start".to_string(),
                "Hey there! {agentName} is online and ready to chat.".to_string(),
            )]
            .into(),
            fallback: Some("I am online but only handle /start for now.".to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_shipped_policy() {
        let cfg = ParleyConfig::default();
        assert_eq!(cfg.runtime.name, "parley");
        assert_eq!(cfg.runtime.log_level, "info");
        assert!(cfg.telegram.token_is_empty());
        assert!(cfg.telegram.drop_pending_updates);
        assert!(cfg.policy.responses.contains_key("start"));
        assert!(cfg.policy.fallback.is_some());
    }

    #[test]
    fn deserialize_from_toml() {
        let toml = r#"
            [runtime]
            name = "ada"
            log_level = "debug"

            [telegram]
            token = "123:ABC"

            [policy]
            fallback = "?"

            [policy.responses]
            start = "Hi {agentName}"
            help = "Try /start"
        "#;
        let cfg: ParleyConfig = toml::from_str(toml).unwrap();
        assert_eq!(cfg.runtime.name, "ada");
        assert_eq!(cfg.runtime.log_level, "debug");
        // unspecified sections fall back to defaults
        assert_eq!(cfg.runtime.environment, "development");
        assert_eq!(cfg.telegram.token.expose_secret(), "123:ABC");
        assert_eq!(cfg.policy.responses["help"], "Try /start");
        assert_eq!(cfg.policy.fallback.as_deref(), Some("?"));
    }

    #[test]
    fn debug_output_redacts_the_token() {
        let cfg: TelegramConfig = toml::from_str(r#"token = "hunter2""#).unwrap();
        let debug = format!("{cfg:?}");
        assert!(debug.contains("[REDACTED]"));
        assert!(!debug.contains("hunter2"));
    }

    #[test]
    fn serialize_roundtrip_keeps_the_token() {
        let cfg: TelegramConfig = toml::from_str(r#"token = "tok""#).unwrap();
        let json = serde_json::to_string(&cfg).unwrap();
        let cfg2: TelegramConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(cfg2.token.expose_secret(), "tok");
    }
}
