//! Composition root: builds repositories, policy, and use cases by hand and
//! passes them into the Telegram adapter. No runtime service locator.

use std::{path::PathBuf, sync::Arc};

use {
    clap::Parser,
    tokio_util::sync::CancellationToken,
    tracing::info,
    tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt},
};

use {
    parley_common::ids,
    parley_config::ParleyConfig,
    parley_messaging::{
        PlanResponse, RecordIncomingMessage, RegisterConversation,
        entities::Agent,
        policy::{KeywordPolicyConfig, KeywordResponsePolicy},
    },
    parley_store::{
        InMemoryConversationRepository, InMemoryMessageRepository, InMemoryParticipantRepository,
    },
    parley_telegram::BotState,
};

#[derive(Parser)]
#[command(name = "parley", about = "Parley — keyword-reply Telegram bot")]
struct Cli {
    /// Log level (trace, debug, info, warn, error). Overrides the config value.
    #[arg(long)]
    log_level: Option<String>,

    /// Output logs as JSON instead of human-readable.
    #[arg(long, default_value_t = false)]
    json_logs: bool,

    /// Path to the config file (defaults to ./parley.toml).
    #[arg(long, env = "PARLEY_CONFIG")]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => parley_config::load_config(path)?,
        None => parley_config::discover_and_load(),
    };

    let level = cli
        .log_level
        .clone()
        .unwrap_or_else(|| config.runtime.log_level.clone());
    init_tracing(&level, cli.json_logs);

    info!(
        name = %config.runtime.name,
        version = %config.runtime.version,
        environment = %config.runtime.environment,
        "runtime starting"
    );

    if config.telegram.token_is_empty() {
        anyhow::bail!("no Telegram bot token configured (set TELEGRAM_BOT_TOKEN)");
    }

    let state = Arc::new(compose(&config));
    info!(
        agent_id = %state.agent.id,
        username = %state.agent.username,
        "agent identity ready"
    );

    let cancel = parley_telegram::start_polling(config.telegram.clone(), state).await?;

    wait_for_shutdown(&cancel).await?;
    cancel.cancel();

    Ok(())
}

/// Blocks until ctrl-c, or until the polling loop stops itself (e.g. when
/// another instance runs with the same token).
async fn wait_for_shutdown(cancel: &CancellationToken) -> anyhow::Result<()> {
    tokio::select! {
        result = tokio::signal::ctrl_c() => {
            result?;
            info!("shutting down");
        },
        () = cancel.cancelled() => {
            info!("polling loop stopped, shutting down");
        },
    }
    Ok(())
}

/// Explicit constructor composition: repositories, policy, use cases, agent.
fn compose(config: &ParleyConfig) -> BotState {
    let conversations = Arc::new(InMemoryConversationRepository::new());
    let participants = Arc::new(InMemoryParticipantRepository::new());
    let messages = Arc::new(InMemoryMessageRepository::new());

    let policy = Arc::new(KeywordResponsePolicy::new(KeywordPolicyConfig {
        responses: config.policy.responses.clone(),
        fallback: config.policy.fallback.clone(),
    }));

    BotState {
        agent: build_agent(config),
        register_conversation: RegisterConversation::new(conversations.clone()),
        record_incoming_message: RecordIncomingMessage::new(conversations, participants, messages),
        plan_response: PlanResponse::new(policy),
    }
}

/// The agent identity is created once at process start; unset fields fall
/// back to the runtime name and a fresh runtime id.
fn build_agent(config: &ParleyConfig) -> Agent {
    let display_name = config
        .agent
        .display_name
        .clone()
        .unwrap_or_else(|| config.runtime.name.clone());
    let username = config
        .agent
        .username
        .clone()
        .unwrap_or_else(|| derive_username(&display_name));
    let id = config.agent.id.clone().unwrap_or_else(ids::runtime_id);
    Agent::new(id, username, display_name)
}

fn derive_username(display_name: &str) -> String {
    let username = display_name
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("_")
        .to_lowercase();
    if username.is_empty() {
        "parley_bot".into()
    } else {
        username
    }
}

fn init_tracing(level: &str, json_logs: bool) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level.to_string()));
    let registry = tracing_subscriber::registry().with(filter);
    if json_logs {
        registry.with(fmt::layer().json()).init();
    } else {
        registry.with(fmt::layer()).init();
    }
}
