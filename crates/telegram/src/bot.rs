use std::sync::Arc;

use {
    secrecy::ExposeSecret,
    teloxide::{
        ApiError, RequestError,
        payloads::DeleteWebhookSetters,
        prelude::*,
        types::{AllowedUpdate, UpdateKind},
    },
    tokio_util::sync::CancellationToken,
    tracing::{debug, error, info, warn},
};

use parley_config::schema::TelegramConfig;

use crate::{handlers, state::BotState};

/// Start long polling for the configured bot account.
///
/// Spawns a background task that processes updates until the returned
/// `CancellationToken` is cancelled.
pub async fn start_polling(
    config: TelegramConfig,
    state: Arc<BotState>,
) -> anyhow::Result<CancellationToken> {
    // Client timeout longer than the long-polling timeout (30s) so the HTTP
    // client doesn't abort the request before Telegram responds.
    let client = teloxide::net::default_reqwest_settings()
        .timeout(std::time::Duration::from_secs(45))
        .build()?;
    let bot = Bot::with_client(config.token.expose_secret(), client);

    // Verify credentials and clear any webhook so long polling works.
    let me = bot.get_me().await?;
    bot.delete_webhook()
        .drop_pending_updates(config.drop_pending_updates)
        .send()
        .await?;

    info!(
        username = ?me.username,
        agent = %state.agent.display_name,
        "telegram bot connected (webhook cleared)"
    );

    let cancel = CancellationToken::new();
    let cancel_clone = cancel.clone();

    tokio::spawn(async move {
        info!("starting telegram polling loop");
        let mut offset: i32 = 0;

        loop {
            if cancel_clone.is_cancelled() {
                info!("telegram polling stopped");
                break;
            }

            let result = bot
                .get_updates()
                .offset(offset)
                .timeout(30)
                .allowed_updates(vec![AllowedUpdate::Message])
                .await;

            match result {
                Ok(updates) => {
                    debug!(count = updates.len(), "got telegram updates");
                    for update in updates {
                        offset = update.id.as_offset();
                        match update.kind {
                            UpdateKind::Message(msg) => {
                                debug!(chat_id = msg.chat.id.0, "received telegram message");
                                if let Err(e) = handlers::handle_message(msg, &bot, &state).await {
                                    error!(error = %e, "error handling telegram message");
                                }
                            },
                            other => {
                                debug!("ignoring non-message update: {other:?}");
                            },
                        }
                    }
                },
                Err(e) => {
                    // Another bot instance is running with the same token.
                    if matches!(&e, RequestError::Api(ApiError::TerminatedByOtherGetUpdates)) {
                        warn!(
                            "telegram bot disabled: another instance is already running with this token"
                        );
                        cancel_clone.cancel();
                        break;
                    }

                    warn!(error = %e, "telegram getUpdates failed");
                    tokio::time::sleep(std::time::Duration::from_secs(5)).await;
                },
            }
        }
    });

    Ok(cancel)
}
