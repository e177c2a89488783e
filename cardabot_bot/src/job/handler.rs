//! Background jobs: the end-of-epoch watcher plus the bounded polling jobs
//! started by /tip and /connect. Every polling job removes itself through
//! the scheduler handle on success and on deadline, so none outlives its
//! window.

use std::time::Duration;

use anyhow::Result;
use cardabot_core::helpers::backend::{ConfigStore, MetricsProvider};
use chrono::Utc;
use reqwest::Url;
use teloxide::{
    Bot,
    prelude::*,
    types::{ChatId, InlineKeyboardButton, InlineKeyboardMarkup, MessageId, ParseMode},
};
use tokio_cron_scheduler::Job;

use crate::dependencies::BotDependencies;
use crate::replies::handler::HtmlReplies;

const EPOCH_STATE_TREE: &str = "epoch_state";
const LAST_EPOCH_KEY: &str = "last_epoch";

const TX_POLL_INTERVAL: Duration = Duration::from_secs(30);
const TX_POLL_WINDOW_SECS: i64 = 600;

const CONNECT_POLL_INTERVAL: Duration = Duration::from_secs(10);
const CONNECT_POLL_GRACE_SECS: i64 = 20;
const CONNECT_POLL_WINDOW_SECS: i64 = 7 * 60;

/// Watch for epoch rollovers and broadcast the summary once per boundary.
/// The last seen epoch is persisted so a restart does not re-announce.
pub fn job_end_of_epoch(bot: Bot, bot_deps: BotDependencies) -> Job {
    Job::new_async("0 */10 * * * *", move |_uuid, _l| {
        let bot = bot.clone();
        let bot_deps = bot_deps.clone();
        Box::pin(async move {
            if let Err(e) = check_epoch_rollover(&bot, &bot_deps).await {
                log::error!("end-of-epoch check failed: {:#}", e);
            }
        })
    })
    .expect("Failed to create end-of-epoch job")
}

async fn check_epoch_rollover(bot: &Bot, bot_deps: &BotDependencies) -> Result<()> {
    let epoch = bot_deps.api.epoch().await?;
    let tree = bot_deps.db.open_tree(EPOCH_STATE_TREE)?;

    let last = tree
        .get(LAST_EPOCH_KEY)?
        .and_then(|bytes| String::from_utf8(bytes.to_vec()).ok())
        .and_then(|text| text.parse::<u64>().ok());

    match last {
        None => {
            // first run, just remember where we are
            tree.insert(LAST_EPOCH_KEY, epoch.current_epoch.to_string().as_bytes())?;
        }
        Some(last) if epoch.current_epoch > last => {
            tree.insert(LAST_EPOCH_KEY, epoch.current_epoch.to_string().as_bytes())?;
            broadcast_epoch_summary(bot, bot_deps, last).await?;
        }
        Some(_) => {}
    }

    Ok(())
}

async fn broadcast_epoch_summary(
    bot: &Bot,
    bot_deps: &BotDependencies,
    ended_epoch: u64,
) -> Result<()> {
    // direct chats only, group ids are negative
    let chat_ids: Vec<i64> = bot_deps
        .chat_settings
        .chat_ids()?
        .into_iter()
        .filter(|id| *id > 0)
        .collect();

    log::info!(
        "epoch {} ended, notifying {} chats",
        ended_epoch,
        chat_ids.len()
    );

    for chat_id in chat_ids {
        let language = bot_deps
            .chat_settings
            .get_language(chat_id)
            .unwrap_or_default();
        let text = HtmlReplies::new(language).end_of_epoch_summary(ended_epoch);
        if let Err(e) = bot
            .send_message(ChatId(chat_id), text)
            .parse_mode(ParseMode::Html)
            .await
        {
            log::warn!("failed to deliver epoch summary to chat {}: {}", chat_id, e);
        }
    }

    Ok(())
}

/// Poll a built tip transaction until it is signed and submitted or the
/// window closes, editing the prompt message either way.
pub async fn schedule_tx_status_poll(
    bot: Bot,
    bot_deps: BotDependencies,
    chat_id: ChatId,
    message_id: MessageId,
    tx_id: String,
    replies: HtmlReplies,
) -> Result<()> {
    let deadline = Utc::now().timestamp() + TX_POLL_WINDOW_SECS;
    let api = bot_deps.api.clone();
    let network = bot_deps.network;
    let scheduler = bot_deps.scheduler.clone();
    let remover = scheduler.clone();

    let job = Job::new_repeated_async(TX_POLL_INTERVAL, move |uuid, _l| {
        let bot = bot.clone();
        let api = api.clone();
        let tx_id = tx_id.clone();
        let scheduler = remover.clone();
        Box::pin(async move {
            let submitted = match api.tx_submitted(&tx_id).await {
                Ok(submitted) => submitted,
                Err(e) => {
                    log::warn!("checktx failed for {}: {:#}", tx_id, e);
                    false
                }
            };

            if submitted {
                let keyboard = InlineKeyboardMarkup::new(vec![vec![InlineKeyboardButton::url(
                    "Check Tx on CardanoScan".to_string(),
                    Url::parse(&network.cardanoscan_tx_url(&tx_id)).unwrap(),
                )]]);
                if let Err(e) = bot
                    .edit_message_text(chat_id, message_id, replies.tip_submitted())
                    .reply_markup(keyboard)
                    .await
                {
                    log::warn!("failed to update tip message in chat {}: {}", chat_id, e);
                }
                if let Err(e) = scheduler.remove(&uuid).await {
                    log::error!("failed to remove tip poll job {}: {}", uuid, e);
                }
            } else if Utc::now().timestamp() >= deadline {
                if let Err(e) = bot
                    .edit_message_text(chat_id, message_id, replies.tip_fail())
                    .await
                {
                    log::warn!("failed to expire tip message in chat {}: {}", chat_id, e);
                }
                if let Err(e) = scheduler.remove(&uuid).await {
                    log::error!("failed to remove tip poll job {}: {}", uuid, e);
                }
            }
        })
    })
    .map_err(|e| anyhow::anyhow!("Failed to create tip poll job: {}", e))?;

    scheduler
        .add(job)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to schedule tip poll job: {}", e))?;
    Ok(())
}

/// Poll the connect status after a /connect prompt. The message is updated
/// as soon as a different cardabot user shows up for the chat; after the
/// window passes the job just removes itself.
pub async fn schedule_connect_poll(
    bot: Bot,
    bot_deps: BotDependencies,
    chat_id: ChatId,
    message_id: MessageId,
    initial_user: Option<i64>,
    replies: HtmlReplies,
) -> Result<()> {
    let start = Utc::now().timestamp() + CONNECT_POLL_GRACE_SECS;
    let deadline = start + CONNECT_POLL_WINDOW_SECS;
    let api = bot_deps.api.clone();
    let scheduler = bot_deps.scheduler.clone();
    let remover = scheduler.clone();

    let job = Job::new_repeated_async(CONNECT_POLL_INTERVAL, move |uuid, _l| {
        let bot = bot.clone();
        let api = api.clone();
        let scheduler = remover.clone();
        Box::pin(async move {
            let now = Utc::now().timestamp();
            if now < start {
                return;
            }
            if now >= deadline {
                if let Err(e) = scheduler.remove(&uuid).await {
                    log::error!("failed to remove connect poll job {}: {}", uuid, e);
                }
                return;
            }

            match api.connected_user(chat_id.0).await {
                Ok(user) if user != initial_user => {
                    if let Err(e) = bot
                        .edit_message_text(chat_id, message_id, replies.connection_success())
                        .parse_mode(ParseMode::Html)
                        .await
                    {
                        log::warn!(
                            "failed to update connect message in chat {}: {}",
                            chat_id,
                            e
                        );
                    }
                    if let Err(e) = scheduler.remove(&uuid).await {
                        log::error!("failed to remove connect poll job {}: {}", uuid, e);
                    }
                }
                Ok(_) => {}
                Err(e) => {
                    log::warn!("connect status check failed for chat {}: {:#}", chat_id, e);
                }
            }
        })
    })
    .map_err(|e| anyhow::anyhow!("Failed to create connect poll job: {}", e))?;

    scheduler
        .add(job)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to schedule connect poll job: {}", e))?;
    Ok(())
}
