//! Command handlers for the CardaBot Telegram bot.

use anyhow::{Result, ensure};
use cardabot_core::helpers::backend::{ConfigStore, MetricsProvider};
use cardabot_core::helpers::dto::{
    ClaimOutcome, FALLBACK_POOL, TipBuildOutcome, UnsignedTxRequest,
};
use cardabot_core::helpers::error::CardaBotError;
use cardabot_core::helpers::i18n::Language;
use cardabot_core::helpers::views::build_pool_view;
use reqwest::Url;
use teloxide::{
    Bot,
    prelude::*,
    types::{InlineKeyboardButton, InlineKeyboardMarkup, Message, ParseMode},
};

use crate::dependencies::BotDependencies;
use crate::job::handler::{schedule_connect_poll, schedule_tx_status_poll};
use crate::replies::handler::HtmlReplies;
use crate::utils::{LEARN_MORE_URL, MIN_TIP_ADA};

/// Gate for commands that mutate shared chat state. Private chats are
/// always authorized; in groups the invoking user must be an administrator.
/// Sends the localized refusal itself and reports whether to proceed.
async fn ensure_admin(
    bot: &Bot,
    msg: &Message,
    bot_deps: &BotDependencies,
    replies: &HtmlReplies,
) -> Result<bool> {
    if msg.chat.is_private() {
        return Ok(true);
    }

    let authorized = match msg.from.as_ref() {
        Some(user) => bot_deps.admins.is_admin(bot, msg.chat.id, user.id).await?,
        None => false,
    };

    if !authorized {
        bot.send_message(msg.chat.id, replies.not_authorized())
            .parse_mode(ParseMode::Html)
            .await?;
    }

    Ok(authorized)
}

pub async fn handle_start(bot: Bot, msg: Message, replies: HtmlReplies) -> Result<()> {
    bot.send_message(msg.chat.id, replies.welcome())
        .parse_mode(ParseMode::Html)
        .await?;
    handle_help(bot, msg, replies).await
}

pub async fn handle_help(bot: Bot, msg: Message, replies: HtmlReplies) -> Result<()> {
    bot.send_message(msg.chat.id, replies.help())
        .parse_mode(ParseMode::Html)
        .await?;
    Ok(())
}

pub async fn handle_language(
    bot: Bot,
    msg: Message,
    code: String,
    replies: HtmlReplies,
    bot_deps: BotDependencies,
) -> Result<()> {
    if !ensure_admin(&bot, &msg, &bot_deps, &replies).await? {
        return Ok(());
    }

    let chat_id = msg.chat.id;
    let code = code.trim();

    // no argument resets the chat back to the default language
    let language = if code.is_empty() {
        Language::default()
    } else {
        match Language::from_code(code) {
            Ok(language) => language,
            Err(CardaBotError::UnsupportedLanguage(code)) => {
                bot.send_message(chat_id, replies.change_lang_error(&code))
                    .parse_mode(ParseMode::Html)
                    .await?;
                return Ok(());
            }
        }
    };

    bot_deps.chat_settings.set_language(chat_id.0, language)?;

    // confirm in the language that was just selected
    bot.send_message(chat_id, HtmlReplies::new(language).change_lang_success())
        .parse_mode(ParseMode::Html)
        .await?;
    Ok(())
}

pub async fn handle_setpool(
    bot: Bot,
    msg: Message,
    ticker: String,
    replies: HtmlReplies,
    bot_deps: BotDependencies,
) -> Result<()> {
    if !ensure_admin(&bot, &msg, &bot_deps, &replies).await? {
        return Ok(());
    }

    let ticker = ticker.trim();
    let pool = if ticker.is_empty() {
        FALLBACK_POOL.to_string()
    } else {
        ticker.to_uppercase()
    };

    bot_deps
        .chat_settings
        .set_default_pool(msg.chat.id.0, &pool)?;

    bot.send_message(msg.chat.id, replies.change_default_pool_success())
        .parse_mode(ParseMode::Html)
        .await?;
    Ok(())
}

pub async fn handle_pool(
    bot: Bot,
    msg: Message,
    ticker: String,
    replies: HtmlReplies,
    bot_deps: BotDependencies,
) -> Result<()> {
    let chat_id = msg.chat.id;
    let ticker = ticker.trim();
    let pool_id = if ticker.is_empty() {
        bot_deps.chat_settings.get_default_pool(chat_id.0)?
    } else {
        ticker.to_string()
    };

    bot.send_message(chat_id, replies.pool_wait()).await?;

    match build_pool_view(&bot_deps.api, &pool_id).await? {
        Some(view) => {
            bot.send_message(chat_id, replies.pool_info(&view))
                .parse_mode(ParseMode::Html)
                .await?;
        }
        None => {
            bot.send_message(chat_id, replies.pool_not_found(&pool_id))
                .parse_mode(ParseMode::Html)
                .await?;
        }
    }

    Ok(())
}

pub async fn handle_epoch(
    bot: Bot,
    msg: Message,
    replies: HtmlReplies,
    bot_deps: BotDependencies,
) -> Result<()> {
    let epoch = bot_deps.api.epoch().await?;
    ensure!(
        (0.0..=100.0).contains(&epoch.percentage),
        "epoch percentage out of range: {}",
        epoch.percentage
    );

    bot.send_message(msg.chat.id, replies.epoch_info(&epoch))
        .parse_mode(ParseMode::Html)
        .await?;
    Ok(())
}

pub async fn handle_pots(
    bot: Bot,
    msg: Message,
    replies: HtmlReplies,
    bot_deps: BotDependencies,
) -> Result<()> {
    let pots = bot_deps.api.pots().await?;
    bot.send_message(msg.chat.id, replies.pots(&pots))
        .parse_mode(ParseMode::Html)
        .await?;
    Ok(())
}

pub async fn handle_netparams(
    bot: Bot,
    msg: Message,
    replies: HtmlReplies,
    bot_deps: BotDependencies,
) -> Result<()> {
    let params = bot_deps.api.netparams().await?;
    bot.send_message(msg.chat.id, replies.netparams(&params))
        .parse_mode(ParseMode::Html)
        .await?;
    Ok(())
}

pub async fn handle_netstats(
    bot: Bot,
    msg: Message,
    replies: HtmlReplies,
    bot_deps: BotDependencies,
) -> Result<()> {
    let stats = bot_deps.api.netstats().await?;
    bot.send_message(msg.chat.id, replies.netstats(&stats))
        .parse_mode(ParseMode::Html)
        .await?;
    Ok(())
}

pub async fn handle_tip(
    bot: Bot,
    msg: Message,
    amount: String,
    replies: HtmlReplies,
    bot_deps: BotDependencies,
) -> Result<()> {
    let chat_id = msg.chat.id;

    // a tip targets the author of the message being replied to
    let receiver = msg
        .reply_to_message()
        .and_then(|reply| reply.from.clone());
    let (Some(receiver), Some(sender)) = (receiver, msg.from.clone()) else {
        bot.send_message(chat_id, replies.tip_refused())
            .parse_mode(ParseMode::Html)
            .await?;
        return Ok(());
    };

    let amount = match amount.trim().parse::<f64>() {
        Ok(amount) if amount > MIN_TIP_ADA => amount,
        _ => {
            bot.send_message(chat_id, replies.tip_refused())
                .parse_mode(ParseMode::Html)
                .await?;
            return Ok(());
        }
    };

    let request = UnsignedTxRequest {
        chat_id_sender: sender.id.0,
        chat_id_receiver: receiver.id.0,
        username_receiver: receiver.username.clone(),
        amount,
        client: "TELEGRAM".to_string(),
    };

    match bot_deps.api.build_tip_tx(&request).await? {
        TipBuildOutcome::Rejected { detail } => {
            bot.send_message(chat_id, detail).await?;
        }
        TipBuildOutcome::Created { tx_id } => {
            let pay_url = bot_deps.api.web_url(&format!("pay?tx_id={}", tx_id));
            let keyboard = InlineKeyboardMarkup::new(vec![
                vec![InlineKeyboardButton::url(
                    "🔑 Sign Tx".to_string(),
                    Url::parse(&pay_url)?,
                )],
                vec![InlineKeyboardButton::url(
                    "📖 Learn more".to_string(),
                    Url::parse(LEARN_MORE_URL)?,
                )],
            ]);

            let message = bot
                .send_message(chat_id, replies.tip_sign_prompt())
                .reply_markup(keyboard)
                .await?;

            schedule_tx_status_poll(
                bot.clone(),
                bot_deps.clone(),
                chat_id,
                message.id,
                tx_id,
                replies,
            )
            .await?;
        }
    }

    Ok(())
}

pub async fn handle_connect(
    bot: Bot,
    msg: Message,
    replies: HtmlReplies,
    bot_deps: BotDependencies,
) -> Result<()> {
    let chat_id = msg.chat.id;

    if !msg.chat.is_private() {
        bot.send_message(chat_id, replies.connection_refused())
            .parse_mode(ParseMode::Html)
            .await?;
        return Ok(());
    }

    let token = bot_deps.api.chat_token(chat_id.0).await?;
    let connect_url = bot_deps
        .api
        .web_url(&format!("connect?token={}", urlencoding::encode(&token)));

    let keyboard = InlineKeyboardMarkup::new(vec![
        vec![InlineKeyboardButton::url(
            "🔗 Connect Wallet".to_string(),
            Url::parse(&connect_url)?,
        )],
        vec![InlineKeyboardButton::url(
            "📖 Learn more".to_string(),
            Url::parse(LEARN_MORE_URL)?,
        )],
    ]);

    let message = bot
        .send_message(chat_id, replies.connect_prompt())
        .reply_markup(keyboard)
        .await?;

    // whoever was connected before the prompt; the poll looks for a change
    let initial_user = bot_deps.api.connected_user(chat_id.0).await?;
    schedule_connect_poll(
        bot.clone(),
        bot_deps.clone(),
        chat_id,
        message.id,
        initial_user,
        replies,
    )
    .await?;

    Ok(())
}

pub async fn handle_claim(
    bot: Bot,
    msg: Message,
    replies: HtmlReplies,
    bot_deps: BotDependencies,
) -> Result<()> {
    let chat_id = msg.chat.id;
    let Some(user) = msg.from.as_ref() else {
        bot.send_message(chat_id, replies.endpoint_refused())
            .parse_mode(ParseMode::Html)
            .await?;
        return Ok(());
    };

    bot.send_message(chat_id, replies.claim_wait()).await?;

    match bot_deps.api.claim(user.id.0).await? {
        ClaimOutcome::Rejected { detail } => {
            bot.send_message(chat_id, detail).await?;
        }
        ClaimOutcome::Transferred { tx_id } => {
            let keyboard = InlineKeyboardMarkup::new(vec![vec![InlineKeyboardButton::url(
                "Check Tx on CardanoScan".to_string(),
                Url::parse(&bot_deps.network.cardanoscan_tx_url(&tx_id))?,
            )]]);
            bot.send_message(chat_id, replies.claim_success())
                .reply_markup(keyboard)
                .await?;
        }
    }

    Ok(())
}

pub async fn handle_alert(
    bot: Bot,
    msg: Message,
    text: String,
    replies: HtmlReplies,
    bot_deps: BotDependencies,
) -> Result<()> {
    let chat_id = msg.chat.id;

    let authorized = msg
        .from
        .as_ref()
        .map(|user| Some(user.id.0 as i64) == bot_deps.admin_chat_id)
        .unwrap_or(false);
    if !authorized {
        bot.send_message(chat_id, replies.endpoint_refused())
            .parse_mode(ParseMode::Html)
            .await?;
        return Ok(());
    }

    let text = text.trim();
    if text.is_empty() {
        bot.send_message(chat_id, "Usage: /alert MESSAGE").await?;
        return Ok(());
    }

    // direct chats only, group ids are negative
    let chat_ids: Vec<i64> = bot_deps
        .chat_settings
        .chat_ids()?
        .into_iter()
        .filter(|id| *id > 0)
        .collect();

    log::info!("broadcasting alert to {} chats", chat_ids.len());
    crate::utils::send_to_all(&bot, &chat_ids, text, None).await;

    Ok(())
}

pub async fn handle_ebs(bot: Bot, msg: Message) -> Result<()> {
    let keyboard = InlineKeyboardMarkup::new(vec![
        vec![InlineKeyboardButton::url(
            "✨ Twitter ✨".to_string(),
            Url::parse("https://twitter.com/EveryBlockStd")?,
        )],
        vec![InlineKeyboardButton::url(
            "✨ Instagram ✨".to_string(),
            Url::parse("https://instagram.com/EveryBlockStudio")?,
        )],
        vec![InlineKeyboardButton::url(
            "✨ LinkedIn ✨".to_string(),
            Url::parse("https://www.linkedin.com/company/everyblock-studio/")?,
        )],
        vec![InlineKeyboardButton::url(
            "✨ Telegram ✨".to_string(),
            Url::parse("https://t.me/EveryBlockStudio")?,
        )],
    ]);

    bot.send_message(msg.chat.id, "🔔 Follow us on social media!")
        .reply_markup(keyboard)
        .await?;
    Ok(())
}
