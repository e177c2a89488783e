use anyhow::Result;
use cardabot_core::helpers::backend::ConfigStore;
use cardabot_core::helpers::bot_commands::Command;
use teloxide::{
    Bot,
    prelude::*,
    types::{ChatId, Message},
};

use crate::bot::handler::{
    handle_alert, handle_claim, handle_connect, handle_ebs, handle_epoch, handle_help,
    handle_language, handle_netparams, handle_netstats, handle_pool, handle_pots,
    handle_setpool, handle_start, handle_tip,
};
use crate::dependencies::BotDependencies;
use crate::replies::handler::HtmlReplies;

/// Resolve the chat's language into a reply renderer, creating the chat's
/// settings record on first contact.
pub fn resolve_replies(msg: &Message, bot_deps: &BotDependencies) -> Result<HtmlReplies> {
    let language = bot_deps.chat_settings.get_language(msg.chat.id.0)?;
    Ok(HtmlReplies::new(language))
}

/// Tell the user once that the command failed. Delivery failures are only
/// logged; there is nothing left to do for this update.
pub async fn inform_error(bot: &Bot, chat_id: ChatId, replies: HtmlReplies) {
    if let Err(e) = bot
        .send_message(chat_id, replies.something_went_wrong())
        .await
    {
        log::error!("failed to deliver error notice to chat {}: {}", chat_id, e);
    }
}

/// Uniform per-command flow: resolve language, run the command, contain any
/// failure behind the single generic reply. No retries, no partial replies.
pub async fn answers(
    bot: Bot,
    msg: Message,
    cmd: Command,
    bot_deps: BotDependencies,
) -> Result<()> {
    let chat_id = msg.chat.id;

    let replies = match resolve_replies(&msg, &bot_deps) {
        Ok(replies) => replies,
        Err(e) => {
            log::error!("failed to load settings for chat {}: {:#}", chat_id, e);
            inform_error(&bot, chat_id, HtmlReplies::default()).await;
            return Ok(());
        }
    };

    if let Err(e) = dispatch(bot.clone(), msg, cmd, replies, bot_deps).await {
        log::error!("command failed for chat {}: {:#}", chat_id, e);
        inform_error(&bot, chat_id, replies).await;
    }

    Ok(())
}

async fn dispatch(
    bot: Bot,
    msg: Message,
    cmd: Command,
    replies: HtmlReplies,
    bot_deps: BotDependencies,
) -> Result<()> {
    match cmd {
        Command::Start => handle_start(bot, msg, replies).await,
        Command::Help => handle_help(bot, msg, replies).await,
        Command::Language(code) => handle_language(bot, msg, code, replies, bot_deps).await,
        Command::Setpool(ticker) => handle_setpool(bot, msg, ticker, replies, bot_deps).await,
        Command::Pool(ticker) => handle_pool(bot, msg, ticker, replies, bot_deps).await,
        Command::Epoch => handle_epoch(bot, msg, replies, bot_deps).await,
        Command::Pots => handle_pots(bot, msg, replies, bot_deps).await,
        Command::Netparams => handle_netparams(bot, msg, replies, bot_deps).await,
        Command::Netstats => handle_netstats(bot, msg, replies, bot_deps).await,
        Command::Tip(amount) => handle_tip(bot, msg, amount, replies, bot_deps).await,
        Command::Connect => handle_connect(bot, msg, replies, bot_deps).await,
        Command::Claim => handle_claim(bot, msg, replies, bot_deps).await,
        Command::Alert(text) => handle_alert(bot, msg, text, replies, bot_deps).await,
        Command::Ebs => handle_ebs(bot, msg).await,
    }
}
