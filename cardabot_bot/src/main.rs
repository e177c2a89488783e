use std::env;
use std::sync::Arc;

use teloxide::prelude::*;

mod admins;
mod api;
mod bot;
mod chat_settings;
mod dependencies;
mod job;
mod replies;
mod utils;

use crate::admins::handler::AdminCache;
use crate::api::handler::CardaBotApi;
use crate::bot::handler_tree::handler_tree;
use crate::chat_settings::handler::ChatSettings;
use crate::dependencies::BotDependencies;
use crate::job::job_scheduler::{init_scheduler, schedule_jobs};
use crate::utils::Network;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();
    log::info!("Starting cardabot_bot...");

    let bot = Bot::from_env();
    let db = sled::open("cardabot_db").expect("Failed to open sled DB");

    let api_url = env::var("CARDABOT_API_URL").expect("CARDABOT_API_URL not set");
    let api_token = env::var("CARDABOT_API_TOKEN").expect("CARDABOT_API_TOKEN not set");
    let api = CardaBotApi::new(api_url, api_token);

    let chat_settings = ChatSettings::new(&db).expect("Failed to open chat settings tree");
    let admins = AdminCache::new();
    let network = Network::from_env().expect("Invalid NETWORK environment variable");
    let admin_chat_id = env::var("ADMIN_CHAT_ID")
        .ok()
        .and_then(|id| id.parse::<i64>().ok());

    let scheduler = Arc::new(
        init_scheduler()
            .await
            .expect("Failed to create job scheduler"),
    );

    let bot_deps = BotDependencies {
        db,
        chat_settings,
        api,
        admins,
        scheduler,
        network,
        admin_chat_id,
    };

    schedule_jobs(bot.clone(), bot_deps.clone())
        .await
        .expect("Failed to start scheduled jobs");

    Dispatcher::builder(bot, handler_tree())
        .dependencies(dptree::deps![bot_deps])
        .enable_ctrlc_handler()
        .build()
        .dispatch()
        .await;
}
