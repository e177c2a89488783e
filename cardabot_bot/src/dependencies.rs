use std::sync::Arc;

use tokio_cron_scheduler::JobScheduler;

use crate::{
    admins::handler::AdminCache, api::handler::CardaBotApi, chat_settings::handler::ChatSettings,
    utils::Network,
};

#[derive(Clone)]
pub struct BotDependencies {
    pub db: sled::Db,
    pub chat_settings: ChatSettings,
    pub api: CardaBotApi,
    pub admins: AdminCache,
    pub scheduler: Arc<JobScheduler>,
    pub network: Network,
    /// Operator chat allowed to use /alert, from ADMIN_CHAT_ID.
    pub admin_chat_id: Option<i64>,
}
