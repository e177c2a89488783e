use anyhow::Result;
use async_trait::async_trait;

use crate::helpers::dto::{
    ChatConfig, EpochData, NetParamsData, NetStatsData, PoolData, PotsData,
};
use crate::helpers::i18n::Language;

/// Per-chat configuration storage.
///
/// Implementations keep at most one record per chat id, create records
/// lazily with defaults, and make writes visible to the next read within
/// the same command. Language values arrive pre-validated: user codes go
/// through `Language::from_code` at the command edge, so an out-of-set
/// language is unrepresentable here.
pub trait ConfigStore {
    fn get_or_create(&self, chat_id: i64) -> Result<ChatConfig>;
    fn get_language(&self, chat_id: i64) -> Result<Language>;
    fn set_language(&self, chat_id: i64, language: Language) -> Result<()>;
    fn get_default_pool(&self, chat_id: i64) -> Result<String>;
    /// No validation that the pool exists; that happens when it is queried.
    fn set_default_pool(&self, chat_id: i64, pool: &str) -> Result<()>;
    /// Every chat id a record exists for, in no particular order.
    fn chat_ids(&self) -> Result<Vec<i64>>;
}

/// Source of chain metrics. `pool` resolves to `None` when the upstream
/// does not know the pool; every other failure is an error.
#[async_trait]
pub trait MetricsProvider {
    async fn epoch(&self) -> Result<EpochData>;
    async fn pool(&self, pool_id: &str) -> Result<Option<PoolData>>;
    async fn pots(&self) -> Result<PotsData>;
    async fn netparams(&self) -> Result<NetParamsData>;
    async fn netstats(&self) -> Result<NetStatsData>;
}
