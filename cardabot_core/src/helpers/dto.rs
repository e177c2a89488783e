use serde::{Deserialize, Serialize};

use crate::helpers::i18n::Language;

/// Pool every chat points at until an admin picks another one.
pub const FALLBACK_POOL: &str = "pool1ndtsklata6rphamr6jw2p3ltnzayq3pezhg0djvn7n5js8rqlzh";

/// Per-chat settings record, one per Telegram chat id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatConfig {
    pub chat_id: i64,
    pub language: Language,
    pub default_pool: String,
}

impl ChatConfig {
    pub fn new(chat_id: i64) -> Self {
        Self {
            chat_id,
            language: Language::default(),
            default_pool: FALLBACK_POOL.to_string(),
        }
    }
}

/// Snapshot of the running epoch. All amounts are lovelace.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EpochData {
    pub current_epoch: u64,
    pub current_slot: u64,
    pub slot_in_epoch: u64,
    pub percentage: f64,
    pub txs_in_epoch: u64,
    pub fees_in_epoch: u64,
    pub active_stake: u64,
    pub n_active_stake_pools: u64,
    pub remaining_time: u64,
}

/// Raw pool record as the upstream reports it. Saturation and the block
/// estimate are derived afterwards, see `helpers::views`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PoolData {
    pub ticker: String,
    pub name: String,
    pub description: String,
    pub homepage: String,
    pub pool_id: String,
    pub pledge: u64,
    pub fixed_cost: u64,
    pub margin: f64,
    pub live_stake: u64,
    pub active_stake_amount: u64,
    pub delegators_count: u64,
    pub epoch_blocks_count: u64,
    pub lifetime_blocks_count: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PotsData {
    pub treasury: u64,
    pub reserves: u64,
    pub fees: u64,
    pub rewards: u64,
    pub utxo: u64,
    pub deposits: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NetParamsData {
    pub a0: f64,
    pub min_pool_cost: u64,
    pub min_utxo_value: u64,
    pub n_opt: u64,
    pub rho: f64,
    pub tau: f64,
    pub decentralisation_param: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NetStatsData {
    pub circulating_supply: u64,
    pub percentage_in_stake: f64,
    pub stakepools: u64,
    pub delegations: u64,
    pub load_15m: f64,
    pub load_1h: f64,
    pub load_24h: f64,
}

/// Request body for building an unsigned tip transaction.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UnsignedTxRequest {
    pub chat_id_sender: u64,
    pub chat_id_receiver: u64,
    pub username_receiver: Option<String>,
    pub amount: f64,
    pub client: String,
}

/// Outcome of asking the API to build a tip transaction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TipBuildOutcome {
    Created { tx_id: String },
    Rejected { detail: String },
}

/// Outcome of a claim request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClaimOutcome {
    Transferred { tx_id: String },
    Rejected { detail: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chat_config_defaults() {
        let config = ChatConfig::new(42);
        assert_eq!(config.chat_id, 42);
        assert_eq!(config.language, Language::En);
        assert_eq!(config.default_pool, FALLBACK_POOL);
    }

    #[test]
    fn test_chat_config_language_serializes_as_code() {
        let config = ChatConfig::new(-100);
        let json = serde_json::to_string(&config).unwrap();
        assert!(json.contains("\"language\":\"EN\""));

        let parsed: ChatConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn test_epoch_data_decodes_from_api_payload() {
        let payload = r#"{
            "current_epoch": 299,
            "current_slot": 39916800,
            "slot_in_epoch": 237600,
            "percentage": 55.0,
            "txs_in_epoch": 41233,
            "fees_in_epoch": 48231450000,
            "active_stake": 23916812345678901,
            "n_active_stake_pools": 3001,
            "remaining_time": 194400
        }"#;
        let epoch: EpochData = serde_json::from_str(payload).unwrap();
        assert_eq!(epoch.current_epoch, 299);
        assert_eq!(epoch.remaining_time, 194_400);
    }
}
