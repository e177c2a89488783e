//! Utility helpers for cardabot_bot.

use std::env;

use anyhow::{Result, anyhow};
use teloxide::{
    Bot,
    prelude::*,
    types::{ChatId, ParseMode},
};

/// Tips must exceed this many ADA.
pub const MIN_TIP_ADA: f64 = 1.0;

pub const LEARN_MORE_URL: &str = "https://instagram.com/EveryBlockStudio";

/// Which Cardano network the bot reports on; only affects explorer links.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Network {
    Mainnet,
    Testnet,
}

impl Network {
    /// Read NETWORK from the environment, defaulting to mainnet.
    pub fn from_env() -> Result<Self> {
        let network = env::var("NETWORK").unwrap_or_else(|_| "mainnet".to_string());
        match network.to_lowercase().as_str() {
            "mainnet" => Ok(Network::Mainnet),
            "testnet" => Ok(Network::Testnet),
            other => Err(anyhow!("invalid NETWORK environment variable: {}", other)),
        }
    }

    pub fn cardanoscan_tx_url(&self, tx_id: &str) -> String {
        match self {
            Network::Mainnet => format!("https://cardanoscan.io/transaction/{}", tx_id),
            Network::Testnet => format!("https://testnet.cardanoscan.io/transaction/{}", tx_id),
        }
    }
}

/// Deliver `text` to every chat, logging failures without aborting the run.
pub async fn send_to_all(bot: &Bot, chat_ids: &[i64], text: &str, parse_mode: Option<ParseMode>) {
    for &chat_id in chat_ids {
        let mut request = bot.send_message(ChatId(chat_id), text.to_string());
        if let Some(mode) = parse_mode {
            request = request.parse_mode(mode);
        }
        if let Err(e) = request.await {
            log::warn!("failed to deliver broadcast to chat {}: {}", chat_id, e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cardanoscan_url_prefixes_testnet() {
        assert_eq!(
            Network::Mainnet.cardanoscan_tx_url("abc"),
            "https://cardanoscan.io/transaction/abc"
        );
        assert_eq!(
            Network::Testnet.cardanoscan_tx_url("abc"),
            "https://testnet.cardanoscan.io/transaction/abc"
        );
    }
}
