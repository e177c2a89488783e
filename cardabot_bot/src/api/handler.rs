use anyhow::{Result, anyhow};
use async_trait::async_trait;
use cardabot_core::helpers::backend::MetricsProvider;
use cardabot_core::helpers::dto::{
    ClaimOutcome, EpochData, NetParamsData, NetStatsData, PoolData, PotsData, TipBuildOutcome,
    UnsignedTxRequest,
};
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;

use crate::api::dto::{ApiDetail, ChatResponse, ChatTokenResponse, DataEnvelope, TxIdResponse};

/// Client for the CardaBot REST API. Carries the token header on every
/// request; all amounts come back as lovelace.
#[derive(Clone)]
pub struct CardaBotApi {
    client: Client,
    base_url: String,
    token: String,
}

impl CardaBotApi {
    pub fn new(base_url: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            token: token.into(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path)
    }

    /// URL on the web frontend living next to the API (connect/pay pages).
    pub fn web_url(&self, path_and_query: &str) -> String {
        let root = self.base_url.trim_end_matches("/api");
        format!("{}/{}", root, path_and_query)
    }

    fn auth(&self) -> String {
        format!("Token {}", self.token)
    }

    async fn get_data<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let response = self
            .client
            .get(self.url(path))
            .header("Authorization", self.auth())
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(anyhow!("CardaBot API returned {} for {}", status, path));
        }

        let body: DataEnvelope<T> = response.json().await?;
        Ok(body.data)
    }

    /// Temporary token used to build the wallet-connect URL for a chat.
    pub async fn chat_token(&self, chat_id: i64) -> Result<String> {
        let response = self
            .client
            .get(self.url(&format!("chats/{}/token/", chat_id)))
            .header("Authorization", self.auth())
            .query(&[("client_filter", "TELEGRAM")])
            .send()
            .await?
            .error_for_status()?;

        let body: ChatTokenResponse = response.json().await?;
        Ok(body.tmp_token)
    }

    /// Cardabot user the chat's wallet is connected to, if any.
    pub async fn connected_user(&self, chat_id: i64) -> Result<Option<i64>> {
        let response = self
            .client
            .get(self.url(&format!("chats/{}/", chat_id)))
            .header("Authorization", self.auth())
            .query(&[("client_filter", "TELEGRAM")])
            .send()
            .await?
            .error_for_status()?;

        let body: ChatResponse = response.json().await?;
        Ok(body.cardabot_user_id)
    }

    /// Ask the API to build an unsigned tip transaction. 4xx responses carry
    /// a human-readable rejection that is relayed to the user verbatim.
    pub async fn build_tip_tx(&self, request: &UnsignedTxRequest) -> Result<TipBuildOutcome> {
        let response = self
            .client
            .post(self.url("unsignedtx/"))
            .header("Authorization", self.auth())
            .json(request)
            .send()
            .await?;

        let status = response.status();
        if status.is_client_error() {
            let body: ApiDetail = response.json().await.unwrap_or_default();
            return Ok(TipBuildOutcome::Rejected {
                detail: body
                    .detail
                    .unwrap_or_else(|| "💰 Tip failed!".to_string()),
            });
        }
        if status != StatusCode::CREATED {
            return Err(anyhow!("unsignedtx returned unexpected status {}", status));
        }

        let body: TxIdResponse = response.json().await?;
        Ok(TipBuildOutcome::Created { tx_id: body.tx_id })
    }

    /// Whether a built transaction has been signed and submitted.
    pub async fn tx_submitted(&self, tx_id: &str) -> Result<bool> {
        let response = self
            .client
            .get(self.url(&format!("checktx/{}/", tx_id)))
            .header("Authorization", self.auth())
            .send()
            .await?;

        Ok(response.status() == StatusCode::OK)
    }

    /// Transfer funds held for a user to their connected wallet.
    pub async fn claim(&self, user_id: u64) -> Result<ClaimOutcome> {
        let response = self
            .client
            .post(self.url("claim/"))
            .header("Authorization", self.auth())
            .query(&[("client_filter", "TELEGRAM")])
            .form(&[("chat_id_receiver", user_id.to_string())])
            .send()
            .await?;

        let status = response.status();
        if status == StatusCode::NOT_ACCEPTABLE || status == StatusCode::NOT_FOUND {
            let body: ApiDetail = response.json().await.unwrap_or_default();
            return Ok(ClaimOutcome::Rejected {
                detail: body
                    .detail
                    .unwrap_or_else(|| "💰 Claim failed!".to_string()),
            });
        }
        if !status.is_success() {
            return Err(anyhow!("claim returned unexpected status {}", status));
        }

        let body: TxIdResponse = response.json().await?;
        Ok(ClaimOutcome::Transferred { tx_id: body.tx_id })
    }
}

#[async_trait]
impl MetricsProvider for CardaBotApi {
    async fn epoch(&self) -> Result<EpochData> {
        self.get_data("epoch/").await
    }

    async fn pool(&self, pool_id: &str) -> Result<Option<PoolData>> {
        let response = self
            .client
            .get(self.url(&format!("pool/{}", pool_id)))
            .header("Authorization", self.auth())
            .send()
            .await?;

        if response.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }

        let response = response.error_for_status()?;
        let body: DataEnvelope<PoolData> = response.json().await?;
        Ok(Some(body.data))
    }

    async fn pots(&self) -> Result<PotsData> {
        self.get_data("pots/").await
    }

    async fn netparams(&self) -> Result<NetParamsData> {
        self.get_data("netparams/").await
    }

    async fn netstats(&self) -> Result<NetStatsData> {
        self.get_data("netstats/").await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{body_string_contains, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_epoch_unwraps_data_envelope_and_sends_token() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/epoch/"))
            .and(header("Authorization", "Token sekrit"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "data": {
                    "current_epoch": 299,
                    "current_slot": 39916800,
                    "slot_in_epoch": 237600,
                    "percentage": 55.0,
                    "txs_in_epoch": 41233,
                    "fees_in_epoch": 48231450000u64,
                    "active_stake": 23916812345678901u64,
                    "n_active_stake_pools": 3001,
                    "remaining_time": 194400
                }
            })))
            .mount(&server)
            .await;

        let api = CardaBotApi::new(server.uri(), "sekrit");
        let epoch = api.epoch().await.unwrap();
        assert_eq!(epoch.current_epoch, 299);
        assert_eq!(epoch.active_stake, 23_916_812_345_678_901);
    }

    #[tokio::test]
    async fn test_pool_maps_404_to_none() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/pool/NOPE"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;

        let api = CardaBotApi::new(server.uri(), "sekrit");
        assert!(api.pool("NOPE").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_server_errors_are_not_swallowed() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/pots/"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let api = CardaBotApi::new(server.uri(), "sekrit");
        assert!(api.pots().await.is_err());
    }

    #[tokio::test]
    async fn test_build_tip_tx_relays_rejection_detail() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/unsignedtx/"))
            .and(body_string_contains("chat_id_sender"))
            .respond_with(
                ResponseTemplate::new(400)
                    .set_body_json(json!({"detail": "Sender wallet is not connected"})),
            )
            .mount(&server)
            .await;

        let api = CardaBotApi::new(server.uri(), "sekrit");
        let request = UnsignedTxRequest {
            chat_id_sender: 1,
            chat_id_receiver: 2,
            username_receiver: Some("someone".to_string()),
            amount: 5.0,
            client: "TELEGRAM".to_string(),
        };

        let outcome = api.build_tip_tx(&request).await.unwrap();
        assert_eq!(
            outcome,
            TipBuildOutcome::Rejected {
                detail: "Sender wallet is not connected".to_string()
            }
        );
    }

    #[tokio::test]
    async fn test_build_tip_tx_returns_tx_id_on_created() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/unsignedtx/"))
            .respond_with(ResponseTemplate::new(201).set_body_json(json!({"tx_id": "abc123"})))
            .mount(&server)
            .await;

        let api = CardaBotApi::new(server.uri(), "sekrit");
        let request = UnsignedTxRequest {
            chat_id_sender: 1,
            chat_id_receiver: 2,
            username_receiver: None,
            amount: 5.0,
            client: "TELEGRAM".to_string(),
        };

        let outcome = api.build_tip_tx(&request).await.unwrap();
        assert_eq!(
            outcome,
            TipBuildOutcome::Created {
                tx_id: "abc123".to_string()
            }
        );
    }

    #[tokio::test]
    async fn test_tx_submitted_tracks_status_code() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/checktx/abc123/"))
            .respond_with(ResponseTemplate::new(202))
            .mount(&server)
            .await;

        let api = CardaBotApi::new(server.uri(), "sekrit");
        assert!(!api.tx_submitted("abc123").await.unwrap());
    }

    #[test]
    fn test_web_url_strips_the_api_segment() {
        let api = CardaBotApi::new("https://cardabot.app/api/", "sekrit");
        assert_eq!(
            api.web_url("pay?tx_id=abc"),
            "https://cardabot.app/pay?tx_id=abc"
        );
    }
}
