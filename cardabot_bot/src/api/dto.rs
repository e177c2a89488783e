use serde::Deserialize;

/// Every metrics payload from the CardaBot API is wrapped in a `data`
/// envelope.
#[derive(Debug, Deserialize)]
pub struct DataEnvelope<T> {
    pub data: T,
}

#[derive(Debug, Deserialize)]
pub struct ChatTokenResponse {
    pub tmp_token: String,
}

#[derive(Debug, Deserialize)]
pub struct ChatResponse {
    pub cardabot_user_id: Option<i64>,
}

#[derive(Debug, Deserialize)]
pub struct TxIdResponse {
    pub tx_id: String,
}

/// Error body the API attaches to 4xx responses.
#[derive(Debug, Default, Deserialize)]
pub struct ApiDetail {
    pub detail: Option<String>,
}
