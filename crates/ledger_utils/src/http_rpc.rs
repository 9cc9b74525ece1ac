use async_trait::async_trait;
use serde_json::{json, Value};
use url::Url;

use crate::{
    clusters::CLUSTERS,
    constants::{CONFIRM_POLL_ATTEMPTS, CONFIRM_POLL_INTERVAL},
    enums::ClusterEnv,
    error::LedgerError,
    keypair::Address,
    rpc::{Commitment, LedgerRpc, Signature},
    transaction::Transaction,
};

/// JSON-RPC client bound to exactly one cluster endpoint.
#[derive(Debug)]
pub struct HttpLedgerRpc {
    client: reqwest::Client,
    url: Url,
}

impl HttpLedgerRpc {
    pub fn new(url: Url) -> Self {
        Self {
            client: reqwest::Client::new(),
            url,
        }
    }

    pub fn for_cluster(env: &ClusterEnv) -> Self {
        let Some(cluster) = CLUSTERS.get(env) else {
            panic!("CLUSTERS {:?} not found", env);
        };
        let url = Url::parse(&cluster.rpc_url).unwrap();
        Self::new(url)
    }

    pub fn url(&self) -> &Url {
        &self.url
    }

    async fn call(&self, method: &str, params: Value) -> Result<Value, LedgerError> {
        let body = json!({
            "jsonrpc": "2.0",
            "id": 1,
            "method": method,
            "params": params,
        });
        let response: Value = self
            .client
            .post(self.url.clone())
            .json(&body)
            .send()
            .await?
            .json()
            .await?;

        if let Some(err) = response.get("error") {
            return Err(LedgerError::Rpc {
                code: err.get("code").and_then(Value::as_i64).unwrap_or(0),
                message: err
                    .get("message")
                    .and_then(Value::as_str)
                    .unwrap_or_default()
                    .to_string(),
            });
        }
        response
            .get("result")
            .cloned()
            .ok_or_else(|| LedgerError::MalformedResponse(format!("{method}: missing result")))
    }
}

#[async_trait]
impl LedgerRpc for HttpLedgerRpc {
    async fn get_balance(
        &self,
        address: &Address,
        commitment: Commitment,
    ) -> Result<u64, LedgerError> {
        let result = self
            .call(
                "getBalance",
                json!([address.as_str(), { "commitment": commitment }]),
            )
            .await?;
        result
            .get("value")
            .and_then(Value::as_u64)
            .ok_or_else(|| LedgerError::MalformedResponse("getBalance: missing value".to_string()))
    }

    async fn request_airdrop(
        &self,
        address: &Address,
        lamports: u64,
    ) -> Result<Signature, LedgerError> {
        let result = self
            .call("requestAirdrop", json!([address.as_str(), lamports]))
            .await?;
        let signature = result.as_str().ok_or_else(|| {
            LedgerError::MalformedResponse("requestAirdrop: signature not a string".to_string())
        })?;
        Ok(Signature(signature.to_string()))
    }

    async fn send_transaction(&self, tx: &Transaction) -> Result<Signature, LedgerError> {
        let wire = tx.encode()?;
        let result = self
            .call("sendTransaction", json!([wire, { "encoding": "base64" }]))
            .await?;
        let signature = result.as_str().ok_or_else(|| {
            LedgerError::MalformedResponse("sendTransaction: signature not a string".to_string())
        })?;
        Ok(Signature(signature.to_string()))
    }

    async fn confirm_transaction(
        &self,
        signature: &Signature,
        commitment: Commitment,
    ) -> Result<(), LedgerError> {
        for _ in 0..CONFIRM_POLL_ATTEMPTS {
            let result = self
                .call("getSignatureStatuses", json!([[signature.0]]))
                .await?;
            let status = result
                .get("value")
                .and_then(|value| value.get(0))
                .cloned()
                .unwrap_or(Value::Null);

            if !status.is_null() {
                if let Some(err) = status.get("err").filter(|err| !err.is_null()) {
                    return Err(LedgerError::TransactionFailed {
                        signature: signature.0.clone(),
                        detail: err.to_string(),
                    });
                }
                let confirmation = status
                    .get("confirmationStatus")
                    .and_then(Value::as_str)
                    .unwrap_or_default();
                if commitment.satisfied_by(confirmation) {
                    return Ok(());
                }
            }

            tokio::time::sleep(CONFIRM_POLL_INTERVAL).await;
        }

        Err(LedgerError::ConfirmationTimeout {
            signature: signature.0.clone(),
            commitment,
        })
    }
}
