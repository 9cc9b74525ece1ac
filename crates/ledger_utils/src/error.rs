use thiserror::Error;

use crate::rpc::Commitment;

#[derive(Debug, Error)]
pub enum LedgerError {
    #[error("rpc transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("rpc error {code}: {message}")]
    Rpc { code: i64, message: String },

    #[error("malformed rpc response: {0}")]
    MalformedResponse(String),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("transaction {signature} not {commitment} within the poll budget")]
    ConfirmationTimeout {
        signature: String,
        commitment: Commitment,
    },

    #[error("transaction {signature} failed: {detail}")]
    TransactionFailed { signature: String, detail: String },

    #[error("invalid address: {0}")]
    InvalidAddress(String),

    #[error("invalid keypair: {0}")]
    InvalidKeypair(String),
}
