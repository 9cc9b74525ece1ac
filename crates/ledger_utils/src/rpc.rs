use std::fmt;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use strum_macros::Display;

use crate::{error::LedgerError, keypair::Address, transaction::Transaction};

/// Durability level a transaction must reach before the RPC call returns.
/// Funding transactions are confirmed `Finalized` because their balance is
/// spent immediately afterwards; sweeps settle for `Processed`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Commitment {
    Processed,
    Finalized,
}

impl Commitment {
    /// Whether a `confirmationStatus` string reported by the ledger
    /// satisfies this commitment level.
    pub fn satisfied_by(&self, status: &str) -> bool {
        match self {
            Commitment::Processed => {
                matches!(status, "processed" | "confirmed" | "finalized")
            }
            Commitment::Finalized => status == "finalized",
        }
    }
}

/// Base58 transaction signature returned by airdrop and broadcast calls.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Signature(pub String);

impl fmt::Display for Signature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The ledger network's RPC surface: balance query, faucet funds request,
/// and transaction broadcast plus confirmation. Production uses
/// `HttpLedgerRpc`; tests substitute recording mocks.
#[async_trait]
pub trait LedgerRpc: Send + Sync {
    async fn get_balance(
        &self,
        address: &Address,
        commitment: Commitment,
    ) -> Result<u64, LedgerError>;

    async fn request_airdrop(
        &self,
        address: &Address,
        lamports: u64,
    ) -> Result<Signature, LedgerError>;

    async fn send_transaction(&self, tx: &Transaction) -> Result<Signature, LedgerError>;

    async fn confirm_transaction(
        &self,
        signature: &Signature,
        commitment: Commitment,
    ) -> Result<(), LedgerError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn processed_accepts_any_confirmation_status() {
        for status in ["processed", "confirmed", "finalized"] {
            assert!(Commitment::Processed.satisfied_by(status));
        }
        assert!(!Commitment::Processed.satisfied_by("unknown"));
    }

    #[test]
    fn finalized_accepts_only_finalized() {
        assert!(Commitment::Finalized.satisfied_by("finalized"));
        assert!(!Commitment::Finalized.satisfied_by("confirmed"));
        assert!(!Commitment::Finalized.satisfied_by("processed"));
    }
}
