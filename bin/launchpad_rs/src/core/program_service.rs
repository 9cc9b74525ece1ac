use std::sync::Arc;

use async_trait::async_trait;
use ledger_utils::{
    keypair::{Address, Keypair},
    rpc::{Commitment, LedgerRpc},
    transaction::Transaction,
};
use serde_json::json;

use crate::core::lifecycle::{SwapRequest, TokenLifecycle};

/// Live lifecycle collaborator: each operation becomes one signed program
/// call broadcast through the bound RPC and confirmed finalized.
pub struct ProgramService {
    rpc: Arc<dyn LedgerRpc>,
    signer: Arc<Keypair>,
}

impl ProgramService {
    pub fn new(rpc: Arc<dyn LedgerRpc>, signer: Arc<Keypair>) -> Self {
        Self { rpc, signer }
    }

    async fn invoke(&self, op: &str, data: serde_json::Value) -> anyhow::Result<()> {
        let tx = Transaction::program_call(&self.signer, op, data)?;
        let signature = self.rpc.send_transaction(&tx).await?;
        self.rpc
            .confirm_transaction(&signature, Commitment::Finalized)
            .await?;
        log::info!("{} confirmed, signature {}", op, signature);
        Ok(())
    }
}

#[async_trait]
impl TokenLifecycle for ProgramService {
    async fn configure(&self) -> anyhow::Result<()> {
        self.invoke("configure", json!({})).await
    }

    async fn launch(&self) -> anyhow::Result<()> {
        self.invoke("launch", json!({})).await
    }

    async fn swap(&self, request: &SwapRequest) -> anyhow::Result<()> {
        self.invoke(
            "swap",
            json!({
                "token": request.token.as_str(),
                "amount": request.amount,
                "style": request.style.to_string(),
            }),
        )
        .await
    }

    async fn migrate(&self, token: &Address) -> anyhow::Result<()> {
        self.invoke("migrate", json!({ "token": token.as_str() }))
            .await
    }

    async fn withdraw(&self, token: &Address) -> anyhow::Result<()> {
        self.invoke("withdraw", json!({ "token": token.as_str() }))
            .await
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use ledger_utils::{error::LedgerError, rpc::Signature, transaction::Instruction};

    use super::*;
    use crate::core::lifecycle::SwapStyle;

    #[derive(Debug, PartialEq, Eq)]
    enum RpcCall {
        Send(Transaction),
        Confirm(Signature, Commitment),
    }

    #[derive(Default)]
    struct RecordingRpc {
        calls: Mutex<Vec<RpcCall>>,
    }

    #[async_trait]
    impl LedgerRpc for RecordingRpc {
        async fn get_balance(
            &self,
            _address: &Address,
            _commitment: Commitment,
        ) -> Result<u64, LedgerError> {
            Ok(0)
        }

        async fn request_airdrop(
            &self,
            _address: &Address,
            _lamports: u64,
        ) -> Result<Signature, LedgerError> {
            unreachable!("lifecycle operations never touch the faucet")
        }

        async fn send_transaction(&self, tx: &Transaction) -> Result<Signature, LedgerError> {
            self.calls.lock().unwrap().push(RpcCall::Send(tx.clone()));
            Ok(Signature(tx.signature.clone()))
        }

        async fn confirm_transaction(
            &self,
            signature: &Signature,
            commitment: Commitment,
        ) -> Result<(), LedgerError> {
            self.calls
                .lock()
                .unwrap()
                .push(RpcCall::Confirm(signature.clone(), commitment));
            Ok(())
        }
    }

    #[tokio::test]
    async fn swap_broadcasts_one_signed_program_call() {
        let rpc = Arc::new(RecordingRpc::default());
        let signer = Arc::new(Keypair::generate());
        let service = ProgramService::new(rpc.clone(), signer.clone());

        let token = Keypair::generate().address().clone();
        let request = SwapRequest {
            token: token.clone(),
            amount: 1_000_000_000,
            style: SwapStyle::Acquire,
        };
        service.swap(&request).await.unwrap();

        let calls = rpc.calls.lock().unwrap();
        assert_eq!(calls.len(), 2);
        let RpcCall::Send(tx) = &calls[0] else {
            panic!("expected a broadcast first, got {:?}", calls[0]);
        };
        assert!(tx.verify().unwrap());
        assert_eq!(tx.message.payer, *signer.address());
        let Instruction::ProgramCall { op, data } = &tx.message.instruction else {
            panic!("expected a program call, got {:?}", tx.message.instruction);
        };
        assert_eq!(op, "swap");
        assert_eq!(data["token"], token.as_str());
        assert_eq!(data["amount"], 1_000_000_000u64);
        assert_eq!(data["style"], "0");
        assert!(matches!(
            &calls[1],
            RpcCall::Confirm(_, Commitment::Finalized)
        ));
    }

    #[tokio::test]
    async fn configure_is_deterministic_across_reruns() {
        let rpc = Arc::new(RecordingRpc::default());
        let signer = Arc::new(Keypair::generate());
        let service = ProgramService::new(rpc.clone(), signer);

        service.configure().await.unwrap();
        service.configure().await.unwrap();

        let calls = rpc.calls.lock().unwrap();
        let sends: Vec<&Transaction> = calls
            .iter()
            .filter_map(|call| match call {
                RpcCall::Send(tx) => Some(tx),
                RpcCall::Confirm(..) => None,
            })
            .collect();
        assert_eq!(sends.len(), 2);
        assert_eq!(sends[0].message, sends[1].message);
    }
}
