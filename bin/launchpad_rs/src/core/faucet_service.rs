use std::sync::{
    atomic::{AtomicBool, AtomicU64, Ordering},
    Arc,
};

use ledger_utils::{
    constants::LAMPORTS_PER_SOL,
    keypair::Keypair,
    rpc::{Commitment, LedgerRpc, Signature},
    transaction::Transaction,
};

use crate::constants::{AIRDROP_LAMPORTS, FAUCET_RETRY_BACKOFF, SWEEP_KEEP_PERCENT};

/// Loop counters for external stuck-state detection. A stuck faucet shows up
/// as `consecutive_failures` climbing while `sweeps` stands still.
#[derive(Debug, Default)]
pub struct FaucetStats {
    attempts: AtomicU64,
    consecutive_failures: AtomicU64,
    sweeps: AtomicU64,
}

impl FaucetStats {
    pub fn attempts(&self) -> u64 {
        self.attempts.load(Ordering::Relaxed)
    }

    pub fn consecutive_failures(&self) -> u64 {
        self.consecutive_failures.load(Ordering::Relaxed)
    }

    pub fn sweeps(&self) -> u64 {
        self.sweeps.load(Ordering::Relaxed)
    }
}

/// Accumulates operating capital into the primary signer's balance by
/// repeatedly funding disposable wallets from the faucet and sweeping 95%
/// of each one back. Runs until the exit flag is set; faucet and network
/// failures only ever cost one backoff pause.
pub struct FaucetService {
    rpc: Arc<dyn LedgerRpc>,
    primary: Arc<Keypair>,
    exit: Arc<AtomicBool>,
    stats: Arc<FaucetStats>,
}

impl FaucetService {
    pub fn new(rpc: Arc<dyn LedgerRpc>, primary: Arc<Keypair>, exit: Arc<AtomicBool>) -> Self {
        Self {
            rpc,
            primary,
            exit,
            stats: Arc::new(FaucetStats::default()),
        }
    }

    pub fn stats(&self) -> Arc<FaucetStats> {
        self.stats.clone()
    }

    pub async fn run(&self) -> anyhow::Result<()> {
        while !self.exit.load(Ordering::Relaxed) {
            match self
                .rpc
                .get_balance(self.primary.address(), Commitment::Processed)
                .await
            {
                Ok(balance) => log::info!("wallet balance {} SOL", format_sol(balance)),
                Err(err) => log::warn!("wallet balance report failed: {:?}", err),
            }

            self.stats.attempts.fetch_add(1, Ordering::Relaxed);
            match self.farm_once().await {
                Ok(Some(signature)) => {
                    self.stats.consecutive_failures.store(0, Ordering::Relaxed);
                    self.stats.sweeps.fetch_add(1, Ordering::Relaxed);
                    log::info!("signature {}", signature);
                }
                Ok(None) => {
                    self.stats.consecutive_failures.store(0, Ordering::Relaxed);
                    log::warn!("skip sweep because of zero balance");
                }
                Err(err) => {
                    self.stats
                        .consecutive_failures
                        .fetch_add(1, Ordering::Relaxed);
                    log::error!("{:?}", err);
                    tokio::time::sleep(FAUCET_RETRY_BACKOFF).await;
                }
            }
        }

        log::info!(
            "faucet loop exiting, attempts {} sweeps {}",
            self.stats.attempts(),
            self.stats.sweeps()
        );
        Ok(())
    }

    /// One full funding iteration against a fresh disposable wallet. The
    /// airdrop must be finalized before its balance is spent; the sweep
    /// itself only risks already-faucet-granted funds, so it settles for
    /// processed confirmation.
    async fn farm_once(&self) -> anyhow::Result<Option<Signature>> {
        let wallet = Keypair::generate();

        let airdrop_signature = self
            .rpc
            .request_airdrop(wallet.address(), AIRDROP_LAMPORTS)
            .await?;
        self.rpc
            .confirm_transaction(&airdrop_signature, Commitment::Finalized)
            .await?;

        let balance = self
            .rpc
            .get_balance(wallet.address(), Commitment::Finalized)
            .await?;
        if balance == 0 {
            return Ok(None);
        }
        log::info!("new balance {} {} SOL", wallet.address(), format_sol(balance));

        let sweep_lamports = balance * SWEEP_KEEP_PERCENT / 100;
        let tx = Transaction::transfer(&wallet, self.primary.address(), sweep_lamports)?;
        let sweep_signature = self.rpc.send_transaction(&tx).await?;
        self.rpc
            .confirm_transaction(&sweep_signature, Commitment::Processed)
            .await?;

        Ok(Some(sweep_signature))
    }
}

fn format_sol(lamports: u64) -> f64 {
    lamports as f64 / LAMPORTS_PER_SOL as f64
}
