use std::time::Duration;

use ledger_utils::constants::LAMPORTS_PER_SOL;

/// Fixed amount requested from the faucet per funding iteration.
pub const AIRDROP_LAMPORTS: u64 = 5 * LAMPORTS_PER_SOL;

/// Share of a disposable wallet's balance swept back to the primary signer.
/// The remaining 5% is an approximate fee reserve, not a computed fee; the
/// residual is intentionally abandoned with the disposable key.
pub const SWEEP_KEEP_PERCENT: u64 = 95;

/// Fixed pause after a failed funding iteration. Faucet rate limits and
/// network flakiness are expected, so there is no exponential backoff and
/// no retry cap.
pub const FAUCET_RETRY_BACKOFF: Duration = Duration::from_millis(1000);

pub const DEFAULT_KEYPAIR_PATH: &str = "key/payer.json";
