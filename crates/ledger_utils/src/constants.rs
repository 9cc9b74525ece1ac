use std::time::Duration;

pub const LAMPORTS_PER_SOL: u64 = 1_000_000_000;

/// Confirmation polling budget per `confirm_transaction` call. The network's
/// own timeout behavior is the outer bound; exhausting this budget surfaces
/// as `LedgerError::ConfirmationTimeout`.
pub const CONFIRM_POLL_INTERVAL: Duration = Duration::from_millis(2000);
pub const CONFIRM_POLL_ATTEMPTS: u32 = 32;
