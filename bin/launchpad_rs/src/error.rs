use ledger_utils::error::LedgerError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    /// Signer key material missing or malformed. Fatal; no retry, no
    /// partial cluster context.
    #[error("failed to load signer keypair: {0}")]
    IdentityLoad(#[source] LedgerError),

    /// A required command option is missing or malformed. Reported to the
    /// operator and the invocation returns without dispatching anything.
    #[error("Error {0}")]
    Validation(&'static str),

    /// Failure surfaced by a lifecycle operation or the funding loop's
    /// invocation boundary. Reported, never retried at this layer.
    #[error(transparent)]
    Operation(#[from] anyhow::Error),
}
