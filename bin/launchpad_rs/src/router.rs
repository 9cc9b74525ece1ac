use std::str::FromStr;

use ledger_utils::keypair::Address;

use crate::{
    core::lifecycle::{SwapRequest, SwapStyle, TokenLifecycle},
    error::CliError,
};

/// Maps one validated operator command onto exactly one lifecycle
/// operation. A request is only constructed once every required field
/// parsed; a missing or malformed field short-circuits with the
/// field-specific message and nothing downstream runs.
pub struct CommandRouter<L: TokenLifecycle> {
    ops: L,
}

impl<L: TokenLifecycle> CommandRouter<L> {
    pub fn new(ops: L) -> Self {
        Self { ops }
    }

    pub async fn dispatch_config(&self) -> Result<(), CliError> {
        self.ops.configure().await?;
        Ok(())
    }

    pub async fn dispatch_launch(&self) -> Result<(), CliError> {
        self.ops.launch().await?;
        Ok(())
    }

    pub async fn dispatch_swap(
        &self,
        token: Option<&str>,
        amount: Option<u64>,
        style: Option<&str>,
    ) -> Result<(), CliError> {
        let token = parse_token(token)?;
        let Some(amount) = amount else {
            return Err(CliError::Validation("swap amount"));
        };
        let style = style
            .ok_or(CliError::Validation("swap style"))
            .and_then(|raw| {
                SwapStyle::from_str(raw).map_err(|_| CliError::Validation("swap style"))
            })?;

        let request = SwapRequest {
            token,
            amount,
            style,
        };
        self.ops.swap(&request).await?;
        Ok(())
    }

    pub async fn dispatch_migrate(&self, token: Option<&str>) -> Result<(), CliError> {
        let token = parse_token(token)?;
        self.ops.migrate(&token).await?;
        Ok(())
    }

    pub async fn dispatch_withdraw(&self, token: Option<&str>) -> Result<(), CliError> {
        let token = parse_token(token)?;
        self.ops.withdraw(&token).await?;
        Ok(())
    }
}

fn parse_token(token: Option<&str>) -> Result<Address, CliError> {
    let Some(raw) = token else {
        return Err(CliError::Validation("token address"));
    };
    Address::from_base58(raw).map_err(|_| CliError::Validation("token address"))
}
