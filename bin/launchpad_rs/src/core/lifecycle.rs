use async_trait::async_trait;
use ledger_utils::keypair::Address;
use strum_macros::{Display, EnumString};

/// Trade direction. Wire form stays the original's 0/1 selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString)]
pub enum SwapStyle {
    #[strum(serialize = "0")]
    Acquire,
    #[strum(serialize = "1")]
    Dispose,
}

/// Validated, immutable argument bundle for a swap. Only constructed by the
/// router once every required field parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SwapRequest {
    pub token: Address,
    pub amount: u64,
    pub style: SwapStyle,
}

/// The five opaque lifecycle operations. The controller only cares about
/// their input contracts and success/failure outcome; transaction building
/// lives behind this seam.
#[async_trait]
pub trait TokenLifecycle: Send + Sync {
    async fn configure(&self) -> anyhow::Result<()>;

    async fn launch(&self) -> anyhow::Result<()>;

    async fn swap(&self, request: &SwapRequest) -> anyhow::Result<()>;

    async fn migrate(&self, token: &Address) -> anyhow::Result<()>;

    async fn withdraw(&self, token: &Address) -> anyhow::Result<()>;
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::*;

    #[test]
    fn swap_style_keeps_the_wire_selector() {
        assert_eq!(SwapStyle::from_str("0").unwrap(), SwapStyle::Acquire);
        assert_eq!(SwapStyle::from_str("1").unwrap(), SwapStyle::Dispose);
        assert!(SwapStyle::from_str("2").is_err());
        assert_eq!(SwapStyle::Acquire.to_string(), "0");
        assert_eq!(SwapStyle::Dispose.to_string(), "1");
    }
}
