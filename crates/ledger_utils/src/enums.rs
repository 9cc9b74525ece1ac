use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString, VariantNames};

#[derive(
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    Clone,
    Copy,
    Display,
    EnumString,
    VariantNames,
    Serialize,
    Deserialize,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum ClusterEnv {
    MainnetBeta,
    Testnet,
    #[default]
    Devnet,
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::*;

    #[test]
    fn parses_cluster_names() {
        assert_eq!(
            ClusterEnv::from_str("mainnet-beta").unwrap(),
            ClusterEnv::MainnetBeta
        );
        assert_eq!(ClusterEnv::from_str("testnet").unwrap(), ClusterEnv::Testnet);
        assert_eq!(ClusterEnv::from_str("devnet").unwrap(), ClusterEnv::Devnet);
        assert!(ClusterEnv::from_str("localnet").is_err());
    }

    #[test]
    fn defaults_to_devnet() {
        assert_eq!(ClusterEnv::default(), ClusterEnv::Devnet);
        assert_eq!(ClusterEnv::Devnet.to_string(), "devnet");
    }
}
