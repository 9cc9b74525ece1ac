use once_cell::sync::Lazy;
use std::collections::HashMap;

use crate::enums::ClusterEnv;

#[derive(Debug, Clone, Default)]
pub struct ClusterConfig {
    pub env: ClusterEnv,
    pub rpc_url: String,
}

pub static CLUSTERS: Lazy<HashMap<ClusterEnv, ClusterConfig>> = Lazy::new(|| {
    HashMap::from([
        (
            ClusterEnv::MainnetBeta,
            ClusterConfig {
                env: ClusterEnv::MainnetBeta,
                rpc_url: "https://api.mainnet-beta.solana.com".to_string(),
            },
        ),
        (
            ClusterEnv::Testnet,
            ClusterConfig {
                env: ClusterEnv::Testnet,
                rpc_url: "https://api.testnet.solana.com".to_string(),
            },
        ),
        (
            ClusterEnv::Devnet,
            ClusterConfig {
                env: ClusterEnv::Devnet,
                rpc_url: "https://api.devnet.solana.com".to_string(),
            },
        ),
    ])
});

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_cluster_has_a_config() {
        for env in [ClusterEnv::MainnetBeta, ClusterEnv::Testnet, ClusterEnv::Devnet] {
            let config = CLUSTERS.get(&env).unwrap();
            assert_eq!(config.env, env);
            assert!(config.rpc_url.starts_with("https://"));
        }
    }

    #[test]
    fn devnet_points_at_the_public_endpoint() {
        assert_eq!(
            CLUSTERS.get(&ClusterEnv::Devnet).unwrap().rpc_url,
            "https://api.devnet.solana.com"
        );
    }
}
