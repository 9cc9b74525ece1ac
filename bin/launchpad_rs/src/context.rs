use std::{str::FromStr, sync::Arc};

use ledger_utils::{enums::ClusterEnv, http_rpc::HttpLedgerRpc, keypair::Keypair};
use url::Url;

use crate::{commands::CommonOpts, error::CliError};

/// Environment binding for one invocation: the cluster, a client bound to
/// exactly one RPC endpoint, and the active signer. Bound once per process
/// run; every downstream operation reads it, nothing re-validates it.
#[derive(Debug)]
pub struct ClusterContext {
    pub env: ClusterEnv,
    pub rpc: Arc<HttpLedgerRpc>,
    pub signer: Arc<Keypair>,
}

impl ClusterContext {
    pub fn bind(opts: &CommonOpts) -> Result<Self, CliError> {
        let env =
            ClusterEnv::from_str(&opts.env).map_err(|_| CliError::Validation("cluster env"))?;
        let rpc = match &opts.rpc {
            Some(raw) => {
                let url = Url::parse(raw).map_err(|_| CliError::Validation("rpc url"))?;
                HttpLedgerRpc::new(url)
            }
            None => HttpLedgerRpc::for_cluster(&env),
        };
        let signer = Keypair::from_file(&opts.keypair).map_err(CliError::IdentityLoad)?;

        log::info!(
            "cluster {} rpc {} signer {}",
            env,
            rpc.url(),
            signer.address()
        );
        Ok(Self {
            env,
            rpc: Arc::new(rpc),
            signer: Arc::new(signer),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn opts(env: &str, keypair: &str) -> CommonOpts {
        CommonOpts {
            env: env.to_string(),
            rpc: None,
            keypair: keypair.to_string(),
        }
    }

    #[test]
    fn missing_keypair_is_an_identity_error() {
        let err = ClusterContext::bind(&opts("devnet", "/nonexistent/payer.json")).unwrap_err();
        assert!(matches!(err, CliError::IdentityLoad(_)));
    }

    #[test]
    fn unknown_env_is_rejected_before_key_load() {
        let err = ClusterContext::bind(&opts("localnet", "/nonexistent/payer.json")).unwrap_err();
        assert!(matches!(err, CliError::Validation("cluster env")));
    }

    #[test]
    fn binds_signer_and_default_devnet_endpoint() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("payer.json");
        let keypair = Keypair::generate();
        keypair.write_file(&path).unwrap();

        let ctx = ClusterContext::bind(&opts("devnet", path.to_str().unwrap())).unwrap();
        assert_eq!(ctx.env, ClusterEnv::Devnet);
        assert_eq!(ctx.rpc.url().as_str(), "https://api.devnet.solana.com/");
        assert_eq!(ctx.signer.address(), keypair.address());
    }
}
