use clap::{Args, Parser, Subcommand};

use crate::constants::DEFAULT_KEYPAIR_PATH;

#[derive(Debug, Parser)]
#[command(version, about = "Operator CLI for the launchpad token lifecycle")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Clone, Args)]
pub struct CommonOpts {
    /// Cluster env name (mainnet-beta, testnet, devnet)
    #[arg(short, long, default_value = "devnet")]
    pub env: String,

    /// Cluster RPC url, defaults to the public endpoint for the env
    #[arg(short, long)]
    pub rpc: Option<String>,

    /// Signer keypair path
    #[arg(short, long, default_value = DEFAULT_KEYPAIR_PATH)]
    pub keypair: String,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Farm faucet airdrops into the signer wallet until interrupted
    Airdrop {
        #[command(flatten)]
        common: CommonOpts,
    },
    /// Configure the launch (curve parameters, fees)
    Config {
        #[command(flatten)]
        common: CommonOpts,
    },
    /// Create the token on the launchpad
    Launch {
        #[command(flatten)]
        common: CommonOpts,
    },
    /// Trade against the token's liquidity curve
    Swap {
        #[command(flatten)]
        common: CommonOpts,
        /// Token address
        #[arg(short, long)]
        token: Option<String>,
        /// Swap amount
        #[arg(short, long)]
        amount: Option<u64>,
        /// 0: buy token, 1: sell token
        #[arg(short, long)]
        style: Option<String>,
    },
    /// Migrate the token's liquidity to the new venue
    Migrate {
        #[command(flatten)]
        common: CommonOpts,
        /// Token address
        #[arg(short, long)]
        token: Option<String>,
    },
    /// Withdraw proceeds for the token
    Withdraw {
        #[command(flatten)]
        common: CommonOpts,
        /// Token address
        #[arg(short, long)]
        token: Option<String>,
    },
}
