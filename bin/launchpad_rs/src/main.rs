use std::sync::{
    atomic::{AtomicBool, Ordering},
    Arc,
};

use clap::Parser;
use launchpad_rs::{
    commands::{Cli, Commands},
    context::ClusterContext,
    core::{FaucetService, ProgramService},
    error::CliError,
    router::CommandRouter,
};
use launchpad_utils::log::setup_logger;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    setup_logger(None)?;

    let cli = Cli::parse();
    match run(cli).await {
        Ok(()) => Ok(()),
        // Missing/malformed operator input is reported, not escalated.
        Err(err @ CliError::Validation(_)) => {
            log::error!("{}", err);
            Ok(())
        }
        Err(err) => {
            log::error!("{:?}", err);
            Err(err.into())
        }
    }
}

async fn run(cli: Cli) -> Result<(), CliError> {
    match cli.command {
        Commands::Airdrop { common } => {
            let ctx = ClusterContext::bind(&common)?;
            let exit = Arc::new(AtomicBool::new(false));
            let exit_on_signal = exit.clone();
            tokio::spawn(async move {
                if tokio::signal::ctrl_c().await.is_ok() {
                    log::info!("interrupt received, finishing current iteration");
                    exit_on_signal.store(true, Ordering::Relaxed);
                }
            });

            let service = FaucetService::new(ctx.rpc.clone(), ctx.signer.clone(), exit);
            service.run().await?;
            Ok(())
        }
        Commands::Config { common } => {
            let ctx = ClusterContext::bind(&common)?;
            let router = CommandRouter::new(ProgramService::new(ctx.rpc.clone(), ctx.signer.clone()));
            router.dispatch_config().await
        }
        Commands::Launch { common } => {
            let ctx = ClusterContext::bind(&common)?;
            let router = CommandRouter::new(ProgramService::new(ctx.rpc.clone(), ctx.signer.clone()));
            router.dispatch_launch().await
        }
        Commands::Swap {
            common,
            token,
            amount,
            style,
        } => {
            let ctx = ClusterContext::bind(&common)?;
            let router = CommandRouter::new(ProgramService::new(ctx.rpc.clone(), ctx.signer.clone()));
            router
                .dispatch_swap(token.as_deref(), amount, style.as_deref())
                .await
        }
        Commands::Migrate { common, token } => {
            let ctx = ClusterContext::bind(&common)?;
            let router = CommandRouter::new(ProgramService::new(ctx.rpc.clone(), ctx.signer.clone()));
            router.dispatch_migrate(token.as_deref()).await
        }
        Commands::Withdraw { common, token } => {
            let ctx = ClusterContext::bind(&common)?;
            let router = CommandRouter::new(ProgramService::new(ctx.rpc.clone(), ctx.signer.clone()));
            router.dispatch_withdraw(token.as_deref()).await
        }
    }
}
