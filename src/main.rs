//! mmcli-cdma - Main entry point

use std::io;
use std::process::ExitCode;
use std::sync::Arc;
use std::time::Duration;

use clap::Parser;
use log::{debug, info};
use tokio::sync::oneshot;
use tokio_util::sync::CancellationToken;

use mmcli_cdma::modem::cdma::wait_for_completion;
use mmcli_cdma::{
    report_error, BlockingDbusModemManager, CdmaHandler, Cli, DbusModemManager, MmError,
    ModemSelector, Result,
};

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Initialize logging
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(cli.effective_log_level()),
    )
    .init();

    info!("Starting mmcli-cdma v{}", env!("CARGO_PKG_VERSION"));
    debug!(
        "CLI args: modem={:?}, async={}, timeout={}s, activate={:?}",
        cli.modem, cli.async_mode, cli.timeout, cli.cdma.activate
    );

    match run(cli) {
        Ok(()) => {
            info!("Completed successfully");
            ExitCode::SUCCESS
        }
        Err(e) => {
            report_error(&e, &mut io::stderr());
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let handler = CdmaHandler::new(cli.cdma.clone()).with_progress(!cli.batch);

    if !handler.has_requested_action()? {
        return Err(MmError::NoActions);
    }

    let selector = ModemSelector::from_arg(cli.modem.as_deref())?;
    let timeout = Duration::from_secs(cli.timeout);

    if cli.async_mode {
        run_asynchronous(handler, selector, timeout)
    } else {
        run_synchronous(handler, selector, timeout)
    }
}

fn run_synchronous(
    mut handler: CdmaHandler,
    selector: ModemSelector,
    timeout: Duration,
) -> Result<()> {
    let result = BlockingDbusModemManager::connect(timeout)
        .and_then(|manager| handler.run_sync(Arc::new(manager), &selector));
    handler.shutdown();
    result
}

fn run_asynchronous(
    mut handler: CdmaHandler,
    selector: ModemSelector,
    timeout: Duration,
) -> Result<()> {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;

    runtime.block_on(async move {
        let manager = match DbusModemManager::connect(timeout).await {
            Ok(manager) => Arc::new(manager),
            Err(e) => {
                handler.shutdown();
                return Err(e);
            }
        };

        let cancellable = CancellationToken::new();
        let (done_tx, done_rx) = oneshot::channel();

        let token = cancellable.clone();
        let task = tokio::spawn(async move {
            let result = handler
                .run_async(manager, &selector, Some(token), done_tx)
                .await;
            (handler, result)
        });

        let outcome = wait_for_completion(done_rx, tokio::signal::ctrl_c(), &cancellable).await;
        debug!("Stopped waiting on async operation: {:?}", outcome);

        let (mut handler, result) = task
            .await
            .map_err(|e| MmError::Internal(format!("action task failed: {}", e)))?;
        handler.shutdown();
        result
    })
}
