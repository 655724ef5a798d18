//! CDMA action handler

use std::cell::Cell;
use std::future::Future;
use std::io::{self, Write};
use std::sync::Arc;

use log::{debug, error, log};
use tokio::sync::oneshot;
use tokio_util::sync::CancellationToken;

use super::context::{InvocationContext, ManagerConnection};
use crate::cli::CdmaArgs;
use crate::error::{MmError, Result};
use crate::modem::traits::{BlockingModemManagerApi, ModemManagerApi};
use crate::modem::{CdmaHandle, ModemHandle, ModemSelector};
use crate::ui::{create_spinner, finish_spinner};

/// Printed to stdout once the modem accepted the activation
pub const ACTIVATED_MESSAGE: &str = "successfully activated the modem";

/// Sent to the outer loop once the async path has finished
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OperationDone;

/// Level for interrupt notices; stays below the default `warn` filter so a
/// cancelled run still prints only its `error:` line
pub const INTERRUPT_LOG_LEVEL: log::Level = log::Level::Debug;

/// Why the outer loop stopped waiting on an async run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WaitOutcome {
    /// The run reported completion
    Done,
    /// An interrupt arrived first and the run was cancelled
    Interrupted,
}

/// Wait for an async run to finish, cancelling it if `interrupt` fires
///
/// A failed interrupt listener is logged and ignored; the wait continues
/// until the run reports completion.
pub async fn wait_for_completion<I>(
    mut done: oneshot::Receiver<OperationDone>,
    interrupt: I,
    cancellable: &CancellationToken,
) -> WaitOutcome
where
    I: Future<Output = io::Result<()>>,
{
    tokio::select! {
        _ = &mut done => return WaitOutcome::Done,
        signal = interrupt => match signal {
            Ok(()) => {
                log!(INTERRUPT_LOG_LEVEL, "Interrupted, cancelling pending operation");
                cancellable.cancel();
                return WaitOutcome::Interrupted;
            }
            Err(e) => debug!("Couldn't listen for interrupts: {}", e),
        },
    }

    if done.await.is_err() {
        debug!("Async run ended without reporting completion");
    }
    WaitOutcome::Done
}

/// Runs the requested CDMA action against one modem
///
/// A handler lives for one invocation: check [`has_requested_action`],
/// run it with [`run_sync`] or [`run_async`], then call [`shutdown`].
///
/// [`has_requested_action`]: CdmaHandler::has_requested_action
/// [`run_sync`]: CdmaHandler::run_sync
/// [`run_async`]: CdmaHandler::run_async
/// [`shutdown`]: CdmaHandler::shutdown
pub struct CdmaHandler {
    args: CdmaArgs,
    checked: Cell<Option<bool>>,
    ctx: Option<InvocationContext>,
    output: Box<dyn Write + Send>,
    quiet: bool,
}

impl CdmaHandler {
    /// Create a handler printing to stdout
    pub fn new(args: CdmaArgs) -> Self {
        Self::with_output(args, Box::new(io::stdout()))
    }

    /// Create a handler printing results to the given sink
    pub fn with_output(args: CdmaArgs, output: Box<dyn Write + Send>) -> Self {
        Self {
            args,
            checked: Cell::new(None),
            ctx: None,
            output,
            quiet: true,
        }
    }

    /// Show a spinner while waiting on the modem
    pub fn with_progress(mut self, enabled: bool) -> Self {
        self.quiet = !enabled;
        self
    }

    /// Whether a CDMA action was requested
    ///
    /// The answer is computed once; later calls return the cached value.
    /// Requesting more than one action is a usage error.
    pub fn has_requested_action(&self) -> Result<bool> {
        if let Some(enabled) = self.checked.get() {
            return Ok(enabled);
        }

        let n_actions = self.args.requested_actions();
        if n_actions > 1 {
            return Err(MmError::TooManyActions);
        }

        let enabled = n_actions > 0;
        self.checked.set(Some(enabled));
        Ok(enabled)
    }

    /// Handles held by the current run, if any
    pub fn context(&self) -> Option<&InvocationContext> {
        self.ctx.as_ref()
    }

    /// Resolve the modem and activate it without blocking the runtime
    ///
    /// `done` is signalled once the run has finished, whatever its outcome.
    pub async fn run_async(
        &mut self,
        manager: Arc<dyn ModemManagerApi>,
        selector: &ModemSelector,
        cancellable: Option<CancellationToken>,
        done: oneshot::Sender<OperationDone>,
    ) -> Result<()> {
        let result = self.activate_async(manager, selector, cancellable).await;

        if done.send(OperationDone).is_err() {
            debug!("Nobody is waiting for the async operation");
        }
        result
    }

    async fn activate_async(
        &mut self,
        manager: Arc<dyn ModemManagerApi>,
        selector: &ModemSelector,
        cancellable: Option<CancellationToken>,
    ) -> Result<()> {
        self.ctx = Some(InvocationContext::new(
            ManagerConnection::Async(Arc::clone(&manager)),
            cancellable.clone(),
        ));

        let object =
            cancellable_call(cancellable.as_ref(), manager.resolve_modem(selector)).await?;
        let (carrier, cdma) = self.prepare_activation(object)?;

        debug!("Asynchronously activating the modem...");
        let spinner = create_spinner(&activating_message(&carrier), self.quiet);
        let reply = cancellable_call(cancellable.as_ref(), manager.activate(&cdma, &carrier)).await;
        finish_spinner(spinner);

        self.process_reply(reply)
    }

    /// Resolve the modem and activate it with blocking calls
    pub fn run_sync(
        &mut self,
        manager: Arc<dyn BlockingModemManagerApi>,
        selector: &ModemSelector,
    ) -> Result<()> {
        self.ctx = Some(InvocationContext::new(
            ManagerConnection::Blocking(Arc::clone(&manager)),
            None,
        ));

        let object = manager.resolve_modem(selector)?;
        let (carrier, cdma) = self.prepare_activation(object)?;

        debug!("Synchronously activating the modem...");
        let spinner = create_spinner(&activating_message(&carrier), self.quiet);
        let reply = manager.activate(&cdma, &carrier);
        finish_spinner(spinner);

        self.process_reply(reply)
    }

    /// Release whatever the run acquired
    ///
    /// Safe to call without a run or more than once.
    pub fn shutdown(&mut self) -> Vec<&'static str> {
        match self.ctx.take() {
            Some(mut ctx) => ctx.release(),
            None => Vec::new(),
        }
    }

    /// Store the resolved modem, then pick the carrier and CDMA interface
    fn prepare_activation(&mut self, object: ModemHandle) -> Result<(String, CdmaHandle)> {
        let path = object.path.clone();
        let cdma = self
            .ctx
            .get_or_insert_with(InvocationContext::default)
            .set_modem(object);

        let Some(carrier) = self.args.activate.clone() else {
            error!("CDMA handler ran without a requested action");
            return Err(MmError::Internal("no CDMA action requested".to_string()));
        };

        let cdma = cdma.ok_or(MmError::NoCdmaCapabilities(path))?;
        Ok((carrier, cdma))
    }

    fn process_reply(&mut self, reply: Result<()>) -> Result<()> {
        match reply {
            Ok(()) => {
                writeln!(self.output, "{}", ACTIVATED_MESSAGE)?;
                self.output.flush()?;
                Ok(())
            }
            Err(e) => {
                debug!("Activation failed: {}", e);
                Err(MmError::activation(e))
            }
        }
    }
}

fn activating_message(carrier: &str) -> String {
    format!("Activating modem with carrier '{}'...", carrier)
}

/// Await a remote call, failing early if the token fires first
async fn cancellable_call<T, F>(cancellable: Option<&CancellationToken>, call: F) -> Result<T>
where
    F: Future<Output = Result<T>>,
{
    match cancellable {
        Some(token) => tokio::select! {
            biased;
            _ = token.cancelled() => Err(MmError::Cancelled),
            reply = call => reply,
        },
        None => call.await,
    }
}
