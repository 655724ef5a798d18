//! Collaborator interfaces consumed by action handlers
//!
//! Both traits expose the same two operations: look a modem up, then ask
//! its CDMA interface to activate. The async flavour backs `--async`
//! runs, the blocking flavour backs the default synchronous path.

use async_trait::async_trait;

use super::{CdmaHandle, ModemHandle, ModemSelector};
use crate::error::Result;

/// Asynchronous access to the modem manager
#[async_trait]
pub trait ModemManagerApi: Send + Sync {
    /// Find the modem named by the selector
    async fn resolve_modem(&self, selector: &ModemSelector) -> Result<ModemHandle>;

    /// Request OTA activation with the given carrier
    async fn activate(&self, cdma: &CdmaHandle, carrier: &str) -> Result<()>;
}

/// Blocking access to the modem manager
pub trait BlockingModemManagerApi: Send + Sync {
    /// Find the modem named by the selector
    fn resolve_modem(&self, selector: &ModemSelector) -> Result<ModemHandle>;

    /// Request OTA activation with the given carrier
    fn activate(&self, cdma: &CdmaHandle, carrier: &str) -> Result<()>;
}
