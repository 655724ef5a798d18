//! mmcli-cdma - CDMA actions for ModemManager modems
//!
//! A small command-line client that asks a running ModemManager to
//! provision a CDMA modem over the air (OTA) for a given carrier.
//!
//! # Features
//!
//! - Select the modem by object path, index or `any`
//! - Synchronous (default) or asynchronous (`--async`) bus calls
//! - Ctrl-C cancels a pending asynchronous activation
//!
//! # Example
//!
//! ```bash
//! # Activate modem 0 with Verizon OTA settings
//! mmcli-cdma -m 0 --cdma-activate=Verizon
//!
//! # Same, using asynchronous calls and debug logs
//! mmcli-cdma -m 0 --cdma-activate=Verizon --async -v
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod modem;
pub mod ui;

pub use cli::{CdmaArgs, Cli};
pub use error::{report_error, MmError, Result};
pub use modem::{
    BlockingDbusModemManager, BlockingModemManagerApi, CdmaHandle, CdmaHandler, DbusModemManager,
    InvocationContext, ModemHandle, ModemManagerApi, ModemSelector,
};
