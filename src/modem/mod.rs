//! ModemManager client module
//!
//! This module provides modem lookup and the CDMA action handler.

pub mod cdma;
mod client;
pub mod resolver;
mod selector;
pub mod traits;

pub use cdma::{CdmaHandler, InvocationContext};
pub use client::{BlockingDbusModemManager, DbusModemManager};
pub use selector::ModemSelector;
pub use traits::{BlockingModemManagerApi, ModemManagerApi};

use crate::config::dbus;

/// Handle to a resolved modem object
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModemHandle {
    /// Object path of the modem
    pub path: String,
    /// Interfaces the modem object exposes
    pub interfaces: Vec<String>,
}

impl ModemHandle {
    /// CDMA capability of this modem, if it has one
    pub fn cdma(&self) -> Option<CdmaHandle> {
        self.interfaces
            .iter()
            .any(|i| i == dbus::CDMA_INTERFACE)
            .then(|| CdmaHandle {
                path: self.path.clone(),
            })
    }
}

/// Handle to the CDMA interface of a modem
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CdmaHandle {
    pub path: String,
}
