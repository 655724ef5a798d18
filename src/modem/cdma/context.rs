//! Per-invocation handles held by the CDMA handler

use std::sync::Arc;

use log::debug;
use tokio_util::sync::CancellationToken;

use crate::modem::traits::{BlockingModemManagerApi, ModemManagerApi};
use crate::modem::{CdmaHandle, ModemHandle};

/// Connection to the manager, in whichever mode the run uses
#[derive(Clone)]
pub enum ManagerConnection {
    Async(Arc<dyn ModemManagerApi>),
    Blocking(Arc<dyn BlockingModemManagerApi>),
}

impl std::fmt::Debug for ManagerConnection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ManagerConnection::Async(_) => write!(f, "ManagerConnection::Async"),
            ManagerConnection::Blocking(_) => write!(f, "ManagerConnection::Blocking"),
        }
    }
}

/// Handles acquired during one run
///
/// Filled in as the run progresses; anything still `None` at shutdown was
/// never acquired and is not released.
#[derive(Debug, Default)]
pub struct InvocationContext {
    pub manager: Option<ManagerConnection>,
    pub cancellable: Option<CancellationToken>,
    pub object: Option<ModemHandle>,
    pub modem_cdma: Option<CdmaHandle>,
}

impl InvocationContext {
    /// Start a context holding the manager connection and optional token
    pub fn new(manager: ManagerConnection, cancellable: Option<CancellationToken>) -> Self {
        Self {
            manager: Some(manager),
            cancellable,
            object: None,
            modem_cdma: None,
        }
    }

    /// Record the resolved modem and its CDMA capability
    ///
    /// Returns the capability handle, `None` when the modem lacks CDMA.
    pub fn set_modem(&mut self, object: ModemHandle) -> Option<CdmaHandle> {
        self.modem_cdma = object.cdma();
        self.object = Some(object);
        self.modem_cdma.clone()
    }

    /// Drop every held handle, returning the names of those released
    pub fn release(&mut self) -> Vec<&'static str> {
        let mut released = Vec::new();

        if self.cancellable.take().is_some() {
            released.push("cancellable");
        }
        if let Some(cdma) = self.modem_cdma.take() {
            debug!("Releasing CDMA interface of {}", cdma.path);
            released.push("modem_cdma");
        }
        if let Some(object) = self.object.take() {
            debug!("Releasing modem object {}", object.path);
            released.push("object");
        }
        if self.manager.take().is_some() {
            released.push("manager");
        }

        debug!("Released handles: {:?}", released);
        released
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::dbus;
    use crate::error::Result;
    use crate::modem::ModemSelector;

    struct NullManager;

    impl BlockingModemManagerApi for NullManager {
        fn resolve_modem(&self, selector: &ModemSelector) -> Result<ModemHandle> {
            Err(crate::error::MmError::ModemNotFound(selector.to_string()))
        }

        fn activate(&self, _cdma: &CdmaHandle, _carrier: &str) -> Result<()> {
            Ok(())
        }
    }

    fn blocking() -> ManagerConnection {
        ManagerConnection::Blocking(Arc::new(NullManager))
    }

    #[test]
    fn test_release_empty_context() {
        let mut ctx = InvocationContext::default();
        assert!(ctx.release().is_empty());
    }

    #[test]
    fn test_release_only_manager() {
        let mut ctx = InvocationContext::new(blocking(), None);
        assert_eq!(ctx.release(), vec!["manager"]);
    }

    #[test]
    fn test_release_everything_once() {
        let mut ctx = InvocationContext::new(blocking(), Some(CancellationToken::new()));
        ctx.set_modem(ModemHandle {
            path: "/org/freedesktop/ModemManager1/Modem/0".to_string(),
            interfaces: vec![
                dbus::MODEM_INTERFACE.to_string(),
                dbus::CDMA_INTERFACE.to_string(),
            ],
        });

        assert_eq!(
            ctx.release(),
            vec!["cancellable", "modem_cdma", "object", "manager"]
        );
        assert!(ctx.release().is_empty());
    }

    #[test]
    fn test_set_modem_without_cdma() {
        let mut ctx = InvocationContext::new(blocking(), None);
        ctx.set_modem(ModemHandle {
            path: "/org/freedesktop/ModemManager1/Modem/1".to_string(),
            interfaces: vec![dbus::MODEM_INTERFACE.to_string()],
        });
        assert!(ctx.object.is_some());
        assert!(ctx.modem_cdma.is_none());
    }
}
