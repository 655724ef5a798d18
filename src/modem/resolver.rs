//! Modem resolution utilities
//!
//! Turns the manager's managed-object listing into a [`ModemHandle`]
//! for the selected modem. Shared by the async and blocking clients.

use std::collections::BTreeMap;

use log::debug;

use super::{ModemHandle, ModemSelector};
use crate::config::dbus;
use crate::error::{MmError, Result};

/// Object path to the interface names it exposes
pub type InterfaceMap = BTreeMap<String, Vec<String>>;

/// Convert a `GetManagedObjects` reply into an [`InterfaceMap`]
pub fn interface_map(objects: zbus::fdo::ManagedObjects) -> InterfaceMap {
    objects
        .into_iter()
        .map(|(path, interfaces)| {
            let mut names: Vec<String> = interfaces.into_keys().map(|i| i.to_string()).collect();
            names.sort();
            (path.to_string(), names)
        })
        .collect()
}

/// Find the modem the selector names among the managed objects
pub fn resolve_from_objects(
    objects: &InterfaceMap,
    selector: &ModemSelector,
) -> Result<ModemHandle> {
    let modems = objects
        .iter()
        .filter(|(_, interfaces)| interfaces.iter().any(|i| i == dbus::MODEM_INTERFACE))
        .map(|(path, _)| path.as_str());

    let path = selector
        .select(modems)
        .ok_or_else(|| MmError::ModemNotFound(selector.to_string()))?;

    debug!("Resolved modem '{}' to {}", selector, path);

    Ok(ModemHandle {
        path: path.to_string(),
        interfaces: objects.get(path).cloned().unwrap_or_default(),
    })
}

/// Map a lookup failure, recognising a manager missing from the bus
pub fn lookup_error(err: zbus::fdo::Error) -> MmError {
    match err {
        zbus::fdo::Error::ServiceUnknown(_) | zbus::fdo::Error::NameHasNoOwner(_) => {
            MmError::ManagerNotAvailable
        }
        other => MmError::from(other),
    }
}
