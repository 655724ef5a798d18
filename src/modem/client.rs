//! ModemManager D-Bus clients

use std::time::Duration;

use async_trait::async_trait;
use log::debug;
use zbus::proxy;

use super::resolver::{interface_map, lookup_error, resolve_from_objects};
use super::traits::{BlockingModemManagerApi, ModemManagerApi};
use super::{CdmaHandle, ModemHandle, ModemSelector};
use crate::config::dbus;
use crate::error::Result;

#[proxy(
    interface = "org.freedesktop.ModemManager1.Modem.ModemCdma",
    default_service = "org.freedesktop.ModemManager1"
)]
trait ModemCdma {
    /// Provision the modem using OTA settings for the given carrier
    fn activate(&self, carrier_code: &str) -> zbus::Result<()>;
}

/// Async ModemManager client on the system bus
pub struct DbusModemManager {
    connection: zbus::Connection,
}

impl DbusModemManager {
    /// Connect to the system bus with the given method call timeout
    pub async fn connect(timeout: Duration) -> Result<Self> {
        debug!("Connecting to system bus (method timeout {:?})", timeout);
        let connection = zbus::connection::Builder::system()?
            .method_timeout(timeout)
            .build()
            .await?;
        Ok(Self { connection })
    }
}

#[async_trait]
impl ModemManagerApi for DbusModemManager {
    async fn resolve_modem(&self, selector: &ModemSelector) -> Result<ModemHandle> {
        let manager = zbus::fdo::ObjectManagerProxy::builder(&self.connection)
            .destination(dbus::SERVICE)?
            .path(dbus::PATH)?
            .build()
            .await?;

        let objects = manager.get_managed_objects().await.map_err(lookup_error)?;
        debug!("Manager reported {} object(s)", objects.len());

        resolve_from_objects(&interface_map(objects), selector)
    }

    async fn activate(&self, cdma: &CdmaHandle, carrier: &str) -> Result<()> {
        let proxy = ModemCdmaProxy::builder(&self.connection)
            .path(cdma.path.as_str())?
            .build()
            .await?;

        debug!("Calling Activate('{}') on {}", carrier, cdma.path);
        proxy.activate(carrier).await?;
        Ok(())
    }
}

/// Blocking ModemManager client on the system bus
pub struct BlockingDbusModemManager {
    connection: zbus::blocking::Connection,
}

impl BlockingDbusModemManager {
    /// Connect to the system bus with the given method call timeout
    pub fn connect(timeout: Duration) -> Result<Self> {
        debug!("Connecting to system bus (method timeout {:?})", timeout);
        let connection = zbus::blocking::connection::Builder::system()?
            .method_timeout(timeout)
            .build()?;
        Ok(Self { connection })
    }
}

impl BlockingModemManagerApi for BlockingDbusModemManager {
    fn resolve_modem(&self, selector: &ModemSelector) -> Result<ModemHandle> {
        let manager = zbus::blocking::fdo::ObjectManagerProxy::builder(&self.connection)
            .destination(dbus::SERVICE)?
            .path(dbus::PATH)?
            .build()?;

        let objects = manager.get_managed_objects().map_err(lookup_error)?;
        debug!("Manager reported {} object(s)", objects.len());

        resolve_from_objects(&interface_map(objects), selector)
    }

    fn activate(&self, cdma: &CdmaHandle, carrier: &str) -> Result<()> {
        let proxy = ModemCdmaProxyBlocking::builder(&self.connection)
            .path(cdma.path.as_str())?
            .build()?;

        debug!("Calling Activate('{}') on {}", carrier, cdma.path);
        proxy.activate(carrier)?;
        Ok(())
    }
}
