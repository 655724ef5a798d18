/// D-Bus names used to reach ModemManager
pub mod dbus {
    /// Well-known bus name of the ModemManager service
    pub const SERVICE: &str = "org.freedesktop.ModemManager1";

    /// Object path of the manager (implements ObjectManager)
    pub const PATH: &str = "/org/freedesktop/ModemManager1";

    /// Prefix of every modem object path
    pub const MODEM_PREFIX: &str = "/org/freedesktop/ModemManager1/Modem/";

    /// Interface every modem object exposes
    pub const MODEM_INTERFACE: &str = "org.freedesktop.ModemManager1.Modem";

    /// CDMA capability interface
    pub const CDMA_INTERFACE: &str = "org.freedesktop.ModemManager1.Modem.ModemCdma";
}

/// Default values for CLI
pub mod defaults {
    /// Default log level
    pub const LOG_LEVEL: &str = "warn";

    /// Default D-Bus method call timeout in seconds
    ///
    /// OTA activation talks to the carrier, so this is far above the
    /// usual 25 second bus default.
    pub const TIMEOUT_SECS: u64 = 120;

    /// Selector keyword matching the first available modem
    pub const ANY_MODEM: &str = "any";
}
