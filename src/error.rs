use std::fmt;
use std::io::Write;

use zbus::DBusError;

/// Message reported when an operation is cancelled before the reply arrives
pub const CANCELLED_MESSAGE: &str = "Operation was cancelled";

/// Fallback message when a failed activation carries no detail
pub const UNKNOWN_ERROR: &str = "unknown error";

/// Custom error type for modem operations
#[derive(Debug)]
pub enum MmError {
    /// More than one CDMA action was requested
    TooManyActions,
    /// No action was requested at all
    NoActions,
    /// An action needs a modem but `--modem` was not given
    NoModemSpecified,
    /// The `--modem` value is neither a path, an index nor `any`
    InvalidModemString(String),
    /// ModemManager is not present on the bus
    ManagerNotAvailable,
    /// No modem matched the selector
    ModemNotFound(String),
    /// The resolved modem does not expose the CDMA interface
    NoCdmaCapabilities(String),
    /// Transport-level bus failure
    Bus(zbus::Error),
    /// The remote side replied with a D-Bus error
    Remote {
        name: String,
        message: Option<String>,
    },
    /// The cancellation token fired before the reply
    Cancelled,
    /// The activation request failed; carries the failure message if any
    ActivationFailed(Option<String>),
    /// A handler ran without any action configured
    Internal(String),
    /// Writing output or starting the runtime failed
    Io(std::io::Error),
}

impl MmError {
    /// Message describing why a remote call failed, if one is available
    ///
    /// Remote errors without a description yield `None` so callers can
    /// fall back to [`UNKNOWN_ERROR`].
    pub fn detail(&self) -> Option<String> {
        match self {
            MmError::Remote { message, .. } => message.clone(),
            MmError::Cancelled => Some(CANCELLED_MESSAGE.to_string()),
            MmError::ActivationFailed(detail) => detail.clone(),
            MmError::Bus(e) => Some(e.to_string()),
            other => Some(other.to_string()),
        }
    }

    /// Wrap a failed activation call
    pub fn activation(err: MmError) -> Self {
        MmError::ActivationFailed(err.detail())
    }
}

impl fmt::Display for MmError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MmError::TooManyActions => write!(f, "too many CDMA actions requested"),
            MmError::NoActions => write!(f, "no actions specified"),
            MmError::NoModemSpecified => write!(f, "no modem was specified"),
            MmError::InvalidModemString(s) => write!(f, "invalid modem string '{}'", s),
            MmError::ManagerNotAvailable => {
                write!(f, "couldn't find the ModemManager process in the bus")
            }
            MmError::ModemNotFound(s) => write!(f, "couldn't find modem at '{}'", s),
            MmError::NoCdmaCapabilities(path) => {
                write!(f, "modem has no CDMA capabilities ({})", path)
            }
            MmError::Bus(e) => write!(f, "bus error: {}", e),
            MmError::Remote { name, message } => match message {
                Some(msg) => write!(f, "{}: {}", name, msg),
                None => write!(f, "{}", name),
            },
            MmError::Cancelled => write!(f, "{}", CANCELLED_MESSAGE),
            MmError::ActivationFailed(detail) => write!(
                f,
                "couldn't activate the modem: '{}'",
                detail.as_deref().unwrap_or(UNKNOWN_ERROR)
            ),
            MmError::Internal(msg) => write!(f, "internal error: {}", msg),
            MmError::Io(e) => write!(f, "I/O error: {}", e),
        }
    }
}

impl std::error::Error for MmError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            MmError::Bus(e) => Some(e),
            MmError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<zbus::Error> for MmError {
    fn from(err: zbus::Error) -> Self {
        match err {
            zbus::Error::MethodError(name, message, _) => MmError::Remote {
                name: name.to_string(),
                message,
            },
            zbus::Error::FDO(fdo) => MmError::from(*fdo),
            other => MmError::Bus(other),
        }
    }
}

impl From<zbus::fdo::Error> for MmError {
    fn from(err: zbus::fdo::Error) -> Self {
        match err {
            zbus::fdo::Error::ZBus(e) => MmError::from(e),
            other => MmError::Remote {
                name: other.name().to_string(),
                message: other.description().map(str::to_string),
            },
        }
    }
}

impl From<std::io::Error> for MmError {
    fn from(err: std::io::Error) -> Self {
        MmError::Io(err)
    }
}

/// Print an error the way every failure is reported: one `error:` line
pub fn report_error(err: &MmError, w: &mut dyn Write) {
    // Nothing sensible is left to do if stderr itself is gone
    let _ = writeln!(w, "error: {}", err);
}

/// Result type alias for modem operations
pub type Result<T> = std::result::Result<T, MmError>;
